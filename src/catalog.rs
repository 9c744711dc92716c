//! Static element catalog: the tagged-union cell taxonomy plus the parallel
//! property/visible-kind/glyph tables indexed by it.
//!
//! Mirrors the teacher's `MapValue` enum (`world/map/level.rs`) and its
//! property bitmaps (`world/map/bitmaps.rs`) — one dense tagged union, one
//! parallel static table per concern, no virtual dispatch per cell.

use num_enum::TryFromPrimitive;

/// Hidden cell kind: the full internal taxonomy the simulation operates on.
/// `Null` is a sentinel that never appears in a live grid (invariant 6) and
/// is given index -1; every other variant is a non-negative level-string
/// code in `[0, 49]`.
#[repr(i8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
pub enum HiddenCellType {
  Agent = 0,
  Empty = 1,
  Dirt = 2,
  Stone = 3,
  StoneFalling = 4,
  Diamond = 5,
  DiamondFalling = 6,
  ExitClosed = 7,
  ExitOpen = 8,
  AgentInExit = 9,
  FireflyUp = 10,
  FireflyRight = 11,
  FireflyDown = 12,
  FireflyLeft = 13,
  ButterflyUp = 14,
  ButterflyRight = 15,
  ButterflyDown = 16,
  ButterflyLeft = 17,
  WallBrick = 18,
  WallSteel = 19,
  WallMagicDormant = 20,
  WallMagicOn = 21,
  WallMagicExpired = 22,
  Blob = 23,
  ExplosionDiamond = 24,
  ExplosionBoulder = 25,
  ExplosionEmpty = 26,
  GateRedClosed = 27,
  GateRedOpen = 28,
  GateBlueClosed = 29,
  GateBlueOpen = 30,
  GateGreenClosed = 31,
  GateGreenOpen = 32,
  GateYellowClosed = 33,
  GateYellowOpen = 34,
  KeyRed = 35,
  KeyBlue = 36,
  KeyGreen = 37,
  KeyYellow = 38,
  Nut = 39,
  NutFalling = 40,
  Bomb = 41,
  BombFalling = 42,
  OrangeUp = 43,
  OrangeRight = 44,
  OrangeDown = 45,
  OrangeLeft = 46,
  PebbleInDirt = 47,
  StoneInDirt = 48,
  VoidInDirt = 49,
  /// Sentinel; never present in a live grid.
  Null = -1,
}

/// Number of non-`Null` hidden kinds.
pub const NUM_HIDDEN_KINDS: usize = 50;

impl HiddenCellType {
  /// Dense table index with the one-slot offset that makes `Null` land on
  /// slot 0 (so catalog tables are `NUM_HIDDEN_KINDS + 1` long).
  pub fn catalog_index(self) -> usize {
    (self as i8 + 1) as usize
  }
}

/// Visible cell kind: the smaller, direction-collapsed enum the
/// observation tensor and sprite blitter key off of.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibleCellType {
  Agent = 0,
  Empty = 1,
  Dirt = 2,
  Stone = 3,
  StoneFalling = 4,
  Diamond = 5,
  DiamondFalling = 6,
  ExitClosed = 7,
  ExitOpen = 8,
  AgentInExit = 9,
  Firefly = 10,
  Butterfly = 11,
  WallBrick = 12,
  WallSteel = 13,
  WallMagicDormant = 14,
  WallMagicOn = 15,
  WallMagicExpired = 16,
  Blob = 17,
  ExplosionDiamond = 18,
  ExplosionBoulder = 19,
  ExplosionEmpty = 20,
  GateRed = 21,
  GateBlue = 22,
  GateGreen = 23,
  GateYellow = 24,
  KeyRed = 25,
  KeyBlue = 26,
  KeyGreen = 27,
  KeyYellow = 28,
  Nut = 29,
  NutFalling = 30,
  Bomb = 31,
  BombFalling = 32,
  Orange = 33,
}

/// Number of visible kinds; also the observation tensor's channel count.
pub const NUM_VISIBLE_KINDS: usize = 34;

/// Property bits looked up via [`ElementRecord::props`].
pub mod props {
  pub const ROUNDED: u8 = 1 << 0;
  pub const PUSHABLE: u8 = 1 << 1;
  pub const CAN_EXPLODE: u8 = 1 << 2;
  pub const CONSUMABLE: u8 = 1 << 3;
  pub const TRAVERSABLE: u8 = 1 << 4;
}

/// One static record per hidden cell kind.
#[derive(Debug, Clone, Copy)]
pub struct ElementRecord {
  pub visible: VisibleCellType,
  pub props: u8,
  pub glyph: char,
}

const fn rec(visible: VisibleCellType, props: u8, glyph: char) -> ElementRecord {
  ElementRecord { visible, props, glyph }
}

use self::props::*;
use HiddenCellType::*;
use VisibleCellType as V;

/// Dense table indexed by [`HiddenCellType::catalog_index`]. Slot 0 is the
/// `Null` sentinel and is never read in practice (invariant 6).
const ELEMENTS: [ElementRecord; NUM_HIDDEN_KINDS + 1] = [
  rec(V::Empty, 0, '?'),                                     // Null (unused)
  rec(V::Agent, CONSUMABLE, '@'),                             // Agent
  rec(V::Empty, TRAVERSABLE | CONSUMABLE, ' '),               // Empty
  rec(V::Dirt, TRAVERSABLE | CONSUMABLE, '.'),                // Dirt
  rec(V::Stone, ROUNDED | PUSHABLE | CONSUMABLE, 'o'),        // Stone
  rec(V::StoneFalling, CONSUMABLE, 'o'),                      // StoneFalling
  rec(V::Diamond, ROUNDED | PUSHABLE | TRAVERSABLE | CONSUMABLE, '*'), // Diamond
  rec(V::DiamondFalling, TRAVERSABLE | CONSUMABLE, '*'),      // DiamondFalling
  rec(V::ExitClosed, 0, 'X'),                                 // ExitClosed
  rec(V::ExitOpen, TRAVERSABLE, 'x'),                         // ExitOpen
  rec(V::AgentInExit, 0, '@'),                                // AgentInExit
  rec(V::Firefly, CAN_EXPLODE, 'f'),                          // FireflyUp
  rec(V::Firefly, CAN_EXPLODE, 'f'),                          // FireflyRight
  rec(V::Firefly, CAN_EXPLODE, 'f'),                          // FireflyDown
  rec(V::Firefly, CAN_EXPLODE, 'f'),                          // FireflyLeft
  rec(V::Butterfly, CAN_EXPLODE, 'b'),                        // ButterflyUp
  rec(V::Butterfly, CAN_EXPLODE, 'b'),                        // ButterflyRight
  rec(V::Butterfly, CAN_EXPLODE, 'b'),                        // ButterflyDown
  rec(V::Butterfly, CAN_EXPLODE, 'b'),                        // ButterflyLeft
  rec(V::WallBrick, CONSUMABLE, '#'),                         // WallBrick
  rec(V::WallSteel, 0, '%'),                                  // WallSteel
  rec(V::WallMagicDormant, 0, 'M'),                           // WallMagicDormant
  rec(V::WallMagicOn, 0, 'm'),                                // WallMagicOn
  rec(V::WallMagicExpired, 0, '_'),                           // WallMagicExpired
  rec(V::Blob, CONSUMABLE, 'a'),                              // Blob
  rec(V::ExplosionDiamond, 0, '+'),                           // ExplosionDiamond
  rec(V::ExplosionBoulder, 0, '+'),                           // ExplosionBoulder
  rec(V::ExplosionEmpty, 0, '+'),                             // ExplosionEmpty
  rec(V::GateRed, 0, 'r'),                                    // GateRedClosed
  rec(V::GateRed, TRAVERSABLE, 'R'),                          // GateRedOpen
  rec(V::GateBlue, 0, 'b'),                                   // GateBlueClosed
  rec(V::GateBlue, TRAVERSABLE, 'B'),                         // GateBlueOpen
  rec(V::GateGreen, 0, 'g'),                                  // GateGreenClosed
  rec(V::GateGreen, TRAVERSABLE, 'G'),                        // GateGreenOpen
  rec(V::GateYellow, 0, 'y'),                                 // GateYellowClosed
  rec(V::GateYellow, TRAVERSABLE, 'Y'),                       // GateYellowOpen
  rec(V::KeyRed, TRAVERSABLE, '1'),                           // KeyRed
  rec(V::KeyBlue, TRAVERSABLE, '2'),                          // KeyBlue
  rec(V::KeyGreen, TRAVERSABLE, '3'),                         // KeyGreen
  rec(V::KeyYellow, TRAVERSABLE, '4'),                        // KeyYellow
  rec(V::Nut, ROUNDED | PUSHABLE, 'n'),                       // Nut
  rec(V::NutFalling, 0, 'n'),                                 // NutFalling
  rec(V::Bomb, ROUNDED | PUSHABLE | CAN_EXPLODE | CONSUMABLE, '!'), // Bomb
  rec(V::BombFalling, CAN_EXPLODE | CONSUMABLE, '!'),         // BombFalling
  rec(V::Orange, 0, 'c'),                                     // OrangeUp
  rec(V::Orange, 0, 'c'),                                     // OrangeRight
  rec(V::Orange, 0, 'c'),                                     // OrangeDown
  rec(V::Orange, 0, 'c'),                                     // OrangeLeft
  rec(V::Dirt, 0, 'p'),                                       // PebbleInDirt (catalog-only, see DESIGN.md)
  rec(V::Dirt, 0, 's'),                                       // StoneInDirt (catalog-only, see DESIGN.md)
  rec(V::Dirt, 0, 'v'),                                       // VoidInDirt (catalog-only, see DESIGN.md)
];

/// Look up the static record for a hidden cell kind.
pub fn element(kind: HiddenCellType) -> ElementRecord {
  ELEMENTS[kind.catalog_index()]
}

/// `firefly_to_dir` / `butterfly_to_dir` / `orange_to_dir`: decompose a
/// directional hidden kind into its `Direction`. Returns `None` for
/// non-directional kinds.
pub fn firefly_dir(kind: HiddenCellType) -> Option<crate::direction::Direction> {
  use crate::direction::Direction as D;
  Some(match kind {
    FireflyUp => D::Up,
    FireflyRight => D::Right,
    FireflyDown => D::Down,
    FireflyLeft => D::Left,
    _ => return None,
  })
}

pub fn firefly_from_dir(dir: crate::direction::Direction) -> HiddenCellType {
  use crate::direction::Direction as D;
  match dir {
    D::Up => FireflyUp,
    D::Right => FireflyRight,
    D::Down => FireflyDown,
    D::Left => FireflyLeft,
    other => unreachable!("non-cardinal direction {:?} for firefly", other),
  }
}

pub fn butterfly_dir(kind: HiddenCellType) -> Option<crate::direction::Direction> {
  use crate::direction::Direction as D;
  Some(match kind {
    ButterflyUp => D::Up,
    ButterflyRight => D::Right,
    ButterflyDown => D::Down,
    ButterflyLeft => D::Left,
    _ => return None,
  })
}

pub fn butterfly_from_dir(dir: crate::direction::Direction) -> HiddenCellType {
  use crate::direction::Direction as D;
  match dir {
    D::Up => ButterflyUp,
    D::Right => ButterflyRight,
    D::Down => ButterflyDown,
    D::Left => ButterflyLeft,
    other => unreachable!("non-cardinal direction {:?} for butterfly", other),
  }
}

pub fn orange_dir(kind: HiddenCellType) -> Option<crate::direction::Direction> {
  use crate::direction::Direction as D;
  Some(match kind {
    OrangeUp => D::Up,
    OrangeRight => D::Right,
    OrangeDown => D::Down,
    OrangeLeft => D::Left,
    _ => return None,
  })
}

pub fn orange_from_dir(dir: crate::direction::Direction) -> HiddenCellType {
  use crate::direction::Direction as D;
  match dir {
    D::Up => OrangeUp,
    D::Right => OrangeRight,
    D::Down => OrangeDown,
    D::Left => OrangeLeft,
    other => unreachable!("non-cardinal direction {:?} for orange", other),
  }
}

/// Gate/key color used by [`key_to_gate`] and the reward-bit tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateColor {
  Red,
  Blue,
  Green,
  Yellow,
}

/// `key_to_gate`: which gate-closed kind a given key opens.
pub fn key_to_gate_closed(key: HiddenCellType) -> Option<HiddenCellType> {
  Some(match key {
    KeyRed => GateRedClosed,
    KeyBlue => GateBlueClosed,
    KeyGreen => GateGreenClosed,
    KeyYellow => GateYellowClosed,
    _ => return None,
  })
}

/// `gate_open_map`: closed -> open for a given gate color.
pub fn gate_open(closed: HiddenCellType) -> Option<HiddenCellType> {
  Some(match closed {
    GateRedClosed => GateRedOpen,
    GateBlueClosed => GateBlueOpen,
    GateGreenClosed => GateGreenOpen,
    GateYellowClosed => GateYellowOpen,
    _ => return None,
  })
}

/// Is this hidden kind *some* color's closed gate?
pub fn is_gate_closed(kind: HiddenCellType) -> bool {
  matches!(kind, GateRedClosed | GateBlueClosed | GateGreenClosed | GateYellowClosed)
}

/// If this hidden kind is an *open* gate, which color?
pub fn gate_open_color(kind: HiddenCellType) -> Option<GateColor> {
  Some(match kind {
    GateRedOpen => GateColor::Red,
    GateBlueOpen => GateColor::Blue,
    GateGreenOpen => GateColor::Green,
    GateYellowOpen => GateColor::Yellow,
    _ => return None,
  })
}

/// `to_falling`: resting rounded entity -> its falling variant.
pub fn to_falling(kind: HiddenCellType) -> Option<HiddenCellType> {
  Some(match kind {
    Stone => StoneFalling,
    Diamond => DiamondFalling,
    Nut => NutFalling,
    Bomb => BombFalling,
    _ => return None,
  })
}

/// `magic_wall_conversion`: what a falling entity becomes after passing
/// through an active magic wall.
pub fn magic_wall_conversion(kind: HiddenCellType) -> HiddenCellType {
  match kind {
    StoneFalling => Diamond,
    DiamondFalling => Stone,
    NutFalling => Nut,
    BombFalling => Bomb,
    other => other,
  }
}

/// `element_to_explosion`: the explosion product a falling/exploding thing
/// leaves behind itself and its neighbors. Default is `ExplosionEmpty`.
pub fn element_to_explosion(kind: HiddenCellType) -> HiddenCellType {
  match kind {
    ButterflyUp | ButterflyRight | ButterflyDown | ButterflyLeft => ExplosionDiamond,
    Stone | StoneFalling | Bomb | BombFalling => ExplosionBoulder,
    _ => ExplosionEmpty,
  }
}

/// `explosion_to_element`: final resolution of an `Explosion*` cell.
pub fn explosion_to_element(kind: HiddenCellType) -> HiddenCellType {
  match kind {
    ExplosionDiamond => Diamond,
    ExplosionBoulder => Stone,
    ExplosionEmpty => Empty,
    other => other,
  }
}

/// `explosion_to_reward`: bit OR'd into `reward_signal` when an
/// `Explosion*` cell resolves.
pub fn explosion_to_reward(kind: HiddenCellType) -> u64 {
  match kind {
    ExplosionDiamond => crate::state::REWARD_EXPLOSION_TO_DIAMOND,
    ExplosionBoulder => crate::state::REWARD_EXPLOSION_TO_STONE,
    _ => 0,
  }
}

/// `key_to_signal` / `gate_to_signal`: per-color reward bits.
pub fn key_collect_signal(color: GateColor) -> u64 {
  use crate::state::*;
  match color {
    GateColor::Red => REWARD_COLLECT_KEY_RED,
    GateColor::Blue => REWARD_COLLECT_KEY_BLUE,
    GateColor::Green => REWARD_COLLECT_KEY_GREEN,
    GateColor::Yellow => REWARD_COLLECT_KEY_YELLOW,
  }
}

pub fn gate_walk_signal(color: GateColor) -> u64 {
  use crate::state::*;
  match color {
    GateColor::Red => REWARD_GATE_RED,
    GateColor::Blue => REWARD_GATE_BLUE,
    GateColor::Green => REWARD_GATE_GREEN,
    GateColor::Yellow => REWARD_GATE_YELLOW,
  }
}

pub fn key_color(key: HiddenCellType) -> Option<GateColor> {
  Some(match key {
    KeyRed => GateColor::Red,
    KeyBlue => GateColor::Blue,
    KeyGreen => GateColor::Green,
    KeyYellow => GateColor::Yellow,
    _ => return None,
  })
}
