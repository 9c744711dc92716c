//! Stone / Diamond / Nut / Bomb resting and falling rules (spec §4.F).

use crate::catalog::{self, props, HiddenCellType};
use crate::direction::Direction;
use crate::state::{GameState, REWARD_NUT_TO_DIAMOND};

fn can_roll_left(state: &GameState, idx: usize) -> bool {
  state.has_property(idx, props::ROUNDED, Direction::Down)
    && state.is_type(idx, HiddenCellType::Empty, Direction::Left)
    && state.is_type(idx, HiddenCellType::Empty, Direction::DownLeft)
}

fn can_roll_right(state: &GameState, idx: usize) -> bool {
  state.has_property(idx, props::ROUNDED, Direction::Down)
    && state.is_type(idx, HiddenCellType::Empty, Direction::Right)
    && state.is_type(idx, HiddenCellType::Empty, Direction::DownRight)
}

/// Roll `idx` (holding `kind`) one step in `dir`. Bomb is the deliberate
/// exception: rolling preserves `Bomb`, not `BombFalling` (spec §4.F, §9).
fn roll(state: &mut GameState, idx: usize, kind: HiddenCellType, dir: Direction) {
  if kind != HiddenCellType::Bomb {
    if let Some(falling) = catalog::to_falling(kind) {
      state.set_item(idx, falling, Direction::Noop);
    }
  }
  state.move_item(idx, dir);
}

/// Resting Stone/Diamond/Nut/Bomb: falls, rolls, or stays put.
pub fn update_resting(state: &mut GameState, idx: usize, kind: HiddenCellType) {
  if !state.params.gravity {
    return;
  }
  if state.is_type(idx, HiddenCellType::Empty, Direction::Down) {
    let falling = catalog::to_falling(kind).expect("resting rule only called on rounded falling-capable kinds");
    state.set_item(idx, falling, Direction::Noop);
    dispatch_falling(state, idx, falling);
  } else if can_roll_left(state, idx) {
    roll(state, idx, kind, Direction::Left);
  } else if can_roll_right(state, idx) {
    roll(state, idx, kind, Direction::Right);
  }
}

/// Dispatch a just-converted falling cell to its specific falling rule.
pub fn dispatch_falling(state: &mut GameState, idx: usize, falling_kind: HiddenCellType) {
  match falling_kind {
    HiddenCellType::StoneFalling => update_stone_falling(state, idx),
    HiddenCellType::DiamondFalling => update_diamond_falling(state, idx),
    HiddenCellType::NutFalling => update_nut_falling(state, idx),
    HiddenCellType::BombFalling => update_bomb_falling(state, idx),
    other => unreachable!("not a falling kind: {:?}", other),
  }
}

pub fn update_stone_falling(state: &mut GameState, idx: usize) {
  if state.is_type(idx, HiddenCellType::Empty, Direction::Down) {
    state.move_item(idx, Direction::Down);
    return;
  }

  let below_butterfly = state.in_bounds(idx, Direction::Down)
    && catalog::butterfly_dir(state.grid[state.index_of(idx, Direction::Down)]).is_some();

  if state.params.butterfly_explosion_ver == crate::state::ButterflyExplosionVer::Convert && below_butterfly {
    state.set_item(idx, HiddenCellType::Empty, Direction::Noop);
    state.set_item(idx, HiddenCellType::Diamond, Direction::Down);
    state.reward_signal |= crate::state::REWARD_BUTTERFLY_TO_DIAMOND;
    return;
  }

  if state.has_property(idx, props::CAN_EXPLODE, Direction::Down) {
    // Bomb/BombFalling are also CAN_EXPLODE, but that's this same arm, not a
    // distinct "stone lands on bomb" case — the dedicated Bomb check below
    // never fires and is kept only as a documented no-op for readers
    // expecting a separate stone-on-bomb rule.
    crate::rules::explosion::explode(state, idx, Direction::Down);
    return;
  }

  if state.is_type(idx, HiddenCellType::WallMagicOn, Direction::Down) || state.is_type(idx, HiddenCellType::WallMagicDormant, Direction::Down) {
    let converted = catalog::magic_wall_conversion(HiddenCellType::StoneFalling);
    crate::rules::magic_wall::move_through_magic(state, idx, converted);
    return;
  }

  if state.is_type(idx, HiddenCellType::Nut, Direction::Down) {
    state.set_item(idx, HiddenCellType::Empty, Direction::Noop);
    state.set_item(idx, HiddenCellType::Diamond, Direction::Down);
    state.reward_signal |= REWARD_NUT_TO_DIAMOND;
    return;
  }

  if can_roll_left(state, idx) {
    state.move_item(idx, Direction::Left);
  } else if can_roll_right(state, idx) {
    state.move_item(idx, Direction::Right);
  } else {
    state.set_item(idx, HiddenCellType::Stone, Direction::Noop);
  }
}

/// Diamonds do not trigger a bomb explosion and do not crack nuts (spec
/// §4.F "DiamondFalling").
pub fn update_diamond_falling(state: &mut GameState, idx: usize) {
  if state.is_type(idx, HiddenCellType::Empty, Direction::Down) {
    state.move_item(idx, Direction::Down);
    return;
  }

  let below_bomb =
    state.is_type(idx, HiddenCellType::Bomb, Direction::Down) || state.is_type(idx, HiddenCellType::BombFalling, Direction::Down);
  if state.has_property(idx, props::CAN_EXPLODE, Direction::Down) && !below_bomb {
    crate::rules::explosion::explode(state, idx, Direction::Down);
    return;
  }

  if state.is_type(idx, HiddenCellType::WallMagicOn, Direction::Down) || state.is_type(idx, HiddenCellType::WallMagicDormant, Direction::Down) {
    let converted = catalog::magic_wall_conversion(HiddenCellType::DiamondFalling);
    crate::rules::magic_wall::move_through_magic(state, idx, converted);
    return;
  }

  if can_roll_left(state, idx) {
    state.move_item(idx, Direction::Left);
  } else if can_roll_right(state, idx) {
    state.move_item(idx, Direction::Right);
  } else {
    state.set_item(idx, HiddenCellType::Diamond, Direction::Noop);
  }
}

/// Nuts fall and roll but never explode or pass through magic walls.
pub fn update_nut_falling(state: &mut GameState, idx: usize) {
  if state.is_type(idx, HiddenCellType::Empty, Direction::Down) {
    state.move_item(idx, Direction::Down);
  } else if can_roll_left(state, idx) {
    state.move_item(idx, Direction::Left);
  } else if can_roll_right(state, idx) {
    state.move_item(idx, Direction::Right);
  } else {
    state.set_item(idx, HiddenCellType::Nut, Direction::Noop);
  }
}

/// A blocked falling bomb explodes, unless explosions are disabled for this
/// run, in which case it simply remains `BombFalling` (spec §4.F).
pub fn update_bomb_falling(state: &mut GameState, idx: usize) {
  if state.is_type(idx, HiddenCellType::Empty, Direction::Down) {
    state.move_item(idx, Direction::Down);
  } else if can_roll_left(state, idx) {
    state.move_item(idx, Direction::Left);
  } else if can_roll_right(state, idx) {
    state.move_item(idx, Direction::Right);
  } else if !state.params.disable_explosions {
    crate::rules::explosion::explode(state, idx, Direction::Noop);
  }
  // else: remains BombFalling, untouched.
}
