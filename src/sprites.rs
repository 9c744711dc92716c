//! Compile-time 32x32x3 RGB sprite table, one flat color block per
//! [`VisibleCellType`](crate::catalog::VisibleCellType) (spec §4.H).
//!
//! The renderer proper (a per-cell sprite lookup blit against real tile art)
//! is named out of scope in spec §1 ("the RGB tile renderer ... trivially a
//! per-cell sprite lookup blit"); what belongs in this core is the lookup
//! table and the blit itself, not the art. Each visible kind gets a
//! distinct flat color rather than hand-authored pixel art, grounded in the
//! teacher's own placeholder/DEBUG color conventions (`world/mod.rs`
//! `SplatterKind` debug colors) for the same "stand-in before real art"
//! role.

use crate::catalog::{VisibleCellType, NUM_VISIBLE_KINDS};

/// Sprite edge length, in pixels. Sprites are square, 3 bytes (RGB) per
/// pixel.
pub const SPRITE_SIZE: usize = 32;

/// One flat RGB color per visible kind, indexed by `VisibleCellType as u8`.
const SPRITE_COLOR: [[u8; 3]; NUM_VISIBLE_KINDS] = [
  [224, 64, 64],    // Agent
  [20, 20, 24],     // Empty
  [92, 64, 40],     // Dirt
  [140, 140, 148],  // Stone
  [168, 168, 176],  // StoneFalling
  [64, 200, 232],   // Diamond
  [104, 216, 240],  // DiamondFalling
  [40, 40, 40],     // ExitClosed
  [240, 220, 80],   // ExitOpen
  [255, 120, 120],  // AgentInExit
  [232, 96, 200],   // Firefly
  [232, 160, 40],   // Butterfly
  [112, 84, 56],    // WallBrick
  [96, 96, 104],    // WallSteel
  [120, 40, 160],   // WallMagicDormant
  [200, 72, 232],   // WallMagicOn
  [64, 64, 64],     // WallMagicExpired
  [48, 168, 64],    // Blob
  [255, 240, 160],  // ExplosionDiamond
  [255, 200, 120],  // ExplosionBoulder
  [255, 160, 80],   // ExplosionEmpty
  [200, 40, 40],    // GateRed
  [40, 80, 200],    // GateBlue
  [40, 160, 60],    // GateGreen
  [200, 180, 40],   // GateYellow
  [220, 60, 60],    // KeyRed
  [60, 100, 220],   // KeyBlue
  [60, 180, 80],    // KeyGreen
  [220, 200, 60],   // KeyYellow
  [160, 120, 40],   // Nut
  [184, 144, 56],   // NutFalling
  [24, 24, 24],     // Bomb
  [48, 48, 48],     // BombFalling
  [240, 140, 32],   // Orange
];

/// Look up the flat RGB color standing in for a visible kind's sprite.
pub fn sprite_color(kind: VisibleCellType) -> [u8; 3] {
  SPRITE_COLOR[kind as usize]
}
