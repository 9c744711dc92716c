//! Per-tick element update rules (spec §4.F) plus the dispatch table the
//! tick driver (`crate::tick`) scans the grid against.

pub mod agent;
pub mod blob;
pub mod butterfly;
pub mod exit;
pub mod explosion;
pub mod falling;
pub mod firefly;
pub mod magic_wall;
pub mod orange;

use crate::catalog::{self, HiddenCellType};
use crate::state::GameState;

/// Update the single cell at `idx`, assuming `has_updated[idx]` is false
/// (the tick driver's only call site already guards this). Kinds with no
/// active behavior (walls, gates, keys, dirt, empty, agent-in-exit, the
/// expired magic wall, the resting `Null`-adjacent sentinel) are no-ops —
/// matched by the catch-all arm rather than enumerated individually.
pub fn update_cell(state: &mut GameState, idx: usize) {
  let kind = state.grid[idx];
  match kind {
    HiddenCellType::Stone | HiddenCellType::Diamond | HiddenCellType::Nut | HiddenCellType::Bomb => {
      falling::update_resting(state, idx, kind);
    }
    HiddenCellType::StoneFalling => falling::update_stone_falling(state, idx),
    HiddenCellType::DiamondFalling => falling::update_diamond_falling(state, idx),
    HiddenCellType::NutFalling => falling::update_nut_falling(state, idx),
    HiddenCellType::BombFalling => falling::update_bomb_falling(state, idx),

    HiddenCellType::ExitClosed => exit::update_exit(state, idx),

    HiddenCellType::Blob => blob::update_blob(state, idx),

    HiddenCellType::FireflyUp | HiddenCellType::FireflyRight | HiddenCellType::FireflyDown | HiddenCellType::FireflyLeft => {
      let dir = catalog::firefly_dir(kind).expect("matched a Firefly* variant");
      firefly::update_firefly(state, idx, dir);
    }

    HiddenCellType::ButterflyUp | HiddenCellType::ButterflyRight | HiddenCellType::ButterflyDown | HiddenCellType::ButterflyLeft => {
      let dir = catalog::butterfly_dir(kind).expect("matched a Butterfly* variant");
      butterfly::update_butterfly(state, idx, dir);
    }

    HiddenCellType::OrangeUp | HiddenCellType::OrangeRight | HiddenCellType::OrangeDown | HiddenCellType::OrangeLeft => {
      let dir = catalog::orange_dir(kind).expect("matched an Orange* variant");
      orange::update_orange(state, idx, dir);
    }

    HiddenCellType::WallMagicDormant | HiddenCellType::WallMagicOn => magic_wall::update_magic_wall(state, idx),

    HiddenCellType::ExplosionDiamond | HiddenCellType::ExplosionBoulder | HiddenCellType::ExplosionEmpty => {
      explosion::update_explosions(state, idx);
    }

    _ => {}
  }
}
