//! Magic wall conversion and self-update (spec §4.F "MoveThroughMagic",
//! "MagicWall").

use crate::catalog::HiddenCellType;
use crate::direction::Direction;
use crate::state::GameState;

/// A falling object at `idx` attempts to pass through the magic wall
/// directly below it, emerging as `converted_kind` one cell further down.
///
/// Open question (spec §9): when `magic_wall_steps == 0`, this returns
/// without consuming the falling object — the falling-rule caller already
/// treats this as the terminal action for the tick regardless, matching the
/// source's behavior exactly rather than silently "fixing" it.
pub fn move_through_magic(state: &mut GameState, idx: usize, converted_kind: HiddenCellType) {
  if state.magic_wall_steps == 0 {
    return;
  }
  state.magic_active = true;

  let wall_idx = state.index_of(idx, Direction::Down);
  if state.in_bounds(wall_idx, Direction::Down) && state.is_type(wall_idx, HiddenCellType::Empty, Direction::Down) {
    state.set_item(idx, HiddenCellType::Empty, Direction::Noop);
    state.set_item(wall_idx, converted_kind, Direction::Down);
  }
  // Otherwise the cell two rows down is occupied: the falling object
  // remains exactly where it was, unconsumed.
}

/// Per-tick self-update of a `WallMagicDormant`/`WallMagicOn` cell.
pub fn update_magic_wall(state: &mut GameState, idx: usize) {
  let new_kind = if state.magic_active {
    HiddenCellType::WallMagicOn
  } else if state.magic_wall_steps > 0 {
    HiddenCellType::WallMagicDormant
  } else {
    HiddenCellType::WallMagicExpired
  };
  state.set_item(idx, new_kind, Direction::Noop);
}
