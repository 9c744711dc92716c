//! Butterfly update (spec §4.F "Butterfly(dir)"): the firefly's mirror
//! image, hugging the right wall instead of the left.

use crate::catalog::{self, HiddenCellType};
use crate::direction::Direction;
use crate::state::{ButterflyMoveVer, GameState};

pub fn update_butterfly(state: &mut GameState, idx: usize, dir: Direction) {
  for d in Direction::cardinal() {
    if state.is_type(idx, HiddenCellType::Agent, d) || state.is_type(idx, HiddenCellType::Blob, d) {
      crate::rules::explosion::explode(state, idx, Direction::Noop);
      return;
    }
  }

  let r = dir.rotate_right();
  if state.is_type(idx, HiddenCellType::Empty, r) {
    state.set_item(idx, catalog::butterfly_from_dir(r), Direction::Noop);
    state.move_item(idx, r);
    return;
  }
  if state.is_type(idx, HiddenCellType::Empty, dir) {
    state.set_item(idx, catalog::butterfly_from_dir(dir), Direction::Noop);
    state.move_item(idx, dir);
    return;
  }

  // Blocked both ahead and to the right: turn left in place. Spec §9
  // preserves the source's quirk of computing `new_dir` twice when the
  // move version is `Instant` rather than folding it into one lookup.
  let new_dir = dir.rotate_left();
  state.set_item(idx, catalog::butterfly_from_dir(new_dir), Direction::Noop);
  if state.params.butterfly_move_ver == ButterflyMoveVer::Instant {
    let new_dir = dir.rotate_left();
    if state.is_type(idx, HiddenCellType::Empty, new_dir) {
      state.move_item(idx, new_dir);
    }
  }
}
