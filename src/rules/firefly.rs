//! Firefly update (spec §4.F "Firefly(dir)"): hugs the left wall, explodes
//! when it gets next to the agent or a blob.

use crate::catalog::{self, HiddenCellType};
use crate::direction::Direction;
use crate::state::GameState;

pub fn update_firefly(state: &mut GameState, idx: usize, dir: Direction) {
  let l = dir.rotate_left();

  for d in Direction::cardinal() {
    if state.is_type(idx, HiddenCellType::Agent, d) || state.is_type(idx, HiddenCellType::Blob, d) {
      crate::rules::explosion::explode(state, idx, Direction::Noop);
      return;
    }
  }

  if state.is_type(idx, HiddenCellType::Empty, l) {
    state.set_item(idx, catalog::firefly_from_dir(l), Direction::Noop);
    state.move_item(idx, l);
  } else if state.is_type(idx, HiddenCellType::Empty, dir) {
    state.set_item(idx, catalog::firefly_from_dir(dir), Direction::Noop);
    state.move_item(idx, dir);
  } else {
    let r = dir.rotate_right();
    state.set_item(idx, catalog::firefly_from_dir(r), Direction::Noop);
  }
}
