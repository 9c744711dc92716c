//! `ExitClosed` update (spec §4.F "ExitClosed update").

use crate::catalog::HiddenCellType;
use crate::direction::Direction;
use crate::state::GameState;

pub fn update_exit(state: &mut GameState, idx: usize) {
  if state.gems_collected >= state.gems_required {
    state.set_item(idx, HiddenCellType::ExitOpen, Direction::Noop);
  }
}
