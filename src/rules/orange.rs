//! Orange update (spec §4.F "Orange(dir)"): wanders, occasionally reroutes
//! via the RNG when blocked, explodes next to the agent.

use crate::catalog::{self, HiddenCellType};
use crate::direction::Direction;
use crate::state::GameState;

pub fn update_orange(state: &mut GameState, idx: usize, dir: Direction) {
  if state.is_type(idx, HiddenCellType::Empty, dir) {
    state.set_item(idx, catalog::orange_from_dir(dir), Direction::Noop);
    state.move_item(idx, dir);
    return;
  }

  for d in Direction::cardinal() {
    if state.is_type(idx, HiddenCellType::Agent, d) {
      crate::rules::explosion::explode(state, idx, Direction::Noop);
      return;
    }
  }

  let open: Vec<Direction> = Direction::cardinal().into_iter().filter(|&d| state.is_type(idx, HiddenCellType::Empty, d)).collect();
  if open.is_empty() {
    return;
  }
  let mut rng = state.rng();
  let pick = rng.next_below(open.len() as u64) as usize;
  state.commit_rng(rng);
  state.set_item(idx, catalog::orange_from_dir(open[pick]), Direction::Noop);
}
