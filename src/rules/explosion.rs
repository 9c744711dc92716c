//! Chain explosion (spec §4.F "Explode", §9 design note: explicit work
//! queue rather than recursion, since a large consumable region could
//! otherwise blow the stack).

use crate::catalog::{self, props, HiddenCellType};
use crate::direction::Direction;
use crate::state::GameState;

/// Trigger an explosion centered on the cell reached by stepping `dir` from
/// `idx` (dir=Noop means "idx itself"). The exploding cell's own kind
/// determines the explosion product; this single entry point covers both
/// "explode self" and "explode the neighbor in `dir`" call sites.
pub fn explode(state: &mut GameState, idx: usize, dir: Direction) {
  let t = state.index_of(idx, dir);
  let product = catalog::element_to_explosion(state.grid[t]);
  let mut queue = std::collections::VecDeque::new();
  queue.push_back((t, product));

  // Every queued write goes through `set_item`, which marks `has_updated`,
  // so no index is ever queued twice; bounded by cell count (spec §8).
  while let Some((center, product)) = queue.pop_front() {
    if matches!(state.grid[center], HiddenCellType::Agent | HiddenCellType::AgentInExit) {
      state.is_agent_alive = false;
    }
    state.set_item(center, product, Direction::Noop);

    for d in Direction::all_eight() {
      if !state.in_bounds(center, d) {
        continue;
      }
      let n_idx = state.index_of(center, d);
      let n_kind = state.grid[n_idx];
      let n_props = catalog::element(n_kind).props;
      if n_props & props::CAN_EXPLODE != 0 {
        queue.push_back((n_idx, catalog::element_to_explosion(n_kind)));
      } else if n_props & props::CONSUMABLE != 0 {
        if matches!(n_kind, HiddenCellType::Agent | HiddenCellType::AgentInExit) {
          state.is_agent_alive = false;
        }
        state.set_item(n_idx, product, Direction::Noop);
      }
    }
  }
}

/// `Explosion*` cells resolve to their final element one tick after they
/// were written (the tick they were written they're already `has_updated`).
pub fn update_explosions(state: &mut GameState, idx: usize) {
  let kind = state.grid[idx];
  state.reward_signal |= catalog::explosion_to_reward(kind);
  state.set_item(idx, catalog::explosion_to_element(kind), Direction::Noop);
}
