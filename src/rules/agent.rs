//! Agent update (spec §4.G "UpdateAgent"): move, push, collect diamonds and
//! keys, walk through gates, enter the exit. Invoked once per tick, before
//! the general element scan.

use crate::catalog::{self, props, HiddenCellType};
use crate::direction::Direction;
use crate::state::{self, GameState};

pub fn update_agent(state: &mut GameState, idx: usize, dir: Direction) {
  if !state.in_bounds(idx, dir) {
    state.has_updated[idx] = true;
    return;
  }

  let target_idx = state.index_of(idx, dir);
  let t = state.grid[target_idx];

  if t == HiddenCellType::Empty || t == HiddenCellType::Dirt {
    enter(state, idx, target_idx, dir);
    return;
  }

  if t == HiddenCellType::Diamond || t == HiddenCellType::DiamondFalling {
    state.gems_collected += 1;
    state.reward_signal |= state::REWARD_COLLECT_DIAMOND;
    enter(state, idx, target_idx, dir);
    return;
  }

  let horizontal = matches!(dir, Direction::Left | Direction::Right);
  if horizontal && catalog::element(t).props & props::PUSHABLE != 0 {
    if try_push(state, idx, target_idx, dir, t) {
      return;
    }
    // Push blocked: falls through to the unconditional "stay put" below.
  }

  if let Some(color) = catalog::key_color(t) {
    state.reward_signal |= state::REWARD_COLLECT_KEY | catalog::key_collect_signal(color);
    enter(state, idx, target_idx, dir);
    open_gates(state, color);
    return;
  }

  if let Some(color) = catalog::gate_open_color(t) {
    if walk_through_gate(state, idx, target_idx, dir, color) {
      return;
    }
  }

  if t == HiddenCellType::ExitOpen {
    state.set_item(idx, HiddenCellType::Empty, Direction::Noop);
    state.set_item(idx, HiddenCellType::AgentInExit, dir);
    state.agent_idx = target_idx;
    state.is_agent_in_exit = true;
    state.reward_signal |= state::REWARD_WALK_THROUGH_EXIT;
    state.has_updated[target_idx] = true;
    return;
  }

  // Blocked: wall, closed gate, unopenable neighbor. The agent stays put
  // but the tick still advances (spec §7, §8 boundary behaviors).
  state.has_updated[idx] = true;
}

/// Move the agent from `idx` into `target_idx` (its neighbor in `dir`),
/// marking both cells updated.
fn enter(state: &mut GameState, idx: usize, target_idx: usize, dir: Direction) {
  state.move_item(idx, dir);
  state.agent_idx = target_idx;
}

/// Horizontal push: the pushed object moves one step further in `dir` if
/// the cell two steps away is Empty, choosing its falling or resting
/// variant based on whether anything now sits below its new position.
fn try_push(state: &mut GameState, idx: usize, target_idx: usize, dir: Direction, pushed_kind: HiddenCellType) -> bool {
  if !state.in_bounds(target_idx, dir) {
    return false;
  }
  let beyond_idx = state.index_of(target_idx, dir);
  if state.grid[beyond_idx] != HiddenCellType::Empty {
    return false;
  }

  let below_empty = state.in_bounds(beyond_idx, Direction::Down) && state.grid[state.index_of(beyond_idx, Direction::Down)] == HiddenCellType::Empty;
  let new_kind = if below_empty { catalog::to_falling(pushed_kind).unwrap_or(pushed_kind) } else { pushed_kind };

  state.set_item(target_idx, new_kind, Direction::Noop);
  state.move_item(target_idx, dir);
  enter(state, idx, target_idx, dir);
  true
}

/// Scan the grid, converting every `Gate{color}Closed` to `Gate{color}Open`
/// (spec §4.G step 6, "OpenGate(color)").
fn open_gates(state: &mut GameState, color: catalog::GateColor) {
  let closed = match color {
    catalog::GateColor::Red => HiddenCellType::GateRedClosed,
    catalog::GateColor::Blue => HiddenCellType::GateBlueClosed,
    catalog::GateColor::Green => HiddenCellType::GateGreenClosed,
    catalog::GateColor::Yellow => HiddenCellType::GateYellowClosed,
  };
  let open = catalog::gate_open(closed).expect("closed is always a Gate*Closed kind");
  for i in 0..state.flat_size() {
    if state.grid[i] == closed {
      state.set_item(i, open, Direction::Noop);
    }
  }
}

/// Walk through an open gate: the agent jumps past it to the first cell
/// beyond, provided that cell is `Traversable`, collecting whatever is
/// there on the way (spec §4.G step 7). Returns false (treated by the
/// caller as "blocked") if the far cell is not traversable.
fn walk_through_gate(state: &mut GameState, idx: usize, target_idx: usize, dir: Direction, color: catalog::GateColor) -> bool {
  if !state.in_bounds(target_idx, dir) {
    return false;
  }
  let far_idx = state.index_of(target_idx, dir);
  let far_kind = state.grid[far_idx];
  if catalog::element(far_kind).props & props::TRAVERSABLE == 0 {
    return false;
  }

  if far_kind == HiddenCellType::Diamond || far_kind == HiddenCellType::DiamondFalling {
    state.gems_collected += 1;
    state.reward_signal |= state::REWARD_COLLECT_DIAMOND;
  } else if let Some(key_color) = catalog::key_color(far_kind) {
    state.reward_signal |= state::REWARD_COLLECT_KEY | catalog::key_collect_signal(key_color);
    open_gates(state, key_color);
  }

  let entering_exit = far_kind == HiddenCellType::ExitOpen;
  let new_agent_kind = if entering_exit { HiddenCellType::AgentInExit } else { HiddenCellType::Agent };

  state.set_item(target_idx, new_agent_kind, dir);
  state.set_item(idx, HiddenCellType::Empty, Direction::Noop);
  state.agent_idx = far_idx;
  state.has_updated[far_idx] = true;

  if entering_exit {
    state.is_agent_in_exit = true;
    state.reward_signal |= state::REWARD_WALK_THROUGH_EXIT;
  }
  state.reward_signal |= state::REWARD_WALK_THROUGH_GATE | catalog::gate_walk_signal(color);
  true
}
