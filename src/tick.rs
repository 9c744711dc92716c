//! The tick driver (spec §4.G, §5): one `apply_action` call advances the
//! whole board exactly one tick. Mirrors the teacher's `World::update_world`
//! scan-the-grid-once shape (`world/mod.rs`), generalized to the spec's
//! start-scan / agent-first / row-major-scan / end-scan ordering.

use crate::direction::Direction;
use crate::error::InvalidArgument;
use crate::state::{BlobSwap, GameState};

/// One of the four legal agent actions (spec §6 "Public operations").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
  Up,
  Right,
  Down,
  Left,
}

impl Action {
  fn direction(self) -> Direction {
    match self {
      Action::Up => Direction::Up,
      Action::Right => Direction::Right,
      Action::Down => Direction::Down,
      Action::Left => Direction::Left,
    }
  }

  /// Decode the `[0, 4)` action code used by the wire-level public API
  /// (spec §7 "Invalid argument").
  pub fn from_code(code: u32) -> Result<Action, InvalidArgument> {
    match code {
      0 => Ok(Action::Up),
      1 => Ok(Action::Right),
      2 => Ok(Action::Down),
      3 => Ok(Action::Left),
      other => Err(InvalidArgument::BadActionCode { code: other }),
    }
  }
}

impl GameState {
  /// Advance the world by exactly one tick (spec §4.G).
  ///
  /// Once started, a tick always completes and leaves the state valid
  /// (spec §7): a blocked agent action is a silent no-op for the agent, but
  /// the rest of the world (blob, fireflies, falling stones, ...) still
  /// advances.
  pub fn apply_action(&mut self, action: Action) {
    self.start_scan();

    if self.is_agent_alive && !self.is_agent_in_exit {
      let dir = action.direction();
      let idx = self.agent_idx;
      if self.in_bounds(idx, dir) {
        crate::rules::agent::update_agent(self, idx, dir);
      }
    }

    for idx in 0..self.flat_size() {
      if self.has_updated[idx] {
        continue;
      }
      crate::rules::update_cell(self, idx);
    }

    self.end_scan();
  }

  /// Public wire-level entry point: decode the `[0, 4)` action code and
  /// tick (spec §6 "Public operations", §7 "Invalid argument").
  pub fn apply_action_code(&mut self, code: u32) -> Result<(), InvalidArgument> {
    let action = Action::from_code(code)?;
    self.apply_action(action);
    Ok(())
  }

  fn start_scan(&mut self) {
    self.blob_size = 0;
    self.blob_enclosed = true;
    self.reward_signal = 0;
    for flag in self.has_updated.iter_mut() {
      *flag = false;
    }
  }

  fn end_scan(&mut self) {
    if self.blob_swap == BlobSwap::Null {
      if self.blob_enclosed {
        self.blob_swap = BlobSwap::Diamond;
      }
      if self.blob_size > self.blob_max_size {
        self.blob_swap = BlobSwap::Stone;
      }
    }
    if self.magic_active {
      self.magic_wall_steps = self.magic_wall_steps.saturating_sub(1);
      self.magic_active = self.magic_wall_steps > 0;
      if self.magic_wall_steps == 0 {
        log::trace!("magic wall budget exhausted this tick");
      }
    }
  }
}
