//! Deterministic cellular simulation core for a Boulder Dash / Emerald Mine
//! style tile-puzzle, built for use as a reinforcement-learning environment
//! and search substrate.
//!
//! A [`state::GameState`] is constructed from a pipe-delimited level string
//! (see [`parser::parse_level`]) and advanced one tick per
//! [`GameState::apply_action`](state::GameState::apply_action) call. Each
//! tick produces the new board, a bit-masked reward signal
//! ([`GameState::get_reward_signal`](state::GameState::get_reward_signal)),
//! an incremental 64-bit board hash
//! ([`GameState::get_hash`](state::GameState::get_hash)), and (on request) a
//! one-hot observation tensor or an RGB image.
//!
//! Out of scope, per the originating specification: the text level loader's
//! authoring tools, the production tile renderer, language bindings, and any
//! search/RL driver — those are external collaborators of this core.

pub mod catalog;
pub mod direction;
pub mod error;
mod grid;
pub mod hash;
mod observation;
pub mod parser;
pub mod rng;
mod rules;
pub mod sprites;
pub mod state;
pub mod tick;

pub use catalog::{HiddenCellType, VisibleCellType};
pub use direction::Direction;
pub use error::{GameError, InvalidArgument, LevelParseError};
pub use state::{BlobSwap, ButterflyExplosionVer, ButterflyMoveVer, GameParams, GameState};
pub use tick::Action;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn constructs_from_a_minimal_level_string() {
    let state = GameState::new("3|3|0|1|1|1|1|0|1|1|1|1", GameParams::default()).unwrap();
    assert_eq!(state.rows, 3);
    assert_eq!(state.cols, 3);
    assert!(state.is_agent_alive);
    assert!(!state.is_terminal());
  }
}
