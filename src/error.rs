//! Structured errors for the two failure domains named in the spec: level
//! parsing and invalid caller arguments. Mirrors the teacher's `error.rs` /
//! `InvalidMap` style of one `#[derive(thiserror::Error)]` type per domain.

use thiserror::Error;

/// Level string failed to parse into a [`crate::state::GameState`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LevelParseError {
  #[error("expected at least 3 header tokens (rows|cols|gems_required), found {found}")]
  MissingHeader { found: usize },

  #[error("header token {index} ('{token}') is not a non-negative integer")]
  BadHeaderToken { index: usize, token: String },

  #[error("expected {expected} cell tokens for a {rows}x{cols} grid, found {found}")]
  WrongCellCount { rows: usize, cols: usize, expected: usize, found: usize },

  #[error("cell token {index} ('{token}') is not an integer")]
  BadCellToken { index: usize, token: String },

  #[error("cell code {code} at index {index} is out of range [0, 49]")]
  CellCodeOutOfRange { index: usize, code: i64 },

  #[error("level has {count} agent cells, expected exactly 1")]
  WrongAgentCount { count: usize },

  #[error("rows and cols must each be at least 1, got {rows}x{cols}")]
  EmptyGrid { rows: usize, cols: usize },
}

/// Caller passed an out-of-range argument to a public operation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidArgument {
  #[error("row/col ({row}, {col}) is out of bounds for a {rows}x{cols} grid")]
  PositionOutOfBounds { row: usize, col: usize, rows: usize, cols: usize },

  #[error("flat index {index} is out of bounds for {len} cells")]
  IndexOutOfBounds { index: usize, len: usize },

  #[error("action code {code} is not a valid agent action, expected [0, 4)")]
  BadActionCode { code: u32 },
}

/// Top-level error for the two failure domains the public API surfaces
/// (spec §7): a malformed level string at construction time, or an
/// out-of-range argument to an otherwise-valid operation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
  #[error("malformed level: {0}")]
  Parse(#[from] LevelParseError),

  #[error("invalid argument: {0}")]
  InvalidArgument(#[from] InvalidArgument),
}
