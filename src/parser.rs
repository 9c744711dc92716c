//! Level string parser (spec §4.B / §6 "Level string grammar").
//!
//! Mirrors the teacher's `LevelMap::from_file_map` (`world/map/level.rs`):
//! decode a flat token stream into the dense grid representation, rejecting
//! malformed input with a specific, named error variant rather than
//! panicking.

use std::convert::TryFrom;

use crate::catalog::{HiddenCellType, NUM_HIDDEN_KINDS};
use crate::error::LevelParseError;
use crate::state::{BlobSwap, GameParams, GameState};

impl GameState {
  /// `new(level_string, params?) -> State` (spec §6 "Public operations").
  /// `params` defaults to [`GameParams::default`] when omitted by the
  /// caller (use `GameParams::default()` explicitly, or `Default::default()`).
  pub fn new(level: &str, params: GameParams) -> Result<GameState, LevelParseError> {
    parse_level(level, params)
  }
}

/// Parse `rows|cols|gems_required|c0|c1|...` into a fresh [`GameState`].
///
/// Surrounding whitespace around any token is tolerated; tokens are
/// otherwise required to be bare decimal integers.
pub fn parse_level(level: &str, params: GameParams) -> Result<GameState, LevelParseError> {
  let tokens: Vec<&str> = level.split('|').map(str::trim).collect();
  if tokens.len() < 3 {
    return Err(LevelParseError::MissingHeader { found: tokens.len() });
  }

  let rows = parse_header_token(&tokens, 0)?;
  let cols = parse_header_token(&tokens, 1)?;
  let gems_required = parse_u32_header_token(&tokens, 2)?;

  if rows == 0 || cols == 0 {
    return Err(LevelParseError::EmptyGrid { rows, cols });
  }

  let expected = rows * cols;
  let cell_tokens = &tokens[3..];
  if cell_tokens.len() != expected {
    return Err(LevelParseError::WrongCellCount { rows, cols, expected, found: cell_tokens.len() });
  }

  let mut grid = Vec::with_capacity(expected);
  for (i, tok) in cell_tokens.iter().enumerate() {
    let code: i64 = tok.parse().map_err(|_| LevelParseError::BadCellToken { index: i, token: (*tok).to_string() })?;
    if code < 0 || code >= NUM_HIDDEN_KINDS as i64 {
      return Err(LevelParseError::CellCodeOutOfRange { index: i, code });
    }
    let kind = HiddenCellType::try_from(code as i8).expect("range checked above");
    grid.push(kind);
  }

  let mut agent_idx = None;
  let mut agent_count = 0usize;
  let mut in_exit = false;
  for (i, &kind) in grid.iter().enumerate() {
    if kind == HiddenCellType::Agent || kind == HiddenCellType::AgentInExit {
      agent_count += 1;
      agent_idx = Some(i);
      in_exit = kind == HiddenCellType::AgentInExit;
    }
  }
  if agent_count != 1 {
    log::debug!("level parse rejected: {} agent cells found, expected 1", agent_count);
    return Err(LevelParseError::WrongAgentCount { count: agent_count });
  }
  let agent_idx = agent_idx.expect("agent_count == 1 implies Some");

  let blob_max_size = ((rows * cols) as f64 * params.blob_max_percentage).floor() as usize;

  let mut state = GameState {
    rows,
    cols,
    grid,
    has_updated: vec![false; expected],
    agent_idx,
    is_agent_alive: true,
    is_agent_in_exit: in_exit,
    gems_required,
    gems_collected: 0,
    magic_wall_steps: params.magic_wall_steps,
    magic_active: false,
    blob_size: 0,
    blob_max_size,
    blob_enclosed: true,
    blob_swap: BlobSwap::Null,
    params,
    random_state: crate::rng::Xorshift64::default_seed(),
    reward_signal: 0,
    hash: 0,
  };
  state.hash = crate::hash::recompute_hash(&state.grid);
  Ok(state)
}

fn parse_header_token(tokens: &[&str], index: usize) -> Result<usize, LevelParseError> {
  tokens[index]
    .parse()
    .map_err(|_| LevelParseError::BadHeaderToken { index, token: tokens[index].to_string() })
}

/// Like [`parse_header_token`] but for `gems_required`, which is stored as
/// `u32` on [`GameState`] rather than `usize`.
fn parse_u32_header_token(tokens: &[&str], index: usize) -> Result<u32, LevelParseError> {
  tokens[index]
    .parse()
    .map_err(|_| LevelParseError::BadHeaderToken { index, token: tokens[index].to_string() })
}
