//! The `GameState` value type (spec §3) plus configuration and reward bits.

use std::convert::TryFrom;

use crate::catalog::HiddenCellType;
use crate::rng::Xorshift64;

/// Reward signal bits, OR'd into [`GameState::reward_signal`] during a tick
/// and cleared at the start of the next one. Exact bit positions are not
/// mandated by the spec ("the consumer interprets them") but are stable
/// within this crate.
pub const REWARD_COLLECT_DIAMOND: u64 = 1 << 0;
pub const REWARD_NUT_TO_DIAMOND: u64 = 1 << 1;
pub const REWARD_BUTTERFLY_TO_DIAMOND: u64 = 1 << 2;
pub const REWARD_COLLECT_KEY: u64 = 1 << 3;
pub const REWARD_COLLECT_KEY_RED: u64 = 1 << 4;
pub const REWARD_COLLECT_KEY_BLUE: u64 = 1 << 5;
pub const REWARD_COLLECT_KEY_GREEN: u64 = 1 << 6;
pub const REWARD_COLLECT_KEY_YELLOW: u64 = 1 << 7;
pub const REWARD_WALK_THROUGH_GATE: u64 = 1 << 8;
pub const REWARD_GATE_RED: u64 = 1 << 9;
pub const REWARD_GATE_BLUE: u64 = 1 << 10;
pub const REWARD_GATE_GREEN: u64 = 1 << 11;
pub const REWARD_GATE_YELLOW: u64 = 1 << 12;
pub const REWARD_WALK_THROUGH_EXIT: u64 = 1 << 13;
pub const REWARD_EXPLOSION_TO_DIAMOND: u64 = 1 << 14;
pub const REWARD_EXPLOSION_TO_STONE: u64 = 1 << 15;

/// Which version of the butterfly-explosion interaction is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButterflyExplosionVer {
  /// A falling stone landing on a butterfly triggers a normal explosion.
  Explode,
  /// A falling stone landing on a butterfly converts it into a diamond.
  Convert,
}

/// Which version of the butterfly turn-in-place interaction is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButterflyMoveVer {
  /// Turning in place only changes facing this tick; the move happens next.
  Delay,
  /// Turning in place also moves one step in the new direction, same tick.
  Instant,
}

/// Immutable per-run configuration (spec §6 "Configuration").
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameParams {
  pub gravity: bool,
  pub magic_wall_steps: u32,
  pub blob_chance: u8,
  pub blob_max_percentage: f64,
  pub disable_explosions: bool,
  pub butterfly_explosion_ver: ButterflyExplosionVer,
  pub butterfly_move_ver: ButterflyMoveVer,
}

impl Default for GameParams {
  fn default() -> Self {
    GameParams {
      gravity: false,
      magic_wall_steps: 140,
      blob_chance: 20,
      blob_max_percentage: 0.16,
      disable_explosions: false,
      butterfly_explosion_ver: ButterflyExplosionVer::Explode,
      butterfly_move_ver: ButterflyMoveVer::Delay,
    }
  }
}

/// What the blob latches into at the end of the tick it finishes growing
/// (enclosed -> Diamond, overgrown -> Stone). `Null` means "no latch yet".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlobSwap {
  Null,
  Diamond,
  Stone,
}

/// The full simulation state: a plain value type, freely cloned by callers
/// (spec §5). Mutated only by [`crate::tick::apply_action`].
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
  pub rows: usize,
  pub cols: usize,
  pub grid: Vec<HiddenCellType>,
  pub has_updated: Vec<bool>,

  pub agent_idx: usize,
  pub is_agent_alive: bool,
  pub is_agent_in_exit: bool,

  pub gems_required: u32,
  pub gems_collected: u32,

  pub magic_wall_steps: u32,
  pub magic_active: bool,

  pub blob_size: usize,
  pub blob_max_size: usize,
  pub blob_enclosed: bool,
  pub blob_swap: BlobSwap,

  pub params: GameParams,

  pub random_state: u64,

  pub reward_signal: u64,
  pub hash: u64,
}

impl GameState {
  pub fn flat_size(&self) -> usize {
    self.rows * self.cols
  }

  pub fn index_of_rc(&self, row: usize, col: usize) -> usize {
    row * self.cols + col
  }

  pub fn rc_of_index(&self, idx: usize) -> (usize, usize) {
    (idx / self.cols, idx % self.cols)
  }

  pub fn rng(&mut self) -> Xorshift64 {
    Xorshift64::from_state(self.random_state)
  }

  pub fn commit_rng(&mut self, rng: Xorshift64) {
    self.random_state = rng.state();
  }

  /// `is_terminal()`: the agent is dead, or has reached the exit.
  pub fn is_terminal(&self) -> bool {
    !self.is_agent_alive || self.is_agent_in_exit
  }

  /// `is_solution()`: the agent reached the exit.
  pub fn is_solution(&self) -> bool {
    self.is_agent_in_exit
  }

  pub fn get_reward_signal(&self) -> u64 {
    self.reward_signal
  }

  pub fn get_hash(&self) -> u64 {
    self.hash
  }

  pub fn get_hidden_item(&self, idx: usize) -> Result<HiddenCellType, crate::error::InvalidArgument> {
    self
      .grid
      .get(idx)
      .copied()
      .ok_or(crate::error::InvalidArgument::IndexOutOfBounds { index: idx, len: self.grid.len() })
  }

  /// `get_positions(kind)`: every `(row, col)` currently holding `kind`, in
  /// row-major order.
  pub fn get_positions(&self, kind: HiddenCellType) -> Vec<(usize, usize)> {
    self
      .grid
      .iter()
      .enumerate()
      .filter(|(_, &k)| k == kind)
      .map(|(idx, _)| self.rc_of_index(idx))
      .collect()
  }

  /// `get_indices(kind)`: every flat index currently holding `kind`, in
  /// row-major order.
  pub fn get_indices(&self, kind: HiddenCellType) -> Vec<usize> {
    self
      .grid
      .iter()
      .enumerate()
      .filter(|(_, &k)| k == kind)
      .map(|(idx, _)| idx)
      .collect()
  }

  /// Scalar + vector parts sufficient for a round-trip (spec §6
  /// "Serialization"); no on-disk format is mandated, so this is just a
  /// plain tuple-of-parts the caller can store however it likes.
  pub fn to_parts(&self) -> GameStateParts {
    GameStateParts {
      rows: self.rows,
      cols: self.cols,
      grid: self.grid.iter().map(|k| *k as i8).collect(),
      has_updated: self.has_updated.clone(),
      agent_idx: self.agent_idx,
      is_agent_alive: self.is_agent_alive,
      is_agent_in_exit: self.is_agent_in_exit,
      gems_required: self.gems_required,
      gems_collected: self.gems_collected,
      magic_wall_steps: self.magic_wall_steps,
      magic_active: self.magic_active,
      blob_size: self.blob_size,
      blob_max_size: self.blob_max_size,
      blob_enclosed: self.blob_enclosed,
      blob_swap: self.blob_swap,
      params: self.params,
      random_state: self.random_state,
      reward_signal: self.reward_signal,
      hash: self.hash,
    }
  }

  pub fn from_parts(parts: GameStateParts) -> Self {
    let grid: Vec<HiddenCellType> = parts
      .grid
      .into_iter()
      .map(|code| HiddenCellType::try_from(code).expect("round-tripped grid must contain only valid codes"))
      .collect();
    GameState {
      rows: parts.rows,
      cols: parts.cols,
      grid,
      has_updated: parts.has_updated,
      agent_idx: parts.agent_idx,
      is_agent_alive: parts.is_agent_alive,
      is_agent_in_exit: parts.is_agent_in_exit,
      gems_required: parts.gems_required,
      gems_collected: parts.gems_collected,
      magic_wall_steps: parts.magic_wall_steps,
      magic_active: parts.magic_active,
      blob_size: parts.blob_size,
      blob_max_size: parts.blob_max_size,
      blob_enclosed: parts.blob_enclosed,
      blob_swap: parts.blob_swap,
      params: parts.params,
      random_state: parts.random_state,
      reward_signal: parts.reward_signal,
      hash: parts.hash,
    }
  }

  /// Debug/test ASCII dump, one glyph per cell (row-major, newline per row).
  /// Not a spec-mandated operation, but a natural projection through the
  /// catalog's glyph field, in the spirit of the teacher's `glyphs.rs`.
  pub fn fmt_ascii(&self) -> String {
    let mut out = String::with_capacity(self.rows * (self.cols + 1));
    for row in 0..self.rows {
      for col in 0..self.cols {
        let kind = self.grid[self.index_of_rc(row, col)];
        out.push(crate::catalog::element(kind).glyph);
      }
      out.push('\n');
    }
    out
  }
}

impl std::fmt::Display for GameState {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(&self.fmt_ascii())
  }
}

/// Plain-data round-trip form of [`GameState`], per spec §6.
#[derive(Debug, Clone, PartialEq)]
pub struct GameStateParts {
  pub rows: usize,
  pub cols: usize,
  pub grid: Vec<i8>,
  pub has_updated: Vec<bool>,
  pub agent_idx: usize,
  pub is_agent_alive: bool,
  pub is_agent_in_exit: bool,
  pub gems_required: u32,
  pub gems_collected: u32,
  pub magic_wall_steps: u32,
  pub magic_active: bool,
  pub blob_size: usize,
  pub blob_max_size: usize,
  pub blob_enclosed: bool,
  pub blob_swap: BlobSwap,
  pub params: GameParams,
  pub random_state: u64,
  pub reward_signal: u64,
  pub hash: u64,
}
