//! SplitMix64 and the incremental Zobrist-style board hash (spec §4.C).
//!
//! Grounded in the XOR-in/XOR-out incremental hashing idiom shown by the
//! `other_examples` chess Zobrist hasher (`xor_castling_rights_delta`): every
//! mutation XORs out the old per-cell key and XORs in the new one, so the
//! running hash never needs a full rescan except for verification.

use crate::catalog::HiddenCellType;

/// SplitMix64, as specified: the reference constants and shift amounts.
pub fn splitmix64(mut x: u64) -> u64 {
  x = x.wrapping_add(0x9E3779B97F4A7C15);
  let mut z = x;
  z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
  z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
  z ^ (z >> 31)
}

/// `H(kind, idx) = SplitMix64(flat_size * int(kind) + idx)`.
///
/// `int(kind)` uses the catalog index (so `Null`, which never appears in a
/// live grid, maps to 0 and every real kind to a distinct positive offset);
/// `flat_size` is `rows * cols`.
pub fn cell_hash(kind: HiddenCellType, idx: usize, flat_size: usize) -> u64 {
  let key = (flat_size as u64)
    .wrapping_mul(kind.catalog_index() as u64)
    .wrapping_add(idx as u64);
  splitmix64(key)
}

/// Recompute the whole-board hash from scratch: XOR of `H(grid[i], i)` over
/// every cell. Used by invariant checks and round-trip tests; the live
/// `GameState::hash` field is instead maintained incrementally by
/// `Grid::move_item`/`Grid::set_item`.
pub fn recompute_hash(grid: &[HiddenCellType]) -> u64 {
  let flat_size = grid.len();
  grid
    .iter()
    .enumerate()
    .fold(0u64, |acc, (idx, &kind)| acc ^ cell_hash(kind, idx, flat_size))
}
