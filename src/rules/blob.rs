//! Blob update (spec §4.F "Blob"): grows organically, latches to Diamond or
//! Stone at end-of-tick depending on whether it stayed enclosed or
//! overgrew (spec §4.G `EndScan`).

use crate::catalog::HiddenCellType;
use crate::direction::Direction;
use crate::state::{BlobSwap, GameState};

pub fn update_blob(state: &mut GameState, idx: usize) {
  if state.blob_swap != BlobSwap::Null {
    let kind = match state.blob_swap {
      BlobSwap::Diamond => HiddenCellType::Diamond,
      BlobSwap::Stone => HiddenCellType::Stone,
      BlobSwap::Null => unreachable!("checked above"),
    };
    state.set_item(idx, kind, Direction::Noop);
    return;
  }

  state.blob_size += 1;

  for d in Direction::cardinal() {
    if state.is_type(idx, HiddenCellType::Empty, d) || state.is_type(idx, HiddenCellType::Dirt, d) {
      state.blob_enclosed = false;
    }
  }

  let mut rng = state.rng();
  let r1 = rng.next_below(256);
  let will_grow = r1 < state.params.blob_chance as u64;
  let r2 = rng.next_below(4);
  state.commit_rng(rng);

  let d = Direction::cardinal()[r2 as usize];
  if will_grow && (state.is_type(idx, HiddenCellType::Empty, d) || state.is_type(idx, HiddenCellType::Dirt, d)) {
    state.set_item(idx, HiddenCellType::Blob, d);
  }
}
