//! Observation tensor and sprite-blit image projection (spec §4.H).
//!
//! Both are pure projections of the hidden grid through the element catalog
//! — no mutable state, no randomness — grounded in the teacher's
//! glyph-per-cell / texture-per-cell rendering model (`glyphs.rs`,
//! `images.rs`) but emitting plain `Vec<f32>`/`Vec<u8>` buffers instead of
//! SDL textures, since the RGB tile renderer proper is named out of scope
//! (spec §1).

use crate::catalog::{self, NUM_VISIBLE_KINDS};
use crate::sprites::{sprite_color, SPRITE_SIZE};
use crate::state::GameState;

impl GameState {
  /// `observation_shape()`: `(num_visible_kinds, rows, cols)`.
  pub fn observation_shape(&self) -> (usize, usize, usize) {
    (NUM_VISIBLE_KINDS, self.rows, self.cols)
  }

  /// `get_observation()`: one-hot channel-major tensor, length
  /// `NUM_VISIBLE_KINDS * rows * cols`. Channel `c`, position `(r, c_col)`
  /// is `1.0` iff the hidden cell at that position's visible kind is `c`.
  pub fn get_observation(&self) -> Vec<f32> {
    let plane = self.flat_size();
    let mut obs = vec![0.0f32; NUM_VISIBLE_KINDS * plane];
    for (idx, &kind) in self.grid.iter().enumerate() {
      let visible = catalog::element(kind).visible;
      obs[visible as usize * plane + idx] = 1.0;
    }
    obs
  }

  /// `to_image()`: `rows*32` by `cols*32` RGB image, row-major, 3 bytes per
  /// pixel, built by blitting each cell's flat sprite color over its
  /// `32x32` block (spec §4.H).
  pub fn to_image(&self) -> Vec<u8> {
    let img_width = self.cols * SPRITE_SIZE;
    let img_height = self.rows * SPRITE_SIZE;
    let mut image = vec![0u8; img_width * img_height * 3];

    for row in 0..self.rows {
      for col in 0..self.cols {
        let kind = self.grid[self.index_of_rc(row, col)];
        let color = sprite_color(catalog::element(kind).visible);
        blit_sprite(&mut image, img_width, row * SPRITE_SIZE, col * SPRITE_SIZE, color);
      }
    }
    image
  }
}

/// Fill a `SPRITE_SIZE x SPRITE_SIZE` block of `image` (an `img_width`-wide
/// RGB buffer) at `(top, left)` with a flat color.
fn blit_sprite(image: &mut [u8], img_width: usize, top: usize, left: usize, color: [u8; 3]) {
  for dy in 0..SPRITE_SIZE {
    let row_start = (top + dy) * img_width * 3;
    for dx in 0..SPRITE_SIZE {
      let px = row_start + (left + dx) * 3;
      image[px..px + 3].copy_from_slice(&color);
    }
  }
}
