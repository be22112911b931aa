//! End-to-end tests for `dc6-rs`: sheets go through bytes, the loader and the
//! cache before reaching playback.

mod playback;
mod sheets;

use std::sync::Arc;

use dc6_rs::prelude::*;

/// Builds an eight-direction sheet whose frame `f` of direction `d` is a
/// `(f + 2) × 3` frame filled with palette index `d * 16 + f + 1`, with a
/// transparent first column.
pub(crate) fn walk_sheet(frames_per_direction: u8) -> Dc6File {
	let mut frames = Vec::new();
	for direction in 0..8u8 {
		for frame in 0..frames_per_direction {
			let width = usize::from(frame) + 2;
			let index = direction * 16 + frame + 1;
			let cells: Vec<Option<u8>> =
				(0..width * 3).map(|i| if i % width == 0 { None } else { Some(index) }).collect();
			let data = encode_indices(width, 3, &cells);
			frames.push(Dc6Frame::new(width as u32, 3, -(width as i32) / 2, 2, data));
		}
	}
	Dc6File::new(8, u32::from(frames_per_direction), frames).unwrap()
}

/// Palette mapping index `i` to `(i, 255 - i, i / 2)`.
pub(crate) fn test_palette() -> Arc<Palette> {
	let mut palette = Palette::new();
	for i in 0..=255u8 {
		palette.set(i, Color::rgb(i, 255 - i, i / 2));
	}
	Arc::new(palette)
}
