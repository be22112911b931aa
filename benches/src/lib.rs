//! Benchmark helper utilities for dc6-rs
//!
//! This module provides utilities for generating synthetic sprite sheets for
//! the decoder benchmarks. Sheets are built from seeded random index buffers,
//! so every run measures the same data.

use dc6_types::file::{Dc6File, Dc6Frame};
use dc6_types::rle::encode_indices;
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Shape of a generated sheet
#[derive(Debug, Clone, Copy)]
pub struct SheetSpec {
	/// Stored directions
	pub directions: u32,
	/// Frames per direction
	pub frames_per_direction: u32,
	/// Frame width in pixels
	pub width: u32,
	/// Frame height in pixels
	pub height: u32,
	/// Probability of a pixel being transparent, in `[0, 1]`
	pub transparency: f64,
}

impl SheetSpec {
	/// Total pixels across every frame of the sheet
	pub fn pixel_count(&self) -> u64 {
		u64::from(self.directions)
			* u64::from(self.frames_per_direction)
			* u64::from(self.width)
			* u64::from(self.height)
	}
}

/// Generates a frame's index cells.
///
/// Transparent pixels come in short runs so the stream mixes skips and literals
/// the way character sprites do.
pub fn generate_cells(rng: &mut SmallRng, width: u32, height: u32, transparency: f64) -> Vec<Option<u8>> {
	let mut cells = Vec::with_capacity((width * height) as usize);
	let mut transparent = false;
	for _ in 0..width * height {
		if rng.random_bool(0.1) {
			transparent = rng.random_bool(transparency);
		}
		cells.push(if transparent {
			None
		} else {
			Some(rng.random_range(1..=255))
		});
	}
	cells
}

/// Generates a compressed frame.
pub fn generate_frame(rng: &mut SmallRng, width: u32, height: u32, transparency: f64) -> Dc6Frame {
	let cells = generate_cells(rng, width, height, transparency);
	let data = encode_indices(width as usize, height as usize, &cells);
	Dc6Frame::new(width, height, -(width as i32) / 2, height as i32 / 4, data)
}

/// Generates a sheet with the given shape from `seed`.
pub fn generate_sheet(spec: SheetSpec, seed: u64) -> Dc6File {
	let mut rng = SmallRng::seed_from_u64(seed);
	let count = spec.directions * spec.frames_per_direction;
	let frames = (0..count)
		.map(|_| generate_frame(&mut rng, spec.width, spec.height, spec.transparency))
		.collect();

	match Dc6File::new(spec.directions, spec.frames_per_direction, frames) {
		Ok(sheet) => sheet,
		Err(err) => panic!("generated sheet is inconsistent: {err}"),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_generated_sheet_round_trips() {
		let spec = SheetSpec {
			directions: 8,
			frames_per_direction: 2,
			width: 16,
			height: 8,
			transparency: 0.5,
		};
		let sheet = generate_sheet(spec, 7);
		assert_eq!(sheet.frame_count(), 16);

		let parsed = Dc6File::from_bytes(&sheet.to_bytes()).unwrap();
		assert_eq!(parsed.frames()[3].data(), sheet.frames()[3].data());
	}
}
