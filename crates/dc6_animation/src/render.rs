//! Render surface capability.
//!
//! The crate never draws anything itself. A [`Renderer`] hands out surfaces and
//! decoded frames are copied into them as RGBA bytes.

use dc6_types::rle::DecodedFrame;
use thiserror::Error;

/// Texture sampling used when a surface is scaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterMode {
	/// Nearest-neighbour sampling, keeps pixel art crisp
	#[default]
	Nearest,
	/// Bilinear sampling
	Linear,
}

/// Error reported by a renderer or one of its surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("render surface error: {0}")]
pub struct RenderError(pub String);

/// A drawable image owned by the renderer.
pub trait Surface {
	/// Replaces the whole surface content with tightly packed RGBA bytes.
	fn replace_pixels(&mut self, rgba: &[u8]) -> Result<(), RenderError>;
}

/// Factory for render surfaces.
pub trait Renderer {
	/// Surface type produced by this renderer
	type Surface: Surface;

	/// Creates an empty surface of the given size.
	fn new_surface(
		&self,
		width: u32,
		height: u32,
		filter: FilterMode,
	) -> Result<Self::Surface, RenderError>;
}

/// Creates a nearest-filtered surface sized to `frame` and fills it with the frame's pixels.
pub fn upload_frame<R: Renderer + ?Sized>(
	renderer: &R,
	frame: &DecodedFrame,
) -> Result<R::Surface, RenderError> {
	let mut surface = renderer.new_surface(frame.width(), frame.height(), FilterMode::Nearest)?;
	surface.replace_pixels(frame.pixels())?;
	Ok(surface)
}

#[cfg(test)]
pub(crate) mod tests {
	use std::cell::Cell;

	use super::*;

	/// In-memory surface recording its pixels.
	#[derive(Debug)]
	pub(crate) struct MemorySurface {
		pub width: u32,
		pub height: u32,
		pub filter: FilterMode,
		pub pixels: Vec<u8>,
	}

	impl Surface for MemorySurface {
		fn replace_pixels(&mut self, rgba: &[u8]) -> Result<(), RenderError> {
			let expected = self.width as usize * self.height as usize * 4;
			if rgba.len() != expected {
				return Err(RenderError(format!("expected {expected} bytes, got {}", rgba.len())));
			}
			self.pixels = rgba.to_vec();
			Ok(())
		}
	}

	/// Renderer that fails once it has handed out `limit` surfaces.
	#[derive(Debug, Default)]
	pub(crate) struct MemoryRenderer {
		pub created: Cell<usize>,
		pub limit: Option<usize>,
	}

	impl Renderer for MemoryRenderer {
		type Surface = MemorySurface;

		fn new_surface(
			&self,
			width: u32,
			height: u32,
			filter: FilterMode,
		) -> Result<MemorySurface, RenderError> {
			if self.limit.is_some_and(|limit| self.created.get() >= limit) {
				return Err(RenderError("out of surfaces".to_string()));
			}
			self.created.set(self.created.get() + 1);
			Ok(MemorySurface {
				width,
				height,
				filter,
				pixels: Vec::new(),
			})
		}
	}

	#[test]
	fn test_upload_frame() {
		let frame = DecodedFrame::new(2, 1, 0, 0, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
		let renderer = MemoryRenderer::default();

		let surface = upload_frame(&renderer, &frame).unwrap();
		assert_eq!(surface.filter, FilterMode::Nearest);
		assert_eq!((surface.width, surface.height), (2, 1));
		assert_eq!(surface.pixels, frame.pixels());
	}

	#[test]
	fn test_upload_frame_renderer_failure() {
		let frame = DecodedFrame::new(1, 1, 0, 0, vec![0; 4]).unwrap();
		let renderer = MemoryRenderer {
			limit: Some(0),
			..MemoryRenderer::default()
		};

		let err = upload_frame(&renderer, &frame).unwrap_err();
		assert_eq!(err, RenderError("out of surfaces".to_string()));
	}
}
