//! DC6 frame decompression.

use std::fmt;

use log::trace;

use crate::file::{Dc6Frame, PaletteProvider};

use super::{
	BYTES_PER_PIXEL, END_OF_ROW, MAX_RUN_LENGTH, RleError, StreamFault, TRANSPARENT_INDEX,
	TRANSPARENT_RUN_FLAG, TRANSPARENT_THRESHOLD, frame_pixels,
};

/// Palette indices of a decoded frame, row-major, top row first.
///
/// Cells hold [`TRANSPARENT_INDEX`] where no opaque run wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexBuffer {
	width: usize,
	height: usize,
	cells: Vec<i16>,
}

impl IndexBuffer {
	fn transparent(width: usize, height: usize) -> Result<Self, RleError> {
		Ok(Self {
			width,
			height,
			cells: vec![TRANSPARENT_INDEX; frame_pixels(width, height)?],
		})
	}

	/// Returns the buffer width.
	#[inline]
	pub fn width(&self) -> usize {
		self.width
	}

	/// Returns the buffer height.
	#[inline]
	pub fn height(&self) -> usize {
		self.height
	}

	/// Returns all cells, row-major.
	#[inline]
	pub fn cells(&self) -> &[i16] {
		&self.cells
	}

	/// Returns the cell at `(x, y)`, or None if out of bounds.
	pub fn get(&self, x: usize, y: usize) -> Option<i16> {
		if x >= self.width || y >= self.height {
			return None;
		}
		self.cells.get(x + y * self.width).copied()
	}

	/// Resolves indices through `palette` into RGBA bytes.
	///
	/// Cells below [`TRANSPARENT_THRESHOLD`] stay `[0, 0, 0, 0]`.
	pub fn resolve<P: PaletteProvider + ?Sized>(&self, palette: &P) -> Vec<u8> {
		let colors = palette.colors();
		let mut rgba = vec![0u8; self.cells.len() * BYTES_PER_PIXEL];

		for (pixel, &index) in rgba.chunks_exact_mut(BYTES_PER_PIXEL).zip(&self.cells) {
			if index < TRANSPARENT_THRESHOLD {
				continue;
			}
			pixel.copy_from_slice(&colors[index as usize].to_rgba_bytes());
		}

		rgba
	}
}

/// Decodes a compressed stream into palette indices.
///
/// Zero-sized frames decode to an empty buffer without touching the stream.
///
/// # Errors
///
/// - [`RleError::FrameTooLarge`] if the frame exceeds [`MAX_FRAME_PIXELS`](super::MAX_FRAME_PIXELS)
/// - [`RleError::MalformedStream`] if a run reads past the end of `data` or
///   writes past the end of its row, or if `data` ends before the top row is
///   terminated
pub fn decode_indices(width: usize, height: usize, data: &[u8]) -> Result<IndexBuffer, RleError> {
	if width == 0 || height == 0 {
		return IndexBuffer::transparent(width, height);
	}

	// every row ends with its own terminator
	if height > data.len() {
		return Err(RleError::MalformedStream {
			offset: data.len(),
			x: 0,
			y: height - 1,
			fault: StreamFault::UnexpectedEnd,
		});
	}

	let mut buffer = IndexBuffer::transparent(width, height)?;

	let mut x = 0usize;
	let mut y = height - 1;
	let mut offset = 0usize;

	loop {
		let fault = |fault| RleError::MalformedStream {
			offset,
			x,
			y,
			fault,
		};

		let Some(&control) = data.get(offset) else {
			return Err(fault(StreamFault::UnexpectedEnd));
		};

		if control == END_OF_ROW {
			if y == 0 {
				break;
			}
			y -= 1;
			x = 0;
		} else if control & TRANSPARENT_RUN_FLAG != 0 {
			let skip = (control & MAX_RUN_LENGTH) as usize;
			if x + skip > width {
				return Err(fault(StreamFault::RowOverflow(skip)));
			}
			x += skip;
		} else {
			let run = control as usize;
			if x + run > width {
				return Err(fault(StreamFault::RowOverflow(run)));
			}
			let Some(literals) = data.get(offset + 1..offset + 1 + run) else {
				return Err(fault(StreamFault::UnexpectedEnd));
			};

			let start = x + y * width;
			for (cell, &index) in buffer.cells[start..start + run].iter_mut().zip(literals) {
				*cell = i16::from(index);
			}
			offset += run;
			x += run;
		}

		offset += 1;
	}

	if offset + 1 < data.len() {
		trace!("RLE: ignoring {} trailing bytes", data.len() - offset - 1);
	}

	Ok(buffer)
}

/// A frame resolved to RGBA, ready to hand to a render surface.
#[derive(Clone, PartialEq, Eq)]
pub struct DecodedFrame {
	width: u32,
	height: u32,
	offset_x: i32,
	offset_y: i32,
	pixels: Vec<u8>,
}

impl DecodedFrame {
	/// Creates a decoded frame from geometry and RGBA pixels.
	///
	/// # Errors
	///
	/// - [`RleError::FrameTooLarge`] if the frame exceeds [`MAX_FRAME_PIXELS`](super::MAX_FRAME_PIXELS)
	/// - [`RleError::BufferSizeMismatch`] if `pixels.len()` is not `width × height × 4`
	pub fn new(
		width: u32,
		height: u32,
		offset_x: i32,
		offset_y: i32,
		pixels: Vec<u8>,
	) -> Result<Self, RleError> {
		let expected = frame_pixels(width as usize, height as usize)? * BYTES_PER_PIXEL;
		if pixels.len() != expected {
			return Err(RleError::BufferSizeMismatch {
				expected,
				actual: pixels.len(),
			});
		}

		Ok(Self {
			width,
			height,
			offset_x,
			offset_y,
			pixels,
		})
	}

	/// Returns the frame width.
	#[inline]
	pub fn width(&self) -> u32 {
		self.width
	}

	/// Returns the frame height.
	#[inline]
	pub fn height(&self) -> u32 {
		self.height
	}

	/// Returns the horizontal anchor offset.
	#[inline]
	pub fn offset_x(&self) -> i32 {
		self.offset_x
	}

	/// Returns the vertical anchor offset.
	#[inline]
	pub fn offset_y(&self) -> i32 {
		self.offset_y
	}

	/// Returns the RGBA pixels, row-major, top row first.
	#[inline]
	pub fn pixels(&self) -> &[u8] {
		&self.pixels
	}

	/// Returns the RGBA value at `(x, y)`, or None if out of bounds.
	pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
		if x >= self.width || y >= self.height {
			return None;
		}
		let start = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
		let mut rgba = [0u8; 4];
		rgba.copy_from_slice(&self.pixels[start..start + BYTES_PER_PIXEL]);
		Some(rgba)
	}

	/// Position of the frame's top-left corner relative to the sprite anchor.
	///
	/// With a bottom origin the offsets locate the frame's bottom-left corner,
	/// so the frame is lifted by its height.
	pub fn draw_origin(&self, origin_at_bottom: bool) -> (i32, i32) {
		if origin_at_bottom {
			(self.offset_x, self.offset_y.saturating_sub_unsigned(self.height))
		} else {
			(self.offset_x, self.offset_y)
		}
	}
}

impl fmt::Debug for DecodedFrame {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DecodedFrame")
			.field("width", &self.width)
			.field("height", &self.height)
			.field("offset_x", &self.offset_x)
			.field("offset_y", &self.offset_y)
			.field("pixels", &format_args!("[{} bytes]", self.pixels.len()))
			.finish()
	}
}

/// Decodes one compressed frame and resolves it through `palette`.
///
/// The `flipped` header flag is ignored; rows are always read bottom-up.
pub fn decode_frame<P: PaletteProvider + ?Sized>(
	frame: &Dc6Frame,
	palette: &P,
) -> Result<DecodedFrame, RleError> {
	let indices = decode_indices(frame.width() as usize, frame.height() as usize, frame.data())?;

	DecodedFrame::new(
		frame.width(),
		frame.height(),
		frame.offset_x(),
		frame.offset_y(),
		indices.resolve(palette),
	)
}
