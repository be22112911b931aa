//! DC6 scanline run-length coding.
//!
//! ## Stream layout
//!
//! Rows are stored bottom-up. Every byte of the stream is a control byte,
//! possibly followed by literal palette indices:
//!
//! | Control byte           | Meaning                                              |
//! |------------------------|------------------------------------------------------|
//! | `0x80`                 | End of row; on the top row it ends the frame         |
//! | `0x81..=0xFF`          | Skip `b & 0x7F` transparent pixels, no payload        |
//! | `0x00..=0x7F`          | Copy the next `b` bytes as palette indices            |
//!
//! Anything left after the terminating `0x80` of the top row is ignored.
//!
//! ## Index resolution
//!
//! Decoding first produces an [`IndexBuffer`] where unwritten cells hold
//! [`TRANSPARENT_INDEX`]. Resolving it through a palette leaves every cell
//! below [`TRANSPARENT_THRESHOLD`] fully transparent, so palette index 0 never
//! renders. Sprites from the game treat index 0 as a hole, never as black.

mod decode;
mod encode;

use std::fmt;

use thiserror::Error;

pub use decode::{DecodedFrame, IndexBuffer, decode_frame, decode_indices};
pub use encode::encode_indices;

/// Row terminator control byte
pub const END_OF_ROW: u8 = 0x80;

/// Bit marking a transparent run
pub const TRANSPARENT_RUN_FLAG: u8 = 0x80;

/// Longest run a single control byte can describe
pub const MAX_RUN_LENGTH: u8 = 0x7F;

/// Value of index cells no run wrote to
pub const TRANSPARENT_INDEX: i16 = -1;

/// Index cells below this value resolve to a transparent pixel
pub const TRANSPARENT_THRESHOLD: i16 = 1;

/// Bytes per resolved pixel
pub const BYTES_PER_PIXEL: usize = 4;

/// Largest frame, in pixels, the decoder will allocate for
pub const MAX_FRAME_PIXELS: usize = 1 << 24;

/// What went wrong inside a malformed stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamFault {
	/// The stream ended before the top row was terminated
	UnexpectedEnd,
	/// A run of this length does not fit in the remaining row
	RowOverflow(usize),
}

impl fmt::Display for StreamFault {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::UnexpectedEnd => write!(f, "stream ended before the frame was complete"),
			Self::RowOverflow(run) => write!(f, "run of {run} pixels overflows the row"),
		}
	}
}

/// Errors produced by the RLE decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RleError {
	/// The stream would read past its end or write past the frame bounds
	#[error("malformed RLE stream at byte {offset} (x: {x}, y: {y}): {fault}")]
	MalformedStream {
		/// Position of the offending control byte
		offset: usize,
		/// Column cursor when the fault was detected
		x: usize,
		/// Row cursor when the fault was detected
		y: usize,
		/// Kind of fault
		fault: StreamFault,
	},

	/// The frame is larger than [`MAX_FRAME_PIXELS`]
	#[error("frame of {width}×{height} pixels is too large")]
	FrameTooLarge {
		/// Declared width
		width: usize,
		/// Declared height
		height: usize,
	},

	/// A pixel buffer does not match the frame size
	#[error("RGBA buffer size mismatch: expected {expected} bytes, got {actual} bytes")]
	BufferSizeMismatch {
		/// `width × height × 4`
		expected: usize,
		/// Length of the supplied buffer
		actual: usize,
	},
}

/// Number of cells in a `width × height` frame, if it may be allocated.
pub(crate) fn frame_pixels(width: usize, height: usize) -> Result<usize, RleError> {
	width
		.checked_mul(height)
		.filter(|&pixels| pixels <= MAX_FRAME_PIXELS)
		.ok_or(RleError::FrameTooLarge {
			width,
			height,
		})
}
