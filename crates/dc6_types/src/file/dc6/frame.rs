//! DC6 frame records.
//!
//! A frame is a 32-byte header followed by `length` bytes of RLE-compressed
//! palette indices and a 3-byte terminator.

use std::fmt;

use bytes::Bytes;

use super::constants;

/// DC6 frame header (32 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FrameHeader {
	/// Non-zero when rows are stored top-down; the game only ships bottom-up frames
	pub flipped: u32,

	/// Frame width in pixels
	pub width: u32,

	/// Frame height in pixels
	pub height: u32,

	/// Horizontal anchor offset
	pub offset_x: i32,

	/// Vertical anchor offset
	pub offset_y: i32,

	/// Unknown field, always zero in known files
	pub unknown: u32,

	/// File offset of the next frame block
	pub next_block: u32,

	/// Length of the compressed stream in bytes
	pub length: u32,
}

impl FrameHeader {
	/// Parses a frame header from exactly [`constants::FRAME_HEADER_SIZE`] bytes.
	///
	/// Width and height are returned signed so the caller can reject negative or oversized frames.
	pub(super) fn parse(raw: &[u8; constants::FRAME_HEADER_SIZE]) -> (Self, i32, i32) {
		let word = |i: usize| [raw[i], raw[i + 1], raw[i + 2], raw[i + 3]];

		let width = i32::from_le_bytes(word(4));
		let height = i32::from_le_bytes(word(8));

		let header = Self {
			flipped: u32::from_le_bytes(word(0)),
			width: width.max(0) as u32,
			height: height.max(0) as u32,
			offset_x: i32::from_le_bytes(word(12)),
			offset_y: i32::from_le_bytes(word(16)),
			unknown: u32::from_le_bytes(word(20)),
			next_block: u32::from_le_bytes(word(24)),
			length: u32::from_le_bytes(word(28)),
		};

		(header, width, height)
	}

	/// Writes the header in on-disk layout.
	pub(super) fn write_to(&self, out: &mut Vec<u8>) {
		out.extend_from_slice(&self.flipped.to_le_bytes());
		out.extend_from_slice(&self.width.to_le_bytes());
		out.extend_from_slice(&self.height.to_le_bytes());
		out.extend_from_slice(&self.offset_x.to_le_bytes());
		out.extend_from_slice(&self.offset_y.to_le_bytes());
		out.extend_from_slice(&self.unknown.to_le_bytes());
		out.extend_from_slice(&self.next_block.to_le_bytes());
		out.extend_from_slice(&self.length.to_le_bytes());
	}
}

/// A single compressed frame: geometry plus the RLE stream.
///
/// The stream is held as [`Bytes`], so cloning a frame or slicing it out of a
/// sheet never copies pixel data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
	header: FrameHeader,
	data: Bytes,
}

impl Frame {
	/// Creates a frame from its geometry and compressed stream.
	pub fn new(width: u32, height: u32, offset_x: i32, offset_y: i32, data: impl Into<Bytes>) -> Self {
		let data = data.into();
		Self {
			header: FrameHeader {
				width,
				height,
				offset_x,
				offset_y,
				length: data.len() as u32,
				..FrameHeader::default()
			},
			data,
		}
	}

	/// Creates a frame from a parsed header and its stream.
	pub fn from_parts(header: FrameHeader, data: Bytes) -> Self {
		Self {
			header,
			data,
		}
	}

	/// Returns the frame header.
	#[inline]
	pub fn header(&self) -> &FrameHeader {
		&self.header
	}

	/// Returns the frame width.
	#[inline]
	pub fn width(&self) -> u32 {
		self.header.width
	}

	/// Returns the frame height.
	#[inline]
	pub fn height(&self) -> u32 {
		self.header.height
	}

	/// Returns the horizontal anchor offset.
	#[inline]
	pub fn offset_x(&self) -> i32 {
		self.header.offset_x
	}

	/// Returns the vertical anchor offset.
	#[inline]
	pub fn offset_y(&self) -> i32 {
		self.header.offset_y
	}

	/// Returns the compressed stream.
	#[inline]
	pub fn data(&self) -> &Bytes {
		&self.data
	}

	/// Returns the number of pixels in this frame.
	#[inline]
	pub fn pixel_count(&self) -> usize {
		self.header.width as usize * self.header.height as usize
	}
}

impl fmt::Display for Frame {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{}×{} (offset: {}, {}) - {} bytes",
			self.header.width,
			self.header.height,
			self.header.offset_x,
			self.header.offset_y,
			self.data.len()
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_header_layout() {
		let header = FrameHeader {
			flipped: 0,
			width: 3,
			height: 2,
			offset_x: -4,
			offset_y: 7,
			unknown: 0,
			next_block: 0x1234,
			length: 6,
		};

		let mut raw = Vec::new();
		header.write_to(&mut raw);
		assert_eq!(raw.len(), constants::FRAME_HEADER_SIZE);
		assert_eq!(&raw[12..16], &(-4i32).to_le_bytes());

		let raw: [u8; constants::FRAME_HEADER_SIZE] = raw.try_into().unwrap();
		let (parsed, width, height) = FrameHeader::parse(&raw);
		assert_eq!(parsed, header);
		assert_eq!((width, height), (3, 2));
	}

	#[test]
	fn test_frame_new_sets_length() {
		let frame = Frame::new(3, 2, 0, 0, vec![0x03, 5, 6, 7, 0x80, 0x80]);
		assert_eq!(frame.header().length, 6);
		assert_eq!(frame.pixel_count(), 6);
	}
}
