//! `.DC6` file format support.
//!
//! DC6 files are sprite sheets made of RLE-compressed, palette-indexed frames
//! grouped by facing direction. Every direction stores the same number of frames.
//!
//! # File Structure
//!
//! ```text
//! Offset  Size  Field                 Description
//! ------  ----  --------------------  ----------------------------------------
//! 0x00    4     version               Always 6
//! 0x04    4     flags                 Usually 1
//! 0x08    4     encoding              Usually 0
//! 0x0C    4     termination           0xEEEEEEEE or 0xCDCDCDCD
//! 0x10    4     directions            Number of stored directions
//! 0x14    4     frames_per_direction  Frames in every direction
//! 0x18    4×N   frame pointers        N = directions × frames_per_direction
//! ```
//!
//! Frames are stored direction-major: frame `f` of direction `d` is entry
//! `d * frames_per_direction + f` of the pointer table. Each pointer leads to a
//! 32-byte [`FrameHeader`], `length` bytes of compressed data and a 3-byte
//! terminator.
//!
//! # Examples
//!
//! ```no_run
//! use dc6_types::file::dc6::File;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # let bytes: Vec<u8> = Vec::new();
//! let dc6 = File::from_bytes(&bytes)?;
//! println!("{} directions × {} frames", dc6.directions(), dc6.frames_per_direction());
//!
//! for frame in dc6.direction(0)? {
//!     println!("{frame}");
//! }
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::io::Read;

use bytes::Bytes;
use log::warn;

use crate::file::{Dc6FileError, FileType};

pub mod frame;

pub use frame::{Frame, FrameHeader};

/// DC6 file constants.
pub mod constants {
	/// Size of the file header
	pub const HEADER_SIZE: usize = 24;

	/// Size of each frame pointer
	pub const FRAME_POINTER_SIZE: usize = 4;

	/// Size of each frame header
	pub const FRAME_HEADER_SIZE: usize = 32;

	/// Size of the terminator following each frame's data
	pub const FRAME_TERMINATOR_SIZE: usize = 3;

	/// The only known format version
	pub const VERSION: i32 = 6;

	/// Largest frame width or height accepted from a file
	pub const MAX_FRAME_DIMENSION: i32 = 4096;

	/// Flags value found in game files
	pub const DEFAULT_FLAGS: u32 = 1;

	/// Header termination written by [`super::File::to_bytes`]
	pub const TERMINATION: [u8; 4] = [0xEE; 4];

	/// Frame terminator written by [`super::File::to_bytes`]
	pub const FRAME_TERMINATOR: [u8; FRAME_TERMINATOR_SIZE] = [0xEE; FRAME_TERMINATOR_SIZE];
}

/// DC6 file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Header {
	/// Format version
	pub version: i32,
	/// Header flags
	pub flags: u32,
	/// Encoding field
	pub encoding: u32,
	/// Termination marker
	pub termination: [u8; 4],
	/// Number of stored directions
	pub directions: u32,
	/// Frames in each direction
	pub frames_per_direction: u32,
}

impl Default for Header {
	fn default() -> Self {
		Self {
			version: constants::VERSION,
			flags: constants::DEFAULT_FLAGS,
			encoding: 0,
			termination: constants::TERMINATION,
			directions: 0,
			frames_per_direction: 0,
		}
	}
}

impl Header {
	fn parse(raw: &[u8]) -> Result<Self, Dc6FileError> {
		if raw.len() < constants::HEADER_SIZE {
			return Err(Dc6FileError::insufficient_data(
				FileType::Dc6,
				constants::HEADER_SIZE,
				raw.len(),
			));
		}

		let word = |i: usize| [raw[i], raw[i + 1], raw[i + 2], raw[i + 3]];

		let directions = i32::from_le_bytes(word(16));
		let frames_per_direction = i32::from_le_bytes(word(20));
		if directions < 0 || frames_per_direction < 0 {
			return Err(Dc6FileError::InvalidLayout {
				directions,
				frames_per_direction,
			});
		}

		Ok(Self {
			version: i32::from_le_bytes(word(0)),
			flags: u32::from_le_bytes(word(4)),
			encoding: u32::from_le_bytes(word(8)),
			termination: word(12),
			directions: directions as u32,
			frames_per_direction: frames_per_direction as u32,
		})
	}

	/// Total number of frames described by this header.
	#[inline]
	pub fn frame_count(&self) -> usize {
		self.directions as usize * self.frames_per_direction as usize
	}
}

/// A parsed DC6 sprite sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
	header: Header,
	frames: Vec<Frame>,
}

impl File {
	/// Builds a sheet from frames laid out direction-major.
	///
	/// # Errors
	///
	/// Returns [`Dc6FileError::FrameCountMismatch`] when `frames.len()` is not
	/// `directions × frames_per_direction`.
	pub fn new(
		directions: u32,
		frames_per_direction: u32,
		frames: Vec<Frame>,
	) -> Result<Self, Dc6FileError> {
		let header = Header {
			directions,
			frames_per_direction,
			..Header::default()
		};

		if frames.len() != header.frame_count() {
			return Err(Dc6FileError::FrameCountMismatch {
				expected: header.frame_count(),
				actual: frames.len(),
			});
		}

		Ok(Self {
			header,
			frames,
		})
	}

	/// Parses a sheet from a byte slice, copying it once.
	pub fn from_bytes(data: &[u8]) -> Result<Self, Dc6FileError> {
		Self::from_shared(Bytes::copy_from_slice(data))
	}

	/// Parses a sheet from any reader.
	pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self, Dc6FileError> {
		let mut raw = Vec::new();
		reader.read_to_end(&mut raw)?;
		Self::from_shared(Bytes::from(raw))
	}

	/// Parses a sheet from shared bytes. Frame streams are sliced out of `data`
	/// without copying.
	///
	/// # Errors
	///
	/// Returns an error if:
	/// - The data is too small to contain the header or the pointer table
	/// - The header declares a negative layout
	/// - A frame pointer, frame header or frame stream lies outside of the data
	pub fn from_shared(data: Bytes) -> Result<Self, Dc6FileError> {
		let header = Header::parse(&data)?;

		if header.version != constants::VERSION {
			warn!("DC6: unexpected version {}, parsing anyway", header.version);
		}

		let frame_count = header.frame_count();
		let table_end = frame_count
			.checked_mul(constants::FRAME_POINTER_SIZE)
			.and_then(|size| size.checked_add(constants::HEADER_SIZE))
			.ok_or(Dc6FileError::InvalidLayout {
				directions: header.directions as i32,
				frames_per_direction: header.frames_per_direction as i32,
			})?;

		if data.len() < table_end {
			return Err(Dc6FileError::insufficient_data(FileType::Dc6, table_end, data.len()));
		}

		let mut frames = Vec::with_capacity(frame_count);
		for index in 0..frame_count {
			let entry = constants::HEADER_SIZE + index * constants::FRAME_POINTER_SIZE;
			let pointer = u32::from_le_bytes([
				data[entry],
				data[entry + 1],
				data[entry + 2],
				data[entry + 3],
			]);

			frames.push(Self::parse_frame(&data, index, pointer)?);
		}

		Ok(Self {
			header,
			frames,
		})
	}

	fn parse_frame(data: &Bytes, index: usize, pointer: u32) -> Result<Frame, Dc6FileError> {
		let start = pointer as usize;
		let data_start = start + constants::FRAME_HEADER_SIZE;

		let Some(raw_header) = data.get(start..data_start) else {
			return Err(Dc6FileError::InvalidFramePointer {
				index,
				pointer,
				size: data.len(),
			});
		};

		let mut raw = [0u8; constants::FRAME_HEADER_SIZE];
		raw.copy_from_slice(raw_header);
		let (header, width, height) = FrameHeader::parse(&raw);

		if !(0..=constants::MAX_FRAME_DIMENSION).contains(&width)
			|| !(0..=constants::MAX_FRAME_DIMENSION).contains(&height)
		{
			return Err(Dc6FileError::InvalidFrameSize {
				index,
				width,
				height,
			});
		}

		let data_end = data_start + header.length as usize;
		if data_end > data.len() {
			return Err(Dc6FileError::insufficient_data(FileType::Dc6, data_end, data.len()));
		}

		Ok(Frame::from_parts(header, data.slice(data_start..data_end)))
	}

	/// Returns the file header.
	#[inline]
	pub fn header(&self) -> &Header {
		&self.header
	}

	/// Returns the number of stored directions.
	#[inline]
	pub fn directions(&self) -> usize {
		self.header.directions as usize
	}

	/// Returns the number of frames in each direction.
	#[inline]
	pub fn frames_per_direction(&self) -> usize {
		self.header.frames_per_direction as usize
	}

	/// Returns the total number of frames.
	#[inline]
	pub fn frame_count(&self) -> usize {
		self.frames.len()
	}

	/// Returns all frames, direction-major.
	#[inline]
	pub fn frames(&self) -> &[Frame] {
		&self.frames
	}

	/// Returns a frame by its index in the pointer table.
	pub fn get_frame(&self, index: usize) -> Option<&Frame> {
		self.frames.get(index)
	}

	/// Returns the contiguous block of frames belonging to `direction`.
	///
	/// # Errors
	///
	/// Returns [`Dc6FileError::DirectionOutOfRange`] if the sheet has no such direction.
	pub fn direction(&self, direction: usize) -> Result<&[Frame], Dc6FileError> {
		if direction >= self.directions() {
			return Err(Dc6FileError::DirectionOutOfRange {
				index: direction,
				total: self.directions(),
			});
		}

		let start = direction * self.frames_per_direction();
		Ok(&self.frames[start..start + self.frames_per_direction()])
	}

	/// Serializes the sheet. Pointers and `next_block` fields are recomputed.
	pub fn to_bytes(&self) -> Vec<u8> {
		let mut out = Vec::new();

		out.extend_from_slice(&self.header.version.to_le_bytes());
		out.extend_from_slice(&self.header.flags.to_le_bytes());
		out.extend_from_slice(&self.header.encoding.to_le_bytes());
		out.extend_from_slice(&self.header.termination);
		out.extend_from_slice(&self.header.directions.to_le_bytes());
		out.extend_from_slice(&self.header.frames_per_direction.to_le_bytes());

		let pointer_table = out.len();
		out.resize(pointer_table + self.frames.len() * constants::FRAME_POINTER_SIZE, 0);

		for (index, frame) in self.frames.iter().enumerate() {
			let pointer = out.len() as u32;
			let entry = pointer_table + index * constants::FRAME_POINTER_SIZE;
			out[entry..entry + 4].copy_from_slice(&pointer.to_le_bytes());

			let block_size = constants::FRAME_HEADER_SIZE
				+ frame.data().len()
				+ constants::FRAME_TERMINATOR_SIZE;
			let header = FrameHeader {
				length: frame.data().len() as u32,
				next_block: pointer + block_size as u32,
				..*frame.header()
			};

			header.write_to(&mut out);
			out.extend_from_slice(frame.data());
			out.extend_from_slice(&constants::FRAME_TERMINATOR);
		}

		out
	}
}

impl fmt::Display for File {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"DC6 File: v{}, {} directions × {} frames",
			self.header.version, self.header.directions, self.header.frames_per_direction
		)
	}
}
