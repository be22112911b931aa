//! Error types for file format parsing.

use std::fmt;

use thiserror::Error;

/// File formats handled by this crate, used to tag errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
	/// `.DC6` sprite sheet
	Dc6,
	/// `.DAT` palette
	Palette,
}

impl fmt::Display for FileType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Dc6 => write!(f, "DC6"),
			Self::Palette => write!(f, "DAT palette"),
		}
	}
}

/// Errors that can occur when parsing DC6 sprite sheets and palettes
#[derive(Debug, Error)]
pub enum Dc6FileError {
	/// Not enough data to parse
	#[error("{file_type}: insufficient data: expected {expected} bytes, got {actual} bytes")]
	InsufficientData {
		/// Format being parsed
		file_type: FileType,
		/// Expected number of bytes
		expected: usize,
		/// Actual number of bytes
		actual: usize,
	},

	/// Header declares a negative direction or frame count
	#[error("DC6: invalid layout: {directions} directions × {frames_per_direction} frames")]
	InvalidLayout {
		/// Declared direction count
		directions: i32,
		/// Declared frames per direction
		frames_per_direction: i32,
	},

	/// A frame pointer points outside of the file
	#[error("DC6: frame {index} pointer 0x{pointer:08X} is outside of the file ({size} bytes)")]
	InvalidFramePointer {
		/// Frame index in the pointer table
		index: usize,
		/// Pointer value
		pointer: u32,
		/// File size
		size: usize,
	},

	/// Frame header declares a negative or oversized size
	#[error("DC6: frame {index} has invalid size {width}×{height}")]
	InvalidFrameSize {
		/// Frame index in the pointer table
		index: usize,
		/// Declared width
		width: i32,
		/// Declared height
		height: i32,
	},

	/// Number of frames does not match the declared layout
	#[error("DC6: layout needs {expected} frames, got {actual}")]
	FrameCountMismatch {
		/// `directions × frames_per_direction`
		expected: usize,
		/// Number of frames supplied
		actual: usize,
	},

	/// Direction index is outside of the sheet
	#[error("DC6: direction {index} out of range (total directions: {total})")]
	DirectionOutOfRange {
		/// Requested direction
		index: usize,
		/// Number of stored directions
		total: usize,
	},

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}

impl Dc6FileError {
	/// Shorthand for [`Dc6FileError::InsufficientData`].
	pub fn insufficient_data(file_type: FileType, expected: usize, actual: usize) -> Self {
		Self::InsufficientData {
			file_type,
			expected,
			actual,
		}
	}
}
