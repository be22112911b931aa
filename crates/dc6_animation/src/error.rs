//! Error types for animation construction and playback.

use dc6_types::direction::DirectionError;
use dc6_types::file::Dc6FileError;
use dc6_types::rle::RleError;
use thiserror::Error;

use crate::render::RenderError;

/// Errors that can occur while building or driving an animation
#[derive(Debug, Error)]
pub enum AnimationError {
	/// Logical direction outside of `[0, 64)`
	#[error("invalid direction index {0}")]
	InvalidDirection(usize),

	/// Sprite sheet stores no directions
	#[error("sprite sheet has no directions")]
	EmptySheet,

	/// The asset source could not be opened or read
	#[error("sprite source {path:?} unavailable: {source}")]
	SourceUnavailable {
		/// Path handed to the asset loader
		path: String,
		/// Underlying IO error
		source: std::io::Error,
	},

	/// The sprite sheet container could not be parsed
	#[error("malformed sprite sheet: {0}")]
	MalformedSheet(#[from] Dc6FileError),

	/// A frame stream is corrupt
	#[error("direction {direction}, frame {frame}: {source}")]
	MalformedStream {
		/// Stored direction being decoded
		direction: usize,
		/// Frame within the direction
		frame: usize,
		/// Decoder error
		source: RleError,
	},

	/// Stored direction index outside of the sheet
	#[error("direction {index} out of range (total directions: {total})")]
	DirectionOutOfRange {
		/// Requested stored direction
		index: usize,
		/// Number of stored directions
		total: usize,
	},

	/// Frame index outside of the current direction
	#[error("frame {index} out of range (frame count: {total})")]
	FrameOutOfRange {
		/// Requested frame
		index: usize,
		/// Frames in the current direction
		total: usize,
	},

	/// A render surface rejected the frame
	#[error(transparent)]
	Render(#[from] RenderError),
}

impl From<DirectionError> for AnimationError {
	fn from(err: DirectionError) -> Self {
		match err {
			DirectionError::InvalidDirection(direction) => Self::InvalidDirection(direction),
			DirectionError::NoDirections => Self::EmptySheet,
		}
	}
}
