//! Prelude module for `dc6_types`.
//!
//! This module provides a convenient way to import commonly used types, traits, and functions.

#[doc(inline)]
pub use crate::file::{
	Color, Dc6File, Dc6FileError, Dc6Frame, Dc6FrameHeader, Dc6Header, FileType, Palette,
	PaletteProvider,
};

#[doc(inline)]
pub use crate::rle::{
	DecodedFrame, IndexBuffer, RleError, StreamFault, decode_frame, decode_indices, encode_indices,
};

#[doc(inline)]
pub use crate::direction::{DirectionError, LOGICAL_DIRECTIONS, dir64_to_stored};

// Re-export the file module for advanced usage
#[doc(inline)]
pub use crate::file;
