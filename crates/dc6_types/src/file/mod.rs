//! File type support for `dc6-rs` project.

mod error;

pub mod dc6;
pub mod palette;

// Re-export unified error type
pub use error::{Dc6FileError, FileType};

// Re-export main file types
pub use dc6::{File as Dc6File, Frame as Dc6Frame, FrameHeader as Dc6FrameHeader, Header as Dc6Header};
pub use palette::{Color, Palette, PaletteProvider};
