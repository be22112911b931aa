//! This crate provides the data types and codecs for DC6 sprite sheets used by the `dc6-rs` project.
//!
//! # Contents
//!
//! - **DC6**: Sprite sheet container holding RLE-compressed frames grouped by direction
//! - **Palette**: 256-color tables, including the game's `.DAT` palette layout
//! - **RLE**: The scanline run-length codec used by DC6 frame streams
//! - **Direction**: Mapping of the logical 64-way compass onto stored directions
//!
//! # Examples
//!
//! ```
//! use dc6_types::prelude::*;
//!
//! let palette = Palette::grayscale();
//! let frame = Dc6Frame::new(3, 2, 0, 0, vec![0x03, 5, 6, 7, 0x80, 0x80]);
//!
//! let decoded = decode_frame(&frame, &palette).unwrap();
//! assert_eq!(decoded.pixel(0, 1), Some([5, 5, 5, 255]));
//! assert_eq!(dir64_to_stored(0, 8), Ok(4));
//! ```

pub mod direction;
pub mod file;
pub mod rle;

/// `use dc6_types::prelude::*;` to import commonly used items.
pub mod prelude;
