//! Directional animation playback over DC6 sprite sheets.
//!
//! # Contents
//!
//! - **Cache**: Per-sprite store decoding each stored direction at most once
//! - **Animation**: Direction and frame state, shared between clones through the cache
//! - **Player**: Turns elapsed time into frame steps
//! - **Source / Render**: Capabilities for loading sheets and uploading frames
//! - **Config**: Playback settings from TOML and `DC6_*` environment variables
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use dc6_animation::prelude::*;
//! use dc6_types::prelude::*;
//!
//! let frames = (0..8u8).map(|i| Dc6Frame::new(1, 1, 0, 0, vec![0x01, i + 1, 0x80])).collect();
//! let sheet = Dc6File::new(8, 1, frames).unwrap();
//!
//! let mut anim = Dc6Animation::new(sheet, Arc::new(Palette::grayscale()), AnimationConfig::default())
//! 	.unwrap();
//! anim.set_direction(32).unwrap();
//! assert_eq!(anim.current_direction(), 6);
//! assert_eq!(anim.current_frame().unwrap().pixel(0, 0), Some([7, 7, 7, 255]));
//! ```

mod error;

pub mod animation;
pub mod cache;
pub mod config;
pub mod player;
pub mod render;
pub mod source;

/// `use dc6_animation::prelude::*;` to import commonly used items.
pub mod prelude;

pub use error::AnimationError;
