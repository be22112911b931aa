#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `dc6-rs` decodes DC6 sprite sheets and plays their directional animations.
//!
//! Sheets are parsed from bytes, frames are decompressed lazily one stored
//! direction at a time and resolved through a 256-color palette into RGBA
//! buffers ready for any renderer.
//!
//! ```
//! use std::sync::Arc;
//!
//! use dc6_rs::prelude::*;
//!
//! let frames = (0..4u8).map(|i| Dc6Frame::new(1, 1, 0, 0, vec![0x01, i + 1, 0x80])).collect();
//! let sheet = Dc6File::new(4, 1, frames).unwrap();
//!
//! let mut anim = Dc6Animation::new(sheet, Arc::new(Palette::grayscale()), AnimationConfig::default())
//! 	.unwrap();
//! anim.set_direction(16).unwrap();
//! assert_eq!(anim.current_direction(), 1);
//! assert_eq!(anim.cache().decoded_count(), 2);
//! ```
pub use dc6_internal::*;
