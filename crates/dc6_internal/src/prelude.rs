//! Prelude module for `dc6_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use dc6_internal::prelude::*;
//!
//! let cells = [Some(3), None, Some(4), Some(5)];
//! let frame = Dc6Frame::new(2, 2, 0, 0, encode_indices(2, 2, &cells));
//! let sheet = Dc6File::new(1, 1, vec![frame]).unwrap();
//!
//! let anim = Dc6Animation::new(sheet, Arc::new(Palette::grayscale()), AnimationConfig::default())
//! 	.unwrap();
//! assert_eq!(anim.frame_count(), 1);
//! assert_eq!(anim.current_frame().unwrap().pixel(1, 0), Some([0, 0, 0, 0]));
//! ```

// Re-export everything from dc6_types::prelude
#[doc(inline)]
pub use dc6_types::prelude::*;

// Re-export everything from dc6_animation::prelude
#[doc(inline)]
pub use dc6_animation::prelude::*;

// Re-export the member crates for advanced usage
#[doc(inline)]
pub use dc6_animation;
#[doc(inline)]
pub use dc6_types;
