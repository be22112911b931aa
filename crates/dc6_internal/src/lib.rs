//! This module is separated into its own crate to keep the facade crate thin, and should not be used directly.

/// `use dc6_rs::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export the member crates for convenience
pub use dc6_animation;
pub use dc6_types;

// Re-export commonly used types at crate root
pub use dc6_animation::{AnimationError, animation::Dc6Animation, config::AnimationConfig};
pub use dc6_types::file::{Dc6File, Dc6FileError, Palette};
