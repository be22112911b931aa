//! Prelude module for `dc6_animation`.
//!
//! This module provides a convenient way to import commonly used types and traits.

#[doc(inline)]
pub use crate::AnimationError;

#[doc(inline)]
pub use crate::animation::{Animation, Dc6Animation};

#[doc(inline)]
pub use crate::cache::DirectionCache;

#[doc(inline)]
pub use crate::config::AnimationConfig;

#[doc(inline)]
pub use crate::player::{PlayMode, Player};

#[doc(inline)]
pub use crate::render::{FilterMode, RenderError, Renderer, Surface, upload_frame};

#[doc(inline)]
pub use crate::source::{AssetLoader, FrameSource, LoaderSource, MemoryLoader, SheetLayout};
