//! Directional animation playback state.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use dc6_types::direction::dir64_to_stored;
use dc6_types::file::PaletteProvider;
use dc6_types::rle::DecodedFrame;
use log::debug;

use crate::AnimationError;
use crate::cache::DirectionCache;
use crate::config::AnimationConfig;
use crate::render::{Renderer, upload_frame};
use crate::source::{AssetLoader, FrameSource, LoaderSource};

/// Playback interface shared by animation implementations.
///
/// Directions passed to [`Animation::set_direction`] are logical (`0..64`);
/// everything reported back refers to the sprite's stored directions.
pub trait Animation: Send + Sync {
	/// Switches to the stored direction matching logical `direction` and rewinds to frame 0.
	///
	/// On error the current direction and frame are left untouched.
	fn set_direction(&mut self, direction: usize) -> Result<(), AnimationError>;

	/// Returns the current stored direction.
	fn current_direction(&self) -> usize;

	/// Returns the number of stored directions.
	fn direction_count(&self) -> usize;

	/// Returns the frame being shown, or None if the direction has no frames.
	fn current_frame(&self) -> Option<&DecodedFrame>;

	/// Returns the index of the frame being shown.
	fn current_frame_index(&self) -> usize;

	/// Returns the number of frames in the current direction.
	fn frame_count(&self) -> usize;

	/// Jumps to frame `index` of the current direction.
	fn set_current_frame(&mut self, index: usize) -> Result<(), AnimationError>;

	/// Steps to the next frame, wrapping to 0 when looping and holding on the last frame otherwise.
	fn advance_frame(&mut self);

	/// Returns the time taken to play the current direction once.
	fn play_length(&self) -> Duration;

	/// Returns true if playback restarts after the last frame.
	fn play_loop(&self) -> bool;

	/// Clones the animation behind a box.
	fn box_clone(&self) -> Box<dyn Animation>;
}

impl Clone for Box<dyn Animation> {
	fn clone(&self) -> Self {
		self.box_clone()
	}
}

/// Animation over a DC6 sprite sheet.
///
/// Clones keep their own playback state but share the decoded directions, so
/// a direction decoded through one clone is immediately available to all.
#[derive(Clone)]
pub struct Dc6Animation {
	cache: Arc<DirectionCache>,
	frames: Arc<[DecodedFrame]>,
	direction_index: usize,
	frame_index: usize,
	play_length: Duration,
	play_loop: bool,
	origin_at_bottom: bool,
}

impl Dc6Animation {
	/// Creates an animation over `source`, facing logical direction 0.
	///
	/// # Errors
	///
	/// - [`AnimationError::EmptySheet`] if the sprite stores no directions
	/// - Source and decode errors for the initial direction
	pub fn new(
		source: impl FrameSource + 'static,
		palette: Arc<dyn PaletteProvider>,
		config: AnimationConfig,
	) -> Result<Self, AnimationError> {
		let cache = DirectionCache::new(Box::new(source), palette)?;
		Self::from_cache(Arc::new(cache), config)
	}

	/// Creates an animation reading the sheet at `path` through `loader`.
	///
	/// The sheet is re-read on every direction that has not been decoded yet.
	pub fn load<L: AssetLoader + 'static>(
		loader: L,
		path: impl Into<String>,
		palette: Arc<dyn PaletteProvider>,
		config: AnimationConfig,
	) -> Result<Self, AnimationError> {
		Self::new(LoaderSource::new(loader, path), palette, config)
	}

	/// Creates an animation on top of an existing cache, facing logical direction 0.
	///
	/// The stored direction is picked the same way [`Animation::set_direction`] does.
	pub fn from_cache(cache: Arc<DirectionCache>, config: AnimationConfig) -> Result<Self, AnimationError> {
		let direction_index = dir64_to_stored(0, cache.direction_count())?;
		let frames = cache.ensure_decoded(direction_index)?;

		debug!(
			"animation created: {} directions, {} frames per direction",
			cache.direction_count(),
			cache.frames_per_direction()
		);

		Ok(Self {
			cache,
			frames,
			direction_index,
			frame_index: 0,
			play_length: config.play_length(),
			play_loop: config.play_loop,
			origin_at_bottom: config.origin_at_bottom,
		})
	}

	/// Returns the shared direction cache.
	#[inline]
	pub fn cache(&self) -> &Arc<DirectionCache> {
		&self.cache
	}

	/// Returns every frame of the current direction.
	#[inline]
	pub fn frames(&self) -> &[DecodedFrame] {
		&self.frames
	}

	/// Sets the time taken to play the current direction once.
	pub fn set_play_length(&mut self, play_length: Duration) {
		self.play_length = play_length;
	}

	/// Sets whether playback restarts after the last frame.
	pub fn set_play_loop(&mut self, play_loop: bool) {
		self.play_loop = play_loop;
	}

	/// Returns true if frame offsets locate the bottom-left corner.
	#[inline]
	pub fn origin_at_bottom(&self) -> bool {
		self.origin_at_bottom
	}

	/// Largest width and height over the current direction's frames.
	pub fn frame_bounds(&self) -> (u32, u32) {
		self.frames.iter().fold((0, 0), |(width, height), frame| {
			(width.max(frame.width()), height.max(frame.height()))
		})
	}

	/// Top-left corner of the current frame relative to the sprite anchor.
	pub fn draw_origin(&self) -> Option<(i32, i32)> {
		self.current_frame().map(|frame| frame.draw_origin(self.origin_at_bottom))
	}

	/// Uploads every frame of the current direction to new surfaces.
	pub fn upload_frames<R: Renderer + ?Sized>(
		&self,
		renderer: &R,
	) -> Result<Vec<R::Surface>, AnimationError> {
		let mut surfaces = Vec::with_capacity(self.frames.len());
		for frame in self.frames.iter() {
			surfaces.push(upload_frame(renderer, frame)?);
		}
		Ok(surfaces)
	}
}

impl Animation for Dc6Animation {
	fn set_direction(&mut self, direction: usize) -> Result<(), AnimationError> {
		let stored = dir64_to_stored(direction, self.cache.direction_count())?;
		let frames = self.cache.ensure_decoded(stored)?;

		self.frames = frames;
		self.direction_index = stored;
		self.frame_index = 0;
		Ok(())
	}

	fn current_direction(&self) -> usize {
		self.direction_index
	}

	fn direction_count(&self) -> usize {
		self.cache.direction_count()
	}

	fn current_frame(&self) -> Option<&DecodedFrame> {
		self.frames.get(self.frame_index)
	}

	fn current_frame_index(&self) -> usize {
		self.frame_index
	}

	fn frame_count(&self) -> usize {
		self.frames.len()
	}

	fn set_current_frame(&mut self, index: usize) -> Result<(), AnimationError> {
		if index >= self.frames.len() {
			return Err(AnimationError::FrameOutOfRange {
				index,
				total: self.frames.len(),
			});
		}
		self.frame_index = index;
		Ok(())
	}

	fn advance_frame(&mut self) {
		let next = self.frame_index + 1;
		if next < self.frames.len() {
			self.frame_index = next;
		} else if self.play_loop {
			self.frame_index = 0;
		}
	}

	fn play_length(&self) -> Duration {
		self.play_length
	}

	fn play_loop(&self) -> bool {
		self.play_loop
	}

	fn box_clone(&self) -> Box<dyn Animation> {
		Box::new(self.clone())
	}
}

impl fmt::Debug for Dc6Animation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Dc6Animation")
			.field("cache", &self.cache)
			.field("direction_index", &self.direction_index)
			.field("frame_index", &self.frame_index)
			.field("play_length", &self.play_length)
			.field("play_loop", &self.play_loop)
			.field("origin_at_bottom", &self.origin_at_bottom)
			.finish_non_exhaustive()
	}
}
