//! Lazy, memoized per-direction decode store.
//!
//! A [`DirectionCache`] belongs to one logical sprite and is shared by every
//! animation cloned from it. Each stored direction has its own slot guarded by
//! a mutex: the first caller to touch an undecoded direction decodes it while
//! holding the slot's lock, everyone else waits for and then reuses that result.
//! A slot only ever goes from empty to filled, and only after every frame of
//! the direction decoded successfully.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use dc6_types::file::{Dc6FileError, PaletteProvider};
use dc6_types::rle::{DecodedFrame, decode_frame};
use log::{debug, trace};

use crate::AnimationError;
use crate::source::{FrameSource, SheetLayout};

type Slot = Mutex<Option<Arc<[DecodedFrame]>>>;

/// Decoded directions of one sprite, filled on demand.
pub struct DirectionCache {
	source: Box<dyn FrameSource>,
	palette: Arc<dyn PaletteProvider>,
	layout: SheetLayout,
	slots: Box<[Slot]>,
}

impl DirectionCache {
	/// Creates an empty cache for the sprite served by `source`.
	///
	/// Only the layout is read here; no frame is decoded.
	///
	/// # Errors
	///
	/// - [`AnimationError::EmptySheet`] if the sprite stores no directions
	/// - Any error the source reports while reading its layout
	pub fn new(
		source: Box<dyn FrameSource>,
		palette: Arc<dyn PaletteProvider>,
	) -> Result<Self, AnimationError> {
		let layout = source.layout()?;
		if layout.directions == 0 {
			return Err(AnimationError::EmptySheet);
		}

		let slots = (0..layout.directions).map(|_| Mutex::new(None)).collect();

		Ok(Self {
			source,
			palette,
			layout,
			slots,
		})
	}

	/// Returns the sprite layout.
	#[inline]
	pub fn layout(&self) -> SheetLayout {
		self.layout
	}

	/// Returns the number of stored directions.
	#[inline]
	pub fn direction_count(&self) -> usize {
		self.layout.directions
	}

	/// Returns the number of frames in every direction.
	#[inline]
	pub fn frames_per_direction(&self) -> usize {
		self.layout.frames_per_direction
	}

	/// Returns true if `direction` has been decoded.
	pub fn is_decoded(&self, direction: usize) -> bool {
		self.slots.get(direction).is_some_and(|slot| lock(slot).is_some())
	}

	/// Returns the number of decoded directions.
	pub fn decoded_count(&self) -> usize {
		self.slots.iter().filter(|slot| lock(slot).is_some()).count()
	}

	/// Returns the frames of `direction` if it has already been decoded.
	pub fn get(&self, direction: usize) -> Option<Arc<[DecodedFrame]>> {
		self.slots.get(direction).and_then(|slot| lock(slot).clone())
	}

	/// Returns the frames of `direction`, decoding them on first access.
	///
	/// Repeated calls return the same shared sequence.
	///
	/// # Errors
	///
	/// - [`AnimationError::DirectionOutOfRange`] if the sprite has no such direction
	/// - Source errors while fetching the compressed frames
	/// - [`AnimationError::MalformedStream`] if a frame fails to decode
	///
	/// On error the slot stays empty and a later call retries from scratch.
	pub fn ensure_decoded(&self, direction: usize) -> Result<Arc<[DecodedFrame]>, AnimationError> {
		let Some(slot) = self.slots.get(direction) else {
			return Err(AnimationError::DirectionOutOfRange {
				index: direction,
				total: self.layout.directions,
			});
		};

		let mut guard = lock(slot);
		if let Some(frames) = guard.as_ref() {
			return Ok(Arc::clone(frames));
		}

		let frames = self.decode_direction(direction)?;
		*guard = Some(Arc::clone(&frames));
		Ok(frames)
	}

	fn decode_direction(&self, direction: usize) -> Result<Arc<[DecodedFrame]>, AnimationError> {
		let compressed = self.source.direction_frames(direction)?;
		if compressed.len() != self.layout.frames_per_direction {
			return Err(Dc6FileError::FrameCountMismatch {
				expected: self.layout.frames_per_direction,
				actual: compressed.len(),
			}
			.into());
		}

		let mut frames = Vec::with_capacity(compressed.len());
		for (frame, data) in compressed.iter().enumerate() {
			trace!("decoding direction {direction}, frame {frame}: {data}");

			let decoded = decode_frame(data, self.palette.as_ref()).map_err(|source| {
				AnimationError::MalformedStream {
					direction,
					frame,
					source,
				}
			})?;
			frames.push(decoded);
		}

		debug!("decoded direction {direction} ({} frames)", frames.len());
		Ok(frames.into())
	}
}

fn lock(slot: &Slot) -> MutexGuard<'_, Option<Arc<[DecodedFrame]>>> {
	// slots are written only after a full decode, so a poisoned slot is still consistent
	slot.lock().unwrap_or_else(PoisonError::into_inner)
}

impl fmt::Debug for DirectionCache {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DirectionCache")
			.field("layout", &self.layout)
			.field("decoded", &self.decoded_count())
			.finish_non_exhaustive()
	}
}
