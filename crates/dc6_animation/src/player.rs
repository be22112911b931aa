//! Time-driven playback.
//!
//! A [`Player`] spreads the animation's play length evenly over the frames of
//! the current direction and turns elapsed time into frame steps.

use std::time::Duration;

use log::trace;

use crate::AnimationError;
use crate::animation::Animation;

/// Direction of playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayMode {
	/// Frame stays put
	Pause,
	/// Frames advance towards the last one
	#[default]
	Forward,
	/// Frames step back towards the first one
	Backward,
}

/// Drives an [`Animation`] from frame time deltas.
#[derive(Debug, Clone)]
pub struct Player<A> {
	animation: A,
	mode: PlayMode,
	elapsed: Duration,
}

impl<A: Animation> Player<A> {
	/// Wraps `animation`, playing forward.
	pub fn new(animation: A) -> Self {
		Self {
			animation,
			mode: PlayMode::default(),
			elapsed: Duration::ZERO,
		}
	}

	/// Returns the driven animation.
	#[inline]
	pub fn animation(&self) -> &A {
		&self.animation
	}

	/// Returns the driven animation mutably.
	#[inline]
	pub fn animation_mut(&mut self) -> &mut A {
		&mut self.animation
	}

	/// Releases the animation.
	pub fn into_inner(self) -> A {
		self.animation
	}

	/// Returns the play mode.
	#[inline]
	pub fn mode(&self) -> PlayMode {
		self.mode
	}

	/// Returns true unless paused.
	#[inline]
	pub fn is_playing(&self) -> bool {
		self.mode != PlayMode::Pause
	}

	/// Plays forward from the current frame.
	pub fn play(&mut self) {
		self.mode = PlayMode::Forward;
	}

	/// Plays backward from the current frame.
	pub fn play_backward(&mut self) {
		self.mode = PlayMode::Backward;
	}

	/// Stops on the current frame.
	pub fn pause(&mut self) {
		self.mode = PlayMode::Pause;
	}

	/// Returns to the starting frame of the current play mode and drops accumulated time.
	///
	/// Backward playback starts from the last frame, every other mode from the first.
	pub fn rewind(&mut self) -> Result<(), AnimationError> {
		self.elapsed = Duration::ZERO;
		let count = self.animation.frame_count();
		if count == 0 {
			return Ok(());
		}

		let start = match self.mode {
			PlayMode::Backward => count - 1,
			PlayMode::Pause | PlayMode::Forward => 0,
		};
		self.animation.set_current_frame(start)
	}

	/// Accounts for `dt` of elapsed time and moves the animation by the whole
	/// frames that fit into it.
	///
	/// Without looping, playback stops on the last frame (first frame when
	/// playing backward) and the player pauses. Returns the number of frames
	/// moved.
	pub fn advance(&mut self, dt: Duration) -> Result<usize, AnimationError> {
		if self.mode == PlayMode::Pause {
			return Ok(0);
		}

		let count = self.animation.frame_count();
		let play_length = self.animation.play_length();
		if count == 0 || play_length.is_zero() {
			return Ok(0);
		}

		let frame_nanos = (play_length.as_nanos() / count as u128).max(1);
		self.elapsed += dt;
		let elapsed = self.elapsed.as_nanos();
		let steps = elapsed / frame_nanos;
		if steps == 0 {
			return Ok(0);
		}
		self.elapsed = Duration::from_nanos(u64::try_from(elapsed % frame_nanos).unwrap_or(u64::MAX));

		let current = self.animation.current_frame_index();
		let (target, moved) = match self.mode {
			PlayMode::Forward => self.step_forward(current, count, steps),
			PlayMode::Backward => self.step_backward(current, count, steps),
			PlayMode::Pause => (current, 0),
		};

		trace!("player: {moved} frame(s), {current} -> {target}");
		self.animation.set_current_frame(target)?;
		Ok(moved)
	}

	fn step_forward(&mut self, current: usize, count: usize, steps: u128) -> (usize, usize) {
		let last = count - 1;
		if self.animation.play_loop() {
			let target = (current as u128 + steps) % count as u128;
			return (target as usize, saturate(steps));
		}

		let remaining = (last - current) as u128;
		if steps >= remaining {
			self.mode = PlayMode::Pause;
			(last, remaining as usize)
		} else {
			(current + steps as usize, steps as usize)
		}
	}

	fn step_backward(&mut self, current: usize, count: usize, steps: u128) -> (usize, usize) {
		if self.animation.play_loop() {
			let back = (steps % count as u128) as usize;
			return ((current + count - back) % count, saturate(steps));
		}

		if steps >= current as u128 {
			self.mode = PlayMode::Pause;
			(0, current)
		} else {
			(current - steps as usize, steps as usize)
		}
	}
}

fn saturate(steps: u128) -> usize {
	usize::try_from(steps).unwrap_or(usize::MAX)
}
