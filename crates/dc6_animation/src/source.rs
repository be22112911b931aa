//! Where compressed frames come from.
//!
//! The cache only needs two things from a sprite: its layout and the frames
//! of one direction at a time. [`FrameSource`] captures exactly that.
//!
//! - A parsed [`Dc6File`] is a source on its own, serving frames from memory.
//! - [`LoaderSource`] re-reads and re-parses the sheet through an
//!   [`AssetLoader`] every time a direction is requested, so nothing but the
//!   path is kept between decodes.

use std::collections::HashMap;
use std::fmt;
use std::io;
use std::sync::Arc;

use bytes::Bytes;
use dc6_types::file::{Dc6File, Dc6Frame};
use log::trace;

use crate::AnimationError;

/// Number of directions and frames a sprite stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SheetLayout {
	/// Stored directions
	pub directions: usize,
	/// Frames in every direction
	pub frames_per_direction: usize,
}

/// Supplies compressed frames to the direction cache.
pub trait FrameSource: Send + Sync {
	/// Returns the sprite's layout.
	fn layout(&self) -> Result<SheetLayout, AnimationError>;

	/// Returns the frames of one stored direction, in frame order.
	fn direction_frames(&self, direction: usize) -> Result<Vec<Dc6Frame>, AnimationError>;
}

impl FrameSource for Dc6File {
	fn layout(&self) -> Result<SheetLayout, AnimationError> {
		Ok(SheetLayout {
			directions: self.directions(),
			frames_per_direction: self.frames_per_direction(),
		})
	}

	fn direction_frames(&self, direction: usize) -> Result<Vec<Dc6Frame>, AnimationError> {
		Ok(self.direction(direction)?.to_vec())
	}
}

impl<S: FrameSource + ?Sized> FrameSource for Arc<S> {
	fn layout(&self) -> Result<SheetLayout, AnimationError> {
		(**self).layout()
	}

	fn direction_frames(&self, direction: usize) -> Result<Vec<Dc6Frame>, AnimationError> {
		(**self).direction_frames(direction)
	}
}

/// Reads raw asset bytes by path.
pub trait AssetLoader: Send + Sync {
	/// Loads the asset stored at `path`.
	fn load(&self, path: &str) -> io::Result<Bytes>;
}

impl<F> AssetLoader for F
where
	F: Fn(&str) -> io::Result<Bytes> + Send + Sync,
{
	fn load(&self, path: &str) -> io::Result<Bytes> {
		self(path)
	}
}

/// Asset loader backed by an in-memory map of path to bytes.
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
	assets: HashMap<String, Bytes>,
}

impl MemoryLoader {
	/// Creates an empty loader.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers `data` under `path`, replacing any previous asset.
	pub fn insert(&mut self, path: impl Into<String>, data: impl Into<Bytes>) {
		self.assets.insert(path.into(), data.into());
	}

	/// Removes the asset stored under `path`.
	pub fn remove(&mut self, path: &str) -> Option<Bytes> {
		self.assets.remove(path)
	}
}

impl AssetLoader for MemoryLoader {
	fn load(&self, path: &str) -> io::Result<Bytes> {
		self.assets
			.get(path)
			.cloned()
			.ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("no asset at {path}")))
	}
}

/// Frame source that re-opens the sheet through a loader on every request.
pub struct LoaderSource<L> {
	loader: L,
	path: String,
}

impl<L: AssetLoader> LoaderSource<L> {
	/// Creates a source reading `path` through `loader`.
	pub fn new(loader: L, path: impl Into<String>) -> Self {
		Self {
			loader,
			path: path.into(),
		}
	}

	/// Returns the asset path.
	pub fn path(&self) -> &str {
		&self.path
	}

	/// Loads and parses the sheet.
	pub fn open(&self) -> Result<Dc6File, AnimationError> {
		trace!("opening sprite sheet {}", self.path);

		let data = self.loader.load(&self.path).map_err(|source| AnimationError::SourceUnavailable {
			path: self.path.clone(),
			source,
		})?;

		Ok(Dc6File::from_shared(data)?)
	}
}

impl<L: AssetLoader> FrameSource for LoaderSource<L> {
	fn layout(&self) -> Result<SheetLayout, AnimationError> {
		self.open()?.layout()
	}

	fn direction_frames(&self, direction: usize) -> Result<Vec<Dc6Frame>, AnimationError> {
		self.open()?.direction_frames(direction)
	}
}

impl<L> fmt::Debug for LoaderSource<L> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("LoaderSource").field("path", &self.path).finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use std::sync::atomic::{AtomicUsize, Ordering};

	use dc6_types::file::Dc6FileError;

	use super::*;

	fn sheet_bytes() -> Vec<u8> {
		let frames = vec![
			Dc6Frame::new(1, 1, 0, 0, vec![0x01, 7, 0x80]),
			Dc6Frame::new(1, 1, 0, 0, vec![0x01, 8, 0x80]),
		];
		Dc6File::new(2, 1, frames).unwrap().to_bytes()
	}

	#[test]
	fn test_file_source() {
		let sheet = Dc6File::from_bytes(&sheet_bytes()).unwrap();
		assert_eq!(
			sheet.layout().unwrap(),
			SheetLayout {
				directions: 2,
				frames_per_direction: 1
			}
		);

		let frames = FrameSource::direction_frames(&sheet, 1).unwrap();
		assert_eq!(frames[0].data().as_ref(), &[0x01, 8, 0x80]);
	}

	#[test]
	fn test_file_source_out_of_range() {
		let sheet = Dc6File::from_bytes(&sheet_bytes()).unwrap();
		let err = FrameSource::direction_frames(&sheet, 5).unwrap_err();
		assert!(matches!(
			err,
			AnimationError::MalformedSheet(Dc6FileError::DirectionOutOfRange {
				index: 5,
				..
			})
		));
	}

	#[test]
	fn test_loader_source_reopens_on_every_request() {
		let loads = Arc::new(AtomicUsize::new(0));
		let data = Bytes::from(sheet_bytes());

		let counter = Arc::clone(&loads);
		let loader = move |_: &str| -> io::Result<Bytes> {
			counter.fetch_add(1, Ordering::SeqCst);
			Ok(data.clone())
		};

		let source = LoaderSource::new(loader, "data/global/ui/cursor.dc6");
		source.layout().unwrap();
		source.direction_frames(0).unwrap();
		source.direction_frames(1).unwrap();

		assert_eq!(loads.load(Ordering::SeqCst), 3);
	}

	#[test]
	fn test_missing_asset() {
		let source = LoaderSource::new(MemoryLoader::new(), "missing.dc6");
		let err = source.layout().unwrap_err();
		match err {
			AnimationError::SourceUnavailable {
				path,
				source,
			} => {
				assert_eq!(path, "missing.dc6");
				assert_eq!(source.kind(), io::ErrorKind::NotFound);
			}
			other => panic!("unexpected error: {other}"),
		}
	}

	#[test]
	fn test_corrupt_asset() {
		let mut loader = MemoryLoader::new();
		loader.insert("bad.dc6", vec![1, 2, 3]);

		let source = LoaderSource::new(loader, "bad.dc6");
		assert!(matches!(source.layout(), Err(AnimationError::MalformedSheet(_))));
	}
}
