//! Sheets loaded through bytes and asset loaders.

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use bytes::Bytes;
use dc6_rs::prelude::*;

use crate::{test_palette, walk_sheet};

#[test_log::test]
fn test_decoded_pixels_go_through_palette() {
	let sheet = Dc6File::from_bytes(&walk_sheet(2).to_bytes()).unwrap();
	let anim = Dc6Animation::new(sheet, test_palette(), AnimationConfig::default()).unwrap();

	// logical 0 is stored direction 4 on an eight-direction sheet
	let frame = anim.current_frame().unwrap();
	assert_eq!(anim.current_direction(), 4);
	assert_eq!((frame.width(), frame.height()), (2, 3));
	assert_eq!(frame.pixel(0, 0), Some([0, 0, 0, 0]));
	assert_eq!(frame.pixel(1, 2), Some([65, 190, 32, 255]));
}

#[test_log::test]
fn test_loader_reads_each_direction_once() {
	let data = Bytes::from(walk_sheet(3).to_bytes());
	let loads = Arc::new(AtomicUsize::new(0));

	let counter = Arc::clone(&loads);
	let loader = move |path: &str| -> io::Result<Bytes> {
		assert_eq!(path, "data/global/chars/am/walk.dc6");
		counter.fetch_add(1, Ordering::SeqCst);
		Ok(data.clone())
	};

	let mut anim = Dc6Animation::load(
		loader,
		"data/global/chars/am/walk.dc6",
		test_palette(),
		AnimationConfig::default(),
	)
	.unwrap();
	// layout + stored direction 4
	assert_eq!(loads.load(Ordering::SeqCst), 2);

	let mut other = anim.clone();
	anim.set_direction(32).unwrap();
	other.set_direction(32).unwrap();
	other.set_direction(0).unwrap();
	assert_eq!(loads.load(Ordering::SeqCst), 3);

	assert_eq!(anim.current_direction(), 6);
	assert_eq!(anim.current_frame().unwrap().pixel(1, 0), Some([97, 158, 48, 255]));
}

#[test_log::test]
fn test_corrupt_direction_is_reported_and_retried() {
	let mut frames = walk_sheet(2).frames().to_vec();
	// stored direction 0 (south-west) frame 1: stream cut short
	frames[1] = Dc6Frame::new(3, 3, 0, 0, vec![0x82, 0x01, 0x80]);
	let sheet = Dc6File::new(8, 2, frames).unwrap();

	let mut anim = Dc6Animation::new(sheet, test_palette(), AnimationConfig::default()).unwrap();
	anim.set_direction(24).unwrap();

	for _ in 0..2 {
		let err = anim.set_direction(4).unwrap_err();
		assert!(matches!(
			err,
			AnimationError::MalformedStream {
				direction: 0,
				frame: 1,
				..
			}
		));
		assert_eq!(anim.current_direction(), 1);
		assert!(!anim.cache().is_decoded(0));
	}
}

#[test_log::test]
fn test_truncated_file_is_rejected() {
	let bytes = walk_sheet(1).to_bytes();
	let mut loader = MemoryLoader::new();
	loader.insert("short.dc6", bytes[..bytes.len() - 10].to_vec());

	let err = Dc6Animation::load(loader, "short.dc6", test_palette(), AnimationConfig::default())
		.unwrap_err();
	assert!(matches!(err, AnimationError::MalformedSheet(_)));
}

#[test_log::test]
fn test_dat_palette() {
	let mut dat = vec![0u8; 768];
	// index 5 stored as BGR
	dat[15..18].copy_from_slice(&[30, 20, 10]);
	let palette = Palette::from_dat_bytes(&dat).unwrap();
	assert_eq!(palette.get(5), Color::rgb(10, 20, 30));

	let frame = Dc6Frame::new(1, 1, 0, 0, vec![0x01, 5, 0x80]);
	let decoded = decode_frame(&frame, &palette).unwrap();
	assert_eq!(decoded.pixels(), &[10, 20, 30, 255]);
}
