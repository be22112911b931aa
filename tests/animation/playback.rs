//! Playback driven through the `Animation` trait and the player.

use std::thread;
use std::time::Duration;

use dc6_rs::prelude::*;

use crate::{test_palette, walk_sheet};

fn animation(config: AnimationConfig) -> Dc6Animation {
	Dc6Animation::new(walk_sheet(4), test_palette(), config).unwrap()
}

#[test_log::test]
fn test_walk_cycle_loops() {
	let config = AnimationConfig::from_toml_str("play_length = 0.4").unwrap();
	let mut player = Player::new(animation(config));

	let mut shown = Vec::new();
	for _ in 0..6 {
		player.advance(Duration::from_millis(100)).unwrap();
		shown.push(player.animation().current_frame_index());
	}
	assert_eq!(shown, [1, 2, 3, 0, 1, 2]);
}

#[test_log::test]
fn test_one_shot_stops_on_last_frame() {
	let config = AnimationConfig::from_toml_str("play_length = 0.4\nplay_loop = false").unwrap();
	let mut player = Player::new(animation(config));

	player.advance(Duration::from_secs(3)).unwrap();
	assert_eq!(player.animation().current_frame_index(), 3);
	assert_eq!(player.mode(), PlayMode::Pause);
}

#[test_log::test]
fn test_boxed_animations_share_decodes() {
	let first: Box<dyn Animation> = Box::new(animation(AnimationConfig::default()));
	let mut second = first.clone();

	second.set_direction(48).unwrap();
	assert_eq!(first.current_direction(), 4);
	assert_eq!(second.current_direction(), 7);
	assert_eq!(second.frame_count(), 4);
}

#[test_log::test]
fn test_clones_decode_concurrently() {
	let base = animation(AnimationConfig::default());
	let cache = std::sync::Arc::clone(base.cache());

	thread::scope(|scope| {
		for logical in [0, 8, 16, 24, 32, 40, 48, 56, 4, 60] {
			let mut anim = base.clone();
			scope.spawn(move || {
				anim.set_direction(logical).unwrap();
				assert_eq!(anim.frame_count(), 4);
			});
		}
	});

	assert_eq!(cache.decoded_count(), 8);
	let again = cache.ensure_decoded(5).unwrap();
	assert!(std::sync::Arc::ptr_eq(&again, &cache.get(5).unwrap()));
}

#[test_log::test]
fn test_draw_origin_follows_anchor() {
	let mut anim = animation(AnimationConfig::default());
	anim.set_current_frame(2).unwrap();
	// 4 × 3 frame anchored at (-2, 2)
	assert_eq!(anim.draw_origin(), Some((-2, -1)));
	assert_eq!(anim.frame_bounds(), (5, 3));
}
