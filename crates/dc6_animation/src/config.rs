//! Playback configuration.
//!
//! ```toml
//! play_length = 0.5      # seconds for one pass over a direction's frames
//! play_loop = true
//! origin_at_bottom = true
//! ```
//!
//! Every field is optional. Environment variables prefixed with `DC6_`
//! (`DC6_PLAY_LENGTH`, `DC6_PLAY_LOOP`, `DC6_ORIGIN_AT_BOTTOM`) override the
//! TOML values when loaded through [`AnimationConfig::load`].

use std::time::Duration;

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "DC6";

/// Playback settings applied to a new animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
	/// Seconds taken to play every frame of a direction once
	pub play_length: f64,
	/// Restart from the first frame after the last one
	pub play_loop: bool,
	/// Frame offsets locate the bottom-left corner instead of the top-left
	pub origin_at_bottom: bool,
}

impl AnimationConfig {
	/// Play length used when none is configured, in seconds
	pub const DEFAULT_PLAY_LENGTH: f64 = 1.0;

	/// Parses a configuration from TOML.
	pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
		Self::load(Some(toml), None)
	}

	/// Reads the configuration from `DC6_*` environment variables only.
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::load(None, Some(Environment::with_prefix(ENV_PREFIX)))
	}

	/// Layers an optional TOML document and an optional environment source over the defaults.
	pub fn load(toml: Option<&str>, env: Option<Environment>) -> Result<Self, ConfigError> {
		let mut builder = Config::builder();
		if let Some(toml) = toml {
			builder = builder.add_source(File::from_str(toml, FileFormat::Toml));
		}
		if let Some(env) = env {
			builder = builder.add_source(env.try_parsing(true));
		}
		builder.build()?.try_deserialize()
	}

	/// Play length as a [`Duration`]; negative or non-finite values become zero.
	pub fn play_length(&self) -> Duration {
		Duration::try_from_secs_f64(self.play_length).unwrap_or(Duration::ZERO)
	}
}

impl Default for AnimationConfig {
	fn default() -> Self {
		Self {
			play_length: Self::DEFAULT_PLAY_LENGTH,
			play_loop: true,
			origin_at_bottom: true,
		}
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;

	use super::*;

	#[test]
	fn test_defaults() {
		let config = AnimationConfig::default();
		assert_eq!(config.play_length(), Duration::from_secs(1));
		assert!(config.play_loop);
		assert!(config.origin_at_bottom);
	}

	#[test]
	fn test_partial_toml_keeps_defaults() {
		let config = AnimationConfig::from_toml_str("play_loop = false").unwrap();
		assert!(!config.play_loop);
		assert!(config.origin_at_bottom);
		assert_eq!(config.play_length, AnimationConfig::DEFAULT_PLAY_LENGTH);
	}

	#[test]
	fn test_full_toml() {
		let toml = "play_length = 0.25\nplay_loop = false\norigin_at_bottom = false\n";
		let config = AnimationConfig::from_toml_str(toml).unwrap();
		assert_eq!(config.play_length(), Duration::from_millis(250));
		assert!(!config.origin_at_bottom);
	}

	#[test]
	fn test_invalid_toml() {
		assert!(AnimationConfig::from_toml_str("play_loop = \"sometimes\"").is_err());
	}

	#[test]
	fn test_environment_overrides_toml() {
		let vars = HashMap::from([("DC6_PLAY_LOOP".to_string(), "false".to_string())]);
		let env = Environment::with_prefix(ENV_PREFIX).source(Some(vars));

		let config = AnimationConfig::load(Some("play_loop = true\nplay_length = 2.0"), Some(env))
			.unwrap();
		assert!(!config.play_loop);
		assert_eq!(config.play_length(), Duration::from_secs(2));
	}

	#[test]
	fn test_negative_play_length() {
		let config = AnimationConfig {
			play_length: -1.0,
			..AnimationConfig::default()
		};
		assert_eq!(config.play_length(), Duration::ZERO);
	}

	#[test]
	fn test_json_layout() {
		let json = serde_json::to_value(AnimationConfig::default()).unwrap();
		assert_eq!(json["play_length"], 1.0);
		assert_eq!(json["play_loop"], true);
	}
}
