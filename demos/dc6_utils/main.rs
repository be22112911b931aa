//! DC6 CLI Utility
//!
//! A command-line tool for inspecting DC6 sprite sheets and exporting their frames.
//!
//! # Features
//!
//! - **info**: Display the sheet layout and per-frame geometry
//! - **unpack**: Decode every frame to PNG images with JSON metadata
//! - **play**: Drive the animation of one direction and print the frames shown
//! - **verify**: Check that every frame stream decodes and re-encodes cleanly
//!
//! # Palette
//!
//! Frames are indexed images. Pass a 768-byte `.dat` palette with `--palette`;
//! without one a grayscale ramp is used.
//!
//! # Usage
//!
//! ```bash
//! # Show sheet information
//! cargo run --example dc6_utils -- info cursor.dc6 --detailed
//!
//! # Unpack all frames with the act 1 palette
//! cargo run --example dc6_utils -- unpack zombie.dc6 -p pal.dat -o frames/
//!
//! # Play logical direction 16 for two seconds at 25 fps
//! DC6_PLAY_LENGTH=0.8 cargo run --example dc6_utils -- play zombie.dc6 -d 16 -s 2
//!
//! # Verify every frame stream
//! cargo run --example dc6_utils -- verify zombie.dc6
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use bytes::Bytes;
use clap::{Parser, Subcommand};
use config::Environment;
use dc6_rs::prelude::*;
use image::RgbaImage;
use log::{info, warn};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "dc6_utils")]
#[command(author = "dc6-rs project")]
#[command(version = "1.0")]
#[command(about = "DC6 sprite sheet utility - inspect, unpack, play and verify DC6 files", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Display information about a DC6 file
	Info {
		/// Input DC6 file path
		#[arg(value_name = "INPUT_DC6")]
		input: PathBuf,

		/// Show per-frame geometry
		#[arg(short, long)]
		detailed: bool,
	},

	/// Decode every frame to PNG images
	Unpack {
		/// Input DC6 file path
		#[arg(value_name = "INPUT_DC6")]
		input: PathBuf,

		/// Output directory path (optional, defaults to `input_frames/`)
		#[arg(short, long, value_name = "OUTPUT_DIR")]
		output: Option<PathBuf>,

		/// Path to a `.dat` palette file
		#[arg(short, long, value_name = "PALETTE", env = "DC6_PALETTE")]
		palette: Option<PathBuf>,
	},

	/// Play one direction and print the frame shown at every tick
	Play {
		/// Input DC6 file path
		#[arg(value_name = "INPUT_DC6")]
		input: PathBuf,

		/// Logical direction (0-63, 0 faces south)
		#[arg(short, long, default_value_t = 0)]
		direction: usize,

		/// Seconds of playback to simulate
		#[arg(short, long, default_value_t = 1.0)]
		seconds: f64,

		/// Ticks per second
		#[arg(short, long, default_value_t = 25)]
		fps: u32,

		/// Play backward
		#[arg(short, long)]
		reverse: bool,

		/// TOML playback configuration, overridden by `DC6_*` variables
		#[arg(short, long, value_name = "CONFIG")]
		config: Option<PathBuf>,

		/// Path to a `.dat` palette file
		#[arg(short, long, value_name = "PALETTE", env = "DC6_PALETTE")]
		palette: Option<PathBuf>,
	},

	/// Verify that every frame decodes and survives re-encoding
	Verify {
		/// Input DC6 file path
		#[arg(value_name = "INPUT_DC6")]
		input: PathBuf,

		/// Show a line for every frame
		#[arg(short, long)]
		verbose: bool,
	},
}

/// Frame metadata for JSON serialization
#[derive(Debug, Serialize)]
struct FrameMetadata {
	/// Stored direction
	direction: usize,
	/// Frame within the direction
	frame: usize,
	/// Frame width in pixels
	width: u32,
	/// Frame height in pixels
	height: u32,
	/// Horizontal anchor offset
	offset_x: i32,
	/// Vertical anchor offset
	offset_y: i32,
	/// PNG filename
	filename: String,
}

/// Complete sheet metadata structure
#[derive(Debug, Serialize)]
struct SheetMetadata {
	/// Stored directions
	directions: usize,
	/// Frames per direction
	frames_per_direction: usize,
	/// List of frame metadata
	frames: Vec<FrameMetadata>,
}

fn main() -> Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	match cli.command {
		Commands::Info {
			input,
			detailed,
		} => run_info(&input, detailed),
		Commands::Unpack {
			input,
			output,
			palette,
		} => run_unpack(&input, output, palette.as_deref()),
		Commands::Play {
			input,
			direction,
			seconds,
			fps,
			reverse,
			config,
			palette,
		} => run_play(&input, direction, seconds, fps, reverse, config.as_deref(), palette.as_deref()),
		Commands::Verify {
			input,
			verbose,
		} => run_verify(&input, verbose),
	}
}

fn read_sheet(path: &Path) -> Result<Dc6File> {
	let data = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
	Dc6File::from_shared(Bytes::from(data)).with_context(|| format!("failed to parse {}", path.display()))
}

fn read_palette(path: Option<&Path>) -> Result<Palette> {
	match path {
		Some(path) => {
			let data = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
			Ok(Palette::from_dat_bytes(&data)?)
		}
		None => {
			warn!("no palette given, using grayscale");
			Ok(Palette::grayscale())
		}
	}
}

fn run_info(input: &Path, detailed: bool) -> Result<()> {
	let sheet = read_sheet(input)?;
	let header = sheet.header();

	info!("File: {}", input.display());
	info!("  Version: {}", header.version);
	info!("  Flags: {:#x}, encoding: {}", header.flags, header.encoding);
	info!("  Directions: {}", sheet.directions());
	info!("  Frames per direction: {}", sheet.frames_per_direction());
	info!("  Total frames: {}", sheet.frame_count());

	if detailed {
		for direction in 0..sheet.directions() {
			for (index, frame) in sheet.direction(direction)?.iter().enumerate() {
				info!("  [{direction}:{index}] {frame}");
			}
		}
	}

	Ok(())
}

fn run_unpack(input: &Path, output: Option<PathBuf>, palette: Option<&Path>) -> Result<()> {
	let sheet = read_sheet(input)?;
	let palette = read_palette(palette)?;

	let output = output.unwrap_or_else(|| {
		let stem = input.file_stem().map_or("dc6".into(), |stem| stem.to_string_lossy());
		input.with_file_name(format!("{stem}_frames"))
	});
	fs::create_dir_all(&output).with_context(|| format!("failed to create {}", output.display()))?;

	let mut frames = Vec::with_capacity(sheet.frame_count());
	for direction in 0..sheet.directions() {
		for (index, frame) in sheet.direction(direction)?.iter().enumerate() {
			let decoded = decode_frame(frame, &palette)
				.with_context(|| format!("direction {direction}, frame {index}"))?;
			let filename = format!("d{direction:02}_f{index:03}.png");

			if decoded.width() > 0 && decoded.height() > 0 {
				let image = RgbaImage::from_raw(decoded.width(), decoded.height(), decoded.pixels().to_vec())
					.context("frame buffer does not match its size")?;
				image.save(output.join(&filename))?;
			} else {
				warn!("direction {direction}, frame {index} is empty, no image written");
			}

			frames.push(FrameMetadata {
				direction,
				frame: index,
				width: decoded.width(),
				height: decoded.height(),
				offset_x: decoded.offset_x(),
				offset_y: decoded.offset_y(),
				filename,
			});
		}
	}

	let metadata = SheetMetadata {
		directions: sheet.directions(),
		frames_per_direction: sheet.frames_per_direction(),
		frames,
	};
	fs::write(output.join("metadata.json"), serde_json::to_string_pretty(&metadata)?)?;

	info!("✓ Unpacked {} frames to {}", metadata.frames.len(), output.display());
	Ok(())
}

fn run_play(
	input: &Path,
	direction: usize,
	seconds: f64,
	fps: u32,
	reverse: bool,
	config: Option<&Path>,
	palette: Option<&Path>,
) -> Result<()> {
	if fps == 0 {
		bail!("fps must be positive");
	}

	let toml = config
		.map(|path| fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display())))
		.transpose()?;
	let config = AnimationConfig::load(toml.as_deref(), Some(Environment::with_prefix("DC6")))?;
	info!("Config: {config:?}");

	let loader = |path: &str| -> std::io::Result<Bytes> { fs::read(path).map(Bytes::from) };
	let path = input.to_string_lossy().into_owned();
	let mut animation = Dc6Animation::load(loader, path, Arc::new(read_palette(palette)?), config)?;
	animation.set_direction(direction)?;

	info!(
		"Direction {direction} -> stored {} of {}, {} frames, bounds {:?}",
		animation.current_direction(),
		animation.direction_count(),
		animation.frame_count(),
		animation.frame_bounds()
	);

	let mut player = Player::new(animation);
	if reverse {
		player.play_backward();
		player.rewind()?;
	}

	let tick = Duration::from_secs(1) / fps;
	let ticks = (seconds * f64::from(fps)).round() as u64;
	for step in 0..ticks {
		let moved = player.advance(tick)?;
		if moved > 0 {
			let animation = player.animation();
			info!(
				"t={:>6.3}s frame {} origin {:?}",
				(step + 1) as f64 / f64::from(fps),
				animation.current_frame_index(),
				animation.draw_origin()
			);
		}
		if !player.is_playing() {
			info!("playback stopped at frame {}", player.animation().current_frame_index());
			break;
		}
	}

	Ok(())
}

fn run_verify(input: &Path, verbose: bool) -> Result<()> {
	let sheet = read_sheet(input)?;
	let mut failures = 0usize;

	for (index, frame) in sheet.frames().iter().enumerate() {
		let (width, height) = (frame.width() as usize, frame.height() as usize);
		let result = decode_indices(width, height, frame.data()).and_then(|indices| {
			let cells: Vec<Option<u8>> =
				indices.cells().iter().map(|&cell| u8::try_from(cell).ok().filter(|&i| i > 0)).collect();
			let reencoded = encode_indices(width, height, &cells);
			decode_indices(width, height, &reencoded).map(|again| (indices, again, reencoded.len()))
		});

		match result {
			Ok((original, again, size)) => {
				let same = original
					.cells()
					.iter()
					.zip(again.cells())
					.all(|(a, b)| a.max(&0) == b.max(&0));
				if !same {
					failures += 1;
					warn!("frame {index}: re-encoded stream decodes differently");
				} else if verbose {
					info!("frame {index}: ok ({} bytes, re-encoded {size} bytes)", frame.data().len());
				}
			}
			Err(err) => {
				failures += 1;
				warn!("frame {index}: {err}");
			}
		}
	}

	if failures > 0 {
		bail!("{failures} of {} frames failed verification", sheet.frame_count());
	}
	info!("✓ All {} frames verified", sheet.frame_count());
	Ok(())
}
