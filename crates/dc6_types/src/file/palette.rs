//! 256-color palette support.
//!
//! DC6 frames store 8-bit palette indices, the colors themselves live in a
//! separate palette. Palettes shipped with the game are `.DAT` files holding
//! 256 colors as BGR triples (768 bytes), no alpha channel.

use std::fmt;
use std::io::Read;

use crate::file::{Dc6FileError, FileType};

/// RGBA color representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
	/// Red component (0-255)
	pub r: u8,
	/// Green component (0-255)
	pub g: u8,
	/// Blue component (0-255)
	pub b: u8,
	/// Alpha component (0-255)
	pub a: u8,
}

impl Color {
	/// Creates a new RGBA color.
	pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
		Self {
			r,
			g,
			b,
			a,
		}
	}

	/// Creates a new RGB color with full opacity.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self::new(r, g, b, 255)
	}

	/// Creates a new grayscale color.
	pub const fn gray(value: u8) -> Self {
		Self::rgb(value, value, value)
	}

	/// Creates a transparent black color.
	pub const fn transparent() -> Self {
		Self::new(0, 0, 0, 0)
	}

	/// Returns the components in `[R, G, B, A]` order.
	#[inline]
	pub const fn to_rgba_bytes(self) -> [u8; 4] {
		[self.r, self.g, self.b, self.a]
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "RGBA({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// Read-only source of the 256 palette colors used to resolve frame indices.
pub trait PaletteProvider: Send + Sync {
	/// Returns the full color table.
	fn colors(&self) -> &[Color; 256];
}

/// 256-entry RGBA palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
	colors: [Color; 256],
}

impl Palette {
	/// Number of colors in a palette
	pub const PALETTE_SIZE: usize = 256;

	/// Size of a `.DAT` palette in bytes (256 colors × 3 bytes)
	pub const DAT_FILE_SIZE: usize = Self::PALETTE_SIZE * 3;

	/// Creates a new palette with all colors set to transparent black.
	pub fn new() -> Self {
		Self {
			colors: [Color::transparent(); 256],
		}
	}

	/// Creates a palette from a full color table.
	pub fn from_colors(colors: [Color; 256]) -> Self {
		Self {
			colors,
		}
	}

	/// Creates a grayscale palette where every color matches its index.
	pub fn grayscale() -> Self {
		let mut palette = Self::new();
		for (i, color) in palette.colors.iter_mut().enumerate() {
			*color = Color::gray(i as u8);
		}
		palette
	}

	/// Loads a palette from `.DAT` bytes.
	///
	/// # Errors
	///
	/// Returns [`Dc6FileError::InsufficientData`] if fewer than 768 bytes are given.
	pub fn from_dat_bytes(data: &[u8]) -> Result<Self, Dc6FileError> {
		if data.len() < Self::DAT_FILE_SIZE {
			return Err(Dc6FileError::insufficient_data(
				FileType::Palette,
				Self::DAT_FILE_SIZE,
				data.len(),
			));
		}
		Self::from_dat_reader(&mut &data[..])
	}

	/// Loads a palette from a reader positioned at the start of `.DAT` data.
	///
	/// Colors are stored as B, G, R and become fully opaque.
	pub fn from_dat_reader<R: Read>(reader: &mut R) -> Result<Self, Dc6FileError> {
		let mut palette = Self::new();

		for color in palette.colors.iter_mut() {
			let mut bgr = [0u8; 3];
			reader.read_exact(&mut bgr)?;
			*color = Color::rgb(bgr[2], bgr[1], bgr[0]);
		}

		Ok(palette)
	}

	/// Serializes the palette back into `.DAT` layout. Alpha is dropped.
	pub fn to_dat_bytes(&self) -> Vec<u8> {
		let mut data = Vec::with_capacity(Self::DAT_FILE_SIZE);
		for color in &self.colors {
			data.extend_from_slice(&[color.b, color.g, color.r]);
		}
		data
	}

	/// Gets a color by index.
	#[inline]
	pub fn get(&self, index: u8) -> Color {
		self.colors[index as usize]
	}

	/// Sets a color at the specified index.
	#[inline]
	pub fn set(&mut self, index: u8, color: Color) {
		self.colors[index as usize] = color;
	}

	/// Returns a reference to the color array.
	#[inline]
	pub fn colors(&self) -> &[Color; 256] {
		&self.colors
	}

	/// Returns an iterator over palette colors with indices.
	pub fn iter_indexed(&self) -> impl Iterator<Item = (u8, &Color)> {
		self.colors.iter().enumerate().map(|(i, c)| (i as u8, c))
	}
}

impl Default for Palette {
	fn default() -> Self {
		Self::new()
	}
}

impl PaletteProvider for Palette {
	fn colors(&self) -> &[Color; 256] {
		&self.colors
	}
}

impl fmt::Display for Palette {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let opaque = self.colors.iter().filter(|c| c.a != 0).count();
		write!(f, "Palette: {} colors, {opaque} opaque", Self::PALETTE_SIZE)
	}
}

impl std::ops::Index<u8> for Palette {
	type Output = Color;

	fn index(&self, index: u8) -> &Self::Output {
		&self.colors[index as usize]
	}
}

impl std::ops::IndexMut<u8> for Palette {
	fn index_mut(&mut self, index: u8) -> &mut Self::Output {
		&mut self.colors[index as usize]
	}
}
