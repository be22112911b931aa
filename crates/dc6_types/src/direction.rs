//! Logical 64-way direction mapping.
//!
//! Game logic addresses facing on a uniform 64-point compass, while sprites
//! are authored with 1, 4, 8, 16 or 32 physical directions. The mapping from
//! one to the other is a fixed lookup defined by the format, not an interpolation.
//!
//! Logical direction 0 faces south and indices grow clockwise
//! (16 = west, 32 = north, 48 = east). Stored directions follow the DC6 order:
//!
//! ```text
//! 0 SW   1 NW   2 NE   3 SE   4 S    5 W    6 N    7 E
//! 8..15  the sixteenths between them, starting after S: SSW, WSW, WNW, ...
//! 16..31 the thirty-seconds between those, starting after S
//! ```
//!
//! Four-direction sprites only store the diagonals, each covering a quarter of
//! the compass.

use thiserror::Error;

/// Number of logical directions.
pub const LOGICAL_DIRECTIONS: usize = 64;

/// Errors produced by the direction mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DirectionError {
	/// Logical direction outside of `[0, 64)`
	#[error("invalid direction index {0} (must be below {LOGICAL_DIRECTIONS})")]
	InvalidDirection(usize),

	/// Sprite stores no directions at all
	#[error("sprite has no stored directions")]
	NoDirections,
}

#[rustfmt::skip]
const DIR4: [u8; LOGICAL_DIRECTIONS] = [
	0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
	1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
	2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2,
	3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3,
];

#[rustfmt::skip]
const DIR8: [u8; LOGICAL_DIRECTIONS] = [
	4, 4, 4, 4, 0, 0, 0, 0, 0, 0, 0, 0, 5, 5, 5, 5,
	5, 5, 5, 5, 1, 1, 1, 1, 1, 1, 1, 1, 6, 6, 6, 6,
	6, 6, 6, 6, 2, 2, 2, 2, 2, 2, 2, 2, 7, 7, 7, 7,
	7, 7, 7, 7, 3, 3, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4,
];

#[rustfmt::skip]
const DIR16: [u8; LOGICAL_DIRECTIONS] = [
	4, 4, 8, 8, 8, 8, 0, 0, 0, 0, 9, 9, 9, 9, 5, 5,
	5, 5, 10, 10, 10, 10, 1, 1, 1, 1, 11, 11, 11, 11, 6, 6,
	6, 6, 12, 12, 12, 12, 2, 2, 2, 2, 13, 13, 13, 13, 7, 7,
	7, 7, 14, 14, 14, 14, 3, 3, 3, 3, 15, 15, 15, 15, 4, 4,
];

#[rustfmt::skip]
const DIR32: [u8; LOGICAL_DIRECTIONS] = [
	4, 16, 16, 8, 8, 17, 17, 0, 0, 18, 18, 9, 9, 19, 19, 5,
	5, 20, 20, 10, 10, 21, 21, 1, 1, 22, 22, 11, 11, 23, 23, 6,
	6, 24, 24, 12, 12, 25, 25, 2, 2, 26, 26, 13, 13, 27, 27, 7,
	7, 28, 28, 14, 14, 29, 29, 3, 3, 30, 30, 15, 15, 31, 31, 4,
];

/// Stored direction counts that have a dedicated lookup table.
pub const SUPPORTED_DIRECTION_COUNTS: [usize; 5] = [1, 4, 8, 16, 32];

/// Maps a logical direction onto one of `stored` physical directions.
///
/// Counts without a lookup table (anything outside
/// [`SUPPORTED_DIRECTION_COUNTS`]) always resolve to direction 0.
///
/// # Errors
///
/// - [`DirectionError::InvalidDirection`] if `direction >= 64`
/// - [`DirectionError::NoDirections`] if `stored == 0`
///
/// # Examples
///
/// ```
/// use dc6_types::direction::dir64_to_stored;
///
/// assert_eq!(dir64_to_stored(0, 8), Ok(4)); // south
/// assert_eq!(dir64_to_stored(32, 8), Ok(6)); // north
/// assert!(dir64_to_stored(64, 8).is_err());
/// ```
pub fn dir64_to_stored(direction: usize, stored: usize) -> Result<usize, DirectionError> {
	if direction >= LOGICAL_DIRECTIONS {
		return Err(DirectionError::InvalidDirection(direction));
	}

	let table = match stored {
		0 => return Err(DirectionError::NoDirections),
		4 => &DIR4,
		8 => &DIR8,
		16 => &DIR16,
		32 => &DIR32,
		_ => return Ok(0),
	};

	Ok(table[direction] as usize)
}
