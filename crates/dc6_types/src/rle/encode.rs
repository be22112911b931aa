//! DC6 frame compression.

use super::{END_OF_ROW, MAX_RUN_LENGTH, TRANSPARENT_RUN_FLAG};

/// Compresses a frame of palette indices, `None` meaning transparent.
///
/// `cells` is row-major with the top row first, like a decoded
/// [`IndexBuffer`](super::IndexBuffer). Rows are written bottom-up, trailing
/// transparency of a row is left implicit and every row ends with
/// [`END_OF_ROW`]. Zero-sized frames produce an empty stream.
///
/// # Panics
///
/// Panics if `cells.len()` is not `width × height`.
///
/// # Examples
///
/// ```
/// use dc6_types::rle::encode_indices;
///
/// let stream = encode_indices(3, 2, &[None, None, None, Some(5), Some(6), Some(7)]);
/// assert_eq!(stream, vec![0x03, 5, 6, 7, 0x80, 0x80]);
/// ```
pub fn encode_indices(width: usize, height: usize, cells: &[Option<u8>]) -> Vec<u8> {
	assert_eq!(cells.len(), width * height, "index buffer size mismatch");

	let mut out = Vec::new();
	if width == 0 || height == 0 {
		return out;
	}

	for row in cells.chunks_exact(width).rev() {
		let used = row.iter().rposition(Option::is_some).map_or(0, |last| last + 1);
		let mut x = 0;

		while x < used {
			let opaque = row[x].is_some();
			let run = row[x..used]
				.iter()
				.take(MAX_RUN_LENGTH as usize)
				.take_while(|cell| cell.is_some() == opaque)
				.count();

			if opaque {
				out.push(run as u8);
				out.extend(row[x..x + run].iter().flatten());
			} else {
				out.push(TRANSPARENT_RUN_FLAG | run as u8);
			}
			x += run;
		}

		out.push(END_OF_ROW);
	}

	out
}
