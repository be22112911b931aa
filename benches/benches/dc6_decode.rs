//! Benchmark suite for DC6 decoding
//!
//! This benchmark measures container parsing, RLE decompression and palette
//! resolution on synthetic sprite sheets.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml
//!
//! For flamegraph profiling:
//! cargo bench --manifest-path benches/Cargo.toml -- --profile-time=5

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use dc6_benches::{SheetSpec, generate_frame, generate_sheet};
use dc6_types::file::{Dc6File, Palette};
use dc6_types::rle::{decode_frame, decode_indices};
use rand::{SeedableRng, rngs::SmallRng};

const SHEETS: [(&str, SheetSpec); 3] = [
	(
		"cursor",
		SheetSpec {
			directions: 1,
			frames_per_direction: 8,
			width: 32,
			height: 32,
			transparency: 0.3,
		},
	),
	(
		"monster",
		SheetSpec {
			directions: 8,
			frames_per_direction: 12,
			width: 96,
			height: 112,
			transparency: 0.6,
		},
	),
	(
		"panel",
		SheetSpec {
			directions: 1,
			frames_per_direction: 4,
			width: 256,
			height: 256,
			transparency: 0.05,
		},
	),
];

/// Benchmark container parsing without decompression
fn bench_parse_container(c: &mut Criterion) {
	let mut group = c.benchmark_group("dc6_parse");

	for (name, spec) in SHEETS {
		let data = generate_sheet(spec, 1).to_bytes();
		group.throughput(Throughput::Bytes(data.len() as u64));
		group.bench_with_input(BenchmarkId::new("from_bytes", name), &data, |b, data| {
			b.iter(|| black_box(Dc6File::from_bytes(black_box(data))));
		});
	}

	group.finish();
}

/// Benchmark decoding every frame of a sheet to RGBA
fn bench_decode_sheet(c: &mut Criterion) {
	let mut group = c.benchmark_group("dc6_decode");
	let palette = Palette::grayscale();

	for (name, spec) in SHEETS {
		let sheet = generate_sheet(spec, 2);
		group.throughput(Throughput::Elements(spec.pixel_count()));
		group.bench_with_input(BenchmarkId::new("decode_frame", name), &sheet, |b, sheet| {
			b.iter(|| {
				for frame in sheet.frames() {
					let _ = black_box(decode_frame(frame, &palette));
				}
			});
		});
	}

	group.finish();
}

/// Benchmark decompression and palette resolution separately
fn bench_decode_stages(c: &mut Criterion) {
	let mut group = c.benchmark_group("dc6_stages");
	let palette = Palette::grayscale();

	let mut rng = SmallRng::seed_from_u64(3);
	let frame = generate_frame(&mut rng, 128, 128, 0.4);
	let (width, height) = (frame.width() as usize, frame.height() as usize);
	group.throughput(Throughput::Elements((width * height) as u64));

	group.bench_function("decode_indices", |b| {
		b.iter(|| black_box(decode_indices(width, height, black_box(frame.data()))));
	});

	let indices = decode_indices(width, height, frame.data()).unwrap();
	group.bench_function("resolve", |b| {
		b.iter(|| black_box(indices.resolve(&palette)));
	});

	group.finish();
}

criterion_group!(benches, bench_parse_container, bench_decode_sheet, bench_decode_stages);
criterion_main!(benches);
