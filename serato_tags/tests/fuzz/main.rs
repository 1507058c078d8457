#![allow(missing_docs)]

use serato_tags::analysis::Analysis;
use serato_tags::autotags::Autotags;
use serato_tags::beatgrid::Beatgrid;
use serato_tags::markers::Markers;
use serato_tags::markers2::Markers2;
use serato_tags::overview::Overview;
use serato_tags::relvolad::RelVolAd;
use serato_tags::tag::{SeratoTag, TagFormat};
use serato_tags::vidassoc::VidAssoc;

use std::path::Path;

mod allocation_limit;
mod corrupted;

pub fn get_asset(path: &str) -> Vec<u8> {
	std::fs::read(Path::new("tests/files/assets").join(path)).unwrap()
}

/// Parse every prefix of the asset, none of which may panic
///
/// Only the complete asset is expected to parse.
pub fn truncation_test<T: SeratoTag>(path: &str, format: TagFormat) {
	let content = get_asset(path);
	assert!(T::parse(&content, format).is_ok(), "{path} should parse");

	for len in 0..content.len() {
		let _ = T::parse(&content[..len], format);
	}
}

macro_rules! truncation_tests {
	($($name:ident: $ty:ty => $path:literal, $format:ident);+ $(;)?) => {
		$(
			paste::paste! {
				#[test_log::test]
				fn [<$name _truncated>]() {
					truncation_test::<$ty>($path, TagFormat::$format);
				}
			}
		)+
	};
}

truncation_tests! {
	analysis_id3: Analysis => "id3/analysis.bin", ID3;
	analysis_ogg: Analysis => "ogg/analysis.txt", Ogg;
	autotags_id3: Autotags => "id3/autotags.bin", ID3;
	beatgrid_id3: Beatgrid => "id3/beatgrid.bin", ID3;
	beatgrid_flac: Beatgrid => "flac/beatgrid.txt", FLAC;
	markers_id3: Markers => "id3/markers.bin", ID3;
	markers_mp4: Markers => "mp4/markers.txt", MP4;
	markers2_id3: Markers2 => "id3/markers2.bin", ID3;
	markers2_unknown_id3: Markers2 => "id3/markers2_unknown.bin", ID3;
	markers2_flac: Markers2 => "flac/markers2.txt", FLAC;
	markers2_ogg: Markers2 => "ogg/markers2.txt", Ogg;
	overview_id3: Overview => "id3/overview.bin", ID3;
	relvolad_flac: RelVolAd => "flac/relvolad.txt", FLAC;
	vidassoc_flac: VidAssoc => "flac/vidassoc.txt", FLAC;
}

/// Every field of the asset is required, so no prefix may parse
pub fn strict_truncation_test<T: SeratoTag>(path: &str) {
	let content = get_asset(path);
	for len in 0..content.len() {
		assert!(
			T::parse_raw(&content[..len]).is_err(),
			"{path} parsed at {len} bytes"
		);
	}
}

#[test_log::test]
fn truncated_binary_layouts_fail() {
	strict_truncation_test::<Autotags>("id3/autotags.bin");
	strict_truncation_test::<Beatgrid>("id3/beatgrid.bin");
	strict_truncation_test::<Markers>("id3/markers.bin");
}
