use crate::get_asset;

use serato_tags::beatgrid::Beatgrid;
use serato_tags::config::{GlobalOptions, apply_global_options};
use serato_tags::error::ErrorKind;
use serato_tags::overview::Overview;
use serato_tags::tag::{SeratoTag, TagFormat};

#[test_log::test]
fn huge_marker_count() {
	let mut content = get_asset("id3/beatgrid.bin");
	content[2..6].copy_from_slice(&u32::MAX.to_be_bytes());

	let err = Beatgrid::parse(&content, TagFormat::ID3).unwrap_err();
	assert!(matches!(
		err.kind(),
		ErrorKind::ParseIncomplete | ErrorKind::TooMuchData
	));
}

#[test_log::test]
fn overview_over_limit() {
	let content = get_asset("id3/overview.bin");
	assert!(Overview::parse(&content, TagFormat::ID3).is_ok());

	// Options are per thread, and every test runs on its own
	apply_global_options(GlobalOptions::new().allocation_limit(1024));

	let err = Overview::parse(&content, TagFormat::ID3).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::TooMuchData));

	apply_global_options(GlobalOptions::default());
	assert!(Overview::parse(&content, TagFormat::ID3).is_ok());
}
