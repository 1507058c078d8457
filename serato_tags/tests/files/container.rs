use crate::util::read_asset;

use serato_tags::error::ErrorKind;
use serato_tags::tag::items::{Color, Position};
use serato_tags::tag::{TagContainer, TagFormat, TagType};

fn id3_container() -> TagContainer {
	let mut container = TagContainer::new();
	container
		.parse_analysis(&read_asset("id3/analysis.bin"), TagFormat::ID3)
		.unwrap();
	container
		.parse_autotags(&read_asset("id3/autotags.bin"), TagFormat::ID3)
		.unwrap();
	container
		.parse_beatgrid(&read_asset("id3/beatgrid.bin"), TagFormat::ID3)
		.unwrap();
	container
		.parse_markers(&read_asset("id3/markers.bin"), TagFormat::ID3)
		.unwrap();
	container
		.parse_markers2(&read_asset("id3/markers2.bin"), TagFormat::ID3)
		.unwrap();
	container
		.parse_overview(&read_asset("id3/overview.bin"), TagFormat::ID3)
		.unwrap();

	container
}

#[test_log::test]
fn markers2_takes_precedence() {
	let container = id3_container();

	// Both tags hold 2 cues, only `Serato Markers2` has labels
	let cues = container.cues();
	assert_eq!(cues.len(), 2);
	assert_eq!(cues[0].label, "Intro");
	assert_eq!(container.loops()[0].label, "Loop A");
	assert_eq!(container.flips().len(), 1);
	assert_eq!(container.bpm_locked(), Some(true));
	assert_eq!(container.track_color(), Some(Color::from_rgb(0xFF99FF)));
}

#[test_log::test]
fn legacy_fallback() {
	let mut container = id3_container();
	container.remove_markers2().unwrap();

	let cues = container.cues();
	assert_eq!(cues.len(), 2);
	assert_eq!(cues[0].label, "");
	assert_eq!(cues[0].position, Position::from(396));
	assert_eq!(container.flips().len(), 0);
	assert_eq!(container.bpm_locked(), None);
	assert_eq!(container.track_color(), Some(Color::from_rgb(0xFF99FF)));
}

#[test_log::test]
fn accessors() {
	let container = id3_container();
	assert_eq!(container.bpm(), Some(115.0));
	assert_eq!(container.overview_data().map(<[u8]>::len), Some(240 * 16));
	assert_eq!(
		container.beatgrid().map(|beatgrid| beatgrid.marker_count()),
		Some(3)
	);
	assert!(container.relvolad().is_none());
}

#[test_log::test]
fn write_every_tag() {
	let container = id3_container();

	assert_eq!(
		container.write_markers(TagFormat::ID3).unwrap(),
		read_asset("id3/markers.bin")
	);
	assert_eq!(
		container.write_markers2(TagFormat::FLAC).unwrap(),
		read_asset("flac/markers2.txt")
	);

	let err = container.write_vidassoc(TagFormat::FLAC).unwrap_err();
	assert!(matches!(
		err.kind(),
		ErrorKind::NoTagDataAvailable(TagType::VidAssoc)
	));
}

#[test_log::test]
fn failed_parse_is_ignored() {
	let mut container = id3_container();
	let before = container.clone();

	let mut truncated = read_asset("id3/markers.bin");
	truncated.truncate(100);
	assert!(container.parse_markers(&truncated, TagFormat::ID3).is_err());

	assert_eq!(container, before);
}
