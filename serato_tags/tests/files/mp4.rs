use crate::util::{read_asset, round_trip};

use serato_tags::markers::Markers;
use serato_tags::markers2::Markers2;
use serato_tags::tag::items::Color;
use serato_tags::tag::{SeratoTag, TagFormat};

#[test_log::test]
fn markers() {
	let markers = round_trip::<Markers>("mp4/markers.txt", TagFormat::MP4);
	assert_eq!(markers.entries.len(), 14);
	assert_eq!(markers.track_color, Color::from_rgb(0xFF99FF));
	assert_eq!(markers.cues().len(), 2);
	assert_eq!(markers.loops().len(), 1);
}

#[test_log::test]
fn markers_same_content_as_id3() {
	let id3 = Markers::parse(&read_asset("id3/markers.bin"), TagFormat::ID3).unwrap();
	let mp4 = Markers::parse(&read_asset("mp4/markers.txt"), TagFormat::MP4).unwrap();
	assert_eq!(id3, mp4);

	// Converting between the layouts
	assert_eq!(id3.write(TagFormat::MP4).unwrap(), read_asset("mp4/markers.txt"));
}

#[test_log::test]
fn markers2() {
	let markers2 = round_trip::<Markers2>("mp4/markers2.txt", TagFormat::MP4);
	assert_eq!(markers2.loops().count(), 1);
}
