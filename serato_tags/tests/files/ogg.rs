use crate::util::{read_asset, round_trip};

use serato_tags::analysis::Analysis;
use serato_tags::autotags::Autotags;
use serato_tags::error::ErrorKind;
use serato_tags::markers2::Markers2;
use serato_tags::tag::items::Version;
use serato_tags::tag::{SeratoTag, TagFormat, TagType};

#[test_log::test]
fn analysis() {
	let analysis = round_trip::<Analysis>("ogg/analysis.txt", TagFormat::Ogg);
	assert_eq!(analysis.version, Version::new(2, 1));
}

#[test_log::test]
fn markers2() {
	let markers2 = round_trip::<Markers2>("ogg/markers2.txt", TagFormat::Ogg);
	assert_eq!(markers2.version, None);

	let id3 = Markers2::parse(&read_asset("id3/markers2.bin"), TagFormat::ID3).unwrap();
	assert_eq!(markers2.content, id3.content);
}

#[test_log::test]
fn markers2_to_id3() {
	let markers2 = Markers2::parse(&read_asset("ogg/markers2.txt"), TagFormat::Ogg).unwrap();

	let id3 = markers2.write(TagFormat::ID3).unwrap();
	assert!(id3.len() >= Markers2::MINIMUM_SIZE);
	assert_eq!(id3, read_asset("id3/markers2.bin"));
}

#[test_log::test]
fn unsupported() {
	let err = Autotags::parse(&read_asset("id3/autotags.bin"), TagFormat::Ogg).unwrap_err();
	assert!(matches!(
		err.kind(),
		ErrorKind::UnsupportedTagFormat(TagType::Autotags, TagFormat::Ogg)
	));
}
