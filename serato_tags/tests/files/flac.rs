use crate::util::{read_asset, round_trip};

use serato_tags::analysis::Analysis;
use serato_tags::autotags::Autotags;
use serato_tags::beatgrid::Beatgrid;
use serato_tags::envelope;
use serato_tags::error::ErrorKind;
use serato_tags::markers2::Markers2;
use serato_tags::overview::Overview;
use serato_tags::relvolad::RelVolAd;
use serato_tags::tag::items::Version;
use serato_tags::tag::{SeratoTag, TagFormat};
use serato_tags::vidassoc::VidAssoc;

#[test_log::test]
fn analysis() {
	let analysis = round_trip::<Analysis>("flac/analysis.txt", TagFormat::FLAC);
	assert_eq!(analysis.version, Version::new(2, 1));
}

#[test_log::test]
fn autotags() {
	round_trip::<Autotags>("flac/autotags.txt", TagFormat::FLAC);
}

#[test_log::test]
fn beatgrid() {
	round_trip::<Beatgrid>("flac/beatgrid.txt", TagFormat::FLAC);
}

#[test_log::test]
fn markers2() {
	let markers2 = round_trip::<Markers2>("flac/markers2.txt", TagFormat::FLAC);
	assert_eq!(markers2.cues().count(), 2);
}

#[test_log::test]
fn overview() {
	round_trip::<Overview>("flac/overview.txt", TagFormat::FLAC);
}

#[test_log::test]
fn relvolad() {
	let relvolad = round_trip::<RelVolAd>("flac/relvolad.txt", TagFormat::FLAC);
	assert_eq!(relvolad.data, [0, 0, 0, 0]);
}

#[test_log::test]
fn vidassoc() {
	let vidassoc = round_trip::<VidAssoc>("flac/vidassoc.txt", TagFormat::FLAC);
	assert_eq!(vidassoc.version, Version::new(1, 0));
	assert_eq!(vidassoc.data.len(), 9);
}

#[test_log::test]
fn same_content_as_id3() {
	let id3 = Beatgrid::parse(&read_asset("id3/beatgrid.bin"), TagFormat::ID3).unwrap();
	let flac = Beatgrid::parse(&read_asset("flac/beatgrid.txt"), TagFormat::FLAC).unwrap();
	assert_eq!(id3, flac);

	let (name, payload) = envelope::envelope_decode(&read_asset("flac/markers2.txt")).unwrap();
	assert_eq!(name, "Serato Markers2");
	assert_eq!(payload, read_asset("id3/markers2.bin"));
}

#[test_log::test]
fn wrong_envelope() {
	let err = Autotags::parse(&read_asset("flac/beatgrid.txt"), TagFormat::FLAC).unwrap_err();
	let ErrorKind::EnvelopeNameMismatch { expected, actual } = err.kind() else {
		panic!("Expected a name mismatch, got {err:?}");
	};

	assert_eq!(expected, "Serato Autotags");
	assert_eq!(actual, "Serato BeatGrid");
}

#[test_log::test]
fn line_wrapping_ignored() {
	let wrapped = read_asset("flac/overview.txt");
	let unwrapped = wrapped
		.iter()
		.copied()
		.filter(|b| *b != b'\n')
		.collect::<Vec<u8>>();

	let overview = Overview::parse(&unwrapped, TagFormat::FLAC).unwrap();
	assert_eq!(overview.write(TagFormat::FLAC).unwrap(), wrapped);
}
