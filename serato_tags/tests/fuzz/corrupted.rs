use crate::get_asset;

use serato_tags::markers::Markers;
use serato_tags::markers2::Markers2;
use serato_tags::tag::{SeratoTag, TagFormat};

/// Flip every bit of the asset in turn, none of which may panic
fn bit_flip_test<T: SeratoTag>(path: &str, format: TagFormat) {
	let content = get_asset(path);

	let mut corrupted = content.clone();
	for index in 0..content.len() {
		for bit in 0..8 {
			corrupted[index] ^= 1 << bit;
			let _ = T::parse(&corrupted, format);
			corrupted[index] = content[index];
		}
	}
}

#[test_log::test]
fn markers_id3_bit_flips() {
	bit_flip_test::<Markers>("id3/markers.bin", TagFormat::ID3);
}

#[test_log::test]
fn markers2_ogg_bit_flips() {
	bit_flip_test::<Markers2>("ogg/markers2.txt", TagFormat::Ogg);
}

#[test_log::test]
fn markers2_content_bit_flips() {
	// Corrupt the decoded content rather than the base64 text
	let original = Markers2::parse(&get_asset("id3/markers2.bin"), TagFormat::ID3).unwrap();
	let written = original.write(TagFormat::ID3).unwrap();
	assert_eq!(written, get_asset("id3/markers2.bin"));

	let text_end = written.iter().position(|b| *b == 0).unwrap();
	let text = written[2..text_end]
		.iter()
		.copied()
		.filter(|b| *b != b'\n')
		.collect::<Vec<u8>>();
	let content = data_encoding::BASE64.decode(&text).unwrap();

	let mut corrupted = content.clone();
	for index in 0..content.len() {
		corrupted[index] = content[index].wrapping_add(0x41);

		let mut tag = vec![0x01, 0x01];
		tag.extend(data_encoding::BASE64.encode(&corrupted).into_bytes());
		let _ = Markers2::parse(&tag, TagFormat::ID3);

		corrupted[index] = content[index];
	}
}

#[test_log::test]
fn unknown_marker_survives_corrupted_neighbors() {
	// A bogus length must never be trusted past the end of the data
	let mut content = vec![0x01, 0x01];
	content.extend_from_slice(b"UNKNOWN\0");
	content.extend_from_slice(&u32::MAX.to_be_bytes());
	content.extend_from_slice(&[0xAA; 8]);

	let mut tag = vec![0x01, 0x01];
	tag.extend(data_encoding::BASE64.encode(&content).into_bytes());
	assert!(Markers2::parse(&tag, TagFormat::ID3).is_err());
}
