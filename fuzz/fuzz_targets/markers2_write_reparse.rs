#![no_main]

use libfuzzer_sys::fuzz_target;
use serato_tags::markers2::Markers2;
use serato_tags::tag::{SeratoTag, TagFormat};

// Anything that parses must be written identically after a reparse
fuzz_target!(|data: &[u8]| {
	let Ok(markers2) = Markers2::parse(data, TagFormat::ID3) else {
		return;
	};

	let written = markers2.write(TagFormat::ID3).unwrap();
	let reparsed = Markers2::parse(&written, TagFormat::ID3).unwrap();
	assert_eq!(reparsed.write(TagFormat::ID3).unwrap(), written);
});
