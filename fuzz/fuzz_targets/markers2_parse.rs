#![no_main]

use libfuzzer_sys::fuzz_target;
use serato_tags::markers2::Markers2;
use serato_tags::tag::{SeratoTag, TagFormat};

fuzz_target!(|data: &[u8]| {
	for format in [TagFormat::ID3, TagFormat::FLAC, TagFormat::MP4, TagFormat::Ogg] {
		let _ = Markers2::parse(data, format);
	}
});
