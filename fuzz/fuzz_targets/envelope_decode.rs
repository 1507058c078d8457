#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
	let _ = serato_tags::envelope::envelope_decode(data);
});
