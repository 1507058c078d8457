use serato_tags::tag::{SeratoTag, TagFormat};

use std::path::Path;

/// Read an asset from `tests/files/assets`
pub fn read_asset(path: impl AsRef<Path>) -> Vec<u8> {
	std::fs::read(Path::new("tests/files/assets").join(path)).unwrap()
}

/// Parse the asset at `path` as stored in `format`, and verify it is written back unchanged
pub fn round_trip<T>(path: &str, format: TagFormat) -> T
where
	T: SeratoTag + std::fmt::Debug,
{
	let content = read_asset(path);

	let tag = T::parse(&content, format).unwrap();
	assert_eq!(
		tag.write(format).unwrap(),
		content,
		"{path} was not written back unchanged ({tag:?})"
	);

	tag
}
