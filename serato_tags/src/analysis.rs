//! `Serato Analysis`
//!
//! Records the version of Serato's analysis that produced the other tags of a file.

use crate::error::Result;
use crate::macros::decode_err;
use crate::tag::items::Version;
use crate::tag::{SeratoTag, TagFormat, TagType};

/// The `Serato Analysis` tag
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Analysis {
	/// The analysis version
	pub version: Version,
}

impl Analysis {
	/// Parse the Ogg layout, an ASCII `major.minor` string
	///
	/// # Errors
	///
	/// * `input` is not of the form `<digits>.<digits>`
	/// * A component does not fit in a `u8`
	///
	/// # Examples
	///
	/// ```rust
	/// use serato_tags::analysis::Analysis;
	/// use serato_tags::tag::items::Version;
	///
	/// # fn main() -> serato_tags::error::Result<()> {
	/// let analysis = Analysis::parse_ogg(b"2.1")?;
	/// assert_eq!(analysis.version, Version::new(2, 1));
	/// # Ok(()) }
	/// ```
	pub fn parse_ogg(input: &[u8]) -> Result<Self> {
		log::trace!("Parsing `{}` (Ogg)", TagType::Analysis.name());

		let text = std::str::from_utf8(input)?;
		let Some((major, minor)) = text.split_once('.') else {
			decode_err!(@BAIL Analysis, "Ogg version is missing the separator");
		};

		let (Some(major), Some(minor)) = (
			parse_version_component(major),
			parse_version_component(minor),
		) else {
			decode_err!(@BAIL Analysis, "Ogg version contains an invalid number");
		};

		Ok(Self {
			version: Version { major, minor },
		})
	}

	/// Write the Ogg layout, an ASCII `major.minor` string
	pub fn write_ogg(&self) -> Vec<u8> {
		self.version.to_string().into_bytes()
	}
}

// Only the digits `write_ogg` would produce, no sign or leading zeros
fn parse_version_component(text: &str) -> Option<u8> {
	if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
		return None;
	}

	if text.len() > 1 && text.starts_with('0') {
		return None;
	}

	text.parse().ok()
}

impl SeratoTag for Analysis {
	const TAG_TYPE: TagType = TagType::Analysis;
	const NAME: &'static str = "Serato Analysis";

	fn parse_raw(input: &[u8]) -> Result<Self> {
		log::trace!("Parsing `{}`", Self::NAME);

		let [major, minor] = input else {
			decode_err!(@BAIL Analysis, "Expected exactly a version");
		};

		Ok(Self {
			version: Version::new(*major, *minor),
		})
	}

	fn write_raw(&self) -> Result<Vec<u8>> {
		let mut writer = Vec::with_capacity(2);
		self.version.write(&mut writer)?;
		Ok(writer)
	}

	fn parse(input: &[u8], format: TagFormat) -> Result<Self> {
		match format {
			TagFormat::ID3 => Self::parse_raw(input),
			TagFormat::FLAC | TagFormat::MP4 => Self::parse_enveloped(input),
			TagFormat::Ogg => Self::parse_ogg(input),
		}
	}

	fn write(&self, format: TagFormat) -> Result<Vec<u8>> {
		match format {
			TagFormat::ID3 => self.write_raw(),
			TagFormat::FLAC | TagFormat::MP4 => self.write_enveloped(),
			TagFormat::Ogg => Ok(self.write_ogg()),
		}
	}
}
