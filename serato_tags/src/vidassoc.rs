//! `Serato VidAssoc`
//!
//! Associates a video file with the track, for Serato Video. Nothing is known about the payload
//! beyond its version header.

use crate::error::Result;
use crate::macros::unsupported_format;
use crate::tag::items::Version;
use crate::tag::{SeratoTag, TagFormat, TagType};
use crate::util::alloc::fallible_to_vec;

/// The `Serato VidAssoc` tag
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VidAssoc {
	/// The tag version
	pub version: Version,
	/// The raw payload
	pub data: Vec<u8>,
}

impl SeratoTag for VidAssoc {
	const TAG_TYPE: TagType = TagType::VidAssoc;
	const NAME: &'static str = "Serato VidAssoc";

	fn parse_raw(input: &[u8]) -> Result<Self> {
		log::trace!("Parsing `{}`", Self::NAME);

		let reader = &mut &input[..];
		let version = Version::read(reader)?;

		Ok(Self {
			version,
			data: fallible_to_vec(reader)?,
		})
	}

	fn write_raw(&self) -> Result<Vec<u8>> {
		let mut writer = Vec::with_capacity(2 + self.data.len());
		self.version.write(&mut writer)?;
		writer.extend_from_slice(&self.data);

		Ok(writer)
	}

	fn parse(input: &[u8], format: TagFormat) -> Result<Self> {
		match format {
			TagFormat::FLAC | TagFormat::MP4 => Self::parse_enveloped(input),
			TagFormat::ID3 | TagFormat::Ogg => unsupported_format!(VidAssoc, format),
		}
	}

	fn write(&self, format: TagFormat) -> Result<Vec<u8>> {
		match format {
			TagFormat::FLAC | TagFormat::MP4 => self.write_enveloped(),
			TagFormat::ID3 | TagFormat::Ogg => unsupported_format!(VidAssoc, format),
		}
	}
}
