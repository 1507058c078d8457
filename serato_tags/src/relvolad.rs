//! `Serato RelVolAd`
//!
//! The relative volume adjustment. The layout of the payload is unknown, so it is kept as-is.

use crate::error::Result;
use crate::macros::unsupported_format;
use crate::tag::items::Version;
use crate::tag::{SeratoTag, TagFormat, TagType};
use crate::util::alloc::fallible_to_vec;

/// The `Serato RelVolAd` tag
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelVolAd {
	/// The tag version
	pub version: Version,
	/// The raw payload
	pub data: Vec<u8>,
}

impl SeratoTag for RelVolAd {
	const TAG_TYPE: TagType = TagType::RelVolAd;
	const NAME: &'static str = "Serato RelVolAd";

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
			TagFormat::ID3 | TagFormat::Ogg => unsupported_format!(RelVolAd, format),
		}
	}

	fn write(&self, format: TagFormat) -> Result<Vec<u8>> {
		match format {
			TagFormat::FLAC | TagFormat::MP4 => self.write_enveloped(),
			TagFormat::ID3 | TagFormat::Ogg => unsupported_format!(RelVolAd, format),
		}
	}
}
