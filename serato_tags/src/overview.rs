//! `Serato Overview`
//!
//! The waveform overview shown above the track display. The data is a sequence of 16-byte
//! blocks, one per column of the overview, with one byte per frequency bin.

use crate::error::Result;
use crate::macros::{decode_err, unsupported_format};
use crate::tag::items::Version;
use crate::tag::{SeratoTag, TagFormat, TagType};
use crate::util::alloc::fallible_to_vec;

/// The `Serato Overview` tag
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Overview {
	/// The tag version
	pub version: Version,
	/// The raw waveform data, see [`Overview::blocks`]
	pub data: Vec<u8>,
}

impl Overview {
	/// The size of a single overview column
	pub const BLOCK_SIZE: usize = 16;

	/// Iterate over the columns of the overview
	///
	/// # Examples
	///
	/// ```rust
	/// use serato_tags::overview::Overview;
	/// use serato_tags::tag::items::Version;
	///
	/// let overview = Overview {
	/// 	version: Version::new(1, 5),
	/// 	data: vec![0x01; 48],
	/// };
	///
	/// assert_eq!(overview.blocks().count(), 3);
	/// ```
	pub fn blocks(&self) -> impl Iterator<Item = &[u8]> {
		self.data.chunks_exact(Self::BLOCK_SIZE)
	}
}

impl SeratoTag for Overview {
	const TAG_TYPE: TagType = TagType::Overview;
	const NAME: &'static str = "Serato Overview";

	fn parse_raw(input: &[u8]) -> Result<Self> {
		log::trace!("Parsing `{}`", Self::NAME);

		let reader = &mut &input[..];
		let version = Version::read(reader)?;

		if reader.is_empty() {
			decode_err!(@BAIL Overview, "Overview contains no blocks");
		}

		if reader.len() % Self::BLOCK_SIZE != 0 {
			decode_err!(@BAIL Overview, "Overview ends with an incomplete block");
		}

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
			TagFormat::ID3 => Self::parse_raw(input),
			TagFormat::FLAC | TagFormat::MP4 => Self::parse_enveloped(input),
			TagFormat::Ogg => unsupported_format!(Overview, format),
		}
	}

	fn write(&self, format: TagFormat) -> Result<Vec<u8>> {
		match format {
			TagFormat::ID3 => self.write_raw(),
			TagFormat::FLAC | TagFormat::MP4 => self.write_enveloped(),
			TagFormat::Ogg => unsupported_format!(Overview, format),
		}
	}
}
