//! `Serato Autotags`
//!
//! Holds the values of Serato's automatic analysis: the track tempo and the gain adjustments.
//! Unlike most tags, the values are stored as text, with a fixed number of decimal places.
//! Serato will not read values written with any other precision, so neither does this crate.

use crate::error::Result;
use crate::macros::{decode_err, unsupported_format};
use crate::tag::items::Version;
use crate::tag::{SeratoTag, TagFormat, TagType};
use crate::util::text::{read_terminated_string, write_terminated_string};

const BPM_PRECISION: usize = 2;
const GAIN_PRECISION: usize = 3;

/// The `Serato Autotags` tag
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Autotags {
	/// The tag version
	pub version: Version,
	/// The track tempo, stored with 2 decimal places
	pub bpm: f64,
	/// The automatic gain, stored with 3 decimal places
	pub auto_gain: f64,
	/// The manual gain in dB, stored with 3 decimal places
	pub gain_db: f64,
}

impl Autotags {
	/// Create a new `Autotags` with the version Serato currently writes
	///
	/// # Examples
	///
	/// ```rust
	/// use serato_tags::autotags::Autotags;
	/// use serato_tags::tag::SeratoTag;
	///
	/// # fn main() -> serato_tags::error::Result<()> {
	/// let autotags = Autotags::new(115.0, -3.257, 0.0);
	/// assert_eq!(autotags.write_raw()?, b"\x01\x01115.00\0-3.257\x000.000\0");
	/// # Ok(()) }
	/// ```
	pub fn new(bpm: f64, auto_gain: f64, gain_db: f64) -> Self {
		Self {
			version: Version::new(1, 1),
			bpm,
			auto_gain,
			gain_db,
		}
	}
}

fn read_decimal(reader: &mut &[u8], precision: usize) -> Result<f64> {
	let text = read_terminated_string(reader)?;

	let is_decimal = !text.is_empty()
		&& text
			.bytes()
			.all(|b| b.is_ascii_digit() || matches!(b, b'-' | b'+' | b'.'));
	if !is_decimal {
		decode_err!(@BAIL Autotags, "Encountered a non-decimal value");
	}

	let value: f64 = text
		.parse()
		.map_err(|_| decode_err!(Autotags, "Encountered a malformed decimal value"))?;

	if format!("{value:.precision$}") != text {
		decode_err!(@BAIL Autotags, "Encountered a decimal value with the wrong precision");
	}

	Ok(value)
}

fn write_decimal(writer: &mut Vec<u8>, value: f64, precision: usize) -> Result<()> {
	write_terminated_string(writer, &format!("{value:.precision$}"))
}

impl SeratoTag for Autotags {
	const TAG_TYPE: TagType = TagType::Autotags;
	const NAME: &'static str = "Serato Autotags";

	fn parse_raw(input: &[u8]) -> Result<Self> {
		log::trace!("Parsing `{}`", Self::NAME);

		let reader = &mut &input[..];
		let version = Version::read(reader)?;
		let bpm = read_decimal(reader, BPM_PRECISION)?;
		let auto_gain = read_decimal(reader, GAIN_PRECISION)?;
		let gain_db = read_decimal(reader, GAIN_PRECISION)?;

		if !reader.is_empty() {
			decode_err!(@BAIL Autotags, "Found trailing data after the gain");
		}

		Ok(Self {
			version,
			bpm,
			auto_gain,
			gain_db,
		})
	}

	fn write_raw(&self) -> Result<Vec<u8>> {
		let mut writer = Vec::new();
		self.version.write(&mut writer)?;
		write_decimal(&mut writer, self.bpm, BPM_PRECISION)?;
		write_decimal(&mut writer, self.auto_gain, GAIN_PRECISION)?;
		write_decimal(&mut writer, self.gain_db, GAIN_PRECISION)?;

		Ok(writer)
	}

	fn parse(input: &[u8], format: TagFormat) -> Result<Self> {
		match format {
			TagFormat::ID3 => Self::parse_raw(input),
			TagFormat::FLAC | TagFormat::MP4 => Self::parse_enveloped(input),
			TagFormat::Ogg => unsupported_format!(Autotags, format),
		}
	}

	fn write(&self, format: TagFormat) -> Result<Vec<u8>> {
		match format {
			TagFormat::ID3 => self.write_raw(),
			TagFormat::FLAC | TagFormat::MP4 => self.write_enveloped(),
			TagFormat::Ogg => unsupported_format!(Autotags, format),
		}
	}
}
