//! Utilities for working with Serato tags generically

mod container;
pub mod items;

pub use container::TagContainer;

use crate::envelope;
use crate::error::Result;

/// The `mean` of every Serato MP4 freeform atom
pub const MP4_FREEFORM_MEAN: &str = "com.serato.dj";

/// The metadata format a tag is stored in
///
/// The tag layouts differ slightly between formats. ID3 stores the plain binary layout in a `GEOB`
/// frame, while FLAC and MP4 (mostly) wrap the same layout in a base64 [envelope](crate::envelope).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TagFormat {
	/// An ID3v2 `GEOB` frame
	ID3,
	/// A FLAC Vorbis comment
	FLAC,
	/// An MP4 freeform (`----`) atom
	MP4,
	/// An Ogg Vorbis comment
	Ogg,
}

/// The kinds of tags Serato writes
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum TagType {
	/// `Serato Analysis`, the version of the analysis that produced the other tags
	Analysis,
	/// `Serato Autotags`, the BPM and gain values
	Autotags,
	/// `Serato BeatGrid`
	Beatgrid,
	/// `Serato Markers_`, the legacy cue, loop and track color storage
	Markers,
	/// `Serato Markers2`, cues, loops, flips and the track color
	Markers2,
	/// `Serato Overview`, the waveform overview
	Overview,
	/// `Serato RelVolAd`, relative volume adjustment
	RelVolAd,
	/// `Serato VidAssoc`, video association
	VidAssoc,
}

impl TagType {
	/// All tag types, in no particular order
	pub const ALL: [TagType; 8] = [
		TagType::Analysis,
		TagType::Autotags,
		TagType::Beatgrid,
		TagType::Markers,
		TagType::Markers2,
		TagType::Overview,
		TagType::RelVolAd,
		TagType::VidAssoc,
	];

	/// The name of the tag
	///
	/// This is the description of the ID3v2 `GEOB` frame, and the name embedded in envelopes.
	///
	/// # Examples
	///
	/// ```rust
	/// use serato_tags::tag::TagType;
	///
	/// assert_eq!(TagType::Markers.name(), "Serato Markers_");
	/// ```
	pub fn name(self) -> &'static str {
		match self {
			TagType::Analysis => "Serato Analysis",
			TagType::Autotags => "Serato Autotags",
			TagType::Beatgrid => "Serato BeatGrid",
			TagType::Markers => "Serato Markers_",
			TagType::Markers2 => "Serato Markers2",
			TagType::Overview => "Serato Overview",
			TagType::RelVolAd => "Serato RelVolAd",
			TagType::VidAssoc => "Serato VidAssoc",
		}
	}

	/// The name of the FLAC Vorbis comment holding the tag
	pub fn flac_comment(self) -> Option<&'static str> {
		match self {
			TagType::Analysis => Some("SERATO_ANALYSIS"),
			TagType::Autotags => Some("SERATO_AUTOGAIN"),
			TagType::Beatgrid => Some("SERATO_BEATGRID"),
			TagType::Markers2 => Some("SERATO_MARKERS_V2"),
			TagType::Overview => Some("SERATO_OVERVIEW"),
			TagType::RelVolAd => Some("SERATO_RELVOL"),
			TagType::VidAssoc => Some("SERATO_VIDASSOC"),
			TagType::Markers => None,
		}
	}

	/// The `name` of the MP4 freeform atom holding the tag
	///
	/// The `mean` is always [`MP4_FREEFORM_MEAN`].
	pub fn mp4_freeform_name(self) -> &'static str {
		match self {
			TagType::Analysis => "analysisVersion",
			TagType::Autotags => "autgain",
			TagType::Beatgrid => "beatgrid",
			TagType::Markers => "markers",
			TagType::Markers2 => "markersv2",
			TagType::Overview => "overview",
			TagType::RelVolAd => "relvol",
			TagType::VidAssoc => "videoassociation",
		}
	}

	/// The name of the Ogg Vorbis comment holding the tag
	pub fn ogg_comment(self) -> Option<&'static str> {
		match self {
			TagType::Analysis => Some("serato_analysis_ver"),
			TagType::Markers2 => Some("serato_markers2"),
			_ => None,
		}
	}

	/// Whether Serato stores this tag in `format`
	///
	/// # Examples
	///
	/// ```rust
	/// use serato_tags::tag::{TagFormat, TagType};
	///
	/// assert!(TagType::Markers2.supports_format(TagFormat::Ogg));
	/// assert!(!TagType::Markers.supports_format(TagFormat::FLAC));
	/// ```
	pub fn supports_format(self, format: TagFormat) -> bool {
		match format {
			TagFormat::ID3 => !matches!(self, TagType::RelVolAd | TagType::VidAssoc),
			TagFormat::FLAC => self.flac_comment().is_some(),
			TagFormat::MP4 => true,
			TagFormat::Ogg => self.ogg_comment().is_some(),
		}
	}
}

/// Shared behavior of all Serato tags
///
/// Every tag has a plain binary layout, which is what ID3v2 stores directly. Other formats wrap
/// or alter that layout, see [`TagFormat`].
pub trait SeratoTag: Sized + private::Sealed {
	/// The kind of tag
	const TAG_TYPE: TagType;

	/// The name of the tag, see [`TagType::name`]
	const NAME: &'static str;

	/// Parse the plain binary layout
	///
	/// All of `input` must be consumed.
	///
	/// # Errors
	///
	/// * `input` is truncated or malformed
	fn parse_raw(input: &[u8]) -> Result<Self>;

	/// Write the plain binary layout
	///
	/// # Errors
	///
	/// * A value does not fit in its field
	fn write_raw(&self) -> Result<Vec<u8>>;

	/// Parse the tag from its base64 envelope
	///
	/// # Errors
	///
	/// * See [`envelope::envelope_decode_with_name`]
	/// * See [`SeratoTag::parse_raw`]
	fn parse_enveloped(input: &[u8]) -> Result<Self> {
		let content = envelope::envelope_decode_with_name(input, Self::NAME)?;
		Self::parse_raw(&content)
	}

	/// Write the tag wrapped in a base64 envelope
	///
	/// # Errors
	///
	/// * See [`SeratoTag::write_raw`]
	fn write_enveloped(&self) -> Result<Vec<u8>> {
		let content = self.write_raw()?;
		Ok(envelope::envelope_encode_with_name(Self::NAME, &content))
	}

	/// Parse the tag as stored in `format`
	///
	/// # Errors
	///
	/// * The tag is not stored in `format` ([`ErrorKind::UnsupportedTagFormat`](crate::error::ErrorKind::UnsupportedTagFormat))
	/// * `input` is truncated or malformed
	fn parse(input: &[u8], format: TagFormat) -> Result<Self>;

	/// Write the tag as stored in `format`
	///
	/// # Errors
	///
	/// * The tag is not stored in `format` ([`ErrorKind::UnsupportedTagFormat`](crate::error::ErrorKind::UnsupportedTagFormat))
	/// * A value does not fit in its field
	fn write(&self, format: TagFormat) -> Result<Vec<u8>>;
}

// https://rust-lang.github.io/api-guidelines/future-proofing.html#c-sealed
mod private {
	use crate::analysis::Analysis;
	use crate::autotags::Autotags;
	use crate::beatgrid::Beatgrid;
	use crate::markers::Markers;
	use crate::markers2::Markers2;
	use crate::overview::Overview;
	use crate::relvolad::RelVolAd;
	use crate::vidassoc::VidAssoc;

	pub trait Sealed {}

	impl Sealed for Analysis {}
	impl Sealed for Autotags {}
	impl Sealed for Beatgrid {}
	impl Sealed for Markers {}
	impl Sealed for Markers2 {}
	impl Sealed for Overview {}
	impl Sealed for RelVolAd {}
	impl Sealed for VidAssoc {}
}
