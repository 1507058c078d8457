//! `Serato Markers_`
//!
//! The legacy marker tag, holding the first 5 cues, the first 9 loops and the track color.
//! Superseded by [`Serato Markers2`](crate::markers2), but still written by Serato alongside it.
//!
//! The tag is made of a fixed number of slots. Slots without a marker are still written, with
//! their positions unset, so the slot count of a parsed tag must be kept to write it back.

mod read;
mod write;

use crate::error::Result;
use crate::macros::unsupported_format;
use crate::tag::items::{Color, Cue, Loop, Position, Version};
use crate::tag::{SeratoTag, TagFormat, TagType};

/// The type of a [`Marker`] slot
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MarkerType {
	/// An empty cue slot
	Invalid = 0x00,
	/// A cue slot
	Cue = 0x01,
	/// A loop slot
	Loop = 0x03,
}

impl MarkerType {
	/// Get a `MarkerType` from a u8, must be 0, 1 or 3
	pub fn from_u8(byte: u8) -> Option<Self> {
		match byte {
			0x00 => Some(Self::Invalid),
			0x01 => Some(Self::Cue),
			0x03 => Some(Self::Loop),
			_ => None,
		}
	}
}

/// A slot of the `Serato Markers_` tag
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Marker {
	/// The cue position or loop start, if set
	pub start_position: Option<Position>,
	/// The loop end, if set
	pub end_position: Option<Position>,
	/// The marker color
	pub color: Color,
	/// The type of slot
	pub marker_type: MarkerType,
	/// Whether the loop is locked
	pub is_locked: bool,
}

impl Marker {
	/// An empty cue slot
	pub const EMPTY_CUE: Marker = Marker {
		start_position: None,
		end_position: None,
		color: Color::new(0, 0, 0),
		marker_type: MarkerType::Invalid,
		is_locked: false,
	};

	/// An empty loop slot
	pub const EMPTY_LOOP: Marker = Marker {
		start_position: None,
		end_position: None,
		color: Color::from_rgb(0x27AAE1),
		marker_type: MarkerType::Loop,
		is_locked: false,
	};
}

/// The `Serato Markers_` tag
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Markers {
	/// The tag version
	pub version: Version,
	/// All slots, in order, including empty ones
	pub entries: Vec<Marker>,
	/// The color of the track in the library
	pub track_color: Color,
}

impl Default for Markers {
	fn default() -> Self {
		Self::new()
	}
}

impl Markers {
	/// The number of cue slots Serato writes
	pub const CUE_SLOTS: usize = 5;
	/// The number of loop slots Serato writes
	pub const LOOP_SLOTS: usize = 9;

	/// Create an empty tag, with Serato's slot layout
	///
	/// # Examples
	///
	/// ```rust
	/// use serato_tags::markers::Markers;
	///
	/// let markers = Markers::new();
	/// assert_eq!(markers.entries.len(), 14);
	/// assert!(markers.cues().is_empty());
	/// assert!(markers.loops().is_empty());
	/// ```
	pub fn new() -> Self {
		let mut entries = Vec::with_capacity(Self::CUE_SLOTS + Self::LOOP_SLOTS);
		entries.extend(std::iter::repeat_n(Marker::EMPTY_CUE, Self::CUE_SLOTS));
		entries.extend(std::iter::repeat_n(Marker::EMPTY_LOOP, Self::LOOP_SLOTS));

		Self {
			version: Version::new(2, 5),
			entries,
			track_color: Color::from_rgb(0xFF_FFFF),
		}
	}

	/// Get all set cues
	///
	/// The cue index is the slot's position among all non-loop slots. Slots past index 255 are skipped.
	pub fn cues(&self) -> Vec<Cue> {
		self.entries
			.iter()
			.filter(|marker| marker.marker_type != MarkerType::Loop)
			.enumerate()
			.filter_map(|(index, marker)| {
				if marker.marker_type != MarkerType::Cue {
					return None;
				}

				Some(Cue {
					index: u8::try_from(index).ok()?,
					position: marker.start_position?,
					color: marker.color,
					label: String::new(),
				})
			})
			.collect()
	}

	/// Get all set loops
	///
	/// The loop index is the slot's position among all loop slots. Slots past index 255 are skipped.
	pub fn loops(&self) -> Vec<Loop> {
		self.entries
			.iter()
			.filter(|marker| marker.marker_type == MarkerType::Loop)
			.enumerate()
			.filter_map(|(index, marker)| {
				Some(Loop {
					index: u8::try_from(index).ok()?,
					start_position: marker.start_position?,
					end_position: marker.end_position?,
					color: marker.color,
					is_locked: marker.is_locked,
					label: String::new(),
				})
			})
			.collect()
	}

	/// The color of the track in the library
	pub fn track_color(&self) -> Color {
		self.track_color
	}

	/// Parse the MP4 layout
	///
	/// MP4 uses its own slot layout, with plain positions and colors, inside an envelope.
	///
	/// # Errors
	///
	/// * See [`SeratoTag::parse_enveloped`]
	pub fn parse_mp4(input: &[u8]) -> Result<Self> {
		log::trace!("Parsing `{}` (MP4)", Self::NAME);

		let content = crate::envelope::envelope_decode_with_name(input, Self::NAME)?;
		read::parse_markers_mp4(&mut &content[..])
	}

	/// Write the MP4 layout
	///
	/// # Errors
	///
	/// * There are more than `u32::MAX` slots
	pub fn write_mp4(&self) -> Result<Vec<u8>> {
		let content = write::write_markers_mp4(self)?;
		Ok(crate::envelope::envelope_encode_with_name(
			Self::NAME,
			&content,
		))
	}
}

impl SeratoTag for Markers {
	const TAG_TYPE: TagType = TagType::Markers;
	const NAME: &'static str = "Serato Markers_";

	fn parse_raw(input: &[u8]) -> Result<Self> {
		log::trace!("Parsing `{}`", Self::NAME);
		read::parse_markers(&mut &input[..])
	}

	fn write_raw(&self) -> Result<Vec<u8>> {
		write::write_markers(self)
	}

	fn parse(input: &[u8], format: TagFormat) -> Result<Self> {
		match format {
			TagFormat::ID3 => Self::parse_raw(input),
			TagFormat::MP4 => Self::parse_mp4(input),
			TagFormat::FLAC | TagFormat::Ogg => unsupported_format!(Markers, format),
		}
	}

	fn write(&self, format: TagFormat) -> Result<Vec<u8>> {
		match format {
			TagFormat::ID3 => self.write_raw(),
			TagFormat::MP4 => self.write_mp4(),
			TagFormat::FLAC | TagFormat::Ogg => unsupported_format!(Markers, format),
		}
	}
}
