//! `Serato BeatGrid`
//!
//! The beatgrid maps track time to beats. It is made up of any number of non-terminal markers,
//! each fixing the number of beats until the next marker, followed by a single terminal marker
//! holding the tempo for the rest of the track.

mod read;
mod write;

use crate::error::Result;
use crate::macros::unsupported_format;
use crate::tag::items::Version;
use crate::tag::{SeratoTag, TagFormat, TagType};

/// A beatgrid marker followed by another marker
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NonTerminalMarker {
	/// The marker position, in seconds
	pub position: f32,
	/// The number of beats between this marker and the next
	pub beats_till_next_marker: u32,
}

/// The last beatgrid marker
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TerminalMarker {
	/// The marker position, in seconds
	pub position: f32,
	/// The tempo from this marker onwards
	pub bpm: f32,
}

/// The `Serato BeatGrid` tag
#[derive(Clone, Debug, PartialEq)]
pub struct Beatgrid {
	/// The tag version
	pub version: Version,
	/// All markers preceding the terminal marker, in order
	pub non_terminal_markers: Vec<NonTerminalMarker>,
	/// The last marker
	pub terminal_marker: TerminalMarker,
	/// A trailing byte of unknown meaning
	pub footer: u8,
}

impl Beatgrid {
	/// Create a beatgrid with a constant tempo
	///
	/// # Examples
	///
	/// ```rust
	/// use serato_tags::beatgrid::Beatgrid;
	///
	/// let beatgrid = Beatgrid::constant(0.05, 128.0);
	/// assert!(beatgrid.non_terminal_markers.is_empty());
	/// assert_eq!(beatgrid.terminal_marker.bpm, 128.0);
	/// ```
	pub fn constant(position: f32, bpm: f32) -> Self {
		Self {
			version: Version::new(1, 0),
			non_terminal_markers: Vec::new(),
			terminal_marker: TerminalMarker { position, bpm },
			footer: 0,
		}
	}

	/// The total number of markers, including the terminal marker
	pub fn marker_count(&self) -> usize {
		self.non_terminal_markers.len() + 1
	}
}

impl SeratoTag for Beatgrid {
	const TAG_TYPE: TagType = TagType::Beatgrid;
	const NAME: &'static str = "Serato BeatGrid";

	fn parse_raw(input: &[u8]) -> Result<Self> {
		log::trace!("Parsing `{}`", Self::NAME);
		read::parse_beatgrid(&mut &input[..])
	}

	fn write_raw(&self) -> Result<Vec<u8>> {
		write::write_beatgrid(self)
	}

	fn parse(input: &[u8], format: TagFormat) -> Result<Self> {
		match format {
			TagFormat::ID3 => Self::parse_raw(input),
			TagFormat::FLAC | TagFormat::MP4 => Self::parse_enveloped(input),
			TagFormat::Ogg => unsupported_format!(Beatgrid, format),
		}
	}

	fn write(&self, format: TagFormat) -> Result<Vec<u8>> {
		match format {
			TagFormat::ID3 => self.write_raw(),
			TagFormat::FLAC | TagFormat::MP4 => self.write_enveloped(),
			TagFormat::Ogg => unsupported_format!(Beatgrid, format),
		}
	}
}
