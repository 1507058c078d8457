//! `Serato Markers2`
//!
//! The current marker tag, holding cues, loops, Flips, the track color and the beatgrid lock.
//!
//! ## Layout
//!
//! The tag content is base64 encoded, with lines of 72 symbols. Serato writes padding symbols as
//! `A` rather than `=`. In ID3, the text is preceded by a version and followed by null bytes, up
//! to a minimum tag size of 470 bytes. Ogg stores the same text without the version.
//!
//! The decoded content is a version followed by a list of entries:
//!
//! ```text
//! NAME\0 | body length (u32) | body
//! ```
//!
//! Since every entry carries its length, entries with an unknown name can be skipped, and are kept
//! as [`UnknownMarker`]s so that they are written back unchanged. The list ends with a null byte.

mod read;
mod write;

use crate::error::Result;
use crate::tag::items::{Color, Cue, Flip, Loop, Version};
use crate::tag::{SeratoTag, TagFormat, TagType};

/// An entry of the `Serato Markers2` tag
#[derive(Clone, Debug, PartialEq)]
pub enum Marker {
	/// An entry with an unrecognized name
	Unknown(UnknownMarker),
	/// `COLOR`, the track color
	Color(TrackColorMarker),
	/// `BPMLOCK`, whether the beatgrid is locked
	BpmLock(BpmLockMarker),
	/// `CUE`
	Cue(Cue),
	/// `LOOP`
	Loop(Loop),
	/// `FLIP`
	Flip(Flip),
}

impl Marker {
	/// The name of the entry
	pub fn name(&self) -> &str {
		match self {
			Marker::Unknown(unknown) => &unknown.name,
			Marker::Color(_) => "COLOR",
			Marker::BpmLock(_) => "BPMLOCK",
			Marker::Cue(_) => "CUE",
			Marker::Loop(_) => "LOOP",
			Marker::Flip(_) => "FLIP",
		}
	}
}

/// An entry with an unrecognized name, kept as-is
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownMarker {
	/// The entry name
	pub name: String,
	/// The raw entry body
	pub data: Vec<u8>,
}

/// The color of the track in the library
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TrackColorMarker {
	/// The track color
	pub color: Color,
}

/// Whether the beatgrid is locked
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BpmLockMarker {
	/// Whether the beatgrid is locked
	pub is_locked: bool,
}

/// The decoded content of the `Serato Markers2` tag
#[derive(Clone, Debug, PartialEq)]
pub struct Markers2Content {
	/// The content version
	pub version: Version,
	/// All entries, in order
	pub markers: Vec<Marker>,
}

/// The `Serato Markers2` tag
#[derive(Clone, Debug, PartialEq)]
pub struct Markers2 {
	/// The tag version, absent in Ogg
	pub version: Option<Version>,
	/// The size of the tag, including the null padding
	///
	/// When writing, the tag is padded with null bytes up to this size.
	pub size: usize,
	/// The decoded content
	pub content: Markers2Content,
}

impl Default for Markers2 {
	fn default() -> Self {
		Self::new()
	}
}

impl Markers2 {
	/// The version Serato writes, for both the tag and its content
	pub const DEFAULT_VERSION: Version = Version::new(1, 1);
	/// The smallest size Serato writes the tag with
	pub const MINIMUM_SIZE: usize = 470;

	/// Create an empty tag
	///
	/// # Examples
	///
	/// ```rust
	/// use serato_tags::markers2::Markers2;
	/// use serato_tags::tag::SeratoTag;
	///
	/// # fn main() -> serato_tags::error::Result<()> {
	/// let markers2 = Markers2::new();
	/// assert_eq!(markers2.write_raw()?.len(), 470);
	/// # Ok(()) }
	/// ```
	pub fn new() -> Self {
		Self {
			version: Some(Self::DEFAULT_VERSION),
			size: Self::MINIMUM_SIZE,
			content: Markers2Content {
				version: Self::DEFAULT_VERSION,
				markers: Vec::new(),
			},
		}
	}

	/// Whether the beatgrid is locked, if the tag says so
	pub fn bpm_locked(&self) -> Option<bool> {
		self.content.markers.iter().find_map(|marker| match marker {
			Marker::BpmLock(bpm_lock) => Some(bpm_lock.is_locked),
			_ => None,
		})
	}

	/// Iterate over all cues
	pub fn cues(&self) -> impl Iterator<Item = &Cue> {
		self.content.markers.iter().filter_map(|marker| match marker {
			Marker::Cue(cue) => Some(cue),
			_ => None,
		})
	}

	/// Iterate over all saved loops
	pub fn loops(&self) -> impl Iterator<Item = &Loop> {
		self.content.markers.iter().filter_map(|marker| match marker {
			Marker::Loop(saved_loop) => Some(saved_loop),
			_ => None,
		})
	}

	/// Iterate over all Flips
	pub fn flips(&self) -> impl Iterator<Item = &Flip> {
		self.content.markers.iter().filter_map(|marker| match marker {
			Marker::Flip(flip) => Some(flip),
			_ => None,
		})
	}

	/// The color of the track in the library, if the tag has one
	pub fn track_color(&self) -> Option<Color> {
		self.content.markers.iter().find_map(|marker| match marker {
			Marker::Color(track_color) => Some(track_color.color),
			_ => None,
		})
	}

	/// Parse the Ogg layout, which lacks the version
	///
	/// # Errors
	///
	/// * `input` is not valid base64
	/// * The content is malformed
	pub fn parse_ogg(input: &[u8]) -> Result<Self> {
		log::trace!("Parsing `{}` (Ogg)", Self::NAME);

		let content = read::parse_text(input)?;
		Ok(Self {
			version: None,
			size: input.len(),
			content,
		})
	}

	/// Write the Ogg layout, which lacks the version
	///
	/// # Errors
	///
	/// * An entry is too large
	pub fn write_ogg(&self) -> Result<Vec<u8>> {
		let mut writer = Vec::with_capacity(self.size);
		write::write_text(&mut writer, &self.content)?;
		write::pad(&mut writer, self.size);

		Ok(writer)
	}
}

impl SeratoTag for Markers2 {
	const TAG_TYPE: TagType = TagType::Markers2;
	const NAME: &'static str = "Serato Markers2";

	fn parse_raw(input: &[u8]) -> Result<Self> {
		log::trace!("Parsing `{}`", Self::NAME);

		let reader = &mut &input[..];
		let version = Version::read(reader)?;
		let content = read::parse_text(reader)?;

		Ok(Self {
			version: Some(version),
			size: input.len(),
			content,
		})
	}

	/// Write the plain layout
	///
	/// Tags without a version (from Ogg) are written with [`Markers2::DEFAULT_VERSION`], and padded
	/// to at least [`Markers2::MINIMUM_SIZE`].
	fn write_raw(&self) -> Result<Vec<u8>> {
		let (version, size) = match self.version {
			Some(version) => (version, self.size),
			None => (Self::DEFAULT_VERSION, self.size.max(Self::MINIMUM_SIZE)),
		};

		let mut writer = Vec::with_capacity(size);
		version.write(&mut writer)?;
		write::write_text(&mut writer, &self.content)?;
		write::pad(&mut writer, size);

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
			TagFormat::Ogg => self.write_ogg(),
		}
	}
}

#[cfg(test)]
mod tests {
	use crate::error::ErrorKind;
	use crate::markers2::{
		BpmLockMarker, Marker, Markers2, Markers2Content, TrackColorMarker, UnknownMarker,
	};
	use crate::tag::items::{
		CensorFlipAction, Color, Cue, Flip, FlipAction, JumpFlipAction, Loop, Position,
		UnknownFlipAction, Version,
	};
	use crate::tag::{SeratoTag, TagFormat};

	// COLOR #FFFFFF, BPMLOCK off, and cue 0 "Drop" at 396ms
	#[rustfmt::skip]
	const MARKERS2_TEXT: &[u8] =
		b"AQFDT0xPUgAAAAAEAP///0JQTUxPQ0sAAAAAAQBDVUUAAAAAEQAAAAABjADMAAAAAERyb3AA\nAAAA";

	fn markers2_tag() -> Vec<u8> {
		let mut tag = vec![0x01, 0x01];
		tag.extend_from_slice(MARKERS2_TEXT);
		tag.resize(Markers2::MINIMUM_SIZE, 0);
		tag
	}

	fn expected_markers() -> Vec<Marker> {
		vec![
			Marker::Color(TrackColorMarker {
				color: Color::from_rgb(0xFFFFFF),
			}),
			Marker::BpmLock(BpmLockMarker { is_locked: false }),
			Marker::Cue(Cue {
				index: 0,
				position: Position::from(396),
				color: Color::from_rgb(0xCC0000),
				label: String::from("Drop"),
			}),
		]
	}

	fn every_marker() -> Markers2 {
		let mut markers2 = Markers2::new();
		markers2.content.markers = vec![
			Marker::Color(TrackColorMarker {
				color: Color::from_rgb(0x99FF99),
			}),
			Marker::BpmLock(BpmLockMarker { is_locked: true }),
			Marker::Cue(Cue {
				index: 3,
				position: Position::from(120_000),
				color: Color::from_rgb(0x00CC00),
				label: String::from("Verse"),
			}),
			Marker::Loop(Loop {
				index: 0,
				start_position: Position::from(8_000),
				end_position: Position::from(16_000),
				color: Color::from_rgb(0x27AAE1),
				is_locked: true,
				label: String::new(),
			}),
			Marker::Flip(Flip {
				index: 1,
				is_enabled: true,
				label: String::from("Clean edit"),
				is_loop: false,
				actions: vec![
					FlipAction::Censor(CensorFlipAction {
						start_position_seconds: 30.5,
						end_position_seconds: 31.25,
						speed_factor: -1.0,
					}),
					FlipAction::Jump(JumpFlipAction {
						source_position_seconds: 64.0,
						target_position_seconds: 8.0,
					}),
					FlipAction::Unknown(UnknownFlipAction {
						id: 7,
						data: vec![0xDE, 0xAD],
					}),
				],
			}),
			Marker::Unknown(UnknownMarker {
				name: String::from("FUTURE"),
				data: vec![0x01, 0x02, 0x03],
			}),
		];

		markers2
	}

	#[test_log::test]
	fn parse_id3() {
		let tag = markers2_tag();
		let markers2 = Markers2::parse_raw(&tag).unwrap();

		assert_eq!(markers2.version, Some(Version::new(1, 1)));
		assert_eq!(markers2.size, Markers2::MINIMUM_SIZE);
		assert_eq!(markers2.content.version, Version::new(1, 1));
		assert_eq!(markers2.content.markers, expected_markers());

		assert_eq!(markers2.track_color(), Some(Color::from_rgb(0xFFFFFF)));
		assert_eq!(markers2.bpm_locked(), Some(false));
		assert_eq!(markers2.cues().count(), 1);
		assert_eq!(markers2.loops().count(), 0);
		assert_eq!(markers2.flips().count(), 0);
	}

	#[test_log::test]
	fn write_id3() {
		let tag = markers2_tag();
		let markers2 = Markers2::parse_raw(&tag).unwrap();
		assert_eq!(markers2.write_raw().unwrap(), tag);
	}

	#[test_log::test]
	fn empty_tag() {
		let markers2 = Markers2::default();
		let written = markers2.write_raw().unwrap();

		assert_eq!(written.len(), Markers2::MINIMUM_SIZE);
		assert_eq!(&written[..6], b"\x01\x01AQEA");
		assert!(written[6..].iter().all(|b| *b == 0));

		let reparsed = Markers2::parse_raw(&written).unwrap();
		assert_eq!(reparsed, markers2);
	}

	#[test_log::test]
	fn every_marker_round_trip() {
		let markers2 = every_marker();

		for format in [TagFormat::ID3, TagFormat::FLAC, TagFormat::MP4, TagFormat::Ogg] {
			let written = markers2.write(format).unwrap();
			let reparsed = Markers2::parse(&written, format).unwrap();
			assert_eq!(reparsed.content, markers2.content, "{format:?}");
		}

		assert_eq!(markers2.cues().next().map(|cue| cue.index), Some(3));
		assert_eq!(markers2.loops().next().map(|l| l.is_locked), Some(true));
		assert_eq!(markers2.flips().next().map(|f| f.actions.len()), Some(3));
	}

	#[test_log::test]
	fn unknown_entries_preserved() {
		let markers2 = every_marker();
		let written = markers2.write_raw().unwrap();
		let reparsed = Markers2::parse_raw(&written).unwrap();

		assert_eq!(
			reparsed.content.markers.last(),
			Some(&Marker::Unknown(UnknownMarker {
				name: String::from("FUTURE"),
				data: vec![0x01, 0x02, 0x03],
			}))
		);
		assert_eq!(reparsed.write_raw().unwrap(), written);
	}

	#[test_log::test]
	fn grows_past_minimum_size() {
		let mut markers2 = Markers2::new();
		for index in 0..8 {
			markers2.content.markers.push(Marker::Cue(Cue {
				index,
				position: Position::from(u32::from(index) * 10_000),
				color: Color::from_rgb(0xCC0000),
				label: String::from("A fairly long cue label"),
			}));
		}

		let written = markers2.write_raw().unwrap();
		assert!(written.len() > Markers2::MINIMUM_SIZE);

		let reparsed = Markers2::parse_raw(&written).unwrap();
		assert_eq!(reparsed.cues().count(), 8);
		assert_eq!(reparsed.size, written.len());
	}

	#[test_log::test]
	fn ogg_has_no_version() {
		let markers2 = Markers2::parse_ogg(MARKERS2_TEXT).unwrap();
		assert_eq!(markers2.version, None);
		assert_eq!(markers2.content.markers, expected_markers());
		assert_eq!(markers2.write_ogg().unwrap(), MARKERS2_TEXT);

		// Written to ID3, the version is filled in and the tag padded to the minimum size
		let id3 = markers2.write(TagFormat::ID3).unwrap();
		assert_eq!(id3.len(), Markers2::MINIMUM_SIZE);
		assert_eq!(id3, markers2_tag());
	}

	#[test_log::test]
	fn padded_base64_accepted() {
		// Standard padding rather than Serato's `A`s
		let mut text = MARKERS2_TEXT.to_vec();
		let len = text.len();
		text[len - 2..].copy_from_slice(b"==");

		let markers2 = Markers2::parse_ogg(&text).unwrap();
		assert_eq!(markers2.content.markers, expected_markers());
	}

	#[test_log::test]
	fn data_after_padding() {
		let mut tag = markers2_tag();
		tag.push(0x01);

		assert!(matches!(
			Markers2::parse_raw(&tag).unwrap_err().kind(),
			ErrorKind::Parse(_)
		));
	}

	#[test_log::test]
	fn entry_too_long() {
		let mut content = Markers2Content {
			version: Version::new(1, 1),
			markers: Vec::new(),
		};
		content.markers.push(Marker::BpmLock(BpmLockMarker { is_locked: true }));

		let mut raw = super::write::write_content(&content).unwrap();
		// Claim a body longer than the remaining data
		let len_offset = 2 + b"BPMLOCK\0".len();
		raw[len_offset..len_offset + 4].copy_from_slice(&[0x00, 0x00, 0x10, 0x00]);

		assert!(matches!(
			super::read::parse_content(&mut &raw[..]).unwrap_err().kind(),
			ErrorKind::ParseIncomplete
		));
	}

	#[test_log::test]
	fn malformed_known_entry() {
		let content = Markers2Content {
			version: Version::new(1, 1),
			markers: vec![Marker::BpmLock(BpmLockMarker { is_locked: true })],
		};

		let mut raw = super::write::write_content(&content).unwrap();
		let flag_offset = 2 + b"BPMLOCK\0".len() + 4;
		raw[flag_offset] = 0x02;

		assert!(super::read::parse_content(&mut &raw[..]).is_err());
	}

	#[test_log::test]
	fn flip_without_actions() {
		let mut markers2 = Markers2::new();
		markers2.content.markers.push(Marker::Flip(Flip {
			index: 0,
			is_enabled: false,
			label: String::new(),
			is_loop: true,
			actions: Vec::new(),
		}));

		let written = markers2.write(TagFormat::FLAC).unwrap();
		let reparsed = Markers2::parse(&written, TagFormat::FLAC).unwrap();
		assert_eq!(reparsed.content, markers2.content);
	}
}
