//! Parse and write the metadata Serato DJ stores in audio file tags.
//!
//! Serato keeps its per-track data (cue points, saved loops, Flips, the beatgrid, autogain values,
//! the waveform overview and the track color) in a set of binary tags inside the file's regular
//! metadata. This crate handles the tag contents. Extracting the raw blobs from (and embedding them
//! into) the host container is left to the caller, or a crate such as `lofty`.
//!
//! # Supported Tags
//!
//! | Tag               | ID3v2 | FLAC | MP4 | Ogg |
//! | ----------------- | ----- | ---- | --- | --- |
//! | `Serato Analysis` | X     | X    | X   | X   |
//! | `Serato Autotags` | X     | X    | X   |     |
//! | `Serato BeatGrid` | X     | X    | X   |     |
//! | `Serato Markers_` | X     |      | X   |     |
//! | `Serato Markers2` | X     | X    | X   | X   |
//! | `Serato Overview` | X     | X    | X   |     |
//! | `Serato RelVolAd` |       | X    | X   |     |
//! | `Serato VidAssoc` |       | X    | X   |     |
//!
//! # Examples
//!
//! ## Reading a single tag
//!
//! ```rust
//! # fn main() -> serato_tags::error::Result<()> {
//! use serato_tags::autotags::Autotags;
//! use serato_tags::tag::{SeratoTag, TagFormat};
//!
//! // The content of an ID3v2 `GEOB` frame with the description "Serato Autotags"
//! let frame = b"\x01\x01115.00\0-3.257\x000.000\0";
//!
//! let autotags = Autotags::parse(frame, TagFormat::ID3)?;
//! assert_eq!(autotags.bpm, 115.0);
//!
//! // FLAC stores the same data in a base64 envelope
//! let comment = autotags.write(TagFormat::FLAC)?;
//! assert_eq!(Autotags::parse(&comment, TagFormat::FLAC)?, autotags);
//! # Ok(())
//! # }
//! ```
//!
//! ## Collecting all tags of a file
//!
//! Cues and loops are stored in two tags, the legacy `Serato Markers_` and its successor
//! `Serato Markers2`. [`TagContainer`](tag::TagContainer) reconciles them.
//!
//! ```rust
//! # fn main() -> serato_tags::error::Result<()> {
//! use serato_tags::markers2::Markers2;
//! use serato_tags::tag::{SeratoTag, TagContainer, TagFormat};
//!
//! # let blob = Markers2::new().write(TagFormat::MP4)?;
//! let mut container = TagContainer::new();
//! container.parse_markers2(&blob, TagFormat::MP4)?;
//!
//! for cue in container.cues() {
//! 	println!("Cue {} at {}ms", cue.index, cue.position.millis);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod envelope;
pub mod error;
pub(crate) mod macros;
pub mod serato32;
pub mod tag;
mod util;

pub mod analysis;
pub mod autotags;
pub mod beatgrid;
pub mod markers;
pub mod markers2;
pub mod overview;
pub mod relvolad;
pub mod vidassoc;

pub mod prelude {
	//! A prelude for commonly used items in the library.
	//!
	//! This module is intended to be wildcard imported.
	//!
	//! ```rust
	//! use serato_tags::prelude::*;
	//! ```

	pub use crate::tag::{SeratoTag, TagContainer, TagFormat, TagType};
}
