use crate::analysis::Analysis;
use crate::autotags::Autotags;
use crate::beatgrid::Beatgrid;
use crate::error::Result;
use crate::macros::err;
use crate::markers::Markers;
use crate::markers2::Markers2;
use crate::overview::Overview;
use crate::relvolad::RelVolAd;
use crate::tag::items::{Color, Cue, Flip, Loop};
use crate::tag::{SeratoTag, TagFormat};
use crate::vidassoc::VidAssoc;

// This defines the `TagContainer` struct, with one optional slot per tag.
//
// Usage:
//
// tag_container! {
//     field_name: Type
// }
//
// For every slot, the following methods are generated:
//
// * `parse_field_name(input, format)`, replacing the slot on success
// * `write_field_name(format)`, failing with `NoTagDataAvailable` on an empty slot
// * `field_name()`, `set_field_name(tag)` and `remove_field_name()`
macro_rules! tag_container {
	($($field:ident: $ty:ident),+ $(,)?) => {
		/// A collection of Serato tags, as found in a single file
		///
		/// The host adapter hands every tag blob it finds to the matching `parse_*` method, along with
		/// the [`TagFormat`] it was stored in. Writing is the reverse, each `write_*` method producing the
		/// blob for one tag.
		///
		/// Some information is stored in more than one tag, see [`TagContainer::cues`] and
		/// [`TagContainer::track_color`] for how it is reconciled.
		#[derive(Clone, Debug, Default, PartialEq)]
		pub struct TagContainer {
			$(
				$field: Option<$ty>,
			)+
		}

		impl TagContainer {
			$(
				paste::paste! {
					#[doc = "Parse the `" $ty "` tag as stored in `format`, replacing any existing one"]
					///
					/// The container is left untouched if parsing fails.
					///
					/// # Errors
					///
					#[doc = "See [`SeratoTag::parse`]"]
					pub fn [<parse_ $field>](&mut self, input: &[u8], format: TagFormat) -> Result<()> {
						let tag = <$ty as SeratoTag>::parse(input, format)?;
						self.$field = Some(tag);
						Ok(())
					}

					#[doc = "Write the `" $ty "` tag as stored in `format`"]
					///
					/// # Errors
					///
					/// * The container does not hold the tag ([`ErrorKind::NoTagDataAvailable`](crate::error::ErrorKind::NoTagDataAvailable))
					/// * See [`SeratoTag::write`]
					pub fn [<write_ $field>](&self, format: TagFormat) -> Result<Vec<u8>> {
						match &self.$field {
							Some(tag) => tag.write(format),
							None => err!(NoTagDataAvailable(<$ty as SeratoTag>::TAG_TYPE)),
						}
					}

					#[doc = "Returns the `" $ty "` tag, if present"]
					pub fn $field(&self) -> Option<&$ty> {
						self.$field.as_ref()
					}

					#[doc = "Set the `" $ty "` tag, returning the one it replaced"]
					pub fn [<set_ $field>](&mut self, tag: $ty) -> Option<$ty> {
						self.$field.replace(tag)
					}

					#[doc = "Remove the `" $ty "` tag, returning it"]
					pub fn [<remove_ $field>](&mut self) -> Option<$ty> {
						self.$field.take()
					}
				}
			)+
		}
	};
}

tag_container! {
	analysis: Analysis,
	autotags: Autotags,
	beatgrid: Beatgrid,
	markers: Markers,
	markers2: Markers2,
	overview: Overview,
	relvolad: RelVolAd,
	vidassoc: VidAssoc,
}

impl TagContainer {
	/// Create an empty `TagContainer`
	pub fn new() -> Self {
		Self::default()
	}

	/// Whether the container holds no tags at all
	pub fn is_empty(&self) -> bool {
		*self == Self::default()
	}

	/// Returns the cues
	///
	/// Cues are taken from `Serato Markers2` if it holds any, otherwise from the legacy
	/// `Serato Markers_`.
	///
	/// # Examples
	///
	/// ```rust
	/// use serato_tags::markers::Markers;
	/// use serato_tags::tag::TagContainer;
	///
	/// let mut container = TagContainer::new();
	/// assert!(container.cues().is_empty());
	///
	/// // The default legacy layout only has empty slots
	/// container.set_markers(Markers::new());
	/// assert!(container.cues().is_empty());
	/// ```
	pub fn cues(&self) -> Vec<Cue> {
		if let Some(markers2) = &self.markers2 {
			let cues = markers2.cues().cloned().collect::<Vec<_>>();
			if !cues.is_empty() {
				return cues;
			}
		}

		self.markers.as_ref().map(Markers::cues).unwrap_or_default()
	}

	/// Returns the saved loops
	///
	/// See [`TagContainer::cues`] for the precedence.
	pub fn loops(&self) -> Vec<Loop> {
		if let Some(markers2) = &self.markers2 {
			let loops = markers2.loops().cloned().collect::<Vec<_>>();
			if !loops.is_empty() {
				return loops;
			}
		}

		self.markers.as_ref().map(Markers::loops).unwrap_or_default()
	}

	/// Returns the Flips, only stored in `Serato Markers2`
	pub fn flips(&self) -> Vec<Flip> {
		match &self.markers2 {
			Some(markers2) => markers2.flips().cloned().collect(),
			None => Vec::new(),
		}
	}

	/// Returns the track color
	///
	/// The color from `Serato Markers2` takes precedence over the legacy `Serato Markers_` one.
	pub fn track_color(&self) -> Option<Color> {
		self.markers2
			.as_ref()
			.and_then(Markers2::track_color)
			.or_else(|| self.markers.as_ref().map(Markers::track_color))
	}

	/// Whether the beatgrid is locked, only stored in `Serato Markers2`
	pub fn bpm_locked(&self) -> Option<bool> {
		self.markers2.as_ref().and_then(Markers2::bpm_locked)
	}

	/// Returns the BPM from `Serato Autotags`
	pub fn bpm(&self) -> Option<f64> {
		self.autotags.as_ref().map(|autotags| autotags.bpm)
	}

	/// Returns the auto gain from `Serato Autotags`
	pub fn auto_gain(&self) -> Option<f64> {
		self.autotags.as_ref().map(|autotags| autotags.auto_gain)
	}

	/// Returns the manual gain (dB) from `Serato Autotags`
	pub fn gain_db(&self) -> Option<f64> {
		self.autotags.as_ref().map(|autotags| autotags.gain_db)
	}

	/// Returns the waveform overview data
	pub fn overview_data(&self) -> Option<&[u8]> {
		self.overview.as_ref().map(|overview| overview.data.as_slice())
	}
}
