use crate::tag::items::Color;

/// A position in the track, in milliseconds
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
	/// Milliseconds from the start of the track
	pub millis: u32,
}

impl From<u32> for Position {
	fn from(millis: u32) -> Self {
		Self { millis }
	}
}

/// A hotcue
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cue {
	/// The hotcue slot, starting at 0
	pub index: u8,
	/// Where the cue is placed
	pub position: Position,
	/// The stored (Serato DJ Intro) color, see [`Color::into_pro_hotcue_color`]
	pub color: Color,
	/// The user-provided name, possibly empty
	pub label: String,
}

/// A saved loop
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Loop {
	/// The loop slot, starting at 0
	pub index: u8,
	/// Where the loop starts
	pub start_position: Position,
	/// Where the loop ends
	pub end_position: Position,
	/// The loop color
	pub color: Color,
	/// Whether the loop is protected from edits
	pub is_locked: bool,
	/// The user-provided name, possibly empty
	pub label: String,
}
