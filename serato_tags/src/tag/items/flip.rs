/// A recorded Serato Flip performance
///
/// Flips replay a sequence of jumps and censors over the track.
#[derive(Clone, Debug, PartialEq)]
pub struct Flip {
	/// The Flip slot, starting at 0
	pub index: u8,
	/// Whether the Flip is active
	pub is_enabled: bool,
	/// The user-provided name, possibly empty
	pub label: String,
	/// Whether playback loops back to the start once the last action ran
	pub is_loop: bool,
	/// The recorded actions, in order
	pub actions: Vec<FlipAction>,
}

/// A single step of a [`Flip`]
#[derive(Clone, Debug, PartialEq)]
pub enum FlipAction {
	/// Play a section in reverse, muting it
	Censor(CensorFlipAction),
	/// Jump from one position to another
	Jump(JumpFlipAction),
	/// An action type that isn't understood, kept as-is
	Unknown(UnknownFlipAction),
}

impl FlipAction {
	/// The action's identifier byte
	pub fn id(&self) -> u8 {
		match self {
			FlipAction::Jump(_) => JumpFlipAction::ID,
			FlipAction::Censor(_) => CensorFlipAction::ID,
			FlipAction::Unknown(unknown) => unknown.id,
		}
	}
}

/// A censor ("reverse") section
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CensorFlipAction {
	/// Where the censor starts, in seconds
	pub start_position_seconds: f64,
	/// Where the censor ends (and playback resumes), in seconds
	pub end_position_seconds: f64,
	/// The playback speed while censored, usually `-1.0`
	pub speed_factor: f64,
}

impl CensorFlipAction {
	pub(crate) const ID: u8 = 1;
}

/// A jump between two positions
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct JumpFlipAction {
	/// Where the jump is triggered, in seconds
	pub source_position_seconds: f64,
	/// Where playback continues, in seconds
	pub target_position_seconds: f64,
}

impl JumpFlipAction {
	pub(crate) const ID: u8 = 0;
}

/// An unrecognized Flip action
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownFlipAction {
	/// The action's identifier byte
	pub id: u8,
	/// The raw action body
	pub data: Vec<u8>,
}
