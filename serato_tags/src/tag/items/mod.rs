//! Format-independent representations of Serato's data

mod color;
mod cue;
mod flip;
mod version;

pub use color::Color;
pub use cue::{Cue, Loop, Position};
pub use flip::{CensorFlipAction, Flip, FlipAction, JumpFlipAction, UnknownFlipAction};
pub use version::Version;
