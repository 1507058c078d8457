use super::{Beatgrid, NonTerminalMarker, TerminalMarker};
use crate::error::Result;
use crate::macros::{decode_err, err};
use crate::tag::items::Version;
use crate::util::alloc::VecFallibleCapacity;

use byteorder::{BigEndian, ReadBytesExt};

const NON_TERMINAL_MARKER_SIZE: usize = 8;
// Terminal marker + footer
const TAIL_SIZE: usize = 9;

pub(super) fn parse_beatgrid(reader: &mut &[u8]) -> Result<Beatgrid> {
	let version = Version::read(reader)?;

	let marker_count = reader.read_u32::<BigEndian>()?;
	if marker_count == 0 {
		decode_err!(@BAIL Beatgrid, "Beatgrid has no terminal marker");
	}

	let non_terminal_count = (marker_count - 1) as usize;
	let Some(expected_size) = non_terminal_count
		.checked_mul(NON_TERMINAL_MARKER_SIZE)
		.and_then(|size| size.checked_add(TAIL_SIZE))
	else {
		err!(TooMuchData);
	};

	if reader.len() < expected_size {
		err!(ParseIncomplete);
	}

	let mut non_terminal_markers = Vec::try_with_capacity_stable(non_terminal_count)?;
	for _ in 0..non_terminal_count {
		let position = reader.read_f32::<BigEndian>()?;
		let beats_till_next_marker = reader.read_u32::<BigEndian>()?;

		non_terminal_markers.push(NonTerminalMarker {
			position,
			beats_till_next_marker,
		});
	}

	let position = reader.read_f32::<BigEndian>()?;
	let bpm = reader.read_f32::<BigEndian>()?;
	let footer = reader.read_u8()?;

	if !reader.is_empty() {
		decode_err!(@BAIL Beatgrid, "Found trailing data after the footer");
	}

	Ok(Beatgrid {
		version,
		non_terminal_markers,
		terminal_marker: TerminalMarker { position, bpm },
		footer,
	})
}
