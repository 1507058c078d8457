use super::Beatgrid;
use crate::error::Result;
use crate::macros::err;

use byteorder::{BigEndian, WriteBytesExt};

pub(super) fn write_beatgrid(beatgrid: &Beatgrid) -> Result<Vec<u8>> {
	let Ok(marker_count) = u32::try_from(beatgrid.marker_count()) else {
		err!(TooMuchData);
	};

	let mut writer = Vec::with_capacity(6 + beatgrid.marker_count() * 8 + 1);
	beatgrid.version.write(&mut writer)?;
	writer.write_u32::<BigEndian>(marker_count)?;

	for marker in &beatgrid.non_terminal_markers {
		writer.write_f32::<BigEndian>(marker.position)?;
		writer.write_u32::<BigEndian>(marker.beats_till_next_marker)?;
	}

	writer.write_f32::<BigEndian>(beatgrid.terminal_marker.position)?;
	writer.write_f32::<BigEndian>(beatgrid.terminal_marker.bpm)?;
	writer.write_u8(beatgrid.footer)?;

	Ok(writer)
}
