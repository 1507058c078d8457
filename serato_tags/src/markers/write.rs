use super::read::{
	ID3_SLOT_PADDING, ID3_SLOT_SIZE, ID3_UNSET_POSITION, MP4_SLOT_PADDING, MP4_SLOT_SIZE,
	MP4_UNSET_POSITION,
};
use super::{Marker, Markers};
use crate::error::Result;
use crate::macros::err;
use crate::serato32;
use crate::tag::items::Position;

use byteorder::{BigEndian, WriteBytesExt};

pub(super) fn write_markers(markers: &Markers) -> Result<Vec<u8>> {
	let mut writer = Vec::with_capacity(6 + markers.entries.len() * ID3_SLOT_SIZE + 4);
	markers.version.write(&mut writer)?;
	write_slot_count(&mut writer, markers)?;

	for marker in &markers.entries {
		write_position(&mut writer, marker.start_position)?;
		write_position(&mut writer, marker.end_position)?;
		writer.extend_from_slice(&ID3_SLOT_PADDING);
		serato32::write_color(&mut writer, marker.color)?;
		write_type_and_lock(&mut writer, marker);
	}

	serato32::write_color(&mut writer, markers.track_color)?;
	Ok(writer)
}

pub(super) fn write_markers_mp4(markers: &Markers) -> Result<Vec<u8>> {
	let mut writer = Vec::with_capacity(6 + markers.entries.len() * MP4_SLOT_SIZE + 4);
	markers.version.write(&mut writer)?;
	write_slot_count(&mut writer, markers)?;

	for marker in &markers.entries {
		write_position_mp4(&mut writer, marker.start_position)?;
		write_position_mp4(&mut writer, marker.end_position)?;
		writer.extend_from_slice(&MP4_SLOT_PADDING);
		marker.color.write(&mut writer)?;
		write_type_and_lock(&mut writer, marker);
	}

	writer.push(0);
	markers.track_color.write(&mut writer)?;
	Ok(writer)
}

fn write_slot_count(writer: &mut Vec<u8>, markers: &Markers) -> Result<()> {
	let Ok(slot_count) = u32::try_from(markers.entries.len()) else {
		err!(TooMuchData);
	};

	writer.write_u32::<BigEndian>(slot_count)?;
	Ok(())
}

fn write_position(writer: &mut Vec<u8>, position: Option<Position>) -> Result<()> {
	match position {
		Some(Position { millis }) => {
			writer.push(0x00);
			serato32::write_u32(writer, millis)?;
		},
		None => writer.extend_from_slice(&ID3_UNSET_POSITION),
	}

	Ok(())
}

fn write_position_mp4(writer: &mut Vec<u8>, position: Option<Position>) -> Result<()> {
	let millis = position.map_or(MP4_UNSET_POSITION, |position| position.millis);
	writer.write_u32::<BigEndian>(millis)?;
	Ok(())
}

fn write_type_and_lock(writer: &mut Vec<u8>, marker: &Marker) {
	writer.push(marker.marker_type as u8);
	writer.push(u8::from(marker.is_locked));
}
