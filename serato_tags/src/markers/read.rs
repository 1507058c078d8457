use super::{Marker, MarkerType, Markers};
use crate::error::Result;
use crate::macros::{decode_err, err};
use crate::serato32;
use crate::tag::items::{Color, Position, Version};
use crate::util::alloc::VecFallibleCapacity;
use crate::util::flag_byte;

use std::io::Read;

use byteorder::{BigEndian, ReadBytesExt};

pub(super) const ID3_SLOT_SIZE: usize = 22;
pub(super) const MP4_SLOT_SIZE: usize = 19;

pub(super) const ID3_SLOT_PADDING: [u8; 6] = [0x00, 0x7F, 0x7F, 0x7F, 0x7F, 0x7F];
pub(super) const MP4_SLOT_PADDING: [u8; 6] = [0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0x00];

pub(super) const ID3_UNSET_POSITION: [u8; 5] = [0x7F; 5];
pub(super) const MP4_UNSET_POSITION: u32 = 0xFFFF_FFFF;

pub(super) fn parse_markers(reader: &mut &[u8]) -> Result<Markers> {
	let version = Version::read(reader)?;
	let entries = read_slots(reader, ID3_SLOT_SIZE, 4, read_slot)?;
	let track_color = serato32::take_color(reader)?;

	if !reader.is_empty() {
		decode_err!(@BAIL Markers, "Found trailing data after the track color");
	}

	Ok(Markers {
		version,
		entries,
		track_color,
	})
}

pub(super) fn parse_markers_mp4(reader: &mut &[u8]) -> Result<Markers> {
	let version = Version::read(reader)?;
	let entries = read_slots(reader, MP4_SLOT_SIZE, 4, read_slot_mp4)?;

	if reader.read_u8()? != 0 {
		decode_err!(@BAIL Markers, "Expected a null byte before the track color");
	}

	let track_color = Color::read(reader)?;

	if !reader.is_empty() {
		decode_err!(@BAIL Markers, "Found trailing data after the track color");
	}

	Ok(Markers {
		version,
		entries,
		track_color,
	})
}

fn read_slots(
	reader: &mut &[u8],
	slot_size: usize,
	tail_size: usize,
	read_slot: fn(&mut &[u8]) -> Result<Marker>,
) -> Result<Vec<Marker>> {
	let slot_count = reader.read_u32::<BigEndian>()? as usize;

	let Some(expected_size) = slot_count
		.checked_mul(slot_size)
		.and_then(|size| size.checked_add(tail_size))
	else {
		err!(TooMuchData);
	};

	if reader.len() < expected_size {
		err!(ParseIncomplete);
	}

	let mut entries = Vec::try_with_capacity_stable(slot_count)?;
	for _ in 0..slot_count {
		entries.push(read_slot(reader)?);
	}

	Ok(entries)
}

fn read_slot(reader: &mut &[u8]) -> Result<Marker> {
	let start_position = read_position(reader)?;
	let end_position = read_position(reader)?;

	let mut padding = [0; 6];
	reader.read_exact(&mut padding)?;
	if padding != ID3_SLOT_PADDING {
		decode_err!(@BAIL Markers, "Marker contains unexpected padding");
	}

	let color = serato32::take_color(reader)?;
	let (marker_type, is_locked) = read_type_and_lock(reader)?;

	Ok(Marker {
		start_position,
		end_position,
		color,
		marker_type,
		is_locked,
	})
}

fn read_slot_mp4(reader: &mut &[u8]) -> Result<Marker> {
	let start_position = read_position_mp4(reader)?;
	let end_position = read_position_mp4(reader)?;

	let mut padding = [0; 6];
	reader.read_exact(&mut padding)?;
	if padding != MP4_SLOT_PADDING {
		decode_err!(@BAIL Markers, "Marker contains unexpected padding");
	}

	let color = Color::read(reader)?;
	let (marker_type, is_locked) = read_type_and_lock(reader)?;

	Ok(Marker {
		start_position,
		end_position,
		color,
		marker_type,
		is_locked,
	})
}

fn read_position(reader: &mut &[u8]) -> Result<Option<Position>> {
	match reader.read_u8()? {
		0x00 => Ok(Some(Position::from(serato32::take_u32(reader)?))),
		0x7F => {
			let mut unset = [0; 4];
			reader.read_exact(&mut unset)?;
			if unset != ID3_UNSET_POSITION[1..] {
				decode_err!(@BAIL Markers, "Unset position contains unexpected data");
			}

			Ok(None)
		},
		_ => decode_err!(@BAIL Markers, "Position has an invalid prefix"),
	}
}

fn read_position_mp4(reader: &mut &[u8]) -> Result<Option<Position>> {
	let millis = reader.read_u32::<BigEndian>()?;
	if millis == MP4_UNSET_POSITION {
		return Ok(None);
	}

	Ok(Some(Position::from(millis)))
}

fn read_type_and_lock<R>(reader: &mut R) -> Result<(MarkerType, bool)>
where
	R: Read,
{
	let Some(marker_type) = MarkerType::from_u8(reader.read_u8()?) else {
		decode_err!(@BAIL Markers, "Marker has an unknown type");
	};

	let Some(is_locked) = flag_byte(reader.read_u8()?) else {
		decode_err!(@BAIL Markers, "Marker has an invalid lock flag");
	};

	Ok((marker_type, is_locked))
}
