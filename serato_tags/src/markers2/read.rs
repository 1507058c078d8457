use super::{BpmLockMarker, Marker, Markers2Content, TrackColorMarker, UnknownMarker};
use crate::envelope;
use crate::error::Result;
use crate::macros::{decode_err, err};
use crate::tag::items::{
	CensorFlipAction, Color, Cue, Flip, FlipAction, JumpFlipAction, Loop, Position,
	UnknownFlipAction, Version,
};
use crate::util::alloc::{VecFallibleCapacity, fallible_to_vec};
use crate::util::flag_byte;
use crate::util::text::read_terminated_string;

use std::io::Read;

use byteorder::{BigEndian, ReadBytesExt};

pub(super) const LOOP_MARKER: [u8; 4] = [0xFF; 4];

/// Decode the base64 text, which may be followed by null padding
pub(super) fn parse_text(input: &[u8]) -> Result<Markers2Content> {
	let (text, padding) = envelope::take_base64_with_newline(input);
	if padding.iter().any(|b| *b != 0) {
		decode_err!(@BAIL Markers2, "Found non-null data after the base64 text");
	}

	let content = envelope::base64_decode_unpadded(text)?;
	parse_content(&mut &content[..])
}

pub(super) fn parse_content(reader: &mut &[u8]) -> Result<Markers2Content> {
	let version = Version::read(reader)?;

	let mut markers = Vec::new();
	loop {
		match reader.first() {
			None => break,
			// The entry list ends with a null byte. Padding symbols decode to more null bytes.
			Some(0) => {
				if reader.iter().any(|b| *b != 0) {
					decode_err!(@BAIL Markers2, "Found data after the end of the entry list");
				}

				break;
			},
			Some(_) => markers.push(read_marker(reader)?),
		}
	}

	log::trace!("Markers2: Found {} entries", markers.len());
	Ok(Markers2Content { version, markers })
}

fn read_marker(reader: &mut &[u8]) -> Result<Marker> {
	let name = read_terminated_string(reader)?;
	let body = take_sized(reader)?;

	let body_reader = &mut &body[..];
	let marker = match name.as_str() {
		"COLOR" => Marker::Color(read_color_marker(body_reader)?),
		"BPMLOCK" => Marker::BpmLock(BpmLockMarker {
			is_locked: read_flag(body_reader)?,
		}),
		"CUE" => Marker::Cue(read_cue(body_reader)?),
		"LOOP" => Marker::Loop(read_loop(body_reader)?),
		"FLIP" => Marker::Flip(read_flip(body_reader)?),
		_ => {
			log::debug!("Markers2: Keeping unknown entry `{name}` ({} bytes)", body.len());
			return Ok(Marker::Unknown(UnknownMarker {
				name,
				data: fallible_to_vec(body)?,
			}));
		},
	};

	if !body_reader.is_empty() {
		decode_err!(@BAIL Markers2, "Found trailing data in an entry");
	}

	Ok(marker)
}

/// Take a body prefixed with its u32 length
fn take_sized<'a>(reader: &mut &'a [u8]) -> Result<&'a [u8]> {
	let len = reader.read_u32::<BigEndian>()? as usize;
	if reader.len() < len {
		err!(ParseIncomplete);
	}

	let (body, rest) = reader.split_at(len);
	*reader = rest;
	Ok(body)
}

fn expect_null(reader: &mut &[u8]) -> Result<()> {
	if reader.read_u8()? != 0 {
		decode_err!(@BAIL Markers2, "Expected a null byte");
	}

	Ok(())
}

fn read_flag(reader: &mut &[u8]) -> Result<bool> {
	match flag_byte(reader.read_u8()?) {
		Some(flag) => Ok(flag),
		None => Err(decode_err!(Markers2, "Encountered an invalid boolean")),
	}
}

fn read_position(reader: &mut &[u8]) -> Result<Position> {
	Ok(Position::from(reader.read_u32::<BigEndian>()?))
}

fn read_color_marker(reader: &mut &[u8]) -> Result<TrackColorMarker> {
	expect_null(reader)?;
	let color = Color::read(reader)?;

	Ok(TrackColorMarker { color })
}

fn read_cue(reader: &mut &[u8]) -> Result<Cue> {
	expect_null(reader)?;
	let index = reader.read_u8()?;
	let position = read_position(reader)?;
	expect_null(reader)?;
	let color = Color::read(reader)?;
	expect_null(reader)?;
	expect_null(reader)?;
	let label = read_terminated_string(reader)?;

	Ok(Cue {
		index,
		position,
		color,
		label,
	})
}

fn read_loop(reader: &mut &[u8]) -> Result<Loop> {
	expect_null(reader)?;
	let index = reader.read_u8()?;
	let start_position = read_position(reader)?;
	let end_position = read_position(reader)?;

	let mut marker = [0; 4];
	reader.read_exact(&mut marker)?;
	if marker != LOOP_MARKER {
		decode_err!(@BAIL Markers2, "Loop is missing its `FF FF FF FF` marker");
	}

	expect_null(reader)?;
	let color = Color::read(reader)?;
	expect_null(reader)?;
	let is_locked = read_flag(reader)?;
	let label = read_terminated_string(reader)?;

	Ok(Loop {
		index,
		start_position,
		end_position,
		color,
		is_locked,
		label,
	})
}

fn read_flip(reader: &mut &[u8]) -> Result<Flip> {
	expect_null(reader)?;
	let index = reader.read_u8()?;
	let is_enabled = read_flag(reader)?;
	let label = read_terminated_string(reader)?;
	let is_loop = read_flag(reader)?;

	let action_count = reader.read_u32::<BigEndian>()? as usize;
	// Every action takes at least 5 bytes
	if action_count.saturating_mul(5) > reader.len() {
		err!(ParseIncomplete);
	}

	let mut actions = Vec::try_with_capacity_stable(action_count)?;
	for _ in 0..action_count {
		actions.push(read_flip_action(reader)?);
	}

	Ok(Flip {
		index,
		is_enabled,
		label,
		is_loop,
		actions,
	})
}

fn read_flip_action(reader: &mut &[u8]) -> Result<FlipAction> {
	let id = reader.read_u8()?;
	let body = take_sized(reader)?;

	let body_reader = &mut &body[..];
	let action = match id {
		JumpFlipAction::ID => FlipAction::Jump(JumpFlipAction {
			source_position_seconds: body_reader.read_f64::<BigEndian>()?,
			target_position_seconds: body_reader.read_f64::<BigEndian>()?,
		}),
		CensorFlipAction::ID => FlipAction::Censor(CensorFlipAction {
			start_position_seconds: body_reader.read_f64::<BigEndian>()?,
			end_position_seconds: body_reader.read_f64::<BigEndian>()?,
			speed_factor: body_reader.read_f64::<BigEndian>()?,
		}),
		_ => {
			log::debug!("Markers2: Keeping unknown Flip action {id} ({} bytes)", body.len());
			return Ok(FlipAction::Unknown(UnknownFlipAction {
				id,
				data: fallible_to_vec(body)?,
			}));
		},
	};

	if !body_reader.is_empty() {
		decode_err!(@BAIL Markers2, "Found trailing data in a Flip action");
	}

	Ok(action)
}
