use super::read::LOOP_MARKER;
use super::{Marker, Markers2Content};
use crate::envelope;
use crate::error::Result;
use crate::macros::err;
use crate::tag::items::{Color, Cue, Flip, FlipAction, Loop};
use crate::util::text::write_terminated_string;

use data_encoding::BASE64;

use byteorder::{BigEndian, WriteBytesExt};

/// Encode the content as Serato does, padding symbols replaced by `A`
pub(super) fn write_text(writer: &mut Vec<u8>, content: &Markers2Content) -> Result<()> {
	let content = write_content(content)?;

	let mut encoded = BASE64.encode(&content).into_bytes();
	for symbol in &mut encoded {
		if *symbol == b'=' {
			*symbol = b'A';
		}
	}

	writer.extend_from_slice(&envelope::wrap_lines(&encoded));
	Ok(())
}

/// Pad `writer` with null bytes up to `size`
pub(super) fn pad(writer: &mut Vec<u8>, size: usize) {
	if writer.len() < size {
		writer.resize(size, 0);
	}
}

pub(super) fn write_content(content: &Markers2Content) -> Result<Vec<u8>> {
	let mut writer = Vec::new();
	content.version.write(&mut writer)?;

	for marker in &content.markers {
		let mut body = Vec::new();
		match marker {
			Marker::Unknown(unknown) => body.extend_from_slice(&unknown.data),
			Marker::Color(track_color) => write_color_marker(&mut body, track_color.color)?,
			Marker::BpmLock(bpm_lock) => body.write_u8(u8::from(bpm_lock.is_locked))?,
			Marker::Cue(cue) => write_cue(&mut body, cue)?,
			Marker::Loop(saved_loop) => write_loop(&mut body, saved_loop)?,
			Marker::Flip(flip) => write_flip(&mut body, flip)?,
		}

		write_terminated_string(&mut writer, marker.name())?;
		write_sized(&mut writer, &body)?;
	}

	writer.write_u8(0)?;
	Ok(writer)
}

fn write_sized(writer: &mut Vec<u8>, body: &[u8]) -> Result<()> {
	let Ok(len) = u32::try_from(body.len()) else {
		err!(TooMuchData);
	};

	writer.write_u32::<BigEndian>(len)?;
	writer.extend_from_slice(body);
	Ok(())
}

fn write_color_marker(writer: &mut Vec<u8>, color: Color) -> Result<()> {
	writer.write_u8(0)?;
	color.write(writer)
}

fn write_cue(writer: &mut Vec<u8>, cue: &Cue) -> Result<()> {
	writer.write_u8(0)?;
	writer.write_u8(cue.index)?;
	writer.write_u32::<BigEndian>(cue.position.millis)?;
	writer.write_u8(0)?;
	cue.color.write(writer)?;
	writer.extend_from_slice(&[0, 0]);
	write_terminated_string(writer, &cue.label)
}

fn write_loop(writer: &mut Vec<u8>, saved_loop: &Loop) -> Result<()> {
	writer.write_u8(0)?;
	writer.write_u8(saved_loop.index)?;
	writer.write_u32::<BigEndian>(saved_loop.start_position.millis)?;
	writer.write_u32::<BigEndian>(saved_loop.end_position.millis)?;
	writer.extend_from_slice(&LOOP_MARKER);
	writer.write_u8(0)?;
	saved_loop.color.write(writer)?;
	writer.write_u8(0)?;
	writer.write_u8(u8::from(saved_loop.is_locked))?;
	write_terminated_string(writer, &saved_loop.label)
}

fn write_flip(writer: &mut Vec<u8>, flip: &Flip) -> Result<()> {
	let Ok(action_count) = u32::try_from(flip.actions.len()) else {
		err!(TooMuchData);
	};

	writer.write_u8(0)?;
	writer.write_u8(flip.index)?;
	writer.write_u8(u8::from(flip.is_enabled))?;
	write_terminated_string(writer, &flip.label)?;
	writer.write_u8(u8::from(flip.is_loop))?;
	writer.write_u32::<BigEndian>(action_count)?;

	for action in &flip.actions {
		let mut body = Vec::new();
		match action {
			FlipAction::Jump(jump) => {
				body.write_f64::<BigEndian>(jump.source_position_seconds)?;
				body.write_f64::<BigEndian>(jump.target_position_seconds)?;
			},
			FlipAction::Censor(censor) => {
				body.write_f64::<BigEndian>(censor.start_position_seconds)?;
				body.write_f64::<BigEndian>(censor.end_position_seconds)?;
				body.write_f64::<BigEndian>(censor.speed_factor)?;
			},
			FlipAction::Unknown(unknown) => body.extend_from_slice(&unknown.data),
		}

		writer.write_u8(action.id())?;
		write_sized(writer, &body)?;
	}

	Ok(())
}
