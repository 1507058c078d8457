use crate::error::Result;
use crate::macros::err;

use std::io::Write;

/// Reads a null-terminated UTF-8 string, consuming the terminator
///
/// Hitting the end of the data before a terminator is [`ErrorKind::ParseIncomplete`](crate::error::ErrorKind::ParseIncomplete).
pub(crate) fn read_terminated_string(reader: &mut &[u8]) -> Result<String> {
	let Some(terminator) = reader.iter().position(|b| *b == 0) else {
		err!(ParseIncomplete);
	};

	let (text, rest) = reader.split_at(terminator);
	let text = std::str::from_utf8(text)?.to_owned();

	*reader = &rest[1..];
	Ok(text)
}

pub(crate) fn write_terminated_string<W>(writer: &mut W, text: &str) -> Result<()>
where
	W: Write,
{
	writer.write_all(text.as_bytes())?;
	writer.write_all(&[0])?;
	Ok(())
}
