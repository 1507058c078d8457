//! Serato's 32-bit encoding for 24-bit values
//!
//! Some tags store 3-byte values (positions and colors) in 4 bytes, with the most significant
//! bit of every byte cleared. The 24 payload bits are split into four groups, the leading group
//! holding 3 bits and the others 7 bits each:
//!
//! ```text
//! Plain:    aaabbbbb bbcccccc cddddddd
//! Encoded:  00000aaa 0bbbbbbb 0ccccccc 0ddddddd
//! ```
//!
//! This is similar to the synchsafe integers used in ID3v2, but with a different bit layout.

use crate::error::Result;
use crate::macros::{decode_err, err};
use crate::tag::items::Color;

use std::io::{Read, Write};

/// Encode a 3-byte value into Serato's 4-byte representation
///
/// # Examples
///
/// ```rust
/// use serato_tags::serato32;
///
/// assert_eq!(serato32::encode([0xCC, 0x00, 0x00]), [0x06, 0x30, 0x00, 0x00]);
/// assert_eq!(serato32::encode([0xFF, 0xFF, 0xFF]), [0x07, 0x7F, 0x7F, 0x7F]);
/// ```
pub fn encode(plain: [u8; 3]) -> [u8; 4] {
	let [d1, d2, d3] = plain;

	let enc4 = d3 & 0x7F;
	let enc3 = ((d3 >> 7) | (d2 << 1)) & 0x7F;
	let enc2 = ((d2 >> 6) | (d1 << 2)) & 0x7F;
	let enc1 = d1 >> 5;

	[enc1, enc2, enc3, enc4]
}

/// Decode Serato's 4-byte representation into a 3-byte value
///
/// The high bit of every input byte, and all but the lowest 3 bits of the first byte, are ignored.
/// Use [`take`] to reject such input instead.
///
/// # Examples
///
/// ```rust
/// use serato_tags::serato32;
///
/// assert_eq!(serato32::decode([0x06, 0x30, 0x00, 0x00]), [0xCC, 0x00, 0x00]);
/// ```
pub fn decode(encoded: [u8; 4]) -> [u8; 3] {
	let [e1, e2, e3, e4] = encoded;

	let d3 = (e4 & 0x7F) | ((e3 & 0x01) << 7);
	let d2 = ((e3 & 0x7F) >> 1) | ((e2 & 0x03) << 6);
	let d1 = ((e2 & 0x7F) >> 2) | ((e1 & 0x07) << 5);

	[d1, d2, d3]
}

fn is_canonical(encoded: [u8; 4]) -> bool {
	encoded[0] <= 0x07 && encoded[1..].iter().all(|b| b & 0x80 == 0)
}

/// Read 4 encoded bytes from `reader` and decode them
///
/// # Errors
///
/// * The reader does not contain 4 more bytes
/// * The bytes are not a valid encoding (a most significant bit is set, or the leading group is
///   wider than 3 bits)
///
/// # Examples
///
/// ```rust
/// use serato_tags::serato32;
///
/// # fn main() -> serato_tags::error::Result<()> {
/// let mut reader = &[0x00, 0x00, 0x03, 0x0C][..];
/// assert_eq!(serato32::take(&mut reader)?, [0x00, 0x01, 0x8C]);
/// # Ok(()) }
/// ```
pub fn take<R>(reader: &mut R) -> Result<[u8; 3]>
where
	R: Read,
{
	let mut encoded = [0; 4];
	reader.read_exact(&mut encoded)?;

	if !is_canonical(encoded) {
		decode_err!(@BAIL "serato32: Encountered a non-canonical value");
	}

	Ok(decode(encoded))
}

/// Encode a 3-byte value and write it to `writer`
///
/// # Errors
///
/// * Writing to `writer` fails
pub fn write<W>(writer: &mut W, plain: [u8; 3]) -> Result<()>
where
	W: Write,
{
	writer.write_all(&encode(plain))?;
	Ok(())
}

/// Read an encoded RGB [`Color`]
///
/// # Errors
///
/// See [`take`]
pub fn take_color<R>(reader: &mut R) -> Result<Color>
where
	R: Read,
{
	let [red, green, blue] = take(reader)?;
	Ok(Color { red, green, blue })
}

/// Write an encoded RGB [`Color`]
///
/// # Errors
///
/// * Writing to `writer` fails
pub fn write_color<W>(writer: &mut W, color: Color) -> Result<()>
where
	W: Write,
{
	write(writer, [color.red, color.green, color.blue])
}

/// Read an encoded 24-bit unsigned integer
///
/// # Errors
///
/// See [`take`]
///
/// # Examples
///
/// ```rust
/// use serato_tags::serato32;
///
/// # fn main() -> serato_tags::error::Result<()> {
/// let mut reader = &[0x00, 0x00, 0x03, 0x0C][..];
/// assert_eq!(serato32::take_u32(&mut reader)?, 396);
/// # Ok(()) }
/// ```
pub fn take_u32<R>(reader: &mut R) -> Result<u32>
where
	R: Read,
{
	let [b1, b2, b3] = take(reader)?;
	Ok(u32::from_be_bytes([0, b1, b2, b3]))
}

/// Write a 24-bit unsigned integer in its encoded form
///
/// # Errors
///
/// * `value` does not fit in 24 bits ([`ErrorKind::TooMuchData`](crate::error::ErrorKind::TooMuchData))
/// * Writing to `writer` fails
pub fn write_u32<W>(writer: &mut W, value: u32) -> Result<()>
where
	W: Write,
{
	const MAXIMUM_INTEGER: u32 = 0xFF_FFFF;

	if value > MAXIMUM_INTEGER {
		err!(TooMuchData);
	}

	let [_, b1, b2, b3] = value.to_be_bytes();
	write(writer, [b1, b2, b3])
}
