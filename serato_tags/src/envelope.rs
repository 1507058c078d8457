//! Base64 envelopes used by FLAC and MP4
//!
//! Text-oriented containers can't hold the binary tag layouts directly, so Serato wraps them:
//!
//! ```text
//! base64(b"application/octet-stream\0\0" + NAME + b"\0" + payload)
//! ```
//!
//! The embedded `NAME` is the tag's ID3 description (ex. `"Serato BeatGrid"`), and is checked
//! against the expected tag when decoding. Serato writes the base64 text without padding and wraps it
//! every 72 symbols. Unless the symbol count is 2 (mod 4), it then appends a stray `A`, which readers
//! have to drop.

use crate::error::{ErrorKind, Result, SeratoError};
use crate::macros::err;

use data_encoding::{BASE64, BASE64_NOPAD};

const ENVELOPE_PREFIX: &[u8] = b"application/octet-stream\0\0";
pub(crate) const LINE_LENGTH: usize = 72;

/// Whether `byte` belongs to the standard base64 alphabet, padding included
pub fn is_base64(byte: u8) -> bool {
	byte.is_ascii_alphanumeric() || byte == b'+' || byte == b'/' || byte == b'='
}

/// Whether `byte` is a newline
pub fn is_newline(byte: u8) -> bool {
	byte == b'\n'
}

/// Split off the longest prefix of `input` made of base64 symbols and newlines
///
/// Returns the prefix and the remaining data.
///
/// # Examples
///
/// ```rust
/// use serato_tags::envelope::take_base64_with_newline;
///
/// let (base64, rest) = take_base64_with_newline(b"QUJD\nREVG\0\0");
/// assert_eq!(base64, b"QUJD\nREVG");
/// assert_eq!(rest, b"\0\0");
/// ```
pub fn take_base64_with_newline(input: &[u8]) -> (&[u8], &[u8]) {
	let end = input
		.iter()
		.position(|b| !is_base64(*b) && !is_newline(*b))
		.unwrap_or(input.len());

	input.split_at(end)
}

/// Decode standard, padded base64, ignoring any newlines
///
/// # Errors
///
/// * The symbol count (without newlines) is not a multiple of 4 ([`ErrorKind::Base64InvalidLength`])
/// * `input` contains an invalid symbol ([`ErrorKind::Base64Decode`])
///
/// # Examples
///
/// ```rust
/// use serato_tags::envelope::base64_decode;
///
/// # fn main() -> serato_tags::error::Result<()> {
/// // The wrap position doesn't matter
/// assert_eq!(base64_decode(b"U2Vy\nYXRv")?, b"Serato");
/// assert_eq!(base64_decode(b"U2VyYX\nRv")?, b"Serato");
/// # Ok(()) }
/// ```
pub fn base64_decode(input: &[u8]) -> Result<Vec<u8>> {
	let encoded = strip_newlines(input);

	if encoded.len() % 4 != 0 {
		err!(Base64InvalidLength {
			length: encoded.len()
		});
	}

	Ok(BASE64.decode(&encoded)?)
}

/// Encode `input` as standard, padded base64, with a newline after every 72 symbols
///
/// # Examples
///
/// ```rust
/// use serato_tags::envelope::base64_encode;
///
/// assert_eq!(base64_encode(b"Serato"), b"U2VyYXRv");
/// assert_eq!(base64_encode(&[0; 60]).iter().filter(|b| **b == b'\n').count(), 1);
/// ```
pub fn base64_encode(input: &[u8]) -> Vec<u8> {
	wrap_lines(BASE64.encode(input).as_bytes())
}

pub(crate) fn wrap_lines(encoded: &[u8]) -> Vec<u8> {
	let mut wrapped = Vec::with_capacity(encoded.len() + encoded.len() / LINE_LENGTH);
	for (i, line) in encoded.chunks(LINE_LENGTH).enumerate() {
		if i > 0 {
			wrapped.push(b'\n');
		}

		wrapped.extend_from_slice(line);
	}

	wrapped
}

/// Decode base64 that may lack padding, dropping a single stray trailing symbol
pub(crate) fn base64_decode_unpadded(input: &[u8]) -> Result<Vec<u8>> {
	let mut encoded = strip_newlines(input);

	while encoded.last() == Some(&b'=') {
		encoded.pop();
	}

	// A single symbol can't encode a full byte
	if encoded.len() % 4 == 1 {
		log::debug!("Dropping stray trailing base64 symbol");
		encoded.pop();
	}

	decode_restoring_padding(encoded)
}

// Serato's envelope text is unpadded, with a stray symbol after any symbol count other than 2 (mod 4).
// A count of 3 (mod 4) never comes from Serato, and is decoded as is. Padded text has no stray symbol.
fn base64_decode_envelope(input: &[u8]) -> Result<Vec<u8>> {
	let mut encoded = strip_newlines(input);
	if encoded.last() == Some(&b'=') {
		return base64_decode(&encoded);
	}

	if matches!(encoded.len() % 4, 0 | 1) {
		log::debug!("Dropping stray trailing base64 symbol");
		encoded.pop();
	}

	decode_restoring_padding(encoded)
}

fn decode_restoring_padding(mut encoded: Vec<u8>) -> Result<Vec<u8>> {
	while encoded.len() % 4 != 0 {
		encoded.push(b'=');
	}

	base64_decode(&encoded)
}

fn strip_newlines(input: &[u8]) -> Vec<u8> {
	input.iter().copied().filter(|b| !is_newline(*b)).collect()
}

/// Split a decoded envelope into the tag name and payload
///
/// # Errors
///
/// * `input` doesn't start with `application/octet-stream\0\0`
/// * The name is not terminated
/// * The name is not valid UTF-8
///
/// # Examples
///
/// ```rust
/// use serato_tags::envelope::parse_envelope;
///
/// # fn main() -> serato_tags::error::Result<()> {
/// let (name, payload) = parse_envelope(b"application/octet-stream\0\0Serato Analysis\0\x02\x01")?;
/// assert_eq!(name, "Serato Analysis");
/// assert_eq!(payload, [2, 1]);
/// # Ok(()) }
/// ```
pub fn parse_envelope(input: &[u8]) -> Result<(&str, &[u8])> {
	let Some(content) = input.strip_prefix(ENVELOPE_PREFIX) else {
		err!(EnvelopeParse);
	};

	let Some(name_end) = content.iter().position(|b| *b == 0) else {
		err!(EnvelopeParse);
	};

	let Ok(name) = std::str::from_utf8(&content[..name_end]) else {
		err!(EnvelopeParse);
	};

	Ok((name, &content[name_end + 1..]))
}

/// Decode an envelope, returning the embedded name and payload
///
/// # Errors
///
/// * `input` contains anything other than base64 symbols and newlines ([`ErrorKind::EnvelopeParse`])
/// * The base64 data is invalid
/// * See [`parse_envelope`]
pub fn envelope_decode(input: &[u8]) -> Result<(String, Vec<u8>)> {
	let (encoded, rest) = take_base64_with_newline(input);
	if !rest.is_empty() {
		err!(EnvelopeParse);
	}

	let decoded = base64_decode_envelope(encoded)?;
	let (name, payload) = parse_envelope(&decoded)?;

	Ok((name.to_owned(), payload.to_vec()))
}

/// Decode an envelope, verifying it carries the tag `expected_name`
///
/// # Errors
///
/// * The embedded name differs from `expected_name` ([`ErrorKind::EnvelopeNameMismatch`])
/// * See [`envelope_decode`]
///
/// # Examples
///
/// ```rust
/// use serato_tags::envelope::{envelope_decode_with_name, envelope_encode_with_name};
///
/// # fn main() -> serato_tags::error::Result<()> {
/// let envelope = envelope_encode_with_name("Serato Analysis", &[2, 1]);
///
/// assert_eq!(envelope_decode_with_name(&envelope, "Serato Analysis")?, [2, 1]);
/// assert!(envelope_decode_with_name(&envelope, "Serato Autotags").is_err());
/// # Ok(()) }
/// ```
pub fn envelope_decode_with_name(input: &[u8], expected_name: &str) -> Result<Vec<u8>> {
	let (name, payload) = envelope_decode(input)?;
	if name != expected_name {
		return Err(SeratoError::new(ErrorKind::EnvelopeNameMismatch {
			expected: expected_name.to_owned(),
			actual: name,
		}));
	}

	Ok(payload)
}

/// Wrap `payload` in an envelope named `name`
///
/// The base64 text is unpadded and wrapped every 72 symbols, with the stray trailing `A` Serato
/// writes whenever the symbol count is not 2 (mod 4).
///
/// # Examples
///
/// ```rust
/// use serato_tags::envelope::envelope_encode_with_name;
///
/// // 44 bytes encode to 59 symbols, so an `A` follows
/// let envelope = envelope_encode_with_name("Serato Analysis", &[2, 1]);
/// assert_eq!(envelope.len(), 60);
/// assert!(envelope.ends_with(b"AgEA"));
/// ```
pub fn envelope_encode_with_name(name: &str, payload: &[u8]) -> Vec<u8> {
	let mut plain = Vec::with_capacity(ENVELOPE_PREFIX.len() + name.len() + 1 + payload.len());
	plain.extend_from_slice(ENVELOPE_PREFIX);
	plain.extend_from_slice(name.as_bytes());
	plain.push(0);
	plain.extend_from_slice(payload);

	let encoded = BASE64_NOPAD.encode(&plain);
	let mut envelope = wrap_lines(encoded.as_bytes());
	if encoded.len() % 4 != 2 {
		envelope.push(b'A');
	}

	envelope
}
