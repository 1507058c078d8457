//! Contains the errors that can arise within serato_tags
//!
//! The primary error is [`SeratoError`]. The type of error is determined by [`ErrorKind`],
//! which can be extended at any time.

use crate::tag::{TagFormat, TagType};

use std::collections::TryReserveError;
use std::fmt::{Debug, Display, Formatter};

/// Alias for `Result<T, SeratoError>`
pub type Result<T> = std::result::Result<T, SeratoError>;

/// The types of errors that can occur
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
	// Tag data related errors
	/// The data does not follow the expected layout
	Parse(ParseError),
	/// The data ended before the structure was complete
	ParseIncomplete,
	/// Arises when reading or writing a tag in a host format that does not carry it
	UnsupportedTagFormat(TagType, TagFormat),
	/// Arises when writing a tag that is absent from a [`TagContainer`](crate::tag::TagContainer)
	NoTagDataAvailable(TagType),
	/// Attempting to read/write an abnormally large amount of data
	TooMuchData,

	// Envelope related errors
	/// Base64 data contains an invalid symbol
	Base64Decode(data_encoding::DecodeError),
	/// Base64 data (with newlines removed) is not a multiple of 4 symbols long
	Base64InvalidLength {
		/// The number of symbols
		length: usize,
	},
	/// The decoded envelope does not have the expected structure
	EnvelopeParse,
	/// The envelope carries a different tag than the one requested
	EnvelopeNameMismatch {
		/// The name of the requested tag
		expected: String,
		/// The name found in the envelope
		actual: String,
	},

	// Conversions for external errors
	/// Unable to convert bytes to a String
	StringFromUtf8(std::string::FromUtf8Error),
	/// Unable to convert bytes to a str
	StrFromUtf8(std::str::Utf8Error),
	/// Represents all other cases of [`std::io::Error`].
	Io(std::io::Error),
	/// Failure to allocate enough memory
	Alloc(TryReserveError),
}

/// An error that arises while decoding tag data
pub struct ParseError {
	tag: Option<TagType>,
	description: &'static str,
}

impl ParseError {
	/// Create a `ParseError` from a [`TagType`] and description
	///
	/// # Examples
	///
	/// ```rust
	/// use serato_tags::error::ParseError;
	/// use serato_tags::tag::TagType;
	///
	/// let err = ParseError::new(TagType::Beatgrid, "Beatgrid has no terminal marker");
	/// assert_eq!(err.tag(), Some(TagType::Beatgrid));
	/// ```
	#[must_use]
	pub const fn new(tag: TagType, description: &'static str) -> Self {
		Self {
			tag: Some(tag),
			description,
		}
	}

	/// Create a `ParseError` without binding it to a [`TagType`]
	pub fn from_description(description: &'static str) -> Self {
		Self {
			tag: None,
			description,
		}
	}

	/// Returns the associated [`TagType`], if one exists
	pub fn tag(&self) -> Option<TagType> {
		self.tag
	}

	/// Returns the error description
	pub fn description(&self) -> &str {
		self.description
	}
}

impl Debug for ParseError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		if let Some(tag) = self.tag {
			write!(f, "{:?}: {:?}", tag, self.description)
		} else {
			write!(f, "{:?}", self.description)
		}
	}
}

impl Display for ParseError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		if let Some(tag) = self.tag {
			write!(f, "{}: {}", tag.name(), self.description)
		} else {
			write!(f, "{}", self.description)
		}
	}
}

/// Errors that could occur within serato_tags
pub struct SeratoError {
	pub(crate) kind: ErrorKind,
}

impl SeratoError {
	/// Create a `SeratoError` from an [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use serato_tags::error::{ErrorKind, SeratoError};
	///
	/// let incomplete = SeratoError::new(ErrorKind::ParseIncomplete);
	/// ```
	#[must_use]
	pub const fn new(kind: ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use serato_tags::error::{ErrorKind, SeratoError};
	///
	/// let incomplete = SeratoError::new(ErrorKind::ParseIncomplete);
	/// if let ErrorKind::ParseIncomplete = incomplete.kind() {
	/// 	println!("Where's the rest of the tag?");
	/// }
	/// ```
	pub fn kind(&self) -> &ErrorKind {
		&self.kind
	}
}

impl std::error::Error for SeratoError {}

impl Debug for SeratoError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.kind)
	}
}

impl From<ParseError> for SeratoError {
	fn from(input: ParseError) -> Self {
		Self {
			kind: ErrorKind::Parse(input),
		}
	}
}

impl From<data_encoding::DecodeError> for SeratoError {
	fn from(input: data_encoding::DecodeError) -> Self {
		Self {
			kind: ErrorKind::Base64Decode(input),
		}
	}
}

impl From<std::io::Error> for SeratoError {
	fn from(input: std::io::Error) -> Self {
		// All tag data is read from memory, running out of it means the input was cut short
		if input.kind() == std::io::ErrorKind::UnexpectedEof {
			return Self {
				kind: ErrorKind::ParseIncomplete,
			};
		}

		Self {
			kind: ErrorKind::Io(input),
		}
	}
}

impl From<std::string::FromUtf8Error> for SeratoError {
	fn from(input: std::string::FromUtf8Error) -> Self {
		Self {
			kind: ErrorKind::StringFromUtf8(input),
		}
	}
}

impl From<std::str::Utf8Error> for SeratoError {
	fn from(input: std::str::Utf8Error) -> Self {
		Self {
			kind: ErrorKind::StrFromUtf8(input),
		}
	}
}

impl From<TryReserveError> for SeratoError {
	fn from(input: TryReserveError) -> Self {
		Self {
			kind: ErrorKind::Alloc(input),
		}
	}
}

impl Display for SeratoError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.kind {
			// Conversions
			ErrorKind::StringFromUtf8(ref err) => write!(f, "{err}"),
			ErrorKind::StrFromUtf8(ref err) => write!(f, "{err}"),
			ErrorKind::Io(ref err) => write!(f, "{err}"),
			ErrorKind::Alloc(ref err) => write!(f, "{err}"),

			ErrorKind::Parse(ref parse_err) => write!(f, "{parse_err}"),
			ErrorKind::ParseIncomplete => write!(f, "Tag data ended unexpectedly"),
			ErrorKind::UnsupportedTagFormat(tag, format) => write!(
				f,
				"The tag `{}` is not stored in {format:?} metadata",
				tag.name()
			),
			ErrorKind::NoTagDataAvailable(tag) => {
				write!(f, "No data available for the tag `{}`", tag.name())
			},
			ErrorKind::TooMuchData => write!(
				f,
				"Attempted to read/write an abnormally large amount of data"
			),

			ErrorKind::Base64Decode(ref err) => write!(f, "Malformed base64 data: {err}"),
			ErrorKind::Base64InvalidLength { length } => write!(
				f,
				"Invalid base64 length ({length} symbols), expected a multiple of 4"
			),
			ErrorKind::EnvelopeParse => write!(f, "Envelope: Encountered malformed content"),
			ErrorKind::EnvelopeNameMismatch {
				ref expected,
				ref actual,
			} => write!(
				f,
				"Envelope: Expected the tag `{expected}`, found `{actual}`"
			),
		}
	}
}
