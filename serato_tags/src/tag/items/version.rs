use crate::error::Result;

use std::io::{Read, Write};

use byteorder::ReadBytesExt;

/// A `major.minor` version header
///
/// Every Serato tag starts with one of these.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
	/// The major version
	pub major: u8,
	/// The minor version
	pub minor: u8,
}

impl Version {
	/// Create a new `Version`
	///
	/// # Examples
	///
	/// ```rust
	/// use serato_tags::tag::items::Version;
	///
	/// let version = Version::new(2, 1);
	/// assert_eq!(version.to_string(), "2.1");
	/// ```
	pub const fn new(major: u8, minor: u8) -> Self {
		Self { major, minor }
	}

	pub(crate) fn read<R>(reader: &mut R) -> Result<Self>
	where
		R: Read,
	{
		let major = reader.read_u8()?;
		let minor = reader.read_u8()?;
		Ok(Self { major, minor })
	}

	pub(crate) fn write<W>(self, writer: &mut W) -> Result<()>
	where
		W: Write,
	{
		writer.write_all(&[self.major, self.minor])?;
		Ok(())
	}
}

impl std::fmt::Display for Version {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}.{}", self.major, self.minor)
	}
}
