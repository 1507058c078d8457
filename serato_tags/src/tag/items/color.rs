use crate::error::Result;

use std::io::{Read, Write};

/// An RGB color
///
/// # Hotcue colors
///
/// Serato stores hotcue colors from the palette of the legacy Serato DJ Intro. Serato DJ Pro and
/// Lite display them from their own palette of 18 colors instead, so the color a user picks is not
/// necessarily the color found in the tag. Use [`Color::into_pro_hotcue_color`] and
/// [`Color::into_intro_hotcue_color`] to convert between the two.
///
/// | Intro (stored) | Pro (displayed) |
/// | -------------- | --------------- |
/// | `#CC0000`      | `#C02626`       |
/// | `#CC4400`      | `#DB4E27`       |
/// | `#CC8800`      | `#F8821A`       |
/// | `#CCCC00`      | `#FAC313`       |
/// | `#88CC00`      | `#4EB648`       |
/// | `#44CC00`      | `#006838`       |
/// | `#00CC00`      | `#1FAD26`       |
/// | `#00CC44`      | `#8DC63F`       |
/// | `#00CC88`      | `#2B3673`       |
/// | `#00CCCC`      | `#1DBEBD`       |
/// | `#0088CC`      | `#0F88CA`       |
/// | `#0044CC`      | `#16308B`       |
/// | `#0000CC`      | `#173BA2`       |
/// | `#4400CC`      | `#5C3F97`       |
/// | `#8800CC`      | `#6823B6`       |
/// | `#CC00CC`      | `#CE359E`       |
/// | `#CC0088`      | `#DC1D49`       |
/// | `#CC0044`      | `#C71136`       |
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
	/// Red channel
	pub red: u8,
	/// Green channel
	pub green: u8,
	/// Blue channel
	pub blue: u8,
}

impl Color {
	/// Create a new `Color`
	pub const fn new(red: u8, green: u8, blue: u8) -> Self {
		Self { red, green, blue }
	}

	/// Create a `Color` from a packed `0xRRGGBB` value, ignoring the highest byte
	///
	/// # Examples
	///
	/// ```rust
	/// use serato_tags::tag::items::Color;
	///
	/// assert_eq!(Color::from_rgb(0xCC8800), Color::new(0xCC, 0x88, 0x00));
	/// ```
	pub const fn from_rgb(code: u32) -> Self {
		let [_, red, green, blue] = code.to_be_bytes();
		Self { red, green, blue }
	}

	/// Pack the color into a `0xRRGGBB` value
	pub const fn to_rgb(self) -> u32 {
		u32::from_be_bytes([0, self.red, self.green, self.blue])
	}

	/// Get the color Serato DJ Pro displays for this stored hotcue color
	///
	/// Colors outside of the Serato DJ Intro palette are returned unchanged.
	///
	/// # Examples
	///
	/// ```rust
	/// use serato_tags::tag::items::Color;
	///
	/// let stored = Color::from_rgb(0xCC8800);
	/// assert_eq!(stored.into_pro_hotcue_color(), Color::from_rgb(0xF8821A));
	///
	/// let custom = Color::from_rgb(0xC0FFEE);
	/// assert_eq!(custom.into_pro_hotcue_color(), custom);
	/// ```
	pub fn into_pro_hotcue_color(self) -> Self {
		match HOTCUE_COLORS_INTRO.iter().position(|&c| c == self.to_rgb()) {
			Some(index) => Self::from_rgb(HOTCUE_COLORS_PRO[index]),
			None => self,
		}
	}

	/// Get the color to store for a hotcue color picked in Serato DJ Pro
	///
	/// Colors outside of the Serato DJ Pro palette are returned unchanged.
	///
	/// # Examples
	///
	/// ```rust
	/// use serato_tags::tag::items::Color;
	///
	/// let displayed = Color::from_rgb(0xF8821A);
	/// assert_eq!(displayed.into_intro_hotcue_color(), Color::from_rgb(0xCC8800));
	/// ```
	pub fn into_intro_hotcue_color(self) -> Self {
		match HOTCUE_COLORS_PRO.iter().position(|&c| c == self.to_rgb()) {
			Some(index) => Self::from_rgb(HOTCUE_COLORS_INTRO[index]),
			None => self,
		}
	}

	/// Read a raw 3-byte RGB color
	pub(crate) fn read<R>(reader: &mut R) -> Result<Self>
	where
		R: Read,
	{
		let mut rgb = [0; 3];
		reader.read_exact(&mut rgb)?;

		let [red, green, blue] = rgb;
		Ok(Self { red, green, blue })
	}

	/// Write a raw 3-byte RGB color
	pub(crate) fn write<W>(self, writer: &mut W) -> Result<()>
	where
		W: Write,
	{
		writer.write_all(&[self.red, self.green, self.blue])?;
		Ok(())
	}
}

impl From<u32> for Color {
	fn from(code: u32) -> Self {
		Self::from_rgb(code)
	}
}

impl From<Color> for u32 {
	fn from(color: Color) -> Self {
		color.to_rgb()
	}
}

const HOTCUE_COLORS_INTRO: [u32; 18] = [
	0xCC0000, 0xCC4400, 0xCC8800, 0xCCCC00, 0x88CC00, 0x44CC00, 0x00CC00, 0x00CC44, 0x00CC88,
	0x00CCCC, 0x0088CC, 0x0044CC, 0x0000CC, 0x4400CC, 0x8800CC, 0xCC00CC, 0xCC0088, 0xCC0044,
];

const HOTCUE_COLORS_PRO: [u32; 18] = [
	0xC02626, 0xDB4E27, 0xF8821A, 0xFAC313, 0x4EB648, 0x006838, 0x1FAD26, 0x8DC63F, 0x2B3673,
	0x1DBEBD, 0x0F88CA, 0x16308B, 0x173BA2, 0x5C3F97, 0x6823B6, 0xCE359E, 0xDC1D49, 0xC71136,
];
