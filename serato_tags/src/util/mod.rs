pub(crate) mod alloc;
pub(crate) mod text;

pub(crate) fn flag_byte(byte: u8) -> Option<bool> {
	match byte {
		0 => Some(false),
		1 => Some(true),
		_ => None,
	}
}
