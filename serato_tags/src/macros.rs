macro_rules! try_vec {
	($elem:expr; $size:expr) => {{ $crate::util::alloc::fallible_vec_from_element($elem, $size)? }};
}

// Shorthand for return Err(SeratoError::new(ErrorKind::Foo))
//
// Usage:
// - err!(Variant)          -> return Err(SeratoError::new(ErrorKind::Variant))
// - err!(Variant(Value))   -> return Err(SeratoError::new(ErrorKind::Variant(Value)))
// - err!(Variant { field }) -> return Err(SeratoError::new(ErrorKind::Variant { field }))
macro_rules! err {
	($variant:ident) => {
		return Err(crate::error::SeratoError::new(
			crate::error::ErrorKind::$variant,
		))
	};
	($variant:ident($($value:expr),+ $(,)?)) => {
		return Err(crate::error::SeratoError::new(
			crate::error::ErrorKind::$variant($($value),+),
		))
	};
	($variant:ident { $($field:ident $(: $value:expr)?),+ $(,)? }) => {
		return Err(crate::error::SeratoError::new(
			crate::error::ErrorKind::$variant { $($field $(: $value)?),+ },
		))
	};
}

// Shorthand for ParseError::new(TagType::Foo, "Message")
//
// Usage:
//
// - decode_err!(Variant, Message)
// - decode_err!(Message)
//
// or bail:
//
// - decode_err!(@BAIL Variant, Message)
// - decode_err!(@BAIL Message)
macro_rules! decode_err {
	($tag_ty:ident, $reason:literal) => {
		Into::<crate::error::SeratoError>::into(crate::error::ParseError::new(
			crate::tag::TagType::$tag_ty,
			$reason,
		))
	};
	($reason:literal) => {
		Into::<crate::error::SeratoError>::into(crate::error::ParseError::from_description(
			$reason,
		))
	};
	(@BAIL $($tag_ty:ident,)? $reason:literal) => {
		return Err(decode_err!($($tag_ty,)? $reason))
	};
}

// Rejects a host format that does not carry the tag
//
// Usage:
//
// - unsupported_format!(TagKind, format)
macro_rules! unsupported_format {
	($tag_ty:ident, $format:expr) => {
		return Err(crate::error::SeratoError::new(
			crate::error::ErrorKind::UnsupportedTagFormat(crate::tag::TagType::$tag_ty, $format),
		))
	};
}

pub(crate) use {decode_err, err, try_vec, unsupported_format};
