//! Framing constants and line-level helpers.

use crate::error::ParseError;

/// CRLF line ending
pub const CRLF: &[u8] = b"\r\n";

/// RESP2 type markers
pub const SIMPLE_STRING: u8 = b'+';
pub const ERROR: u8 = b'-';
pub const INTEGER: u8 = b':';
pub const BULK_STRING: u8 = b'$';
pub const ARRAY: u8 = b'*';

/// Peek one CRLF-terminated line without consuming it.
///
/// Returns the line contents (without CRLF) and the total number of bytes the
/// line occupies, or `None` when no full line is buffered yet.
#[inline]
pub fn peek_line(buf: &[u8]) -> Option<(&[u8], usize)> {
	let pos = memchr::memmem::find(buf, CRLF)?;
	Some((&buf[..pos], pos + 2))
}

/// Parse a signed base-10 integer from a line.
///
/// RESP integer lines and length prefixes share this grammar; anything that
/// is not a plain decimal i64 is a framing error.
#[inline]
pub fn parse_decimal(line: &[u8]) -> Result<i64, ParseError> {
	let s = std::str::from_utf8(line)
		.map_err(|_| ParseError::InvalidInteger(String::from_utf8_lossy(line).into_owned()))?;
	s.parse::<i64>()
		.map_err(|_| ParseError::InvalidInteger(s.to_string()))
}
