//! Resumable RESP reply parser.
//!
//! The parser works on a `BytesMut` the caller refills from the stream. It
//! never consumes bytes it cannot turn into progress: a partial reply leaves
//! the buffer untouched at the value boundary and the parser reports
//! `Incomplete`, so the caller can read more bytes and try again. Nested
//! arrays are tracked on an explicit frame stack rather than by call
//! recursion, with a configurable depth cap.

use bytes::Buf;
use bytes::Bytes;
use bytes::BytesMut;

use crate::error::ParseError;
use crate::types::Reply;
use crate::utils::ARRAY;
use crate::utils::BULK_STRING;
use crate::utils::CRLF;
use crate::utils::ERROR;
use crate::utils::INTEGER;
use crate::utils::SIMPLE_STRING;
use crate::utils::parse_decimal;
use crate::utils::peek_line;

/// Default cap on array nesting.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Result of a parsing attempt.
#[derive(Debug)]
pub enum ParseResult {
	/// A complete reply was parsed and consumed from the buffer.
	Complete(Reply),
	/// The buffer does not yet hold a complete reply.
	Incomplete,
	/// The byte stream violates the RESP grammar. The buffer position is no
	/// longer trustworthy; the stream must not be read again.
	Error(ParseError),
}

/// An array under construction: `expected` elements remain to be decoded.
#[derive(Debug)]
struct Frame {
	expected: usize,
	elements: Vec<Reply>,
}

/// A stateful reply parser that supports streaming input.
///
/// State persists across `Incomplete` results, so one parser instance must
/// stay paired with one stream for the stream's lifetime.
#[derive(Debug)]
pub struct ReplyParser {
	frames: Vec<Frame>,
	max_depth: usize,
}

impl Default for ReplyParser {
	fn default() -> Self {
		Self::new()
	}
}

// What parse_step produced: a finished value, or a new array frame.
enum Step {
	Value(Reply),
	FramePushed,
}

impl ReplyParser {
	pub fn new() -> Self {
		Self::with_max_depth(DEFAULT_MAX_DEPTH)
	}

	/// Create a parser with a custom array nesting cap.
	pub fn with_max_depth(max_depth: usize) -> Self {
		Self {
			frames: Vec::new(),
			max_depth,
		}
	}

	/// Try to parse one complete reply from the front of `buf`.
	///
	/// On `Complete` the reply's bytes have been consumed and `buf` starts at
	/// the next reply. On `Incomplete` the caller should append more bytes
	/// and call again.
	pub fn parse(&mut self, buf: &mut BytesMut) -> ParseResult {
		loop {
			match self.parse_step(buf) {
				Ok(Some(Step::FramePushed)) => continue,
				Ok(Some(Step::Value(value))) => match self.absorb(value) {
					Some(root) => return ParseResult::Complete(root),
					None => continue,
				},
				Ok(None) => return ParseResult::Incomplete,
				Err(e) => return ParseResult::Error(e),
			}
		}
	}

	/// Feed a finished value into the innermost open array.
	///
	/// Bubbles completed arrays outward; returns the root reply once no open
	/// frame remains.
	fn absorb(&mut self, mut value: Reply) -> Option<Reply> {
		loop {
			let Some(frame) = self.frames.last_mut() else {
				return Some(value);
			};
			frame.elements.push(value);
			if frame.elements.len() < frame.expected {
				return None;
			}
			let done = self.frames.pop()?;
			value = Reply::Array(Some(done.elements));
		}
	}

	/// Parse the next token: a primitive value or the start of an array.
	fn parse_step(&mut self, buf: &mut BytesMut) -> Result<Option<Step>, ParseError> {
		if buf.is_empty() {
			return Ok(None);
		}

		match buf[0] {
			SIMPLE_STRING => Ok(Self::parse_line(buf)?.map(|b| Step::Value(Reply::SimpleString(b)))),
			ERROR => Ok(Self::parse_line(buf)?.map(|b| Step::Value(Reply::Error(b)))),
			INTEGER => Self::parse_integer(buf),
			BULK_STRING => Self::parse_bulk_string(buf),
			ARRAY => self.start_array(buf),
			other => Err(ParseError::InvalidTypeMarker(other as char)),
		}
	}

	// Shared by simple strings and error replies: one CRLF line after the
	// type marker.
	fn parse_line(buf: &mut BytesMut) -> Result<Option<Bytes>, ParseError> {
		match peek_line(&buf[1..]) {
			Some((line, consumed)) => {
				let value = Bytes::copy_from_slice(line);
				buf.advance(1 + consumed);
				Ok(Some(value))
			}
			None => Ok(None),
		}
	}

	fn parse_integer(buf: &mut BytesMut) -> Result<Option<Step>, ParseError> {
		match peek_line(&buf[1..]) {
			Some((line, consumed)) => {
				let num = parse_decimal(line)?;
				buf.advance(1 + consumed);
				Ok(Some(Step::Value(Reply::Integer(num))))
			}
			None => Ok(None),
		}
	}

	fn parse_bulk_string(buf: &mut BytesMut) -> Result<Option<Step>, ParseError> {
		// $6\r\nfoobar\r\n
		let Some((line, prefix_len)) = peek_line(&buf[1..]) else {
			return Ok(None);
		};
		let length = parse_decimal(line)?;

		if length == -1 {
			buf.advance(1 + prefix_len);
			return Ok(Some(Step::Value(Reply::BulkString(None))));
		}
		if length < -1 {
			return Err(ParseError::InvalidBulkLength(length));
		}

		let length = length as usize;
		if buf.len() < 1 + prefix_len + length + 2 {
			return Ok(None);
		}

		buf.advance(1 + prefix_len);
		let data = buf.split_to(length).freeze();
		if &buf[0..2] != CRLF {
			return Err(ParseError::MissingCrlf("bulk string"));
		}
		buf.advance(2);

		Ok(Some(Step::Value(Reply::BulkString(Some(data)))))
	}

	fn start_array(&mut self, buf: &mut BytesMut) -> Result<Option<Step>, ParseError> {
		let Some((line, prefix_len)) = peek_line(&buf[1..]) else {
			return Ok(None);
		};
		let length = parse_decimal(line)?;

		if length < -1 {
			return Err(ParseError::InvalidArrayLength(length));
		}
		buf.advance(1 + prefix_len);

		if length == -1 {
			return Ok(Some(Step::Value(Reply::Array(None))));
		}
		let length = length as usize;
		if length == 0 {
			return Ok(Some(Step::Value(Reply::Array(Some(Vec::new())))));
		}

		if self.frames.len() >= self.max_depth {
			return Err(ParseError::DepthLimitExceeded(self.max_depth));
		}
		self.frames.push(Frame {
			expected: length,
			elements: Vec::with_capacity(length),
		});
		Ok(Some(Step::FramePushed))
	}
}

/// One-shot decode for callers that already hold a complete reply.
///
/// A truncated input is reported as [`ParseError::UnexpectedEof`]. Use
/// [`ReplyParser`] directly when bytes trickle in from a stream.
pub fn decode(buf: &mut BytesMut) -> Result<Reply, ParseError> {
	let mut parser = ReplyParser::new();
	match parser.parse(buf) {
		ParseResult::Complete(value) => Ok(value),
		ParseResult::Incomplete => Err(ParseError::UnexpectedEof),
		ParseResult::Error(e) => Err(e),
	}
}
