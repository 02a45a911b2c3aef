//! Command representation and wire encoding.
//!
//! A request goes out as a RESP array of bulk strings: the command name
//! followed by its arguments, each length-prefixed by its exact byte length.

use bytes::BufMut;
use bytes::Bytes;
use bytes::BytesMut;

use crate::utils::ARRAY;
use crate::utils::BULK_STRING;
use crate::utils::CRLF;

/// A single command argument.
///
/// The enum is closed over the types the wire format can carry, so building
/// an argument that cannot be serialized is impossible. Types without a
/// native wire form (floats, booleans) convert to their canonical text
/// rendering at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
	/// UTF-8 text, sent as a bulk string
	Text(String),
	/// Raw bytes, sent as a bulk string
	Blob(Bytes),
	/// Integer, sent as its decimal text
	Int(i64),
	/// Absent value, sent as a zero-length bulk string
	Nil,
}

impl From<&str> for Arg {
	fn from(s: &str) -> Self {
		Arg::Text(s.to_string())
	}
}

impl From<String> for Arg {
	fn from(s: String) -> Self {
		Arg::Text(s)
	}
}

impl From<&[u8]> for Arg {
	fn from(b: &[u8]) -> Self {
		Arg::Blob(Bytes::copy_from_slice(b))
	}
}

impl From<Vec<u8>> for Arg {
	fn from(v: Vec<u8>) -> Self {
		Arg::Blob(Bytes::from(v))
	}
}

impl From<Bytes> for Arg {
	fn from(b: Bytes) -> Self {
		Arg::Blob(b)
	}
}

impl From<i64> for Arg {
	fn from(i: i64) -> Self {
		Arg::Int(i)
	}
}

impl From<i32> for Arg {
	fn from(i: i32) -> Self {
		Arg::Int(i as i64)
	}
}

impl From<u32> for Arg {
	fn from(i: u32) -> Self {
		Arg::Int(i as i64)
	}
}

impl From<f64> for Arg {
	fn from(d: f64) -> Self {
		Arg::Text(d.to_string())
	}
}

impl From<bool> for Arg {
	fn from(b: bool) -> Self {
		Arg::Text(b.to_string())
	}
}

impl<T: Into<Arg>> From<Option<T>> for Arg {
	fn from(o: Option<T>) -> Self {
		match o {
			Some(v) => v.into(),
			None => Arg::Nil,
		}
	}
}

/// A command name plus its ordered arguments.
///
/// ```rust
/// use redlink_resp::Command;
///
/// let cmd = Command::new("SET").arg("key").arg("value");
/// assert_eq!(cmd.name(), "SET");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
	name: String,
	args: Vec<Arg>,
}

impl Command {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			args: Vec::new(),
		}
	}

	/// Append one argument
	pub fn arg(mut self, arg: impl Into<Arg>) -> Self {
		self.args.push(arg.into());
		self
	}

	/// Append every argument from an iterator
	pub fn args<A: Into<Arg>>(mut self, args: impl IntoIterator<Item = A>) -> Self {
		self.args.extend(args.into_iter().map(Into::into));
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// Append the command's wire form to `buf`.
	///
	/// Appends only; the caller decides when the buffer reaches the stream,
	/// which is what lets several commands pile up before one flush.
	pub fn encode_to(&self, buf: &mut BytesMut) {
		write_prefix(buf, ARRAY, self.args.len() + 1);
		write_bulk(buf, self.name.as_bytes());
		for arg in &self.args {
			match arg {
				Arg::Text(s) => write_bulk(buf, s.as_bytes()),
				Arg::Blob(b) => write_bulk(buf, b),
				Arg::Int(i) => write_bulk(buf, i.to_string().as_bytes()),
				Arg::Nil => write_bulk(buf, b""),
			}
		}
	}
}

#[inline]
fn write_prefix(buf: &mut BytesMut, marker: u8, len: usize) {
	buf.put_u8(marker);
	buf.put_slice(len.to_string().as_bytes());
	buf.put_slice(CRLF);
}

#[inline]
fn write_bulk(buf: &mut BytesMut, payload: &[u8]) {
	write_prefix(buf, BULK_STRING, payload.len());
	buf.put_slice(payload);
	buf.put_slice(CRLF);
}
