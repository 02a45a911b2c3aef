//! The RESP reply value.

use bytes::Bytes;

/// One decoded RESP2 reply.
///
/// Bulk strings and arrays carry `Option` payloads because the protocol has
/// distinct null encodings for both (`$-1\r\n` and `*-1\r\n`). A server-sent
/// error is a reply variant here at the wire level; the connection layer
/// surfaces it as an error value instead of a normal reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
	/// Simple string: `+OK\r\n`
	SimpleString(Bytes),

	/// Error reply: `-ERR message\r\n`
	Error(Bytes),

	/// Integer: `:1000\r\n`
	Integer(i64),

	/// Bulk string: `$6\r\nfoobar\r\n`, or `None` for `$-1\r\n`
	BulkString(Option<Bytes>),

	/// Array: `*2\r\n...`, or `None` for `*-1\r\n`
	Array(Option<Vec<Reply>>),
}

impl Reply {
	/// Check if the reply is a null bulk string or null array
	pub fn is_nil(&self) -> bool {
		matches!(self, Reply::BulkString(None) | Reply::Array(None))
	}

	/// Check if the reply is a server error
	pub fn is_error(&self) -> bool {
		matches!(self, Reply::Error(_))
	}

	/// Try to view the reply as a string slice
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Reply::SimpleString(s) | Reply::BulkString(Some(s)) => std::str::from_utf8(s).ok(),
			_ => None,
		}
	}

	/// Try to view the reply as raw bytes
	pub fn as_bytes(&self) -> Option<&Bytes> {
		match self {
			Reply::SimpleString(b) | Reply::BulkString(Some(b)) => Some(b),
			_ => None,
		}
	}

	/// Try to read the reply as an integer
	pub fn as_integer(&self) -> Option<i64> {
		match self {
			Reply::Integer(i) => Some(*i),
			_ => None,
		}
	}

	/// Try to view the reply as an array of replies
	pub fn as_array(&self) -> Option<&[Reply]> {
		match self {
			Reply::Array(Some(a)) => Some(a),
			_ => None,
		}
	}

	/// Try to consume the reply into its array elements
	pub fn into_vec(self) -> Option<Vec<Reply>> {
		match self {
			Reply::Array(Some(a)) => Some(a),
			_ => None,
		}
	}

	/// Convert to String with lossy UTF-8 conversion
	pub fn to_string_lossy(&self) -> Option<String> {
		match self {
			Reply::SimpleString(s) | Reply::BulkString(Some(s)) => {
				Some(String::from_utf8_lossy(s).into_owned())
			}
			_ => None,
		}
	}

	/// Variant name, used in conversion error messages
	pub fn type_name(&self) -> &'static str {
		match self {
			Reply::SimpleString(_) => "simple string",
			Reply::Error(_) => "error",
			Reply::Integer(_) => "integer",
			Reply::BulkString(Some(_)) => "bulk string",
			Reply::BulkString(None) => "nil bulk string",
			Reply::Array(Some(_)) => "array",
			Reply::Array(None) => "nil array",
		}
	}

	// Convenience constructors

	/// Create a simple string reply
	pub fn simple(s: impl Into<Bytes>) -> Self {
		Reply::SimpleString(s.into())
	}

	/// Create a bulk string reply
	pub fn bulk(s: impl Into<Bytes>) -> Self {
		Reply::BulkString(Some(s.into()))
	}

	/// Create an error reply
	pub fn error(e: impl Into<Bytes>) -> Self {
		Reply::Error(e.into())
	}

	/// Create an array reply from an iterator
	pub fn array(items: impl IntoIterator<Item = Reply>) -> Self {
		Reply::Array(Some(items.into_iter().collect()))
	}

	/// Create a null bulk string reply
	pub fn nil() -> Self {
		Reply::BulkString(None)
	}
}
