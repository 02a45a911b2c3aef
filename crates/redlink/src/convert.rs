//! Reply-to-typed-value coercion.
//!
//! Callers rarely want a raw [`Reply`]; they want the integer a counter
//! command returned, or the bytes under a key. `FromReply` is the seam for
//! that, with a blanket `Option` impl mapping the protocol's nil replies to
//! `None`.

use bytes::Bytes;
use redlink_resp::Reply;

use crate::error::Error;

/// Conversion from a decoded reply into a concrete value.
pub trait FromReply: Sized {
	fn from_reply(reply: Reply) -> Result<Self, Error>;
}

fn unexpected(expected: &'static str, got: &Reply) -> Error {
	Error::UnexpectedReply {
		expected,
		got: got.type_name(),
	}
}

impl FromReply for Reply {
	fn from_reply(reply: Reply) -> Result<Self, Error> {
		Ok(reply)
	}
}

impl FromReply for i64 {
	fn from_reply(reply: Reply) -> Result<Self, Error> {
		match reply {
			Reply::Integer(i) => Ok(i),
			Reply::BulkString(Some(ref b)) => std::str::from_utf8(b)
				.ok()
				.and_then(|s| s.parse().ok())
				.ok_or_else(|| unexpected("integer", &reply)),
			other => Err(unexpected("integer", &other)),
		}
	}
}

impl FromReply for String {
	fn from_reply(reply: Reply) -> Result<Self, Error> {
		match reply {
			Reply::SimpleString(ref b) | Reply::BulkString(Some(ref b)) => {
				match std::str::from_utf8(b) {
					Ok(s) => Ok(s.to_string()),
					Err(_) => Err(unexpected("utf-8 string", &reply)),
				}
			}
			other => Err(unexpected("string", &other)),
		}
	}
}

impl FromReply for Bytes {
	fn from_reply(reply: Reply) -> Result<Self, Error> {
		match reply {
			Reply::SimpleString(b) | Reply::BulkString(Some(b)) => Ok(b),
			other => Err(unexpected("bytes", &other)),
		}
	}
}

impl FromReply for Vec<u8> {
	fn from_reply(reply: Reply) -> Result<Self, Error> {
		Bytes::from_reply(reply).map(|b| b.to_vec())
	}
}

impl FromReply for bool {
	fn from_reply(reply: Reply) -> Result<Self, Error> {
		match reply {
			Reply::Integer(i) => Ok(i != 0),
			Reply::BulkString(Some(ref b)) => match b.as_ref() {
				b"0" => Ok(false),
				b"1" => Ok(true),
				_ => Err(unexpected("boolean", &reply)),
			},
			other => Err(unexpected("boolean", &other)),
		}
	}
}

impl FromReply for f64 {
	fn from_reply(reply: Reply) -> Result<Self, Error> {
		match reply {
			Reply::SimpleString(ref b) | Reply::BulkString(Some(ref b)) => std::str::from_utf8(b)
				.ok()
				.and_then(|s| s.parse().ok())
				.ok_or_else(|| unexpected("double", &reply)),
			other => Err(unexpected("double", &other)),
		}
	}
}

/// Nil bulk strings and nil arrays become `None`.
impl<T: FromReply> FromReply for Option<T> {
	fn from_reply(reply: Reply) -> Result<Self, Error> {
		if reply.is_nil() {
			return Ok(None);
		}
		T::from_reply(reply).map(Some)
	}
}

impl<T: FromReply> FromReply for Vec<T> {
	fn from_reply(reply: Reply) -> Result<Self, Error> {
		match reply {
			Reply::Array(Some(items)) => items.into_iter().map(T::from_reply).collect(),
			other => Err(unexpected("array", &other)),
		}
	}
}

/// Consume a reply into a concrete type: `convert::<i64>(reply)`.
pub fn convert<T: FromReply>(reply: Reply) -> Result<T, Error> {
	T::from_reply(reply)
}
