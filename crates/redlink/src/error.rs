//! Client error taxonomy.

use redlink_resp::ParseError;
use thiserror::Error;

/// Everything a connection operation can fail with.
///
/// Only [`Error::Server`] and [`Error::UnexpectedReply`] leave the connection
/// usable. `Io` and `Protocol` mean the stream position can no longer be
/// trusted; the connection poisons itself and subsequent operations fail
/// with [`Error::Broken`].
#[derive(Error, Debug)]
pub enum Error {
	/// Underlying stream read/write failure, including EOF mid-reply
	#[error("i/o error: {0}")]
	Io(#[from] std::io::Error),

	/// The byte stream violates the RESP grammar
	#[error("protocol error: {0}")]
	Protocol(#[from] ParseError),

	/// The server answered with an error reply; the connection is still good
	#[error("server error: {0}")]
	Server(String),

	/// Operation on a closed connection
	#[error("connection closed")]
	Closed,

	/// Operation on a connection poisoned by an earlier fatal error
	#[error("connection is broken and must be discarded")]
	Broken,

	/// A reply could not be converted to the requested type
	#[error("unexpected reply: expected {expected}, got {got}")]
	UnexpectedReply {
		expected: &'static str,
		got: &'static str,
	},
}

impl Error {
	/// Whether this error makes the connection unusable.
	pub fn is_fatal(&self) -> bool {
		matches!(
			self,
			Error::Io(_) | Error::Protocol(_) | Error::Closed | Error::Broken
		)
	}
}
