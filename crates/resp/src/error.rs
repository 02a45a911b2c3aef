//! Error types for RESP decoding.

use thiserror::Error;

/// Errors that can occur while decoding a reply.
///
/// Every variant is a framing error except [`ParseError::UnexpectedEof`],
/// which a one-shot decode reports when the input ends mid-reply. After any
/// of these the stream position is no longer trustworthy; a connection that
/// observes one must be discarded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
	/// Input ended in the middle of a reply
	#[error("unexpected end of input")]
	UnexpectedEof,

	/// Leading byte is not one of `+ - : $ *`
	#[error("invalid type marker: {0:?}")]
	InvalidTypeMarker(char),

	/// Integer line or length prefix is not a plain decimal i64
	#[error("invalid integer: {0:?}")]
	InvalidInteger(String),

	/// Bulk string length prefix below -1
	#[error("invalid bulk string length: {0}")]
	InvalidBulkLength(i64),

	/// Array length prefix below -1
	#[error("invalid array length: {0}")]
	InvalidArrayLength(i64),

	/// A payload was not followed by CRLF
	#[error("missing CRLF after {0}")]
	MissingCrlf(&'static str),

	/// Array nesting exceeded the configured limit
	#[error("array nesting exceeds maximum depth of {0}")]
	DepthLimitExceeded(usize),
}
