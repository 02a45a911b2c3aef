//! # redlink-resp - RESP wire codec
//!
//! Client-side encoder and decoder for the Redis Serialization Protocol
//! (RESP2): commands go out as arrays of bulk strings, replies come back as
//! one of the five RESP reply types.
//!
//! The decoder is resumable: feed it a `BytesMut` that fills up from a socket
//! and it parses exactly one reply once enough bytes have arrived, leaving the
//! buffer positioned at the next reply. That is what makes pipelining work —
//! the caller queues any number of encoded commands and drains the replies in
//! FIFO order.
//!
//! ## Example
//!
//! ```rust
//! use bytes::BytesMut;
//! use redlink_resp::Command;
//!
//! let mut buf = BytesMut::new();
//! Command::new("SET").arg("key").arg("value").encode_to(&mut buf);
//! assert_eq!(&buf[..], b"*3\r\n$3\r\nSET\r\n$3\r\nkey\r\n$5\r\nvalue\r\n");
//!
//! let mut reply = BytesMut::from(&b"+OK\r\n"[..]);
//! let reply = redlink_resp::decode(&mut reply).unwrap();
//! assert_eq!(reply.as_str(), Some("OK"));
//! ```

mod command;
mod error;
mod parser;
mod types;
mod utils;

pub use command::Arg;
pub use command::Command;
pub use error::ParseError;
pub use parser::DEFAULT_MAX_DEPTH;
pub use parser::ParseResult;
pub use parser::ReplyParser;
pub use parser::decode;
pub use types::Reply;
