//! # redlink - a pipelined Redis client connection
//!
//! A synchronous client for the Redis Serialization Protocol over any ordered
//! byte stream. The crate deliberately stops at the codec and connection
//! layer: dialing, TLS, pooling, and authentication are the caller's business;
//! hand [`Connection::new`] anything that implements `Read + Write`.
//!
//! One round trip:
//!
//! ```no_run
//! use redlink::{Command, Connection};
//!
//! let stream = std::net::TcpStream::connect("127.0.0.1:6379")?;
//! let mut conn = Connection::new(stream);
//!
//! conn.call(&Command::new("SET").arg("greeting").arg("hello"))?;
//! let value: Option<String> = redlink::convert(conn.call(&Command::new("GET").arg("greeting"))?)?;
//! assert_eq!(value.as_deref(), Some("hello"));
//! # Ok::<(), redlink::Error>(())
//! ```
//!
//! Pipelining decouples sending from receiving; replies drain in the order
//! the commands were sent:
//!
//! ```no_run
//! # use redlink::{Command, Connection};
//! # let stream = std::net::TcpStream::connect("127.0.0.1:6379")?;
//! # let mut conn = Connection::new(stream);
//! conn.send(&Command::new("INCR").arg("counter"))?;
//! conn.send(&Command::new("INCR").arg("counter"))?;
//! conn.flush()?;
//! let first = conn.receive()?;
//! let second = conn.receive()?;
//! # Ok::<(), redlink::Error>(())
//! ```

mod connection;
mod convert;
mod error;

pub use connection::Connection;
pub use convert::FromReply;
pub use convert::convert;
pub use error::Error;

// Re-export the codec surface so most callers need only this crate.
pub use redlink_resp::Arg;
pub use redlink_resp::Command;
pub use redlink_resp::Reply;
