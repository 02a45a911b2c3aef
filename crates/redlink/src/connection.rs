//! The pipelined connection.

use std::io;
use std::io::Read;
use std::io::Write;

use bytes::BytesMut;
use log::debug;
use log::trace;
use redlink_resp::Command;
use redlink_resp::ParseResult;
use redlink_resp::Reply;
use redlink_resp::ReplyParser;

use crate::error::Error;

const READ_CHUNK: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
	Open,
	/// A transport or framing error was observed; the stream position is
	/// untrustworthy and no further I/O is attempted.
	Broken,
	Closed,
}

/// A synchronous client connection over any ordered byte stream.
///
/// The stream is an opaque collaborator: dialing, TLS, and deadlines all
/// belong to whoever constructed `S`. The connection owns the read/write
/// buffers and the reply parser, and composes four operations:
///
/// - [`send`](Connection::send) encodes a command into the write buffer
///   without touching the network,
/// - [`flush`](Connection::flush) pushes the buffered bytes to the stream,
/// - [`receive`](Connection::receive) blocks until one full reply is decoded,
/// - [`call`](Connection::call) is send + flush + receive, one round trip.
///   (The operation Redis clients traditionally name `Do`; `do` is reserved
///   in Rust.)
///
/// Pipelining is N sends, one flush, N receives; replies come back in strict
/// FIFO order matching send order. All methods take `&mut self`, so a filler
/// and a drainer running concurrently need external coordination (for
/// example, splitting the two roles around a mutex or a channel).
///
/// ```no_run
/// use redlink::Command;
/// use redlink::Connection;
///
/// let stream = std::net::TcpStream::connect("127.0.0.1:6379")?;
/// let mut conn = Connection::new(stream);
/// let reply = conn.call(&Command::new("PING"))?;
/// assert_eq!(reply.as_str(), Some("PONG"));
/// # Ok::<(), redlink::Error>(())
/// ```
pub struct Connection<S> {
	stream: S,
	parser: ReplyParser,
	rbuf: BytesMut,
	wbuf: BytesMut,
	state: State,
}

impl<S: Read + Write> Connection<S> {
	pub fn new(stream: S) -> Self {
		Self {
			stream,
			parser: ReplyParser::new(),
			rbuf: BytesMut::with_capacity(READ_CHUNK),
			wbuf: BytesMut::new(),
			state: State::Open,
		}
	}

	/// Create a connection with a custom reply nesting cap.
	pub fn with_max_depth(stream: S, max_depth: usize) -> Self {
		Self {
			parser: ReplyParser::with_max_depth(max_depth),
			..Self::new(stream)
		}
	}

	/// Encode `cmd` into the write buffer.
	///
	/// Performs no network I/O and never reads, so any number of commands can
	/// be queued before a single [`flush`](Connection::flush).
	pub fn send(&mut self, cmd: &Command) -> Result<(), Error> {
		self.ensure_open()?;
		cmd.encode_to(&mut self.wbuf);
		trace!("queued {} ({} bytes buffered)", cmd.name(), self.wbuf.len());
		Ok(())
	}

	/// Push all buffered command bytes to the stream.
	///
	/// Blocks until the stream layer accepts them. A write failure poisons
	/// the connection.
	pub fn flush(&mut self) -> Result<(), Error> {
		self.ensure_open()?;
		if self.wbuf.is_empty() {
			return Ok(());
		}
		let result: io::Result<()> = (|| {
			self.stream.write_all(&self.wbuf)?;
			self.stream.flush()
		})();
		if let Err(e) = result {
			self.state = State::Broken;
			return Err(e.into());
		}
		trace!("flushed {} bytes", self.wbuf.len());
		self.wbuf.clear();
		Ok(())
	}

	/// Block until one full reply is available and decode it.
	///
	/// A server error reply comes back as [`Error::Server`], with exactly
	/// that reply's bytes consumed — the connection stays usable and the next
	/// `receive` reads the next pipelined reply. Transport and framing
	/// failures poison the connection.
	pub fn receive(&mut self) -> Result<Reply, Error> {
		self.ensure_open()?;
		loop {
			match self.parser.parse(&mut self.rbuf) {
				ParseResult::Complete(Reply::Error(msg)) => {
					return Err(Error::Server(String::from_utf8_lossy(&msg).into_owned()));
				}
				ParseResult::Complete(reply) => return Ok(reply),
				ParseResult::Incomplete => self.fill_read_buffer()?,
				ParseResult::Error(e) => {
					debug!("framing error, poisoning connection: {}", e);
					self.state = State::Broken;
					return Err(e.into());
				}
			}
		}
	}

	/// Send one command, flush, and receive its reply: one round trip.
	pub fn call(&mut self, cmd: &Command) -> Result<Reply, Error> {
		self.send(cmd)?;
		self.flush()?;
		self.receive()
	}

	/// Close the connection.
	///
	/// Idempotent: closing twice is fine, and no extra flush happens — bytes
	/// still sitting in the write buffer are dropped. After close every
	/// operation fails with [`Error::Closed`].
	pub fn close(&mut self) {
		if self.state != State::Closed {
			debug!("closing connection");
			self.state = State::Closed;
		}
	}

	pub fn is_closed(&self) -> bool {
		self.state == State::Closed
	}

	/// Release the underlying stream, discarding buffered state.
	pub fn into_inner(self) -> S {
		self.stream
	}

	fn ensure_open(&self) -> Result<(), Error> {
		match self.state {
			State::Open => Ok(()),
			State::Broken => Err(Error::Broken),
			State::Closed => Err(Error::Closed),
		}
	}

	/// Read at least one byte from the stream into the read buffer.
	///
	/// EOF here means the stream died between or inside replies; either way
	/// the pipeline cannot be completed, so it poisons the connection.
	fn fill_read_buffer(&mut self) -> Result<(), Error> {
		let mut chunk = [0u8; READ_CHUNK];
		match self.stream.read(&mut chunk) {
			Ok(0) => {
				self.state = State::Broken;
				Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stream closed mid-reply").into())
			}
			Ok(n) => {
				self.rbuf.extend_from_slice(&chunk[..n]);
				Ok(())
			}
			Err(e) if e.kind() == io::ErrorKind::Interrupted => Ok(()),
			Err(e) => {
				self.state = State::Broken;
				Err(e.into())
			}
		}
	}
}
