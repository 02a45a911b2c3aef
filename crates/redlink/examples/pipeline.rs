//! Pipelined round trips against a live server on 127.0.0.1:6379.
//!
//! Dialing is the caller's job; the connection takes any `Read + Write`.
//!
//! ```sh
//! cargo run --example pipeline
//! ```

use std::net::TcpStream;

use redlink::Command;
use redlink::Connection;
use redlink::Error;

fn main() -> Result<(), Error> {
	let stream = TcpStream::connect("127.0.0.1:6379")?;
	let mut conn = Connection::new(stream);

	// One non-pipelined round trip
	let pong = conn.call(&Command::new("PING"))?;
	println!("PING -> {:?}", pong);

	// Queue a batch, flush once, drain in order
	for i in 1..=5 {
		conn.send(&Command::new("INCRBY").arg("pipeline:counter").arg(i))?;
	}
	conn.flush()?;
	for _ in 1..=5 {
		match conn.receive() {
			Ok(reply) => println!("INCRBY -> {:?}", reply),
			Err(Error::Server(msg)) => println!("server rejected: {}", msg),
			Err(e) => return Err(e),
		}
	}

	conn.close();
	Ok(())
}
