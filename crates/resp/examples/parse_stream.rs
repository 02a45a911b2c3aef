use bytes::BytesMut;
use redlink_resp::ParseResult;
use redlink_resp::ReplyParser;

fn main() {
	println!("--- RESP streaming decode example ---");

	// Simulate replies arriving from a socket in arbitrary chunks:
	// - A simple string: "+OK\r\n"
	// - An integer: ":1000\r\n"
	// - An array: "*2\r\n$3\r\nfoo\r\n$-1\r\n"
	let chunks = vec![
		b"+O".as_slice(),
		b"K\r\n:1".as_slice(),
		b"00".as_slice(),
		b"0\r\n*2\r\n$3\r\nf".as_slice(),
		b"oo\r\n$-".as_slice(),
		b"1\r\n".as_slice(),
	];

	let mut parser = ReplyParser::new();
	let mut buffer = BytesMut::new();

	for (i, chunk) in chunks.iter().enumerate() {
		println!("\n[stream] received chunk {}: {:?}", i, chunk);
		buffer.extend_from_slice(chunk);

		loop {
			match parser.parse(&mut buffer) {
				ParseResult::Complete(reply) => {
					println!("[parser] complete: {:?}", reply);
					// Keep going in case the buffer holds another reply
				}
				ParseResult::Incomplete => {
					println!("[parser] incomplete, waiting for more data...");
					break;
				}
				ParseResult::Error(e) => {
					eprintln!("[parser] error: {:?}", e);
					return;
				}
			}
		}
	}
}
