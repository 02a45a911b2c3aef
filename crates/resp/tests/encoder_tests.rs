//! Integration tests for command encoding, including the encode-then-decode
//! round trip over the full argument domain.

use bytes::BytesMut;
use redlink_resp::Arg;
use redlink_resp::Command;
use redlink_resp::Reply;
use rstest::rstest;

fn encoded(cmd: Command) -> BytesMut {
	let mut buf = BytesMut::new();
	cmd.encode_to(&mut buf);
	buf
}

#[rstest]
#[case(Command::new("PING"), b"*1\r\n$4\r\nPING\r\n".as_slice())]
#[case(
	Command::new("SET").arg("foo").arg("bar"),
	b"*3\r\n$3\r\nSET\r\n$3\r\nfoo\r\n$3\r\nbar\r\n".as_slice()
)]
#[case(
	Command::new("SET").arg("foo").arg(100),
	b"*3\r\n$3\r\nSET\r\n$3\r\nfoo\r\n$3\r\n100\r\n".as_slice()
)]
#[case(
	Command::new("SET").arg("").arg(&b"foo"[..]),
	b"*3\r\n$3\r\nSET\r\n$0\r\n\r\n$3\r\nfoo\r\n".as_slice()
)]
#[case(
	Command::new("SET").arg(Arg::Nil).arg(&b"foo"[..]),
	b"*3\r\n$3\r\nSET\r\n$0\r\n\r\n$3\r\nfoo\r\n".as_slice()
)]
#[case(
	Command::new("EXPIRE").arg("key").arg(-1),
	b"*3\r\n$6\r\nEXPIRE\r\n$3\r\nkey\r\n$2\r\n-1\r\n".as_slice()
)]
#[case(
	Command::new("INCRBYFLOAT").arg("key").arg(0.5),
	b"*3\r\n$11\r\nINCRBYFLOAT\r\n$3\r\nkey\r\n$3\r\n0.5\r\n".as_slice()
)]
fn test_encode_command(#[case] cmd: Command, #[case] expected: &[u8]) {
	assert_eq!(&encoded(cmd)[..], expected);
}

#[test]
fn test_successive_sends_append() {
	// Pipelining at the buffer level: encoding never truncates what an
	// earlier command left behind.
	let mut buf = BytesMut::new();
	Command::new("PING").encode_to(&mut buf);
	Command::new("GET").arg("k").encode_to(&mut buf);
	assert_eq!(&buf[..], b"*1\r\n$4\r\nPING\r\n*2\r\n$3\r\nGET\r\n$1\r\nk\r\n");
}

#[test]
fn test_round_trip_argument_domain() {
	// Encoding a command and decoding the bytes as a generic reply must give
	// back an array of bulk strings matching the arguments' byte forms, with
	// nil collapsing to the zero-length blob.
	let cmd = Command::new("MSET")
		.arg("text")
		.arg(vec![0xdeu8, 0xad])
		.arg(42)
		.arg(Arg::Nil);

	let mut buf = encoded(cmd);
	let reply = redlink_resp::decode(&mut buf).unwrap();

	assert_eq!(
		reply,
		Reply::array(vec![
			Reply::bulk("MSET"),
			Reply::bulk("text"),
			Reply::bulk(vec![0xdeu8, 0xad]),
			Reply::bulk("42"),
			Reply::bulk(""),
		])
	);
	assert!(buf.is_empty());
}
