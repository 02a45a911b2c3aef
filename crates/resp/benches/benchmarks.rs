//! Performance benchmarks for reply decoding and command encoding.

use bytes::BytesMut;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use redlink_resp::Command;
use std::hint::black_box;

fn bench_decode_simple_string(c: &mut Criterion) {
	let mut group = c.benchmark_group("decode_simple_string");
	let data = b"+OK\r\n";

	group.throughput(Throughput::Bytes(data.len() as u64));
	group.bench_function("simple_string", |b| {
		b.iter(|| {
			let mut buf = BytesMut::from(&data[..]);
			redlink_resp::decode(black_box(&mut buf)).unwrap()
		})
	});
	group.finish();
}

fn bench_decode_bulk_string(c: &mut Criterion) {
	let mut group = c.benchmark_group("decode_bulk_string");
	let data = b"$11\r\nhello world\r\n";

	group.throughput(Throughput::Bytes(data.len() as u64));
	group.bench_function("bulk_string", |b| {
		b.iter(|| {
			let mut buf = BytesMut::from(&data[..]);
			redlink_resp::decode(black_box(&mut buf)).unwrap()
		})
	});
	group.finish();
}

fn bench_decode_array(c: &mut Criterion) {
	let mut group = c.benchmark_group("decode_array");
	let data = b"*3\r\n$3\r\nfoo\r\n$-1\r\n$3\r\nbar\r\n";

	group.throughput(Throughput::Bytes(data.len() as u64));
	group.bench_function("array_with_nil", |b| {
		b.iter(|| {
			let mut buf = BytesMut::from(&data[..]);
			redlink_resp::decode(black_box(&mut buf)).unwrap()
		})
	});
	group.finish();
}

fn bench_decode_large_array(c: &mut Criterion) {
	let mut group = c.benchmark_group("decode_large_array");

	let mut data = BytesMut::from("*100\r\n");
	for i in 0..100 {
		let item = format!("$3\r\n{:03}\r\n", i);
		data.extend_from_slice(item.as_bytes());
	}

	group.throughput(Throughput::Bytes(data.len() as u64));
	group.bench_function("array_100_items", |b| {
		b.iter(|| {
			let mut buf = data.clone();
			redlink_resp::decode(black_box(&mut buf)).unwrap()
		})
	});
	group.finish();
}

fn bench_encode_command(c: &mut Criterion) {
	let mut group = c.benchmark_group("encode_command");
	let cmd = Command::new("SET").arg("key").arg("value");

	group.bench_function("set_command", |b| {
		b.iter(|| {
			let mut buf = BytesMut::with_capacity(64);
			black_box(&cmd).encode_to(&mut buf);
			buf
		})
	});
	group.finish();
}

criterion_group!(
	benches,
	bench_decode_simple_string,
	bench_decode_bulk_string,
	bench_decode_array,
	bench_decode_large_array,
	bench_encode_command,
);
criterion_main!(benches);
