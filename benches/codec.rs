use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rlec::{pipeline, Method};

fn sample_data() -> Vec<(&'static str, Vec<u8>)> {
	let zeroes = vec![0u8; 4 * 1024 * 1024];
	let text = b"aaaabbbcccd efgh   ijjjjjjjjk\n".repeat(128 * 1024);
	let noise: Vec<u8> = (0..4 * 1024 * 1024u32).map(|i| (i.wrapping_mul(2_654_435_761) >> 13) as u8).collect();
	vec![("zeroes", zeroes), ("text", text), ("noise", noise)]
}

fn bench_encode(c: &mut Criterion) {
	let mut group = c.benchmark_group("encode");
	for (name, data) in sample_data() {
		group.throughput(Throughput::Bytes(data.len() as u64));
		for method in [Method::A, Method::B] {
			group.bench_with_input(BenchmarkId::new(method.to_string(), name), &data, |b, data| {
				b.iter(|| {
					let mut input = std::io::Cursor::new(data);
					let mut output = Vec::new();
					pipeline::encode(&mut input, &mut output, method).unwrap();
				});
			});
		}
	}
	group.finish();
}

fn bench_decode(c: &mut Criterion) {
	let mut group = c.benchmark_group("decode");
	for (name, data) in sample_data() {
		group.throughput(Throughput::Bytes(data.len() as u64));
		for method in [Method::A, Method::B] {
			let encoded = rlec::encode_data(&data, method).unwrap();
			group.bench_with_input(BenchmarkId::new(method.to_string(), name), &encoded, |b, encoded| {
				b.iter(|| {
					let mut input = std::io::Cursor::new(encoded);
					let mut output = Vec::with_capacity(data.len());
					pipeline::decode(&mut input, &mut output).unwrap();
				});
			});
		}
	}
	group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
