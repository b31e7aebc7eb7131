use rlec::{pipeline, Method};

fn main() {
	let data = b"hello   hello      hello".to_vec();
	for method in [Method::A, Method::B] {
		let mut input = std::io::Cursor::new(&data);
		let mut encoded = Vec::new();
		let stats = pipeline::encode(&mut input, &mut encoded, method).unwrap();
		println!("{}: encoded {} -> {}", method, stats.original_size, stats.encoded_size);

		let mut enc_cur = std::io::Cursor::new(encoded);
		let mut restored = Vec::new();
		pipeline::decode(&mut enc_cur, &mut restored).unwrap();
		println!("{}: restored {} bytes", method, restored.len());
	}
}
