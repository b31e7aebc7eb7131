use crate::config::{CodecConfig, Method};
use crate::container;
use crate::error::{Result, RleError};
use crate::io::Counting;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct CodingStats {
	pub method: Method,
	/// Size of the raw, unencoded data.
	pub original_size: u64,
	/// Size of the container, tag byte included.
	pub encoded_size: u64,
	pub ratio: f64,
}

impl CodingStats {
	fn new(method: Method, original_size: u64, encoded_size: u64) -> Self {
		let ratio = if encoded_size > 0 { original_size as f64 / encoded_size as f64 } else { 0.0 };
		Self { method, original_size, encoded_size, ratio }
	}
}

pub fn encode<R: Read, W: Write>(
	reader: &mut R,
	writer: &mut W,
	method: Method,
) -> Result<CodingStats> {
	let mut input = Counting::new(reader);
	let mut output = Counting::new(writer);

	container::write_container(&mut input, &mut output, method)?;
	output.flush()?;

	let stats = CodingStats::new(method, input.count(), output.count());
	debug!("encoded {} bytes into {} bytes with {}", stats.original_size, stats.encoded_size, method);
	Ok(stats)
}

pub fn decode<R: Read, W: Write>(reader: &mut R, writer: &mut W) -> Result<CodingStats> {
	let mut input = Counting::new(reader);
	let mut output = Counting::new(writer);

	let method = container::read_container(&mut input, &mut output)?;
	output.flush()?;

	let stats = CodingStats::new(method, output.count(), input.count());
	debug!("decoded {} bytes into {} bytes with {}", stats.encoded_size, stats.original_size, method);
	Ok(stats)
}

/// Decode a stream without keeping the output, reporting its method and sizes.
///
/// Any malformed payload is reported as an error, so this doubles as validation.
pub fn info<R: Read>(reader: &mut R) -> Result<CodingStats> {
	decode(reader, &mut io::sink())
}

pub fn encode_file(input: &Path, output: &Path, config: &CodecConfig) -> Result<CodingStats> {
	let (file, len) = open_input(input)?;
	let pb = progress_bar(len, config.progress);
	let mut reader = BufReader::new(pb.wrap_read(file));
	let mut writer = BufWriter::new(create_output(output, config.overwrite)?);

	let stats = encode(&mut reader, &mut writer, config.method)?;
	pb.finish_and_clear();

	info!(
		"{} -> {}: {} bytes encoded to {} bytes ({})",
		input.display(),
		output.display(),
		stats.original_size,
		stats.encoded_size,
		stats.method
	);
	Ok(stats)
}

/// Decode `input` into `output`.
///
/// The method tag is checked before `output` is created, so an unknown method
/// never leaves an empty file behind. Bytes decoded before a malformed token
/// stay in `output`.
pub fn decode_file(input: &Path, output: &Path, config: &CodecConfig) -> Result<CodingStats> {
	let (file, len) = open_input(input)?;
	let pb = progress_bar(len, config.progress);
	let mut reader = Counting::new(BufReader::new(pb.wrap_read(file)));

	let method = container::read_method(&mut reader)?;
	debug!("{} is tagged {}", input.display(), method);

	let mut writer = Counting::new(BufWriter::new(create_output(output, config.overwrite)?));
	container::decode_payload(&mut reader, &mut writer, method)?;
	writer.flush()?;
	pb.finish_and_clear();

	let stats = CodingStats::new(method, writer.count(), reader.count());
	info!(
		"{} -> {}: {} bytes decoded to {} bytes ({})",
		input.display(),
		output.display(),
		stats.encoded_size,
		stats.original_size,
		stats.method
	);
	Ok(stats)
}

fn open_input(path: &Path) -> Result<(File, u64)> {
	if !path.exists() {
		return Err(RleError::InputNotFound(path.to_path_buf()));
	}
	let file = File::open(path)?;
	let len = file.metadata()?.len();
	Ok((file, len))
}

fn create_output(path: &Path, overwrite: bool) -> Result<File> {
	let file = if overwrite {
		File::create(path)
	} else {
		OpenOptions::new().write(true).create_new(true).open(path)
	};
	file.map_err(|e| match e.kind() {
		io::ErrorKind::AlreadyExists => {
			warn!("refusing to overwrite {}", path.display());
			RleError::OutputExists(path.to_path_buf())
		}
		_ => RleError::Io(e),
	})
}

fn progress_bar(len: u64, enabled: bool) -> ProgressBar {
	if !enabled {
		return ProgressBar::hidden();
	}
	let pb = ProgressBar::new(len);
	if let Ok(style) = ProgressStyle::with_template(
		"{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})",
	) {
		pb.set_style(style.progress_chars("#>-"));
	}
	pb
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Cursor;
	use tempfile::TempDir;

	#[test]
	fn test_stats_count_both_sides() {
		let data = vec![7u8; 1000];
		let mut encoded = Vec::new();
		let stats = encode(&mut Cursor::new(&data), &mut encoded, Method::A).unwrap();
		assert_eq!(stats.original_size, 1000);
		// tag + four pairs (255 * 3 + 235)
		assert_eq!(stats.encoded_size, 9);
		assert_eq!(encoded.len(), 9);
		assert!(stats.ratio > 100.0);

		let mut restored = Vec::new();
		let back = decode(&mut Cursor::new(&encoded), &mut restored).unwrap();
		assert_eq!(back, stats);
		assert_eq!(restored, data);
	}

	#[test]
	fn test_info_reports_method() {
		let mut encoded = Vec::new();
		encode(&mut Cursor::new(b"abcabc"), &mut encoded, Method::B).unwrap();
		let stats = info(&mut Cursor::new(&encoded)).unwrap();
		assert_eq!(stats.method, Method::B);
		assert_eq!(stats.original_size, 6);
		assert_eq!(stats.encoded_size, 7);
	}

	#[test]
	fn test_file_refuses_existing_output() {
		let dir = TempDir::new().unwrap();
		let input = dir.path().join("in.bin");
		let output = dir.path().join("out.rle");
		std::fs::write(&input, b"zzzz").unwrap();
		std::fs::write(&output, b"keep me").unwrap();

		let config = CodecConfig::default();
		let result = encode_file(&input, &output, &config);
		assert!(matches!(result, Err(RleError::OutputExists(_))));
		assert_eq!(std::fs::read(&output).unwrap(), b"keep me");

		let config = config.with_overwrite(true);
		encode_file(&input, &output, &config).unwrap();
		assert_eq!(std::fs::read(&output).unwrap(), b"\x21\x04z");
	}

	#[test]
	fn test_missing_input() {
		let dir = TempDir::new().unwrap();
		let result = decode_file(
			&dir.path().join("nope.rle"),
			&dir.path().join("out.bin"),
			&CodecConfig::default(),
		);
		assert!(matches!(result, Err(RleError::InputNotFound(_))));
	}

	#[test]
	fn test_unknown_method_creates_no_output() {
		let dir = TempDir::new().unwrap();
		let input = dir.path().join("in.rle");
		let output = dir.path().join("out.bin");
		std::fs::write(&input, b"\x42WW\x03").unwrap();

		let result = decode_file(&input, &output, &CodecConfig::default());
		assert!(matches!(result, Err(RleError::UnknownMethod(0x42))));
		assert!(!output.exists());
	}
}
