//! # rlec
//!
//! A lossless run-length encoding codec with two wire formats and a one-byte
//! container tag that tells the decoder which one was used.
//!
//! ## Formats
//!
//! - **Method A** (tag `0x21`): every run of identical bytes becomes a
//!   `[count][value]` pair.
//! - **Method B** (tag `0x8A`): bytes that are not repeated are copied as-is;
//!   a run of two or more becomes `[value][value][count]`.
//!
//! Runs longer than 255 bytes are split into runs of 255 plus a remainder.
//!
//! ## Quick Start
//!
//! ```rust
//! use rlec::{decode_data, encode_data, Method};
//!
//! let original = b"WWWWWWWWWWWWBWWWWWWWWWWWWBBB";
//! let encoded = encode_data(original, Method::B).unwrap();
//! assert_eq!(encoded, b"\x8aWW\x0cBWW\x0cBB\x03");
//!
//! let decoded = decode_data(&encoded).unwrap();
//! assert_eq!(original.to_vec(), decoded);
//! ```
//!
//! ### Working with Files
//!
//! ```rust,no_run
//! use rlec::{pipeline, CodecConfig, Method};
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CodecConfig::default().with_method(Method::A);
//! let stats = pipeline::encode_file(Path::new("input.bin"), Path::new("output.rle"), &config)?;
//! println!("Compression ratio: {:.2}x", stats.ratio);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod container;
pub mod error;
pub mod io;
pub mod pipeline;
pub mod transforms;

// Re-export commonly used types for convenience
pub use config::{CodecConfig, Method, METHOD_A_TAG, METHOD_B_TAG};
pub use error::{Result, RleError};
pub use pipeline::{decode, encode, CodingStats};

use std::io::Cursor;

/// Encode data in memory, tag byte included.
///
/// For large files, use the streaming `pipeline::encode` function instead.
pub fn encode_data(data: &[u8], method: Method) -> Result<Vec<u8>> {
    let mut input = Cursor::new(data);
    let mut output = Vec::with_capacity(data.len() / 2 + 1);

    pipeline::encode(&mut input, &mut output, method)?;
    Ok(output)
}

/// Decode a tagged stream in memory.
///
/// # Example
///
/// ```rust
/// use rlec::{decode_data, RleError};
///
/// assert_eq!(decode_data(b"\x21\x03A\x01B").unwrap(), b"AAAB");
/// assert!(matches!(decode_data(b"\x00"), Err(RleError::UnknownMethod(0))));
/// ```
pub fn decode_data(encoded: &[u8]) -> Result<Vec<u8>> {
    let mut input = Cursor::new(encoded);
    let mut output = Vec::with_capacity(encoded.len() * 2);

    pipeline::decode(&mut input, &mut output)?;
    Ok(output)
}

/// Report the method and sizes of a tagged stream without keeping the output.
pub fn stream_info(encoded: &[u8]) -> Result<CodingStats> {
    let mut input = Cursor::new(encoded);
    pipeline::info(&mut input)
}

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

pub fn version_info() -> VersionInfo {
    VersionInfo {
        version: VERSION,
        authors: AUTHORS,
        description: DESCRIPTION,
    }
}

#[derive(Debug, Clone)]
pub struct VersionInfo {
    pub version: &'static str,
    pub authors: &'static str,
    pub description: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_data() {
        let original = b"Hello, world! This is a test of the rlec library API.";
        for method in [Method::A, Method::B] {
            let encoded = encode_data(original, method).unwrap();
            assert_eq!(encoded[0], method.tag());

            let decoded = decode_data(&encoded).unwrap();
            assert_eq!(original.to_vec(), decoded);
        }
    }

    #[test]
    fn test_empty_data() {
        assert_eq!(encode_data(b"", Method::A).unwrap(), vec![METHOD_A_TAG]);
        assert_eq!(encode_data(b"", Method::B).unwrap(), vec![METHOD_B_TAG]);
        assert!(decode_data(&[METHOD_A_TAG]).unwrap().is_empty());
        assert!(decode_data(&[METHOD_B_TAG]).unwrap().is_empty());
    }

    #[test]
    fn test_large_data() {
        let original = vec![42u8; 10000];
        let encoded = encode_data(&original, Method::B).unwrap();
        // 39 full runs and one of 55, three bytes each
        assert_eq!(encoded.len(), 1 + 40 * 3);
        assert_eq!(decode_data(&encoded).unwrap(), original);
    }

    #[test]
    fn test_stream_info() {
        let encoded = encode_data(&[1u8; 1000], Method::A).unwrap();
        let info = stream_info(&encoded).unwrap();
        assert_eq!(info.method, Method::A);
        assert_eq!(info.original_size, 1000);
        assert_eq!(info.encoded_size, encoded.len() as u64);

        let mut corrupted = encoded.clone();
        corrupted.pop();
        assert!(matches!(stream_info(&corrupted), Err(RleError::MalformedStream(_))));
    }

    #[test]
    fn test_version_info() {
        let info = version_info();
        assert!(!info.version.is_empty());
        assert!(!info.description.is_empty());
    }
}
