//! Container framing: `[tag][payload]`
//!
//! The tag is positional. Only byte 0 is ever interpreted as a method tag;
//! payload bytes that happen to equal a tag value are plain data.

use crate::config::Method;
use crate::error::{Result, RleError};
use crate::io::read_byte;
use crate::transforms::{method_a, method_b};
use byteorder::WriteBytesExt;
use std::io::{Read, Write};

/// Write the tag for `method` followed by the encoded contents of `reader`.
pub fn write_container<R: Read, W: Write>(reader: R, writer: &mut W, method: Method) -> Result<()> {
	writer.write_u8(method.tag())?;
	encode_payload(reader, writer, method)
}

/// Read the tag, then decode the rest of the stream with the matching method.
pub fn read_container<R: Read, W: Write>(mut reader: R, writer: &mut W) -> Result<Method> {
	let method = read_method(&mut reader)?;
	decode_payload(reader, writer, method)?;
	Ok(method)
}

/// Consume the leading tag byte and resolve it to a method.
pub fn read_method<R: Read>(reader: &mut R) -> Result<Method> {
	let tag = read_byte(reader)?
		.ok_or_else(|| RleError::MalformedStream("stream is empty, missing method tag".to_string()))?;
	Method::from_tag(tag).ok_or(RleError::UnknownMethod(tag))
}

pub fn encode_payload<R: Read, W: Write>(reader: R, writer: &mut W, method: Method) -> Result<()> {
	match method {
		Method::A => method_a::encode(reader, writer),
		Method::B => method_b::encode(reader, writer),
	}
}

pub fn decode_payload<R: Read, W: Write>(reader: R, writer: &mut W, method: Method) -> Result<()> {
	match method {
		Method::A => method_a::decode(reader, writer),
		Method::B => method_b::decode(reader, writer),
	}
}
