//! Method-A run-length encoding
//! Format: every run is written as [COUNT][BYTE], so the payload is always a
//! sequence of 2-byte pairs. Counts are 1..=255; longer runs are split.

use super::runs::{Runs, MAX_RUN};
use crate::error::{Result, RleError};
use crate::io::read_byte;
use std::io::{Read, Write};

pub fn encode<R: Read, W: Write>(reader: R, writer: &mut W) -> Result<()> {
    for run in Runs::new(reader) {
        let run = run?;
        writer.write_all(&[run.len, run.byte])?;
    }
    Ok(())
}

pub fn decode<R: Read, W: Write>(mut reader: R, writer: &mut W) -> Result<()> {
    let mut expanded = [0u8; MAX_RUN as usize];

    while let Some(count) = read_byte(&mut reader)? {
        let byte = read_byte(&mut reader)?.ok_or_else(|| {
            RleError::MalformedStream("method-a payload has an odd number of bytes".to_string())
        })?;

        let run = &mut expanded[..count as usize];
        run.fill(byte);
        writer.write_all(run)?;
    }
    Ok(())
}
