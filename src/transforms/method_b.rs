//! Method-B run-length encoding
//! Format: a lone byte is written as [BYTE]; a run of two or more is written
//! as [BYTE][BYTE][COUNT]. Input without adjacent repeats passes through
//! unchanged, and a doubled byte always announces a count.

use super::runs::{Runs, MAX_RUN};
use crate::error::{Result, RleError};
use crate::io::PushbackReader;
use std::io::{Read, Write};

pub fn encode<R: Read, W: Write>(reader: R, writer: &mut W) -> Result<()> {
    for run in Runs::new(reader) {
        let run = run?;
        if run.len > 1 {
            writer.write_all(&[run.byte, run.byte, run.len])?;
        } else {
            writer.write_all(&[run.byte])?;
        }
    }
    Ok(())
}

pub fn decode<R: Read, W: Write>(reader: R, writer: &mut W) -> Result<()> {
    let mut reader = PushbackReader::new(reader);
    let mut expanded = [0u8; MAX_RUN as usize];

    while let Some(byte) = reader.next_byte()? {
        match reader.next_byte()? {
            Some(next) if next == byte => {
                let count = reader.next_byte()?.ok_or_else(|| {
                    RleError::MalformedStream(format!(
                        "doubled byte {:#04x} is not followed by a count",
                        byte
                    ))
                })?;
                let run = &mut expanded[..count as usize];
                run.fill(byte);
                writer.write_all(run)?;
            }
            Some(next) => {
                reader.unread(next);
                writer.write_all(&[byte])?;
            }
            None => writer.write_all(&[byte])?,
        }
    }
    Ok(())
}
