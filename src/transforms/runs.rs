//! Run scanner shared by both encoders
//!
//! Splits a byte source into runs of identical bytes. A run never exceeds
//! [`MAX_RUN`]; when it reaches the cap it is reported and the same byte
//! starts a fresh run, so two adjacent runs may carry the same byte.

use crate::io::PushbackReader;
use std::io::{self, Read};

/// Longest run representable by a single count byte.
pub const MAX_RUN: u8 = u8::MAX;

/// A run of `len` copies of `byte`, with `len` in `1..=255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub byte: u8,
    pub len: u8,
}

/// Lazy iterator of [`Run`]s over a reader.
///
/// Reads one byte at a time, so wrap unbuffered sources in a `BufReader`.
pub struct Runs<R> {
    reader: PushbackReader<R>,
}

impl<R: Read> Runs<R> {
    pub fn new(reader: R) -> Self {
        Self { reader: PushbackReader::new(reader) }
    }

    fn scan(&mut self) -> io::Result<Option<Run>> {
        let byte = match self.reader.next_byte()? {
            Some(byte) => byte,
            None => return Ok(None),
        };

        let mut len = 1u8;
        while len < MAX_RUN {
            match self.reader.next_byte()? {
                Some(next) if next == byte => len += 1,
                Some(next) => {
                    self.reader.unread(next);
                    break;
                }
                None => break,
            }
        }

        Ok(Some(Run { byte, len }))
    }
}

impl<R: Read> Iterator for Runs<R> {
    type Item = io::Result<Run>;

    fn next(&mut self) -> Option<Self::Item> {
        self.scan().transpose()
    }
}
