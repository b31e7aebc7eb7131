//! Byte-level I/O helpers shared by the codecs
//!
//! The codecs only ever need "give me the next byte, or tell me the input is
//! over" and "write these bytes". These helpers provide exactly that on top of
//! any `Read`/`Write`, including non-seekable sources such as pipes.

use byteorder::ReadBytesExt;
use std::io::{self, Read, Write};

/// Read a single byte, returning `None` at end of input.
pub fn read_byte<R: Read>(reader: &mut R) -> io::Result<Option<u8>> {
    match reader.read_u8() {
        Ok(byte) => Ok(Some(byte)),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
        Err(e) => Err(e),
    }
}

/// Reader with one byte of lookahead that can be handed back.
pub struct PushbackReader<R> {
    inner: R,
    pending: Option<u8>,
}

impl<R: Read> PushbackReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, pending: None }
    }

    pub fn next_byte(&mut self) -> io::Result<Option<u8>> {
        match self.pending.take() {
            Some(byte) => Ok(Some(byte)),
            None => read_byte(&mut self.inner),
        }
    }

    /// Return `byte` to the front of the source so the next read yields it again.
    ///
    /// Only one byte can be pending at a time.
    pub fn unread(&mut self, byte: u8) {
        debug_assert!(self.pending.is_none(), "only one byte of pushback is supported");
        self.pending = Some(byte);
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

/// Pass-through adapter that counts the bytes read or written through it.
pub struct Counting<T> {
    inner: T,
    count: u64,
}

impl<T> Counting<T> {
    pub fn new(inner: T) -> Self {
        Self { inner, count: 0 }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<R: Read> Read for Counting<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.count += n as u64;
        Ok(n)
    }
}

impl<W: Write> Write for Counting<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.count += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
