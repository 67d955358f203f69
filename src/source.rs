//! The sequential byte source seam.
//!
//! The digest pipeline pulls its input one byte at a time through the
//! [`ByteSource`] trait: the next byte, exhaustion, or a hard read failure.
//! No seeking and no length hint are required, so anything from an in-memory
//! slice to an unbounded socket stream can feed a digest. Two adapters cover
//! the common cases: [`ReadSource`] wraps any [`std::io::Read`], and
//! [`SliceSource`] serves bytes already held in memory.

use std::io::{ErrorKind, Read};

use crate::error::Result;

/// A sequential byte source: yields bytes on demand and signals end-of-data
/// when exhausted.
pub trait ByteSource {
    /// Returns the next byte, `Ok(None)` once the source is exhausted, or an
    /// error if the source failed outright.
    fn next_byte(&mut self) -> Result<Option<u8>>;
}

/// Adapts any [`std::io::Read`] into a [`ByteSource`].
///
/// Reads are issued a byte at a time; wrap slow sources in a
/// [`std::io::BufReader`] to avoid a syscall per byte.
#[derive(Debug)]
pub struct ReadSource<R> {
    inner: R,
}

impl<R: Read> ReadSource<R> {
    /// Wraps a reader.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl<R: Read> ByteSource for ReadSource<R> {
    fn next_byte(&mut self) -> Result<Option<u8>> {
        let mut buf = [0u8; 1];
        loop {
            match self.inner.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
}

/// Serves bytes from an in-memory slice. Never fails.
#[derive(Debug, Clone)]
pub struct SliceSource<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    /// Wraps a slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }
}

impl ByteSource for SliceSource<'_> {
    fn next_byte(&mut self) -> Result<Option<u8>> {
        match self.data.get(self.pos) {
            Some(&b) => {
                self.pos += 1;
                Ok(Some(b))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn slice_source_yields_bytes_then_exhausts() {
        let mut src = SliceSource::new(b"xy");
        assert_eq!(src.next_byte().unwrap(), Some(b'x'));
        assert_eq!(src.next_byte().unwrap(), Some(b'y'));
        assert_eq!(src.next_byte().unwrap(), None);
        // exhaustion is sticky
        assert_eq!(src.next_byte().unwrap(), None);
    }

    #[test]
    fn read_source_drains_a_reader() {
        let mut src = ReadSource::new(Cursor::new(vec![1u8, 2, 3]));
        let mut out = Vec::new();
        while let Some(b) = src.next_byte().unwrap() {
            out.push(b);
        }
        assert_eq!(out, vec![1, 2, 3]);
    }

    #[test]
    fn read_source_propagates_hard_failures() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(ErrorKind::Other, "disk on fire"))
            }
        }
        let mut src = ReadSource::new(Broken);
        assert!(src.next_byte().is_err());
    }
}
