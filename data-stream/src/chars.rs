//! UTF-8 adapters turning byte streams into char sources and sinks.

use std::io::{self, ErrorKind, Read, Write};

use crate::source::{Chunk, Sink, Source};
use crate::DEFAULT_BUFFER_SIZE;

/// Decodes a byte reader as UTF-8, one chunk of chars at a time.
///
/// Bytes of a sequence split across two reads are kept until the rest
/// arrives. A sequence that is invalid, or still incomplete at the end of
/// the underlying reader, fails with `ErrorKind::InvalidData`.
pub struct CharReader<R> {
    inner: R,
    pending: Vec<u8>,
    start: usize,
    scratch: Box<[u8]>,
}

impl<R: Read> CharReader<R> {
    pub fn new(inner: R) -> Self {
        Self::with_capacity(DEFAULT_BUFFER_SIZE, inner)
    }

    pub fn with_capacity(capacity: usize, inner: R) -> Self {
        Self {
            inner,
            pending: Vec::new(),
            start: 0,
            scratch: vec![0u8; capacity.max(4)].into_boxed_slice(),
        }
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Moves as many complete chars as fit from `pending` into `buf`.
    ///
    /// Only the bytes that `buf` could possibly hold are validated.
    fn drain_pending(&mut self, buf: &mut [char]) -> io::Result<usize> {
        let rest = &self.pending[self.start..];
        let window = &rest[..rest.len().min(buf.len().saturating_mul(4))];
        let valid = match std::str::from_utf8(window) {
            Ok(text) => text,
            Err(e) => {
                if e.valid_up_to() == 0 && e.error_len().is_some() {
                    return Err(invalid_utf8());
                }
                std::str::from_utf8(&window[..e.valid_up_to()])
                    .map_err(|_| invalid_utf8())?
            }
        };

        let mut filled = 0;
        let mut consumed = 0;
        for (slot, c) in buf.iter_mut().zip(valid.chars()) {
            *slot = c;
            filled += 1;
            consumed += c.len_utf8();
        }
        self.start += consumed;
        Ok(filled)
    }

    /// Drops the decoded prefix of `pending` and appends fresh bytes.
    fn refill(&mut self, n: usize) {
        self.pending.drain(..self.start);
        self.start = 0;
        self.pending.extend_from_slice(&self.scratch[..n]);
    }
}

impl<R: Read> Source<char> for CharReader<R> {
    fn read_chunk(&mut self, buf: &mut [char]) -> io::Result<Chunk> {
        loop {
            let filled = self.drain_pending(buf)?;
            if filled > 0 {
                return Ok(Chunk::Filled(filled));
            }

            let n = self.inner.read(&mut self.scratch)?;
            if n == 0 {
                if self.start == self.pending.len() {
                    return Ok(Chunk::End);
                }
                return Err(io::Error::new(
                    ErrorKind::InvalidData,
                    "stream ended inside a UTF-8 sequence",
                ));
            }
            self.refill(n);
        }
    }
}

fn invalid_utf8() -> io::Error {
    io::Error::new(ErrorKind::InvalidData, "stream did not contain valid UTF-8")
}

/// Encodes chars as UTF-8 onto a byte writer.
pub struct CharWriter<W> {
    inner: W,
    encoded: String,
}

impl<W: Write> CharWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            encoded: String::new(),
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Sink<char> for CharWriter<W> {
    fn write_chunk(&mut self, chunk: &[char]) -> io::Result<()> {
        self.encoded.clear();
        self.encoded.extend(chunk.iter());
        self.inner.write_all(self.encoded.as_bytes())
    }
}
