use std::io::{self, Read, Write};

/// Outcome of a single chunk read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chunk {
    /// `n` units were written to the front of the buffer.
    Filled(usize),
    /// The source has no more units to produce.
    End,
}

/// A sequential readable channel of units (bytes or chars).
///
/// Callers in this crate never pass an empty buffer. Implementors must
/// report `Chunk::Filled(n)` with `n >= 1` or `Chunk::End`.
pub trait Source<T> {
    fn read_chunk(&mut self, buf: &mut [T]) -> io::Result<Chunk>;
}

/// A sequential writable channel of units (bytes or chars).
///
/// `write_chunk` must consume the whole chunk or fail.
pub trait Sink<T> {
    fn write_chunk(&mut self, chunk: &[T]) -> io::Result<()>;
}

impl<R: Read + ?Sized> Source<u8> for R {
    fn read_chunk(&mut self, buf: &mut [u8]) -> io::Result<Chunk> {
        match self.read(buf)? {
            0 => Ok(Chunk::End),
            n => Ok(Chunk::Filled(n)),
        }
    }
}

impl<W: Write + ?Sized> Sink<u8> for W {
    fn write_chunk(&mut self, chunk: &[u8]) -> io::Result<()> {
        self.write_all(chunk)
    }
}

impl Source<char> for &[char] {
    fn read_chunk(&mut self, buf: &mut [char]) -> io::Result<Chunk> {
        if self.is_empty() {
            return Ok(Chunk::End);
        }
        let n = self.len().min(buf.len());
        buf[..n].copy_from_slice(&self[..n]);
        *self = &self[n..];
        Ok(Chunk::Filled(n))
    }
}

impl Source<char> for std::str::Chars<'_> {
    fn read_chunk(&mut self, buf: &mut [char]) -> io::Result<Chunk> {
        let mut n = 0;
        for slot in buf.iter_mut() {
            match self.next() {
                Some(c) => {
                    *slot = c;
                    n += 1;
                }
                None => break,
            }
        }
        if n == 0 {
            Ok(Chunk::End)
        } else {
            Ok(Chunk::Filled(n))
        }
    }
}

impl Sink<char> for String {
    fn write_chunk(&mut self, chunk: &[char]) -> io::Result<()> {
        self.extend(chunk.iter());
        Ok(())
    }
}

impl Sink<char> for Vec<char> {
    fn write_chunk(&mut self, chunk: &[char]) -> io::Result<()> {
        self.extend_from_slice(chunk);
        Ok(())
    }
}
