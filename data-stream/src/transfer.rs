use data_error::{DroidError, Result};

use crate::source::{Chunk, Sink, Source};
use crate::{DEFAULT_BUFFER_SIZE, EOF};

/// Copies `source` into `sink` and narrows the count to `i32`.
///
/// Returns [`EOF`] when more than `i32::MAX` units were moved; the copy
/// itself still runs to completion. Use [`copy_large`] for the exact count.
pub fn copy<T, S, K>(source: &mut S, sink: &mut K) -> Result<i32>
where
    T: Copy + Default,
    S: Source<T> + ?Sized,
    K: Sink<T> + ?Sized,
{
    let count = copy_large(source, sink)?;
    Ok(i32::try_from(count).unwrap_or(EOF))
}

/// Copies `source` into `sink` through a buffer of [`DEFAULT_BUFFER_SIZE`].
pub fn copy_large<T, S, K>(source: &mut S, sink: &mut K) -> Result<u64>
where
    T: Copy + Default,
    S: Source<T> + ?Sized,
    K: Sink<T> + ?Sized,
{
    copy_with_buffer_size(source, sink, DEFAULT_BUFFER_SIZE)
}

pub fn copy_with_buffer_size<T, S, K>(
    source: &mut S,
    sink: &mut K,
    buffer_size: usize,
) -> Result<u64>
where
    T: Copy + Default,
    S: Source<T> + ?Sized,
    K: Sink<T> + ?Sized,
{
    if buffer_size == 0 {
        return Err(DroidError::illegal_argument(
            "Buffer size must be positive: 0",
        ));
    }
    let mut buffer = vec![T::default(); buffer_size];
    copy_large_with_buffer(source, sink, &mut buffer)
}

/// Copies `source` into `sink` reusing the caller's `buffer`.
///
/// Neither argument is flushed or closed. Read and write errors are
/// returned as soon as they happen; nothing is retried.
pub fn copy_large_with_buffer<T, S, K>(
    source: &mut S,
    sink: &mut K,
    buffer: &mut [T],
) -> Result<u64>
where
    S: Source<T> + ?Sized,
    K: Sink<T> + ?Sized,
{
    if buffer.is_empty() {
        return Err(DroidError::illegal_argument(
            "Transfer buffer must not be empty",
        ));
    }

    let mut count: u64 = 0;
    while let Chunk::Filled(n) = source.read_chunk(buffer)? {
        sink.write_chunk(&buffer[..n])?;
        count += n as u64;
    }

    log::trace!(
        "Copied {} units with a buffer of {}",
        count,
        buffer.len()
    );
    Ok(count)
}

/// Copies at most `length` units from `source` into `sink` through one
/// buffer of at most [`DEFAULT_BUFFER_SIZE`] units.
///
/// Returns the number of units moved, which is less than `length` only when
/// the source ended first. A negative `length` is rejected before any I/O.
pub fn copy_limited<T, S, K>(
    source: &mut S,
    sink: &mut K,
    length: i64,
) -> Result<u64>
where
    T: Copy + Default,
    S: Source<T> + ?Sized,
    K: Sink<T> + ?Sized,
{
    if length < 0 {
        return Err(DroidError::illegal_argument(format!(
            "Length must not be negative: {length}"
        )));
    }
    let limit = length as u64;
    let capacity = limit.min(DEFAULT_BUFFER_SIZE as u64) as usize;
    let mut buffer = vec![T::default(); capacity];

    let mut count: u64 = 0;
    while count < limit {
        let want = (limit - count).min(capacity as u64) as usize;
        match source.read_chunk(&mut buffer[..want])? {
            Chunk::Filled(n) => {
                sink.write_chunk(&buffer[..n])?;
                count += n as u64;
            }
            Chunk::End => break,
        }
    }

    log::trace!("Copied {} of at most {} units", count, limit);
    Ok(count)
}

/// Accumulates the whole source in memory.
pub fn to_vec<T, S>(source: &mut S) -> Result<Vec<T>>
where
    T: Copy + Default,
    S: Source<T> + ?Sized,
    Vec<T>: Sink<T>,
{
    let mut out = Vec::new();
    copy_large(source, &mut out)?;
    Ok(out)
}

pub fn to_string<S>(source: &mut S) -> Result<String>
where
    S: Source<char> + ?Sized,
{
    let mut out = String::new();
    copy_large(source, &mut out)?;
    Ok(out)
}

/// Writes `data` to `sink` in pieces of at most [`DEFAULT_BUFFER_SIZE`].
pub fn write_chunked<T, K>(data: &[T], sink: &mut K) -> Result<()>
where
    K: Sink<T> + ?Sized,
{
    for chunk in data.chunks(DEFAULT_BUFFER_SIZE) {
        sink.write_chunk(chunk)?;
    }
    Ok(())
}
