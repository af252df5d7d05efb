use data_error::{DroidError, Result};

use crate::source::{Chunk, Source};
use crate::DEFAULT_BUFFER_SIZE;

fn checked_length(length: i64) -> Result<usize> {
    if length < 0 {
        return Err(DroidError::illegal_argument(format!(
            "Length must not be negative: {length}"
        )));
    }
    usize::try_from(length).map_err(|_| {
        DroidError::illegal_argument(format!("Length is too large: {length}"))
    })
}

/// Reads up to `length` units into `buffer[offset..]`, looping over short
/// reads until the count is reached or the source ends.
///
/// Returns the number of units read, which is less than `length` only when
/// the source ran out. A negative `length`, or a range that does not fit
/// in `buffer`, is rejected before the source is touched.
pub fn read_fully<T, S>(
    source: &mut S,
    buffer: &mut [T],
    offset: usize,
    length: i64,
) -> Result<usize>
where
    S: Source<T> + ?Sized,
{
    let length = checked_length(length)?;
    let end = offset
        .checked_add(length)
        .filter(|end| *end <= buffer.len())
        .ok_or_else(|| {
            DroidError::illegal_argument(format!(
                "Range {offset}..{offset}+{length} exceeds buffer of {}",
                buffer.len()
            ))
        })?;

    let mut position = offset;
    while position < end {
        match source.read_chunk(&mut buffer[position..end])? {
            Chunk::Filled(n) => position += n,
            Chunk::End => break,
        }
    }
    Ok(position - offset)
}

/// Same as [`read_fully`] over the whole of `buffer`.
pub fn read_into<T, S>(source: &mut S, buffer: &mut [T]) -> Result<usize>
where
    S: Source<T> + ?Sized,
{
    let length = buffer.len() as i64;
    read_fully(source, buffer, 0, length)
}

/// Reads exactly `length` units into `buffer[offset..]`.
///
/// Fails with [`DroidError::UnexpectedEof`] carrying both counts when the
/// source ends early. The units that did arrive are left in `buffer`.
pub fn read_fully_or_fail<T, S>(
    source: &mut S,
    buffer: &mut [T],
    offset: usize,
    length: i64,
) -> Result<()>
where
    S: Source<T> + ?Sized,
{
    let actual = read_fully(source, buffer, offset, length)?;
    if actual as i64 != length {
        return Err(DroidError::UnexpectedEof {
            expected: length as u64,
            actual: actual as u64,
        });
    }
    Ok(())
}

/// Reads exactly `length` units into a new vector.
///
/// The vector grows only as data arrives, through a chunk of at most
/// [`DEFAULT_BUFFER_SIZE`], so a `length` the source cannot satisfy fails
/// with [`DroidError::UnexpectedEof`] instead of allocating it up front.
pub fn read_fully_vec<T, S>(source: &mut S, length: i64) -> Result<Vec<T>>
where
    T: Copy + Default,
    S: Source<T> + ?Sized,
{
    let expected = checked_length(length)?;
    let mut chunk = vec![T::default(); expected.min(DEFAULT_BUFFER_SIZE)];
    let mut out = Vec::with_capacity(chunk.len());

    while out.len() < expected {
        let want = (expected - out.len()).min(chunk.len());
        match source.read_chunk(&mut chunk[..want])? {
            Chunk::Filled(n) => out.extend_from_slice(&chunk[..n]),
            Chunk::End => break,
        }
    }

    if out.len() != expected {
        return Err(DroidError::UnexpectedEof {
            expected: expected as u64,
            actual: out.len() as u64,
        });
    }
    Ok(out)
}

/// Discards up to `to_skip` units, reading them into a scratch buffer no
/// larger than [`DEFAULT_BUFFER_SIZE`].
///
/// Returns how many units were actually discarded; this is less than
/// `to_skip` only when the source ended first.
pub fn skip<T, S>(source: &mut S, to_skip: i64) -> Result<u64>
where
    T: Copy + Default,
    S: Source<T> + ?Sized,
{
    if to_skip < 0 {
        return Err(DroidError::illegal_argument(format!(
            "Skip count must be non-negative, actual: {to_skip}"
        )));
    }
    let to_skip = to_skip as u64;
    let capacity = to_skip.min(DEFAULT_BUFFER_SIZE as u64) as usize;
    let mut scratch = vec![T::default(); capacity];

    let mut remaining = to_skip;
    while remaining > 0 {
        let want = remaining.min(capacity as u64) as usize;
        match source.read_chunk(&mut scratch[..want])? {
            Chunk::Filled(n) => remaining -= n as u64,
            Chunk::End => break,
        }
    }

    let skipped = to_skip - remaining;
    log::trace!("Skipped {} of {} requested units", skipped, to_skip);
    Ok(skipped)
}

/// Discards exactly `to_skip` units or fails with
/// [`DroidError::UnexpectedSkipEof`].
pub fn skip_fully<T, S>(source: &mut S, to_skip: i64) -> Result<()>
where
    T: Copy + Default,
    S: Source<T> + ?Sized,
{
    if to_skip < 0 {
        return Err(DroidError::illegal_argument(format!(
            "Units to skip must not be negative: {to_skip}"
        )));
    }
    let skipped = skip(source, to_skip)?;
    if skipped != to_skip as u64 {
        return Err(DroidError::UnexpectedSkipEof {
            expected: to_skip as u64,
            actual: skipped,
        });
    }
    Ok(())
}
