//! Utility toolkit for moving data between streams, files and URLs.
//!
//! The functionality lives in the member crates and is re-exported here:
//!
//! - [`stream`]: bounded copy, read and skip over byte and char channels
//! - [`files`]: file and URL helpers built on top of `stream`
//! - [`net`]: IPv4 address conversions
//! - [`error`]: the shared error type

pub use data_error as error;
pub use data_stream as stream;
pub use fs_utils as files;
pub use net_utils as net;

pub use data_error::{DroidError, Result};
pub use data_stream::{
    copy, copy_large, read_fully, read_fully_or_fail, skip, skip_fully, Sink,
    Source, DEFAULT_BUFFER_SIZE, EOF,
};

/// Copies the byte range `[offset, offset + length)` of `source` into
/// `sink` through one buffer of at most [`DEFAULT_BUFFER_SIZE`] bytes.
///
/// Fails with [`DroidError::UnexpectedEof`] when `source` ends before the
/// range is complete; the bytes that did arrive have been written by then.
pub fn copy_range<S, K>(
    source: &mut S,
    sink: &mut K,
    offset: i64,
    length: i64,
) -> Result<u64>
where
    S: Source<u8> + ?Sized,
    K: Sink<u8> + ?Sized,
{
    if length < 0 {
        return Err(DroidError::illegal_argument(format!(
            "Length must not be negative: {length}"
        )));
    }
    skip_fully(source, offset)?;
    let count = data_stream::copy_limited(source, sink, length)?;
    if count != length as u64 {
        return Err(DroidError::UnexpectedEof {
            expected: length as u64,
            actual: count,
        });
    }
    log::debug!("Copied {} bytes starting at {}", count, offset);
    Ok(count)
}
