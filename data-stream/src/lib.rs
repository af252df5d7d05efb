//! # Data Stream
//!
//! Bounded stream transfer over byte and char channels: copy a source into
//! a sink, read a requested number of units, or skip ahead, always through
//! one fixed-size buffer per call.
//!
//! Any [`std::io::Read`] is a byte [`Source`] and any [`std::io::Write`] is a
//! byte [`Sink`]. Char channels come from [`CharReader`] / [`CharWriter`],
//! `&[char]`, `str::Chars`, `String` and `Vec<char>`.
//!
//! None of the functions here close, flush or retry on their arguments.

mod chars;
mod lines;
mod read;
mod source;
mod transfer;

pub use chars::{CharReader, CharWriter};
pub use lines::{
    content_equals_ignore_eol, read_lines, write_lines, LINE_SEPARATOR,
};
pub use read::{
    read_fully, read_fully_or_fail, read_fully_vec, read_into, skip,
    skip_fully,
};
pub use source::{Chunk, Sink, Source};
pub use transfer::{
    copy, copy_large, copy_large_with_buffer, copy_limited,
    copy_with_buffer_size, to_string, to_vec, write_chunked,
};

/// Capacity of the transfer buffer when the caller does not pick one.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Returned by [`copy`] when the count does not fit in an `i32`.
pub const EOF: i32 = -1;
