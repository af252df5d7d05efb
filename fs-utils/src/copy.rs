use std::io::Write;
use std::path::Path;

use data_error::Result;
use data_stream::{Sink, Source};

use crate::file::{open_input, open_output};

/// Copies the content of the file at `input` into `sink`.
///
/// The file is closed before returning, whether or not the copy succeeded.
/// `sink` stays open.
pub fn copy_file<K>(input: impl AsRef<Path>, sink: &mut K) -> Result<u64>
where
    K: Sink<u8> + ?Sized,
{
    let mut file = open_input(input)?;
    data_stream::copy_large(&mut file, sink)
}

/// Copies `source` into the file at `destination`, replacing its content
/// and creating missing parent directories. `source` stays open.
pub fn copy_to_file<S>(
    source: &mut S,
    destination: impl AsRef<Path>,
) -> Result<u64>
where
    S: Source<u8> + ?Sized,
{
    let destination = destination.as_ref();
    let mut output = open_output(destination, false)?;
    let count = data_stream::copy_large(source, &mut output)?;
    output.flush()?;
    log::debug!("Copied {} bytes into {}", count, destination.display());
    Ok(count)
}

/// Same as [`copy_to_file`] but takes ownership of `source`, which is
/// dropped (and so closed) on every exit path.
pub fn copy_input_to_file<S>(
    mut source: S,
    destination: impl AsRef<Path>,
) -> Result<u64>
where
    S: Source<u8>,
{
    copy_to_file(&mut source, destination)
}
