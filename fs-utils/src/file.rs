use std::fmt::Display;
use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant, SystemTime};

use data_error::{DroidError, Result};

const WAIT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Opens `path` for reading.
///
/// Fails with a path error when the file is missing or is a directory.
pub fn open_input(path: impl AsRef<Path>) -> Result<File> {
    let path = path.as_ref();
    if path.is_dir() {
        return Err(DroidError::Path(format!(
            "File '{}' exists but is a directory",
            path.display()
        )));
    }
    if !path.exists() {
        return Err(DroidError::Path(format!(
            "File '{}' does not exist",
            path.display()
        )));
    }
    log::trace!("Opening {} for reading", path.display());
    Ok(File::open(path)?)
}

/// Opens `path` for writing, creating missing parent directories.
///
/// With `append` the existing content is kept, otherwise it is truncated.
pub fn open_output(path: impl AsRef<Path>, append: bool) -> Result<File> {
    let path = path.as_ref();
    if path.is_dir() {
        return Err(DroidError::Path(format!(
            "File '{}' exists but is a directory",
            path.display()
        )));
    }
    create_parent_directories(path)?;
    log::trace!("Opening {} for writing (append: {})", path.display(), append);
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .append(append)
        .truncate(!append)
        .open(path)?;
    Ok(file)
}

/// Creates every missing directory above `path` and returns the parent.
pub fn create_parent_directories(
    path: impl AsRef<Path>,
) -> Result<Option<PathBuf>> {
    match path.as_ref().parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            force_mkdir(parent)?;
            Ok(Some(parent.to_path_buf()))
        }
        _ => Ok(None),
    }
}

/// Creates `directory` and its parents. A regular file in the way is an
/// error.
pub fn force_mkdir(directory: impl AsRef<Path>) -> Result<()> {
    let directory = directory.as_ref();
    if directory.exists() && !directory.is_dir() {
        return Err(DroidError::Path(format!(
            "File '{}' exists and is not a directory. Unable to create directory.",
            directory.display()
        )));
    }
    fs::create_dir_all(directory)?;
    Ok(())
}

/// Creates an empty file if needed, then sets its modification time to now.
pub fn touch(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = open_output(path, true)?;
    file.set_modified(SystemTime::now())?;
    Ok(())
}

/// Reads the whole file into memory.
///
/// The handle is released on every exit path.
pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(DroidError::Path(format!(
            "{}: file not found",
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(DroidError::Path(format!("{}: not a file", path.display())));
    }

    let file = File::open(path)?;
    let length = file.metadata()?.len();
    let capacity = usize::try_from(length).map_err(|_| {
        DroidError::Path(format!("{}: file too long", path.display()))
    })?;

    let mut reader = BufReader::new(file);
    let mut content: Vec<u8> = Vec::with_capacity(capacity);
    let count =
        data_stream::copy_large::<u8, _, _>(&mut reader, &mut content)?;
    log::debug!("Read {} bytes from {}", count, path.display());
    Ok(content)
}

pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let mut reader = BufReader::new(open_input(path)?);
    data_stream::read_lines(&mut reader)
}

pub fn write_lines<I>(
    path: impl AsRef<Path>,
    lines: I,
    line_ending: Option<&str>,
    append: bool,
) -> Result<()>
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut writer = BufWriter::new(open_output(path, append)?);
    data_stream::write_lines(lines, line_ending, &mut writer)?;
    writer.flush()?;
    Ok(())
}

pub fn write_byte_array_to_file(
    path: impl AsRef<Path>,
    data: &[u8],
    append: bool,
) -> Result<()> {
    let mut file = open_output(path, append)?;
    data_stream::write_chunked(data, &mut file)?;
    Ok(())
}

pub fn write_string_to_file(
    path: impl AsRef<Path>,
    data: &str,
    append: bool,
) -> Result<()> {
    write_byte_array_to_file(path, data.as_bytes(), append)
}

/// Compares two files line by line, ignoring line terminator differences.
///
/// Two missing files are equal; a missing file never equals an existing
/// one. Directories are rejected.
pub fn content_equals_ignore_eol(
    first: impl AsRef<Path>,
    second: impl AsRef<Path>,
) -> Result<bool> {
    let (first, second) = (first.as_ref(), second.as_ref());
    let first_exists = first.exists();
    if first_exists != second.exists() {
        return Ok(false);
    }
    if !first_exists {
        return Ok(true);
    }
    for path in [first, second] {
        if path.is_dir() {
            return Err(DroidError::Path(format!(
                "'{}' is a directory",
                path.display()
            )));
        }
    }
    if fs::canonicalize(first)? == fs::canonicalize(second)? {
        return Ok(true);
    }

    let mut left = BufReader::new(File::open(first)?);
    let mut right = BufReader::new(File::open(second)?);
    data_stream::content_equals_ignore_eol(&mut left, &mut right)
}

/// Polls until `path` exists or `timeout` elapses.
pub fn wait_for(path: impl AsRef<Path>, timeout: Duration) -> bool {
    let path = path.as_ref();
    let deadline = Instant::now() + timeout;
    loop {
        if path.exists() {
            return true;
        }
        let now = Instant::now();
        if now >= deadline {
            return false;
        }
        thread::sleep(WAIT_POLL_INTERVAL.min(deadline - now));
    }
}
