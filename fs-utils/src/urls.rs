use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

use data_error::{DroidError, Result};
use url::Url;

use crate::copy::copy_input_to_file;
use crate::file::open_input;

/// Converts a `file:` URL to a local path. Other schemes give `None`.
pub fn to_file(url: &Url) -> Option<PathBuf> {
    if url.scheme() != "file" {
        return None;
    }
    url.to_file_path().ok()
}

/// Converts local paths to `file:` URLs. Relative paths are resolved
/// against the current directory.
pub fn to_urls<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Url>> {
    let current_dir = std::env::current_dir()?;
    paths
        .iter()
        .map(|path| {
            let absolute = current_dir.join(path.as_ref());
            Url::from_file_path(&absolute).map_err(|_| {
                DroidError::Url(format!(
                    "Cannot convert '{}' to a URL",
                    absolute.display()
                ))
            })
        })
        .collect()
}

/// Copies the resource behind `url` into `destination`.
///
/// `file:` URLs are read from disk and `http(s):` URLs are fetched without
/// a timeout. Any other scheme is a URL error.
pub fn copy_url_to_file(
    url: &Url,
    destination: impl AsRef<Path>,
) -> Result<u64> {
    let source = open_url(url, None)?;
    copy_input_to_file(source, destination)
}

/// Same as [`copy_url_to_file`] with limits for `http(s):` URLs.
///
/// `connection_timeout` bounds connecting. `request_timeout` bounds the
/// whole request from connecting to the end of the body, not each read.
pub fn copy_url_to_file_with_timeouts(
    url: &Url,
    destination: impl AsRef<Path>,
    connection_timeout: Duration,
    request_timeout: Duration,
) -> Result<u64> {
    let source = open_url(url, Some((connection_timeout, request_timeout)))?;
    copy_input_to_file(source, destination)
}

fn open_url(
    url: &Url,
    timeouts: Option<(Duration, Duration)>,
) -> Result<Box<dyn Read>> {
    match url.scheme() {
        "file" => {
            let path = to_file(url).ok_or_else(|| {
                DroidError::Url(format!("{url} is not a local file"))
            })?;
            Ok(Box::new(open_input(path)?))
        }
        "http" | "https" => {
            log::debug!("Fetching {}", url);
            let builder = reqwest::blocking::Client::builder();
            let builder = match timeouts {
                Some((connect, request)) => {
                    builder.connect_timeout(connect).timeout(request)
                }
                None => builder.timeout(None::<Duration>),
            };
            let response = builder
                .build()?
                .get(url.clone())
                .send()?
                .error_for_status()?;
            Ok(Box::new(response))
        }
        scheme => Err(DroidError::Url(format!(
            "Unsupported URL scheme: {scheme}"
        ))),
    }
}
