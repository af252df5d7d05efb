use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use data_error::DroidError;
use fs_utils::open_input;

use crate::AppError;

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "read", about = "Write a byte range of a file to stdout")]
pub struct ReadBytes {
    #[clap(value_parser, help = "File to read from")]
    file: PathBuf,
    #[clap(
        short,
        long,
        default_value_t = 0,
        allow_negative_numbers = true,
        help = "Bytes to skip before reading"
    )]
    skip: i64,
    #[clap(
        short,
        long,
        allow_negative_numbers = true,
        help = "Bytes to read, everything left when omitted"
    )]
    length: Option<i64>,
    #[clap(
        long,
        action,
        help = "Fail instead of stopping early when the file is too short"
    )]
    exact: bool,
}

impl ReadBytes {
    pub fn run(&self) -> Result<(), AppError> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out)?;
        out.flush()?;
        Ok(())
    }

    fn write_to<W: Write>(&self, out: &mut W) -> Result<(), AppError> {
        let mut input = BufReader::new(open_input(&self.file)?);

        if self.exact {
            data_stream::skip_fully::<u8, _>(&mut input, self.skip)?;
        } else {
            let skipped = data_stream::skip::<u8, _>(&mut input, self.skip)?;
            log::debug!("Skipped {} bytes", skipped);
        }

        let Some(length) = self.length else {
            data_stream::copy_large::<u8, _, _>(&mut input, out)?;
            return Ok(());
        };

        let count =
            data_stream::copy_limited::<u8, _, _>(&mut input, out, length)?;
        if self.exact && count != length as u64 {
            return Err(DroidError::UnexpectedEof {
                expected: length as u64,
                actual: count,
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempdir::TempDir;

    fn fixture(temp_dir: &TempDir) -> PathBuf {
        let path = temp_dir.path().join("data.txt");
        fs::write(&path, "0123456789").unwrap();
        path
    }

    fn run(
        file: PathBuf,
        skip: i64,
        length: Option<i64>,
        exact: bool,
    ) -> Result<Vec<u8>, AppError> {
        let mut out = Vec::new();
        ReadBytes {
            file,
            skip,
            length,
            exact,
        }
        .write_to(&mut out)?;
        Ok(out)
    }

    #[test]
    fn reads_a_range() {
        let temp_dir = TempDir::new("droid-cli").unwrap();
        let out = run(fixture(&temp_dir), 2, Some(3), true).unwrap();
        assert_eq!(out, b"234");
    }

    #[test]
    fn reads_the_rest_when_length_is_omitted() {
        let temp_dir = TempDir::new("droid-cli").unwrap();
        let out = run(fixture(&temp_dir), 7, None, false).unwrap();
        assert_eq!(out, b"789");
    }

    #[test]
    fn lenient_read_stops_at_end() {
        let temp_dir = TempDir::new("droid-cli").unwrap();
        let out = run(fixture(&temp_dir), 8, Some(10), false).unwrap();
        assert_eq!(out, b"89");
    }

    #[test]
    fn exact_read_fails_when_short() {
        let temp_dir = TempDir::new("droid-cli").unwrap();
        let err = run(fixture(&temp_dir), 8, Some(10), true).unwrap_err();
        assert!(matches!(
            err,
            AppError::DroidError(DroidError::UnexpectedEof {
                expected: 10,
                actual: 2
            })
        ));
    }

    #[test]
    fn huge_length_streams_what_is_there() {
        let temp_dir = TempDir::new("droid-cli").unwrap();
        let out = run(fixture(&temp_dir), 4, Some(1 << 50), false).unwrap();
        assert_eq!(out, b"456789");

        let err =
            run(fixture(&temp_dir), 4, Some(1 << 50), true).unwrap_err();
        assert!(matches!(
            err,
            AppError::DroidError(DroidError::UnexpectedEof {
                expected: 1125899906842624,
                actual: 6
            })
        ));
    }

    #[test]
    fn exact_skip_past_end_fails() {
        let temp_dir = TempDir::new("droid-cli").unwrap();
        let err = run(fixture(&temp_dir), 12, None, true).unwrap_err();
        assert!(matches!(
            err,
            AppError::DroidError(DroidError::UnexpectedSkipEof {
                expected: 12,
                actual: 10
            })
        ));
    }

    #[test]
    fn negative_length_is_rejected() {
        let temp_dir = TempDir::new("droid-cli").unwrap();
        let err = run(fixture(&temp_dir), 0, Some(-1), false).unwrap_err();
        assert!(matches!(
            err,
            AppError::DroidError(DroidError::IllegalArgument(_))
        ));
    }
}
