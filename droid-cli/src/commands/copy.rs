use std::fs;
use std::io::Write;
use std::path::PathBuf;

use data_stream::DEFAULT_BUFFER_SIZE;
use fs_utils::{byte_count_to_display_size, open_input, open_output};

use crate::AppError;

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "copy", about = "Copy a file through a fixed-size buffer")]
pub struct CopyFile {
    #[clap(value_parser, help = "File to read from")]
    source: PathBuf,
    #[clap(value_parser, help = "File to write to, parents are created")]
    destination: PathBuf,
    #[clap(
        short,
        long,
        default_value_t = DEFAULT_BUFFER_SIZE,
        help = "Transfer buffer size in bytes"
    )]
    buffer_size: usize,
}

impl CopyFile {
    pub fn run(&self) -> Result<(), AppError> {
        if self.destination.exists()
            && fs::canonicalize(&self.source)?
                == fs::canonicalize(&self.destination)?
        {
            return Err(AppError::SameFile(
                self.source.display().to_string(),
            ));
        }

        let mut input = open_input(&self.source)?;
        let mut output = open_output(&self.destination, false)?;
        let count = data_stream::copy_with_buffer_size::<u8, _, _>(
            &mut input,
            &mut output,
            self.buffer_size,
        )?;
        output.flush()?;

        log::info!(
            "Copied {} to {}",
            self.source.display(),
            self.destination.display()
        );
        println!(
            "Copied {} ({} bytes)",
            byte_count_to_display_size(count),
            count
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn copies_into_new_directory() {
        let temp_dir = TempDir::new("droid-cli").unwrap();
        let source = temp_dir.path().join("in.bin");
        let destination = temp_dir.path().join("out/copy.bin");
        let data: Vec<u8> = (0..3000u32).map(|i| (i % 200) as u8).collect();
        fs::write(&source, &data).unwrap();

        CopyFile {
            source,
            destination: destination.clone(),
            buffer_size: 64,
        }
        .run()
        .unwrap();

        assert_eq!(fs::read(destination).unwrap(), data);
    }

    #[test]
    fn refuses_to_copy_onto_itself() {
        let temp_dir = TempDir::new("droid-cli").unwrap();
        let path = temp_dir.path().join("same.txt");
        fs::write(&path, "keep me").unwrap();

        let err = CopyFile {
            source: path.clone(),
            destination: path.clone(),
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
        .run()
        .unwrap_err();

        assert!(matches!(err, AppError::SameFile(_)));
        assert_eq!(fs::read_to_string(path).unwrap(), "keep me");
    }

    #[test]
    fn zero_buffer_is_rejected() {
        let temp_dir = TempDir::new("droid-cli").unwrap();
        let source = temp_dir.path().join("in.txt");
        fs::write(&source, "x").unwrap();

        let err = CopyFile {
            source,
            destination: temp_dir.path().join("out.txt"),
            buffer_size: 0,
        }
        .run()
        .unwrap_err();

        assert!(matches!(
            err,
            AppError::DroidError(data_error::DroidError::IllegalArgument(_))
        ));
    }
}
