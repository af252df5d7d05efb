use std::path::PathBuf;

use crate::AppError;

#[derive(Clone, Debug, clap::Args)]
#[clap(
    name = "compare",
    about = "Compare two text files, ignoring line ending differences"
)]
pub struct Compare {
    #[clap(value_parser, help = "First file")]
    first: PathBuf,
    #[clap(value_parser, help = "Second file")]
    second: PathBuf,
}

impl Compare {
    pub fn run(&self) -> Result<(), AppError> {
        if fs_utils::content_equals_ignore_eol(&self.first, &self.second)? {
            println!("Contents are equal");
            Ok(())
        } else {
            Err(AppError::ContentMismatch)
        }
    }
}
