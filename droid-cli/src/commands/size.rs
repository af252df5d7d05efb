use std::path::Path;

use fs_utils::byte_count_to_display_size;

use crate::AppError;

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "size", about = "Print a byte count in human-readable form")]
pub struct Size {
    #[clap(help = "A number of bytes, or a path whose size is shown")]
    target: String,
}

impl Size {
    pub fn run(&self) -> Result<(), AppError> {
        println!("{}", byte_count_to_display_size(self.bytes()?));
        Ok(())
    }

    fn bytes(&self) -> Result<u64, AppError> {
        match self.target.parse::<u64>() {
            Ok(bytes) => Ok(bytes),
            Err(_) => Ok(Path::new(&self.target).metadata()?.len()),
        }
    }
}
