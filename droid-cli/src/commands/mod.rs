use clap::Subcommand;

use crate::AppError;

mod compare;
mod copy;
pub mod ip;
mod read;
mod size;

#[derive(Debug, Subcommand)]
pub enum Commands {
    Copy(copy::CopyFile),
    Read(read::ReadBytes),
    Size(size::Size),
    Compare(compare::Compare),
    #[command(about = "Convert IPv4 addresses to and from DHCP integers")]
    Ip {
        #[clap(subcommand)]
        subcommand: ip::Ip,
    },
}

impl Commands {
    pub fn run(&self) -> Result<(), AppError> {
        match self {
            Commands::Copy(copy) => copy.run(),
            Commands::Read(read) => read.run(),
            Commands::Size(size) => size.run(),
            Commands::Compare(compare) => compare.run(),
            Commands::Ip { subcommand } => subcommand.run(),
        }
    }
}
