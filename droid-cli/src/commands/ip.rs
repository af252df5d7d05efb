use clap::Subcommand;

use crate::AppError;

/// Available commands for the `ip` subcommand
#[derive(Subcommand, Debug)]
pub enum Ip {
    #[command(about = "Convert a dotted quad to its DHCP integer form")]
    ToInt {
        #[clap(help = "IPv4 address, e.g. 192.168.1.1")]
        address: String,
    },
    #[command(about = "Convert a DHCP integer to a dotted quad")]
    FromInt {
        #[clap(help = "Integer with the first octet in the lowest byte")]
        value: u32,
    },
}

impl Ip {
    pub fn run(&self) -> Result<(), AppError> {
        println!("{}", self.convert()?);
        Ok(())
    }

    fn convert(&self) -> Result<String, AppError> {
        match self {
            Ip::ToInt { address } => net_utils::ip_to_int(address)
                .map(|value| value.to_string())
                .map_err(|_| AppError::InvalidAddress(address.to_owned())),
            Ip::FromInt { value } => Ok(net_utils::int_to_ip(*value)),
        }
    }
}
