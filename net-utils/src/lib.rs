//! IPv4 helpers for the little-endian integer form used by DHCP records,
//! where the first octet of the dotted quad sits in the lowest byte.

use std::net::Ipv4Addr;
use std::str::FromStr;

use data_error::Result;

/// Parses a dotted quad such as `192.168.1.1` into its little-endian
/// integer form.
pub fn ip_to_int(address: &str) -> Result<u32> {
    let address = Ipv4Addr::from_str(address.trim())?;
    log::trace!("Converting {} to an integer", address);
    Ok(u32::from_le_bytes(address.octets()))
}

pub fn int_to_ip(value: u32) -> String {
    int_to_inet_address(value).to_string()
}

pub fn int_to_inet_address(value: u32) -> Ipv4Addr {
    Ipv4Addr::from(value.to_le_bytes())
}
