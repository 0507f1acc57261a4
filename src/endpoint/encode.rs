//! IPv4 address encoding.

use std::net::IpAddr;

/// Packs the four octets of an IPv4 address into a `u32`, most
/// significant octet first (`192.0.2.1` encodes to `0xC000_0201`).
///
/// Accepts both the 4-byte representation and the 16-byte IPv4-mapped
/// representation (`::ffff:192.0.2.1`); in either case exactly the
/// four IPv4 octets are extracted. An address that embeds no IPv4
/// octets (a general IPv6 address) encodes to the sentinel `0`.
///
/// Callers must not rely on `0` to distinguish a literal `0.0.0.0`
/// from an address with no IPv4 form.
#[must_use]
pub fn encode(ip: IpAddr) -> u32 {
    match ip {
        IpAddr::V4(v4) => u32::from(v4),
        IpAddr::V6(v6) => v6.to_ipv4_mapped().map_or(0, u32::from),
    }
}
