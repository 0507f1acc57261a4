//! Raw text classification.
//!
//! Classification is total: every input produces an [`Endpoint`], with
//! [`Endpoint::Undefined`] as the catch-all for unparsable or
//! inconsistent input. The decision order is load-bearing: CIDR
//! parsing runs before range parsing so `/`-delimited text is never
//! misread as a range, and the hostname heuristic runs only after all
//! numeric forms have failed.

use std::net::{IpAddr, Ipv4Addr};

use ipnetwork::Ipv4Network;

use super::encode;
use super::model::Endpoint;

/// Full IPv4 prefix length; a block this narrow is a single address.
const FULL_PREFIX: u8 = 32;

impl Endpoint {
    /// Classifies raw endpoint text.
    ///
    /// Recognized forms, first match wins:
    /// 1. An IP literal (`10.1.2.3`; IPv6 forms are accepted for
    ///    single addresses) becomes [`Endpoint::Address`].
    /// 2. CIDR notation (`10.1.2.0/24`) becomes [`Endpoint::Cidr`];
    ///    a `/32` collapses to [`Endpoint::Address`] carrying the bare
    ///    network address as its text.
    /// 3. A hyphenated IPv4 range (`10.1.2.3-10.1.2.9`) becomes
    ///    [`Endpoint::Range`]; a degenerate range collapses to
    ///    [`Endpoint::Address`] and an inverted one is
    ///    [`Endpoint::Undefined`].
    /// 4. Any remaining text containing a `.` becomes
    ///    [`Endpoint::Fqdn`]. This is a syntactic heuristic only: no
    ///    hostname grammar check, no lookup.
    /// 5. Everything else is [`Endpoint::Undefined`].
    #[must_use]
    pub fn classify(raw: &str) -> Self {
        if let Ok(ip) = raw.parse::<IpAddr>() {
            return Self::Address {
                text: raw.to_string(),
                value: encode(ip),
            };
        }

        if let Some(endpoint) = classify_cidr(raw) {
            return endpoint;
        }

        if let Some(endpoint) = classify_range(raw) {
            return endpoint;
        }

        if raw.contains('.') {
            return Self::Fqdn {
                text: raw.to_string(),
            };
        }

        Self::Undefined
    }
}

/// Parses CIDR notation into a block endpoint.
///
/// Host bits in the input are masked away: the interval runs from the
/// network address to the broadcast address. The original text is kept
/// for non-collapsed blocks.
fn classify_cidr(raw: &str) -> Option<Endpoint> {
    if !raw.contains('/') {
        return None;
    }
    let network = raw.parse::<Ipv4Network>().ok()?;

    let start = u32::from(network.network());
    let end = u32::from(network.broadcast());

    if network.prefix() == FULL_PREFIX {
        return Some(Endpoint::Address {
            text: network.network().to_string(),
            value: start,
        });
    }

    Some(Endpoint::Cidr {
        text: raw.to_string(),
        start,
        end,
    })
}

/// Parses a hyphenated IPv4 range.
///
/// The text must split on a single hyphen into exactly two IPv4
/// literals. An inverted range classifies as [`Endpoint::Undefined`];
/// a degenerate one collapses to [`Endpoint::Address`] carrying the
/// left side as its text.
fn classify_range(raw: &str) -> Option<Endpoint> {
    let mut sides = raw.split('-');
    let (Some(left), Some(right), None) = (sides.next(), sides.next(), sides.next()) else {
        return None;
    };

    let start = u32::from(left.parse::<Ipv4Addr>().ok()?);
    let end = u32::from(right.parse::<Ipv4Addr>().ok()?);

    if start > end {
        return Some(Endpoint::Undefined);
    }
    if start == end {
        return Some(Endpoint::Address {
            text: left.to_string(),
            value: start,
        });
    }

    Some(Endpoint::Range {
        text: raw.to_string(),
        start,
        end,
    })
}
