//! Core endpoint types and interval comparison.

use std::fmt;

use serde::Serialize;

/// A classified network endpoint.
///
/// Produced once by [`Endpoint::classify`] and never mutated
/// afterwards; a pure value that is safe to share across tasks.
///
/// The interval-bearing variants keep inclusive bounds as unsigned
/// 32-bit integers in network byte order (see
/// [`encode`](crate::endpoint::encode)). `Address` holds a single
/// point; `Cidr` and `Range` hold strictly widening intervals —
/// degenerate blocks and ranges collapse to `Address` during
/// classification and never surface here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// A single address. `value` is both ends of the interval.
    Address {
        /// Canonical address text.
        text: String,
        /// Encoded address, serving as both interval bounds.
        value: u32,
    },
    /// A CIDR block spanning `start..=end`.
    Cidr {
        /// Original block notation, unmodified.
        text: String,
        /// Encoded network address.
        start: u32,
        /// Encoded broadcast address.
        end: u32,
    },
    /// An explicit address range spanning `start..=end`.
    Range {
        /// Original range notation, unmodified.
        text: String,
        /// Encoded left side.
        start: u32,
        /// Encoded right side.
        end: u32,
    },
    /// A hostname, recognized syntactically only. Carries no interval.
    Fqdn {
        /// The hostname text, unmodified.
        text: String,
    },
    /// Unrecognized or inconsistent input. Carries no interval and no
    /// text.
    Undefined,
}

/// The classification kind, detached from the classified data.
///
/// Useful for reporting and serialization where only the tag matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointKind {
    /// A single address.
    Address,
    /// A CIDR block.
    Cidr,
    /// An explicit address range.
    Range,
    /// A hostname.
    Fqdn,
    /// Unrecognized input.
    Undefined,
}

impl fmt::Display for EndpointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Address => "address",
            Self::Cidr => "cidr",
            Self::Range => "range",
            Self::Fqdn => "fqdn",
            Self::Undefined => "undefined",
        })
    }
}

impl Endpoint {
    /// Returns the classification kind.
    #[must_use]
    pub const fn kind(&self) -> EndpointKind {
        match self {
            Self::Address { .. } => EndpointKind::Address,
            Self::Cidr { .. } => EndpointKind::Cidr,
            Self::Range { .. } => EndpointKind::Range,
            Self::Fqdn { .. } => EndpointKind::Fqdn,
            Self::Undefined => EndpointKind::Undefined,
        }
    }

    /// Returns the canonical endpoint text.
    ///
    /// `Undefined` carries no text and returns the empty string.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Address { text, .. }
            | Self::Cidr { text, .. }
            | Self::Range { text, .. }
            | Self::Fqdn { text } => text,
            Self::Undefined => "",
        }
    }

    /// Returns the inclusive address interval, or `None` for the
    /// kinds that carry none (`Fqdn`, `Undefined`).
    #[must_use]
    pub const fn interval(&self) -> Option<(u32, u32)> {
        match self {
            Self::Address { value, .. } => Some((*value, *value)),
            Self::Cidr { start, end, .. } | Self::Range { start, end, .. } => {
                Some((*start, *end))
            }
            Self::Fqdn { .. } | Self::Undefined => None,
        }
    }

    /// Returns true for the interval-bearing kinds (address, CIDR
    /// block, range).
    #[must_use]
    pub const fn has_interval(&self) -> bool {
        self.interval().is_some()
    }

    /// Strict-subset test: does `other`'s interval contain `self`'s?
    ///
    /// Each disjunct requires one strict inequality, so identical
    /// intervals do not contain each other. This asymmetry is
    /// deliberate and distinguishes containment from interval
    /// equality; use [`Endpoint::same_interval`] for the latter.
    ///
    /// Returns `false` whenever either operand carries no interval.
    #[must_use]
    pub fn is_within(&self, other: &Self) -> bool {
        let (Some((lo, hi)), Some((other_lo, other_hi))) =
            (self.interval(), other.interval())
        else {
            return false;
        };

        (lo >= other_lo && hi < other_hi) || (lo > other_lo && hi <= other_hi)
    }

    /// Interval equality, regardless of kind: a `/24` block and the
    /// range spelling out the same addresses compare equal.
    ///
    /// Returns `false` whenever either operand carries no interval.
    #[must_use]
    pub fn same_interval(&self, other: &Self) -> bool {
        match (self.interval(), other.interval()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Returns the leading address text of the endpoint.
    ///
    /// For a block or range this is the portion before the `/` or `-`
    /// separator; an address or hostname returns its own text, and
    /// `Undefined` returns the empty string.
    #[must_use]
    pub fn first_address(&self) -> &str {
        match self {
            Self::Address { text, .. } | Self::Fqdn { text } => text,
            Self::Cidr { text, .. } => {
                text.split_once('/').map_or(text.as_str(), |(first, _)| first)
            }
            Self::Range { text, .. } => {
                text.split_once('-').map_or(text.as_str(), |(first, _)| first)
            }
            Self::Undefined => "",
        }
    }
}
