//! Reachability probes backed by system diagnostic tools.
//!
//! This module provides:
//! - A process-execution seam ([`CommandRunner`], [`TokioRunner`])
//! - A name-resolution probe ([`dns`])
//! - An echo-request probe ([`echo`])
//!
//! Probes have no error channel at their boundary: failing to launch
//! the underlying tool reports the same as a negative diagnostic
//! result, with the cause logged at debug level. Each probe runs as
//! one independent task and reports exactly one boolean through a
//! single-value channel; concurrent probes carry no ordering between
//! them.

mod error;
mod runner;

pub mod dns;
pub mod echo;

#[cfg(test)]
mod test_support;

pub use error::ProbeError;
pub use runner::{CommandOutput, CommandRunner, TokioRunner};
