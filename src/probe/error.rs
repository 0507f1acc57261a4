//! Error types for probe execution.

use std::time::Duration;

use thiserror::Error;

/// Error type for running a diagnostic command.
///
/// These never cross the probe boundary: probe functions map every
/// failure to a negative result and log the cause at debug level.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The diagnostic tool could not be launched or awaited.
    #[error("failed to run {tool}: {source}")]
    Launch {
        /// Name of the tool that failed to run.
        tool: &'static str,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The diagnostic tool did not finish within the enforced
    /// deadline.
    #[error("{tool} did not finish within {deadline:?}")]
    Deadline {
        /// Name of the tool that overran.
        tool: &'static str,
        /// The enforced overall deadline.
        deadline: Duration,
    },
}
