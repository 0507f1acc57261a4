//! Name-resolution probe.
//!
//! Shells out to `nslookup` and inspects its output. The probe is
//! positive unless the tool fails to run, exits unsuccessfully, or its
//! standard output carries a resolution-failure marker.

use tokio::sync::oneshot;

use super::{CommandRunner, TokioRunner};

/// Tool invoked for name resolution.
const TOOL: &str = "nslookup";

/// Output markers that indicate a failed lookup.
const FAILURE_MARKERS: [&str; 2] = ["can't find", "Can't find"];

/// Probes whether `endpoint` resolves, using the system resolver tool.
pub async fn resolves(endpoint: &str) -> bool {
    resolves_with(&TokioRunner, endpoint).await
}

/// Dispatches the probe as an independent task.
///
/// The outcome arrives once on the returned channel. Dropping the
/// receiver does not cancel the probe; the task runs to completion.
#[must_use]
pub fn spawn(endpoint: impl Into<String>) -> oneshot::Receiver<bool> {
    spawn_with(TokioRunner, endpoint)
}

/// Probe logic against an injectable runner.
pub(crate) async fn resolves_with<R: CommandRunner>(runner: &R, endpoint: &str) -> bool {
    let output = match runner.run(TOOL, &[endpoint]).await {
        Ok(output) => output,
        Err(e) => {
            tracing::debug!("dns probe for {endpoint}: {e}");
            return false;
        }
    };

    if !output.success {
        return false;
    }

    !indicates_failure(&output.stdout)
}

/// Task dispatch against an injectable runner.
pub(crate) fn spawn_with<R>(runner: R, endpoint: impl Into<String>) -> oneshot::Receiver<bool>
where
    R: CommandRunner + 'static,
{
    let endpoint = endpoint.into();
    let (sender, receiver) = oneshot::channel();
    tokio::spawn(async move {
        let _ = sender.send(resolves_with(&runner, &endpoint).await);
    });
    receiver
}

/// Returns true if resolver output reports a failed lookup.
///
/// Only standard output is consulted; resolvers print lookup failures
/// there even when exiting successfully.
fn indicates_failure(stdout: &str) -> bool {
    FAILURE_MARKERS.iter().any(|marker| stdout.contains(marker))
}
