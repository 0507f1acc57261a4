//! Echo-request probe.
//!
//! Shells out to `ping` with a fixed attempt budget and enforces an
//! overall deadline of its own instead of trusting the tool's timing.

use std::time::Duration;

use tokio::sync::oneshot;
use tokio::time;

use super::{CommandRunner, ProbeError, TokioRunner};

/// Tool invoked for echo requests.
const TOOL: &str = "ping";

/// Number of echo requests per probe.
pub const ATTEMPTS: u32 = 3;

/// Per-attempt reply timeout handed to the tool.
pub const ATTEMPT_TIMEOUT: Duration = Duration::from_secs(3);

/// Marker present on every successful reply line.
const REPLY_MARKER: &str = "bytes from";

/// Marker that opens the transmit summary; the received count follows.
const SUMMARY_MARKER: &str = "packets transmitted, ";

/// Overall deadline for one probe: the full attempt budget plus one
/// second of process slack.
const fn deadline() -> Duration {
    Duration::from_secs(ATTEMPT_TIMEOUT.as_secs() * ATTEMPTS as u64 + 1)
}

/// Probes whether `endpoint` answers echo requests.
///
/// Positive iff the tool output shows at least one reply, either as a
/// literal reply line or as a positive received count in the summary.
/// Launch failures and deadline overruns are negative results; the
/// exit status is ignored, since the tool exits unsuccessfully on
/// partial loss as well.
pub async fn reachable(endpoint: &str) -> bool {
    reachable_with(&TokioRunner, endpoint).await
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
pub(crate) async fn reachable_with<R: CommandRunner>(runner: &R, endpoint: &str) -> bool {
    let attempts = ATTEMPTS.to_string();
    let wait = ATTEMPT_TIMEOUT.as_secs().to_string();
    let args = ["-c", attempts.as_str(), "-W", wait.as_str(), endpoint];

    let output = match time::timeout(deadline(), runner.run(TOOL, &args)).await {
        Ok(Ok(output)) => output,
        Ok(Err(e)) => {
            tracing::debug!("echo probe for {endpoint}: {e}");
            return false;
        }
        Err(_) => {
            let e = ProbeError::Deadline {
                tool: TOOL,
                deadline: deadline(),
            };
            tracing::debug!("echo probe for {endpoint}: {e}");
            return false;
        }
    };

    shows_reply(&output.combined())
}

/// Task dispatch against an injectable runner.
pub(crate) fn spawn_with<R>(runner: R, endpoint: impl Into<String>) -> oneshot::Receiver<bool>
where
    R: CommandRunner + 'static,
{
    let endpoint = endpoint.into();
    let (sender, receiver) = oneshot::channel();
    tokio::spawn(async move {
        let _ = sender.send(reachable_with(&runner, &endpoint).await);
    });
    receiver
}

/// Returns true if tool output shows at least one answered request.
fn shows_reply(output: &str) -> bool {
    if output.contains(REPLY_MARKER) {
        return true;
    }
    received_count(output).is_some_and(|received| received > 0)
}

/// Parses the received count out of the transmit summary, if present.
///
/// Reads the integer following the summary marker, as in
/// `"3 packets transmitted, 2 received, 33% packet loss"`.
fn received_count(output: &str) -> Option<u32> {
    let index = output.find(SUMMARY_MARKER)?;
    let rest = &output[index + SUMMARY_MARKER.len()..];
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}
