//! Process execution seam for diagnostic tools.

use std::process::Stdio;

use tokio::process::Command;

use super::ProbeError;

/// Captured output of a finished diagnostic command.
///
/// Owned by this crate so probe logic and tests never touch platform
/// process types directly. Streams are decoded lossily; the probes
/// only scan for ASCII markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Whether the process exited successfully.
    pub success: bool,
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
}

impl CommandOutput {
    /// Returns both streams joined, for markers that may land on
    /// either one.
    #[must_use]
    pub fn combined(&self) -> String {
        let mut combined = String::with_capacity(self.stdout.len() + self.stderr.len());
        combined.push_str(&self.stdout);
        combined.push_str(&self.stderr);
        combined
    }
}

/// Trait for executing a diagnostic command to completion.
///
/// # Design
///
/// - Probe logic depends on this trait, not on `tokio::process`
/// - Enables tests to inject canned command output
pub trait CommandRunner: Send + Sync {
    /// Runs `tool` with `args` and captures its output.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::Launch`] if the process cannot be spawned
    /// or awaited.
    fn run(
        &self,
        tool: &'static str,
        args: &[&str],
    ) -> impl std::future::Future<Output = Result<CommandOutput, ProbeError>> + Send;
}

/// Production runner backed by [`tokio::process::Command`].
///
/// Spawned tools inherit nothing: stdin is closed and both output
/// streams are captured. The child is killed if the returned future is
/// dropped before completion.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioRunner;

impl CommandRunner for TokioRunner {
    async fn run(&self, tool: &'static str, args: &[&str]) -> Result<CommandOutput, ProbeError> {
        let output = Command::new(tool)
            .args(args)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| ProbeError::Launch { tool, source })?;

        Ok(CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
