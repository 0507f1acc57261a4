//! Shared test doubles for probe tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use super::{CommandOutput, CommandRunner, ProbeError};

/// A runner that replays canned results and records invocations.
///
/// Uses `Mutex<VecDeque>` to avoid requiring `Clone` on `ProbeError`.
pub(crate) struct FakeRunner {
    results: Mutex<VecDeque<Result<CommandOutput, ProbeError>>>,
    calls: Mutex<Vec<(String, Vec<String>)>>,
}

impl FakeRunner {
    pub(crate) fn new(results: Vec<Result<CommandOutput, ProbeError>>) -> Self {
        Self {
            results: Mutex::new(results.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A runner whose tool exits successfully with the given stdout.
    pub(crate) fn succeeding(stdout: &str) -> Self {
        Self::new(vec![Ok(output(true, stdout, ""))])
    }

    /// A runner whose tool exits unsuccessfully with the given stdout.
    pub(crate) fn failing(stdout: &str) -> Self {
        Self::new(vec![Ok(output(false, stdout, ""))])
    }

    /// A runner whose tool cannot be launched at all.
    pub(crate) fn unlaunchable(tool: &'static str) -> Self {
        Self::new(vec![Err(ProbeError::Launch {
            tool,
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such tool"),
        })])
    }

    /// Returns the recorded `(tool, args)` invocations.
    pub(crate) fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandRunner for FakeRunner {
    async fn run(&self, tool: &'static str, args: &[&str]) -> Result<CommandOutput, ProbeError> {
        self.calls
            .lock()
            .unwrap()
            .push((tool.to_string(), args.iter().map(ToString::to_string).collect()));
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(output(true, "", "")))
    }
}

/// Builds a [`CommandOutput`] from literal stream contents.
pub(crate) fn output(success: bool, stdout: &str, stderr: &str) -> CommandOutput {
    CommandOutput {
        success,
        stdout: stdout.to_string(),
        stderr: stderr.to_string(),
    }
}
