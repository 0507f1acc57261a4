//! Report execution logic.
//!
//! Classifies the requested endpoints, relates them to the optional
//! reference interval, dispatches reachability probes, and renders the
//! report as text or JSON.

use std::fmt;
use std::net::Ipv4Addr;

use serde::Serialize;
use thiserror::Error;
use tokio::sync::oneshot;

use ipscope::cli::Cli;
use ipscope::endpoint::{Endpoint, EndpointKind};
use ipscope::probe;

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The `--within` reference does not denote an address interval.
    #[error("reference endpoint '{endpoint}' does not denote an address interval")]
    ReferenceWithoutInterval {
        /// The offending reference text.
        endpoint: String,
    },

    /// Failed to render the JSON report.
    #[error("failed to render report: {0}")]
    Render(#[from] serde_json::Error),
}

/// How an endpoint's interval relates to the reference interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    /// Same bounds on both sides.
    Equal,
    /// Strictly inside the reference.
    Inside,
    /// Everything else, including interval-less kinds.
    Outside,
}

impl Relation {
    /// Relates `endpoint` to `reference`.
    ///
    /// Equality is checked first: the containment predicate is a
    /// strict-subset test and never reports an interval as inside
    /// itself.
    fn of(endpoint: &Endpoint, reference: &Endpoint) -> Self {
        if endpoint.same_interval(reference) {
            Self::Equal
        } else if endpoint.is_within(reference) {
            Self::Inside
        } else {
            Self::Outside
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Equal => "equal",
            Self::Inside => "inside",
            Self::Outside => "outside",
        })
    }
}

/// One classified endpoint in the report.
#[derive(Debug, Serialize)]
pub struct Report {
    /// Raw input as given on the command line.
    pub input: String,
    /// Classification kind.
    pub kind: EndpointKind,
    /// Canonical endpoint text (empty for undefined input).
    pub text: String,
    /// Leading address text.
    pub first_address: String,
    /// Interval start in dotted form. Absent for interval-less kinds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    /// Interval end in dotted form. Absent for interval-less kinds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    /// Relation to the reference interval, when one was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relation: Option<Relation>,
    /// Name-resolution probe outcome, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns: Option<bool>,
    /// Echo probe outcome, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ping: Option<bool>,
}

impl Report {
    /// Builds the probe-less part of a report row.
    fn new(input: &str, endpoint: &Endpoint, reference: Option<&Endpoint>) -> Self {
        let (start, end) = match endpoint.interval() {
            Some((start, end)) => (Some(dotted(start)), Some(dotted(end))),
            None => (None, None),
        };

        Self {
            input: input.to_string(),
            kind: endpoint.kind(),
            text: endpoint.text().to_string(),
            first_address: endpoint.first_address().to_string(),
            start,
            end,
            relation: reference.map(|reference| Relation::of(endpoint, reference)),
            dns: None,
            ping: None,
        }
    }
}

/// Executes one report run.
///
/// # Errors
///
/// Returns an error if the `--within` reference does not classify to
/// an interval-bearing kind, or if the JSON report cannot be rendered.
pub async fn execute(cli: Cli) -> Result<(), RunError> {
    let reference = classify_reference(cli.within.as_deref())?;

    let mut reports: Vec<Report> = cli
        .endpoints
        .iter()
        .map(|input| Report::new(input, &Endpoint::classify(input), reference.as_ref()))
        .collect();

    if cli.probes_requested() {
        run_probes(&cli, &mut reports).await;
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            println!("{}", render_line(report));
        }
    }

    Ok(())
}

/// Classifies the reference endpoint, requiring an interval-bearing
/// kind.
fn classify_reference(within: Option<&str>) -> Result<Option<Endpoint>, RunError> {
    within
        .map(|raw| {
            let reference = Endpoint::classify(raw);
            if reference.has_interval() {
                Ok(reference)
            } else {
                Err(RunError::ReferenceWithoutInterval {
                    endpoint: raw.to_string(),
                })
            }
        })
        .transpose()
}

/// Dispatches the requested probes and fills in the outcomes.
///
/// Every probe starts before any outcome is awaited: one independent
/// task per probe, one single-value channel per task, no ordering
/// between them. Probes target each endpoint's leading address text;
/// for undefined input that text is empty and the probe reports down.
async fn run_probes(cli: &Cli, reports: &mut [Report]) {
    let dns: Vec<Option<oneshot::Receiver<bool>>> = reports
        .iter()
        .map(|report| cli.dns.then(|| probe::dns::spawn(report.first_address.clone())))
        .collect();
    let ping: Vec<Option<oneshot::Receiver<bool>>> = reports
        .iter()
        .map(|report| cli.ping.then(|| probe::echo::spawn(report.first_address.clone())))
        .collect();

    for (report, receiver) in reports.iter_mut().zip(dns) {
        if let Some(receiver) = receiver {
            report.dns = Some(receiver.await.unwrap_or(false));
        }
    }
    for (report, receiver) in reports.iter_mut().zip(ping) {
        if let Some(receiver) = receiver {
            report.ping = Some(receiver.await.unwrap_or(false));
        }
    }
}

/// Renders one aligned text line for a report row.
fn render_line(report: &Report) -> String {
    let mut line = format!("{:<28} {:<10}", report.input, report.kind);

    if let (Some(start), Some(end)) = (&report.start, &report.end) {
        line.push_str(&format!(" [{start} - {end}]"));
    }
    if report.text != report.input && !report.text.is_empty() {
        line.push_str(&format!(" ({})", report.text));
    }
    if let Some(relation) = report.relation {
        line.push_str(&format!(" {relation}"));
    }
    if let Some(dns) = report.dns {
        line.push_str(if dns { " dns:up" } else { " dns:down" });
    }
    if let Some(ping) = report.ping {
        line.push_str(if ping { " ping:up" } else { " ping:down" });
    }

    line
}

/// Renders an interval bound in dotted form.
fn dotted(bound: u32) -> String {
    Ipv4Addr::from(bound).to_string()
}
