//! CLI argument parsing using clap.

use clap::Parser;

/// ipscope: Network Endpoint Classifier
///
/// Classifies textual endpoints (addresses, CIDR blocks, address
/// ranges, hostnames) into comparable address intervals, relates them
/// to a reference interval, and optionally probes reachability via
/// system diagnostic tools.
#[derive(Debug, Parser)]
#[command(name = "ipscope")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Endpoints to classify
    #[arg(required = true, value_name = "ENDPOINT")]
    pub endpoints: Vec<String>,

    /// Reference endpoint; reports whether each endpoint lies inside it
    #[arg(long, value_name = "ENDPOINT")]
    pub within: Option<String>,

    /// Probe name resolution for each endpoint (nslookup)
    #[arg(long)]
    pub dns: bool,

    /// Probe reachability for each endpoint (ping)
    #[arg(long)]
    pub ping: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if any probe was requested.
    #[must_use]
    pub const fn probes_requested(&self) -> bool {
        self.dns || self.ping
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_single_endpoint() {
        let cli = Cli::parse_from_iter(["ipscope", "10.0.0.1"]);

        assert_eq!(cli.endpoints, vec!["10.0.0.1"]);
        assert!(cli.within.is_none());
        assert!(!cli.dns);
        assert!(!cli.ping);
        assert!(!cli.json);
        assert!(!cli.verbose);
    }

    #[test]
    fn parses_multiple_endpoints() {
        let cli = Cli::parse_from_iter(["ipscope", "10.0.0.1", "10.0.0.0/24", "github.com"]);

        assert_eq!(cli.endpoints.len(), 3);
    }

    #[test]
    fn requires_at_least_one_endpoint() {
        let result = Cli::try_parse_from(["ipscope"]);

        assert!(result.is_err());
    }

    #[test]
    fn captures_the_reference_endpoint() {
        let cli = Cli::parse_from_iter(["ipscope", "--within", "10.0.0.0/24", "10.0.0.1"]);

        assert_eq!(cli.within.as_deref(), Some("10.0.0.0/24"));
    }

    #[test]
    fn probe_flags_toggle_probes_requested() {
        let none = Cli::parse_from_iter(["ipscope", "10.0.0.1"]);
        let dns = Cli::parse_from_iter(["ipscope", "--dns", "10.0.0.1"]);
        let ping = Cli::parse_from_iter(["ipscope", "--ping", "10.0.0.1"]);
        let both = Cli::parse_from_iter(["ipscope", "--dns", "--ping", "10.0.0.1"]);

        assert!(!none.probes_requested());
        assert!(dns.probes_requested());
        assert!(ping.probes_requested());
        assert!(both.probes_requested());
    }

    #[test]
    fn json_and_verbose_flags_parse() {
        let cli = Cli::parse_from_iter(["ipscope", "--json", "-v", "10.0.0.1"]);

        assert!(cli.json);
        assert!(cli.verbose);
    }
}
