//! Tests for report execution.

use super::*;

fn classify(raw: &str) -> Endpoint {
    Endpoint::classify(raw)
}

mod relation {
    use super::*;

    #[test]
    fn equal_intervals_report_equal() {
        let range = classify("1.2.3.0-1.2.3.255");
        let block = classify("1.2.3.0/24");

        assert_eq!(Relation::of(&range, &block), Relation::Equal);
    }

    #[test]
    fn strict_subsets_report_inside() {
        let address = classify("1.2.3.7");
        let block = classify("1.2.3.0/24");

        assert_eq!(Relation::of(&address, &block), Relation::Inside);
    }

    #[test]
    fn disjoint_intervals_report_outside() {
        let address = classify("9.9.9.9");
        let block = classify("1.2.3.0/24");

        assert_eq!(Relation::of(&address, &block), Relation::Outside);
    }

    #[test]
    fn interval_less_kinds_report_outside() {
        let fqdn = classify("github.com");
        let block = classify("1.2.3.0/24");

        assert_eq!(Relation::of(&fqdn, &block), Relation::Outside);
    }

    #[test]
    fn equality_wins_over_containment() {
        // A strict-subset test would say "not inside" for an interval
        // and itself; the report must say equal, never outside.
        let block = classify("1.2.3.0/24");

        assert_eq!(Relation::of(&block, &block), Relation::Equal);
    }
}

mod report {
    use super::*;

    #[test]
    fn bounds_render_in_dotted_form() {
        let endpoint = classify("10.11.12.0/24");
        let report = Report::new("10.11.12.0/24", &endpoint, None);

        assert_eq!(report.kind, EndpointKind::Cidr);
        assert_eq!(report.start.as_deref(), Some("10.11.12.0"));
        assert_eq!(report.end.as_deref(), Some("10.11.12.255"));
    }

    #[test]
    fn collapsed_block_keeps_the_raw_input() {
        let endpoint = classify("10.11.12.14/32");
        let report = Report::new("10.11.12.14/32", &endpoint, None);

        assert_eq!(report.input, "10.11.12.14/32");
        assert_eq!(report.text, "10.11.12.14");
        assert_eq!(report.first_address, "10.11.12.14");
    }

    #[test]
    fn undefined_input_has_no_bounds_and_no_text() {
        let endpoint = classify("badcom");
        let report = Report::new("badcom", &endpoint, None);

        assert_eq!(report.kind, EndpointKind::Undefined);
        assert_eq!(report.text, "");
        assert!(report.start.is_none());
        assert!(report.end.is_none());
    }

    #[test]
    fn relation_is_present_only_with_a_reference() {
        let endpoint = classify("1.2.3.7");
        let reference = classify("1.2.3.0/24");

        let without = Report::new("1.2.3.7", &endpoint, None);
        let with = Report::new("1.2.3.7", &endpoint, Some(&reference));

        assert!(without.relation.is_none());
        assert_eq!(with.relation, Some(Relation::Inside));
    }

    #[test]
    fn serializes_without_absent_fields() {
        let report = Report::new("badcom", &classify("badcom"), None);

        let json = serde_json::to_value(&report).unwrap();
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("start"));
        assert!(!object.contains_key("relation"));
        assert!(!object.contains_key("dns"));
        assert_eq!(object["kind"], "undefined");
    }
}

mod render {
    use super::*;

    #[test]
    fn line_carries_input_kind_and_interval() {
        let report = Report::new("10.11.12.0/24", &classify("10.11.12.0/24"), None);

        let line = render_line(&report);

        assert!(line.contains("10.11.12.0/24"));
        assert!(line.contains("cidr"));
        assert!(line.contains("[10.11.12.0 - 10.11.12.255]"));
    }

    #[test]
    fn collapsed_text_is_shown_next_to_the_input() {
        let report = Report::new("10.11.12.14/32", &classify("10.11.12.14/32"), None);

        let line = render_line(&report);

        assert!(line.contains("(10.11.12.14)"));
    }

    #[test]
    fn probe_outcomes_render_as_up_and_down() {
        let mut report = Report::new("1.2.3.4", &classify("1.2.3.4"), None);
        report.dns = Some(true);
        report.ping = Some(false);

        let line = render_line(&report);

        assert!(line.contains("dns:up"));
        assert!(line.contains("ping:down"));
    }

    #[test]
    fn relation_renders_when_present() {
        let reference = classify("1.2.3.0/24");
        let report = Report::new("1.2.3.7", &classify("1.2.3.7"), Some(&reference));

        assert!(render_line(&report).contains("inside"));
    }
}

mod execute {
    use super::*;
    use ipscope::cli::Cli;

    #[tokio::test]
    async fn rejects_an_interval_less_reference() {
        let cli = Cli::parse_from_iter(["ipscope", "--within", "github.com", "1.2.3.4"]);

        let result = execute(cli).await;

        assert!(matches!(
            result,
            Err(RunError::ReferenceWithoutInterval { endpoint }) if endpoint == "github.com"
        ));
    }

    #[tokio::test]
    async fn runs_probe_less_reports_to_completion() {
        let cli = Cli::parse_from_iter([
            "ipscope",
            "--within",
            "1.2.3.0/24",
            "--json",
            "1.2.3.4",
            "github.com",
            "badcom",
        ]);

        assert!(execute(cli).await.is_ok());
    }
}
