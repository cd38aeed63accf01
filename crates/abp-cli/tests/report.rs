//! Report rendering tests.

use abp_cli::report::{render_json, render_text};
use abp_validate::{DatasetStats, Position, ValidationReport, Violation};

fn stats() -> DatasetStats {
    DatasetStats {
        specialties: 2,
        interventions: 3,
        with_prophylaxis: 2,
        without_prophylaxis: 1,
        general_recommendations: 0,
    }
}

fn report(violations: Vec<Violation>) -> ValidationReport {
    ValidationReport {
        version: "RFE SFAR 2024 - test".to_string(),
        stats: stats(),
        violations,
        deny_warnings: false,
    }
}

fn missing_protocol() -> Violation {
    Violation::MissingProtocol {
        intervention_id: "pth".to_string(),
        at: Position {
            specialty_id: "ortho".to_string(),
            index: 1,
        },
    }
}

fn empty_uro() -> Violation {
    Violation::EmptySpecialty {
        specialty_id: "uro".to_string(),
    }
}

#[test]
fn clean_report_prints_summary_and_ok() {
    let rendered = render_text(&report(Vec::new()));
    insta::assert_snapshot!(rendered, @r"
    Dataset: RFE SFAR 2024 - test
      Specialties    : 2
      Interventions  : 3
        with ABP     : 2
        without ABP  : 1
      Consistency    : OK
    ");
}

#[test]
fn failing_report_lists_every_violation_in_order() {
    let rendered = render_text(&report(vec![missing_protocol(), empty_uro()]));
    insta::assert_snapshot!(rendered, @r"
    Dataset: RFE SFAR 2024 - test
      Specialties    : 2
      Interventions  : 3
        with ABP     : 2
        without ABP  : 1
      Consistency    : FAILED (1 error(s), 1 warning(s))

      2 violation(s):
        - [missing-protocol] pth @ ortho[1]: prophylaxis expected but the protocol is missing
        - [empty-specialty] specialty uro: specialty has no interventions (warning)
    ");
}

#[test]
fn warnings_alone_keep_the_gate_open() {
    let rendered = render_text(&report(vec![empty_uro()]));
    assert!(rendered.contains("Consistency    : OK (1 warning(s))"));
    assert!(rendered.contains("- [empty-specialty] specialty uro"));
}

#[test]
fn denied_warnings_fail_the_gate() {
    let mut denied = report(vec![empty_uro()]);
    denied.deny_warnings = true;
    let rendered = render_text(&denied);
    assert!(rendered.contains("Consistency    : FAILED (0 error(s), 1 warning(s))"));
    assert_eq!(denied.exit_code(), 1);
}

#[test]
fn json_report_carries_codes_and_locations() {
    let rendered = render_json(&report(vec![missing_protocol()])).expect("render json");
    let value: serde_json::Value = serde_json::from_str(&rendered).expect("parse json");

    assert_eq!(value["version"], "RFE SFAR 2024 - test");
    assert_eq!(value["passed"], false);
    assert_eq!(value["errors"], 1);
    assert_eq!(value["warnings"], 0);
    assert_eq!(value["stats"]["interventions"], 3);

    let violation = &value["violations"][0];
    assert_eq!(violation["code"], "missing-protocol");
    assert_eq!(violation["severity"], "error");
    assert_eq!(violation["specialty_id"], "ortho");
    assert_eq!(violation["intervention_id"], "pth");
    assert_eq!(violation["location"], "pth @ ortho[1]");
}

#[test]
fn json_report_for_clean_dataset_passes() {
    let rendered = render_json(&report(Vec::new())).expect("render json");
    let value: serde_json::Value = serde_json::from_str(&rendered).expect("parse json");
    assert_eq!(value["passed"], true);
    assert_eq!(value["violations"].as_array().map(Vec::len), Some(0));
}

#[test]
fn text_report_ends_with_single_newline() {
    for rendered in [
        render_text(&report(Vec::new())),
        render_text(&report(vec![missing_protocol(), empty_uro()])),
    ] {
        assert!(rendered.ends_with('\n'));
        assert!(!rendered.ends_with("\n\n"));
        assert_eq!(rendered.lines().next(), Some("Dataset: RFE SFAR 2024 - test"));
    }
}
