//! Rendering of validation reports for stdout.

use serde::Serialize;

use abp_validate::{DatasetStats, Severity, ValidationReport, Violation};

/// Plain-text report: summary block, then the consistency outcome and every
/// violation on its own line, in checker order.
pub fn render_text(report: &ValidationReport) -> String {
    let stats = &report.stats;
    let mut lines = vec![
        format!("Dataset: {}", report.version),
        format!("  Specialties    : {}", stats.specialties),
        format!("  Interventions  : {}", stats.interventions),
        format!("    with ABP     : {}", stats.with_prophylaxis),
        format!("    without ABP  : {}", stats.without_prophylaxis),
        format!("  Consistency    : {}", outcome_label(report)),
    ];
    if !report.violations.is_empty() {
        lines.push(String::new());
        lines.push(format!("  {} violation(s):", report.violations.len()));
        lines.extend(
            report
                .violations
                .iter()
                .map(|violation| format!("    - {}", violation_line(violation))),
        );
    }
    lines.push(String::new());
    lines.join("\n")
}

/// JSON report for machine consumption.
pub fn render_json(report: &ValidationReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport::from(report))
}

fn outcome_label(report: &ValidationReport) -> String {
    let errors = report.error_count();
    let warnings = report.warning_count();
    match (report.passes(), warnings) {
        (true, 0) => "OK".to_string(),
        (true, _) => format!("OK ({warnings} warning(s))"),
        (false, _) => format!("FAILED ({errors} error(s), {warnings} warning(s))"),
    }
}

fn violation_line(violation: &Violation) -> String {
    match violation.severity() {
        Severity::Error => violation.to_string(),
        Severity::Warning => format!("{violation} (warning)"),
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    version: &'a str,
    stats: &'a DatasetStats,
    passed: bool,
    errors: usize,
    warnings: usize,
    violations: Vec<JsonViolation<'a>>,
}

#[derive(Serialize)]
struct JsonViolation<'a> {
    code: &'static str,
    severity: Severity,
    specialty_id: Option<&'a str>,
    intervention_id: Option<&'a str>,
    location: String,
    message: String,
}

impl<'a> From<&'a ValidationReport> for JsonReport<'a> {
    fn from(report: &'a ValidationReport) -> Self {
        Self {
            version: &report.version,
            stats: &report.stats,
            passed: report.passes(),
            errors: report.error_count(),
            warnings: report.warning_count(),
            violations: report
                .violations
                .iter()
                .map(|violation| JsonViolation {
                    code: violation.kind().code(),
                    severity: violation.severity(),
                    specialty_id: violation.specialty_id(),
                    intervention_id: violation.intervention_id(),
                    location: violation.location(),
                    message: violation.message(),
                })
                .collect(),
        }
    }
}
