//! Validation report and dataset statistics.

use serde::{Deserialize, Serialize};

use abp_model::Dataset;

use crate::violation::{Severity, Violation};

/// Counts printed in the report summary block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub specialties: usize,
    pub interventions: usize,
    pub with_prophylaxis: usize,
    pub without_prophylaxis: usize,
    pub general_recommendations: usize,
}

impl DatasetStats {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let interventions = dataset.intervention_count();
        let with_prophylaxis = dataset
            .interventions()
            .filter(|(_, intervention)| intervention.has_prophylaxis())
            .count();
        Self {
            specialties: dataset.specialties.len(),
            interventions,
            with_prophylaxis,
            without_prophylaxis: interventions - with_prophylaxis,
            general_recommendations: dataset.general_recommendations.len(),
        }
    }
}

/// Outcome of one validation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub version: String,
    pub stats: DatasetStats,
    /// Violations in document traversal order.
    pub violations: Vec<Violation>,
    pub deny_warnings: bool,
}

impl ValidationReport {
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    /// Whether the dataset is fit to be served.
    pub fn passes(&self) -> bool {
        self.error_count() == 0 && !(self.deny_warnings && self.warning_count() > 0)
    }

    /// Process exit code for a CI gate.
    pub fn exit_code(&self) -> i32 {
        if self.passes() { 0 } else { 1 }
    }

    fn count(&self, severity: Severity) -> usize {
        self.violations
            .iter()
            .filter(|violation| violation.severity() == severity)
            .count()
    }
}
