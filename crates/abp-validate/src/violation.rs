//! Violation types.
//!
//! Each variant carries only the data its message needs. Violations are data,
//! not errors: the checker collects every one of them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Violation severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Fails the consistency gate
    Error,
    /// Reported; fails the gate only when warnings are denied
    Warning,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
        }
    }
}

/// Which invariant a violation breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViolationKind {
    DuplicateInterventionId,
    NoProphylaxisWithProtocol,
    MissingProtocol,
    SpecialtyNameMismatch,
    InvalidRecommendationStrength,
    NonPositiveSourcePage,
    DuplicateSpecialtyId,
    EmptySpecialty,
    VersionPrefixMismatch,
}

impl ViolationKind {
    pub const fn all() -> &'static [Self] {
        &[
            Self::DuplicateInterventionId,
            Self::NoProphylaxisWithProtocol,
            Self::MissingProtocol,
            Self::SpecialtyNameMismatch,
            Self::InvalidRecommendationStrength,
            Self::NonPositiveSourcePage,
            Self::DuplicateSpecialtyId,
            Self::EmptySpecialty,
            Self::VersionPrefixMismatch,
        ]
    }

    /// Stable identifier printed in reports.
    pub fn code(&self) -> &'static str {
        match self {
            Self::DuplicateInterventionId => "duplicate-id",
            Self::NoProphylaxisWithProtocol => "no-abp-with-protocol",
            Self::MissingProtocol => "missing-protocol",
            Self::SpecialtyNameMismatch => "specialty-mismatch",
            Self::InvalidRecommendationStrength => "invalid-strength",
            Self::NonPositiveSourcePage => "invalid-source-page",
            Self::DuplicateSpecialtyId => "duplicate-specialty-id",
            Self::EmptySpecialty => "empty-specialty",
            Self::VersionPrefixMismatch => "version-prefix",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Position of an intervention in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub specialty_id: String,
    /// Zero-based index within the specialty's interventions.
    pub index: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.specialty_id, self.index)
    }
}

/// A single breach of a dataset invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Violation {
    /// Intervention id already used earlier in the document
    DuplicateInterventionId {
        intervention_id: String,
        at: Position,
        first: Position,
    },
    /// Flagged as no prophylaxis but a protocol is present
    NoProphylaxisWithProtocol { intervention_id: String, at: Position },
    /// Not flagged as no prophylaxis but the protocol is absent
    MissingProtocol { intervention_id: String, at: Position },
    /// Declared specialty differs from the enclosing specialty name
    SpecialtyNameMismatch {
        intervention_id: String,
        at: Position,
        declared: String,
        expected: String,
    },
    /// Recommendation strength outside the allowed set
    InvalidRecommendationStrength {
        intervention_id: String,
        at: Position,
        value: String,
    },
    /// Source page is zero or negative
    NonPositiveSourcePage {
        intervention_id: String,
        at: Position,
        page: i64,
    },
    /// Specialty id already used earlier in the document
    DuplicateSpecialtyId { specialty_id: String, index: usize },
    /// Specialty without interventions
    EmptySpecialty { specialty_id: String },
    /// Dataset version does not start with the configured prefix
    VersionPrefixMismatch {
        version: String,
        expected_prefix: String,
    },
}

impl Violation {
    pub fn kind(&self) -> ViolationKind {
        match self {
            Violation::DuplicateInterventionId { .. } => ViolationKind::DuplicateInterventionId,
            Violation::NoProphylaxisWithProtocol { .. } => {
                ViolationKind::NoProphylaxisWithProtocol
            }
            Violation::MissingProtocol { .. } => ViolationKind::MissingProtocol,
            Violation::SpecialtyNameMismatch { .. } => ViolationKind::SpecialtyNameMismatch,
            Violation::InvalidRecommendationStrength { .. } => {
                ViolationKind::InvalidRecommendationStrength
            }
            Violation::NonPositiveSourcePage { .. } => ViolationKind::NonPositiveSourcePage,
            Violation::DuplicateSpecialtyId { .. } => ViolationKind::DuplicateSpecialtyId,
            Violation::EmptySpecialty { .. } => ViolationKind::EmptySpecialty,
            Violation::VersionPrefixMismatch { .. } => ViolationKind::VersionPrefixMismatch,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Violation::EmptySpecialty { .. } => Severity::Warning,
            Violation::VersionPrefixMismatch { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Offending intervention, for intervention-scoped violations.
    pub fn intervention_id(&self) -> Option<&str> {
        match self {
            Violation::DuplicateInterventionId {
                intervention_id, ..
            }
            | Violation::NoProphylaxisWithProtocol {
                intervention_id, ..
            }
            | Violation::MissingProtocol {
                intervention_id, ..
            }
            | Violation::SpecialtyNameMismatch {
                intervention_id, ..
            }
            | Violation::InvalidRecommendationStrength {
                intervention_id, ..
            }
            | Violation::NonPositiveSourcePage {
                intervention_id, ..
            } => Some(intervention_id),
            _ => None,
        }
    }

    /// Specialty the violation was found in (none for dataset-level checks).
    pub fn specialty_id(&self) -> Option<&str> {
        match self {
            Violation::DuplicateInterventionId { at, .. }
            | Violation::NoProphylaxisWithProtocol { at, .. }
            | Violation::MissingProtocol { at, .. }
            | Violation::SpecialtyNameMismatch { at, .. }
            | Violation::InvalidRecommendationStrength { at, .. }
            | Violation::NonPositiveSourcePage { at, .. } => Some(&at.specialty_id),
            Violation::DuplicateSpecialtyId { specialty_id, .. }
            | Violation::EmptySpecialty { specialty_id } => Some(specialty_id),
            Violation::VersionPrefixMismatch { .. } => None,
        }
    }

    /// Short description of where the violation is, e.g. `pth @ ortho[2]`.
    pub fn location(&self) -> String {
        match self {
            Violation::DuplicateInterventionId {
                intervention_id,
                at,
                ..
            }
            | Violation::NoProphylaxisWithProtocol {
                intervention_id,
                at,
            }
            | Violation::MissingProtocol {
                intervention_id,
                at,
            }
            | Violation::SpecialtyNameMismatch {
                intervention_id,
                at,
                ..
            }
            | Violation::InvalidRecommendationStrength {
                intervention_id,
                at,
                ..
            }
            | Violation::NonPositiveSourcePage {
                intervention_id,
                at,
                ..
            } => format!("{intervention_id} @ {at}"),
            Violation::DuplicateSpecialtyId {
                specialty_id,
                index,
            } => format!("specialty {specialty_id} @ [{index}]"),
            Violation::EmptySpecialty { specialty_id } => format!("specialty {specialty_id}"),
            Violation::VersionPrefixMismatch { .. } => "dataset".to_string(),
        }
    }

    /// Format message with violation-specific data.
    pub fn message(&self) -> String {
        match self {
            Violation::DuplicateInterventionId { first, .. } => {
                format!("duplicate intervention id, first used at {first}")
            }
            Violation::NoProphylaxisWithProtocol { .. } => {
                "flagged as no prophylaxis but a protocol is present".to_string()
            }
            Violation::MissingProtocol { .. } => {
                "prophylaxis expected but the protocol is missing".to_string()
            }
            Violation::SpecialtyNameMismatch {
                declared, expected, ..
            } => {
                format!("specialty '{declared}' != enclosing specialty name '{expected}'")
            }
            Violation::InvalidRecommendationStrength { value, .. } => {
                format!("recommendation strength '{value}' is not an allowed value")
            }
            Violation::NonPositiveSourcePage { page, .. } => {
                format!("source page {page} must be a positive integer")
            }
            Violation::DuplicateSpecialtyId { .. } => "duplicate specialty id".to_string(),
            Violation::EmptySpecialty { .. } => "specialty has no interventions".to_string(),
            Violation::VersionPrefixMismatch {
                version,
                expected_prefix,
            } => format!("version '{version}' does not start with '{expected_prefix}'"),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.kind(), self.location(), self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_self_describing() {
        let violation = Violation::NonPositiveSourcePage {
            intervention_id: "pth".to_string(),
            at: Position {
                specialty_id: "ortho".to_string(),
                index: 2,
            },
            page: 0,
        };
        assert_eq!(
            violation.to_string(),
            "[invalid-source-page] pth @ ortho[2]: source page 0 must be a positive integer"
        );
        assert_eq!(violation.severity(), Severity::Error);
        assert_eq!(violation.specialty_id(), Some("ortho"));
    }

    #[test]
    fn every_kind_has_a_distinct_code() {
        let mut codes: Vec<&str> = ViolationKind::all().iter().map(ViolationKind::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), ViolationKind::all().len());
    }
}
