//! Specialty-level checks.

use abp_model::{Intervention, Specialty};

use crate::violation::{Position, Violation};

/// The intervention's declared specialty must equal the enclosing name.
///
/// Exact comparison: no trimming, no case folding.
pub(crate) fn check_name(
    specialty: &Specialty,
    intervention: &Intervention,
    at: &Position,
) -> Option<Violation> {
    if intervention.specialty_name == specialty.name {
        return None;
    }
    Some(Violation::SpecialtyNameMismatch {
        intervention_id: intervention.id.clone(),
        at: at.clone(),
        declared: intervention.specialty_name.clone(),
        expected: specialty.name.clone(),
    })
}

pub(crate) fn check_not_empty(specialty: &Specialty) -> Option<Violation> {
    if !specialty.interventions.is_empty() {
        return None;
    }
    Some(Violation::EmptySpecialty {
        specialty_id: specialty.id.clone(),
    })
}
