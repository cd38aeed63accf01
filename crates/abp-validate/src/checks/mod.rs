//! Consistency check modules.
//!
//! Each module checks one invariant for one entity. `run_all` walks the
//! dataset in document order and applies them, so the violation order is the
//! traversal order.

mod identity;
mod protocol;
mod source_page;
mod specialty;
mod strength;
mod version;

use abp_model::Dataset;

use crate::config::ValidationConfig;
use crate::violation::{Position, Violation};

use identity::FirstSeen;

/// Run every check over the dataset and collect all violations.
pub fn run_all(dataset: &Dataset, config: &ValidationConfig) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut specialty_ids = FirstSeen::default();
    let mut intervention_ids = FirstSeen::default();

    // Dataset scope
    violations.extend(version::check(dataset, config));

    for (s_idx, specialty) in dataset.specialties.iter().enumerate() {
        // Specialty scope
        violations.extend(identity::check_specialty(
            &mut specialty_ids,
            specialty,
            s_idx,
        ));
        violations.extend(specialty::check_not_empty(specialty));

        for (index, intervention) in specialty.interventions.iter().enumerate() {
            let at = Position {
                specialty_id: specialty.id.clone(),
                index,
            };

            // 1. Intervention ids are unique across the dataset
            violations.extend(identity::check_intervention(
                &mut intervention_ids,
                intervention,
                &at,
            ));

            // 2. pas_d_abp <=> no protocol
            violations.extend(protocol::check(intervention, &at));

            // 3. Declared specialty matches the enclosing one
            violations.extend(specialty::check_name(specialty, intervention, &at));

            // 4. Recommendation strength in the allowed set
            violations.extend(strength::check(intervention, &at, config));

            // 5. Source page is positive
            violations.extend(source_page::check(intervention, &at));
        }
    }

    violations
}
