//! Identifier uniqueness.
//!
//! The first occurrence of an id is recorded; every later occurrence is its
//! own violation, so an id used `k` times yields `k - 1` violations.

use std::collections::HashMap;

use abp_model::{Intervention, Specialty};

use crate::violation::{Position, Violation};

/// Remembers where each id was first seen.
#[derive(Debug)]
pub(crate) struct FirstSeen<T> {
    seen: HashMap<String, T>,
}

impl<T> Default for FirstSeen<T> {
    fn default() -> Self {
        Self {
            seen: HashMap::new(),
        }
    }
}

impl<T: Clone> FirstSeen<T> {
    /// Record `id` at `at`. Returns the first position if `id` was seen before.
    fn record(&mut self, id: &str, at: &T) -> Option<T> {
        if let Some(first) = self.seen.get(id) {
            return Some(first.clone());
        }
        self.seen.insert(id.to_string(), at.clone());
        None
    }
}

pub(crate) fn check_intervention(
    seen: &mut FirstSeen<Position>,
    intervention: &Intervention,
    at: &Position,
) -> Option<Violation> {
    let first = seen.record(&intervention.id, at)?;
    Some(Violation::DuplicateInterventionId {
        intervention_id: intervention.id.clone(),
        at: at.clone(),
        first,
    })
}

pub(crate) fn check_specialty(
    seen: &mut FirstSeen<usize>,
    specialty: &Specialty,
    index: usize,
) -> Option<Violation> {
    seen.record(&specialty.id, &index)?;
    Some(Violation::DuplicateSpecialtyId {
        specialty_id: specialty.id.clone(),
        index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_seen_reports_original_position() {
        let mut seen = FirstSeen::default();
        assert_eq!(seen.record("a", &0usize), None);
        assert_eq!(seen.record("b", &1usize), None);
        assert_eq!(seen.record("a", &2usize), Some(0));
        assert_eq!(seen.record("a", &3usize), Some(0));
    }
}
