//! Read-only query surface over a loaded dataset.

use std::collections::HashMap;

use crate::dataset::{Dataset, Intervention, Specialty};

/// Default page size for search results.
pub const DEFAULT_PAGE_LIMIT: usize = 100;

/// Offset/limit window applied to list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub skip: usize,
    pub limit: usize,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl Page {
    pub fn new(skip: usize, limit: usize) -> Self {
        Self { skip, limit }
    }
}

/// An intervention together with the specialty that contains it.
#[derive(Debug, Clone, Copy)]
pub struct InterventionRef<'a> {
    pub specialty: &'a Specialty,
    pub intervention: &'a Intervention,
}

/// Index over a dataset for lookups by id and name.
///
/// When an intervention id is duplicated, the first occurrence in document
/// order is the one returned.
#[derive(Debug)]
pub struct Catalog<'a> {
    dataset: &'a Dataset,
    specialty_index: HashMap<&'a str, usize>,
    intervention_index: HashMap<&'a str, (usize, usize)>,
}

impl<'a> Catalog<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        let mut specialty_index = HashMap::new();
        let mut intervention_index = HashMap::new();
        for (s_idx, specialty) in dataset.specialties.iter().enumerate() {
            specialty_index.entry(specialty.id.as_str()).or_insert(s_idx);
            for (i_idx, intervention) in specialty.interventions.iter().enumerate() {
                intervention_index
                    .entry(intervention.id.as_str())
                    .or_insert((s_idx, i_idx));
            }
        }
        Self {
            dataset,
            specialty_index,
            intervention_index,
        }
    }

    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    pub fn specialties(&self) -> &'a [Specialty] {
        &self.dataset.specialties
    }

    pub fn specialty(&self, id: &str) -> Option<&'a Specialty> {
        self.specialty_index
            .get(id)
            .map(|&idx| &self.dataset.specialties[idx])
    }

    /// Exact, case-sensitive match on the specialty name.
    pub fn specialty_by_name(&self, name: &str) -> Option<&'a Specialty> {
        self.dataset.specialties.iter().find(|s| s.name == name)
    }

    pub fn intervention(&self, id: &str) -> Option<InterventionRef<'a>> {
        let &(s_idx, i_idx) = self.intervention_index.get(id)?;
        let specialty = &self.dataset.specialties[s_idx];
        Some(InterventionRef {
            specialty,
            intervention: &specialty.interventions[i_idx],
        })
    }

    /// Case-insensitive substring search on intervention names.
    pub fn search(&self, term: &str, page: Page) -> Vec<InterventionRef<'a>> {
        let needle = term.to_lowercase();
        self.matching(|intervention| intervention.name.to_lowercase().contains(&needle))
            .skip(page.skip)
            .take(page.limit)
            .collect()
    }

    /// Interventions whose protocol or allergy alternatives use a molecule
    /// matching `term` (case-insensitive substring).
    pub fn by_molecule(&self, term: &str, page: Page) -> Vec<InterventionRef<'a>> {
        let needle = term.to_lowercase();
        self.matching(|intervention| {
            intervention
                .molecules()
                .any(|molecule| molecule.to_lowercase().contains(&needle))
        })
        .skip(page.skip)
        .take(page.limit)
        .collect()
    }

    fn matching<F>(&self, predicate: F) -> impl Iterator<Item = InterventionRef<'a>> + use<'a, F>
    where
        F: Fn(&Intervention) -> bool,
    {
        let dataset: &'a Dataset = self.dataset;
        dataset
            .interventions()
            .filter(move |(_, intervention)| predicate(*intervention))
            .map(|(specialty, intervention)| InterventionRef {
                specialty,
                intervention,
            })
    }
}
