//! Source page must point at a real page of the guideline.

use abp_model::Intervention;

use crate::violation::{Position, Violation};

pub(crate) fn check(intervention: &Intervention, at: &Position) -> Option<Violation> {
    if intervention.source_page > 0 {
        return None;
    }
    Some(Violation::NonPositiveSourcePage {
        intervention_id: intervention.id.clone(),
        at: at.clone(),
        page: intervention.source_page,
    })
}
