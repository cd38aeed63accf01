//! Consistency between the no-prophylaxis flag and the protocol.

use abp_model::Intervention;

use crate::violation::{Position, Violation};

/// Both directions are checked; at most one violation per intervention.
pub(crate) fn check(intervention: &Intervention, at: &Position) -> Option<Violation> {
    match (intervention.no_prophylaxis, intervention.protocol.is_some()) {
        (true, true) => Some(Violation::NoProphylaxisWithProtocol {
            intervention_id: intervention.id.clone(),
            at: at.clone(),
        }),
        (false, false) => Some(Violation::MissingProtocol {
            intervention_id: intervention.id.clone(),
            at: at.clone(),
        }),
        _ => None,
    }
}
