//! Recommendation strength against the configured closed set.

use abp_model::Intervention;

use crate::config::ValidationConfig;
use crate::violation::{Position, Violation};

pub(crate) fn check(
    intervention: &Intervention,
    at: &Position,
    config: &ValidationConfig,
) -> Option<Violation> {
    if config.is_allowed_strength(&intervention.recommendation_strength) {
        return None;
    }
    Some(Violation::InvalidRecommendationStrength {
        intervention_id: intervention.id.clone(),
        at: at.clone(),
        value: intervention.recommendation_strength.clone(),
    })
}
