use uuid::Uuid;

use crate::entities::assessment::RiskAssessment;

/// Conversion functions between domain entities and data models
/// These functions follow the pattern convert_to_[target_layer]_[model_name]

/// Convert from domain entity to data model for an assessment record
pub fn convert_to_data_record(
    assessment: &RiskAssessment,
    session_id: Uuid,
) -> care_compass_data::models::assessment::AssessmentRecord {
    care_compass_data::models::assessment::AssessmentRecord {
        session_id,
        condition: assessment.condition.label().to_string(),
        tier: assessment.tier.as_str().to_string(),
        score: assessment.score,
        recorded_at: assessment.assessed_at,
    }
}

/// Convert from data model to domain entity for an assessment record
pub fn convert_to_domain_assessment(
    record: care_compass_data::models::assessment::AssessmentRecord,
) -> Result<RiskAssessment, String> {
    Ok(RiskAssessment {
        condition: record.condition.parse()?,
        tier: record.tier.parse()?,
        score: record.score,
        assessed_at: record.recorded_at,
    })
}
