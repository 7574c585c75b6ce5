use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Storage model for one condition assessment within a session.
///
/// Condition and tier are stored as strings at this layer; the domain crate
/// owns the closed enums and converts on the way in and out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentRecord {
    /// Session that owns this assessment
    pub session_id: Uuid,

    /// Condition label (e.g. "Cardiovascular", "COPD")
    pub condition: String,

    /// Risk tier label ("Low", "Moderate" or "High")
    pub tier: String,

    /// Raw risk score the tier was derived from
    pub score: f64,

    /// When the assessment was made
    pub recorded_at: DateTime<Utc>,
}
