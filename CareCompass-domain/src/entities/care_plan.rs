use serde::{Deserialize, Serialize};

use super::assessment::{Condition, RiskTier};

/// Structured care plan for one (condition, risk tier) pair.
///
/// The four sections are fully determined by the tier; the condition
/// appears in the heading only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarePlan {
    /// Condition the plan is for
    pub condition: Condition,

    /// Risk tier the plan is keyed to
    pub tier: RiskTier,

    /// Heading interpolating the condition label and tier
    pub heading: String,

    /// Self-management support guidance
    pub self_management: Vec<String>,

    /// Monitoring plan (frequency, tests, tracking)
    pub monitoring: Vec<String>,

    /// Follow-up plan (frequency, content)
    pub follow_up: Vec<String>,

    /// Outcome evaluation plan (timeframe, adjustment policy)
    pub outcome_evaluation: Vec<String>,
}
