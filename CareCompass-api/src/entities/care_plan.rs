use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use care_compass_domain::entities::{CarePlan, Condition, RiskTier};

/// Public representation of one condition's care plan
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CarePlanResponse {
    /// Condition the plan is for
    pub condition: Condition,

    /// Risk tier the plan is keyed to
    pub risk_tier: RiskTier,

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

impl From<CarePlan> for CarePlanResponse {
    fn from(plan: CarePlan) -> Self {
        Self {
            condition: plan.condition,
            risk_tier: plan.tier,
            heading: plan.heading,
            self_management: plan.self_management,
            monitoring: plan.monitoring,
            follow_up: plan.follow_up,
            outcome_evaluation: plan.outcome_evaluation,
        }
    }
}

/// Care plan report covering every condition assessed in a session
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CarePlanReport {
    /// Session key
    pub session_id: Uuid,

    /// When the report was generated, formatted YYYY-MM-DD HH:MM:SS
    pub generated_at: String,

    /// One plan per assessed condition
    pub plans: Vec<CarePlanResponse>,
}
