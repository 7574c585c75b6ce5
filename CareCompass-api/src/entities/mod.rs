// Public API entities
pub mod assessment;
pub mod care_plan;

// Re-export common types for easier imports
pub use assessment::{
    AssessmentResponse, AssessmentSummary, CreateAssessmentRequest, SessionResultsResponse,
};
pub use care_plan::{CarePlanReport, CarePlanResponse};
