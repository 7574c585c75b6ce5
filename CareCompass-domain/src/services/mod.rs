pub mod assessment;
pub mod care_plan;
pub mod scoring;

// Domain services
// This module contains business logic implementations.

// Re-export service traits and factory functions
pub use assessment::{
    create_default_assessment_service, AssessmentService, AssessmentServiceError,
    AssessmentServiceTrait,
};
pub use care_plan::select_care_plan;
pub use scoring::stratify;
