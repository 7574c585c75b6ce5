// Domain entities and value objects
pub mod assessment;
pub mod care_plan;
pub mod conversions;

// Re-export common types for easier imports
pub use assessment::{
    AssessmentResults, AsthmaInput, CardiovascularInput, Condition, ConditionInput, CopdInput,
    DiabetesInput, RiskAssessment, RiskTier,
};
pub use care_plan::CarePlan;
