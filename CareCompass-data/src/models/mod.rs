// Data storage models
pub mod assessment;

pub use assessment::AssessmentRecord;
