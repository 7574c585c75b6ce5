pub mod assessment;
pub mod care_plan;
pub mod health;

// Re-export handlers for easier imports
pub use assessment::{clear_session, create_assessment, get_session_results};
pub use care_plan::get_care_plans;
pub use health::health_check;
