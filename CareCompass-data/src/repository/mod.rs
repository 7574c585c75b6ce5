// Repository module structure
pub mod errors;
mod in_memory;
mod session;

// Re-export commonly used types
pub use errors::RepositoryError;
pub use session::{SessionRepository, SessionRepositoryTrait};

// Re-export test modules for both testing and when mock feature is enabled
#[cfg(any(test, feature = "mock"))]
pub use session::tests;
