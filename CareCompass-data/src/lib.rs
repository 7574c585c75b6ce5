// CareCompass Data
// This crate holds per-session assessment state behind a repository trait

// Repository implementations for session data access
pub mod repository;

// Data storage models
pub mod models;
