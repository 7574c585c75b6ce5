// CareCompass API
//
// This is the main library file for the CareCompass API.
// It re-exports the APIs from the various modules.

// Public modules
pub mod api;
pub mod entities;
pub mod openapi;
