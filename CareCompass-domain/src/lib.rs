// CareCompass Domain
// This crate contains the business logic for the CareCompass application:
// risk scoring, risk tier classification and care plan selection

// Services that implement business logic
pub mod services;

// Domain entities
pub mod entities;

// Health checks and system status
pub mod health;
