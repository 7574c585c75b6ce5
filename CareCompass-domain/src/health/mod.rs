//! Domain layer health check functionality
//! This module provides health check services for the application

use async_trait::async_trait;
use std::collections::HashMap;

use care_compass_data::repository::{SessionRepository, SessionRepositoryTrait};

/// System health status
#[derive(Debug, Clone, PartialEq)]
pub enum SystemStatus {
    /// All components are healthy
    Healthy,
    /// Some components are degraded but the system is functional
    Degraded,
    /// System is not functioning properly
    Unhealthy,
}

/// Component health status
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentStatus {
    /// Component is functioning normally
    Healthy,
    /// Component is functioning but with reduced performance
    Degraded,
    /// Component is not functioning
    Unhealthy,
}

/// Represents a health component with status and optional details
#[derive(Debug, Clone)]
pub struct HealthComponent {
    /// Status of the component
    pub status: ComponentStatus,
    /// Optional details about the component status
    pub details: Option<String>,
}

/// Represents the overall health of the system
#[derive(Debug, Clone)]
pub struct SystemHealth {
    /// Overall system status
    pub status: SystemStatus,
    /// Map of component names to their health status
    pub components: HashMap<String, HealthComponent>,
}

/// Trait for health services
#[async_trait]
pub trait HealthServiceTrait: Send + Sync + std::fmt::Debug {
    /// Get the overall system health
    async fn get_system_health(&self) -> SystemHealth;

    /// Check the status of the session store
    /// Returns true if the store is reachable, an error otherwise
    async fn check_session_store_status(&self) -> Result<bool, String>;
}

/// Check if the session store is available
pub async fn check_session_store_status() -> Result<bool, String> {
    let repository = SessionRepository::new();
    match repository.ping().await {
        Ok(()) => Ok(true),
        Err(e) => Err(format!("Session store error: {}", e)),
    }
}

/// Get overall system health
pub async fn get_system_health() -> SystemHealth {
    let store_status = check_session_store_status().await;

    let store_component = match store_status {
        Ok(true) => HealthComponent {
            status: ComponentStatus::Healthy,
            details: None,
        },
        Ok(false) => HealthComponent {
            status: ComponentStatus::Degraded,
            details: Some("Session store is available but degraded".to_string()),
        },
        Err(e) => HealthComponent {
            status: ComponentStatus::Unhealthy,
            details: Some(e),
        },
    };

    let overall_status = if store_component.status == ComponentStatus::Unhealthy {
        SystemStatus::Unhealthy
    } else if store_component.status == ComponentStatus::Degraded {
        SystemStatus::Degraded
    } else {
        SystemStatus::Healthy
    };

    SystemHealth {
        status: overall_status,
        components: vec![("session_store".to_string(), store_component)]
            .into_iter()
            .collect(),
    }
}
