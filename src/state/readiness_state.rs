//! ReadinessState - Backend Health Gate Status

use crate::domain::health::HealthReport;
use crate::error::{Error, Result};

/// Status of the readiness gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadinessState {
    /// Health check in flight
    Checking,
    /// Backend reachable and imagery engine initialized
    Ready,
    /// Health check failed to reach the backend
    BackendUnreachable { message: String },
    /// Backend answered but its imagery engine is not initialized
    ServiceNotInitialized { message: String },
}

impl ReadinessState {
    /// Transition for a completed health check
    pub fn from_health(outcome: Result<HealthReport>, base_url: &str) -> Self {
        match outcome {
            Ok(report) if report.earth_engine_ready => ReadinessState::Ready,
            Ok(report) => {
                tracing::warn!(
                    "Backend reachable but engine not ready (status: {:?}, message: {:?})",
                    report.status,
                    report.message
                );
                ReadinessState::ServiceNotInitialized {
                    message: Error::ServiceNotInitialized {
                        url: base_url.to_string(),
                    }
                    .to_string(),
                }
            }
            Err(error) => {
                tracing::warn!("Health check failed: {error}");
                ReadinessState::BackendUnreachable {
                    message: Error::BackendUnreachable {
                        url: base_url.to_string(),
                    }
                    .to_string(),
                }
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReadinessState::Checking => "checking",
            ReadinessState::Ready => "ready",
            ReadinessState::BackendUnreachable { .. } => "backend unreachable",
            ReadinessState::ServiceNotInitialized { .. } => "engine not initialized",
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ReadinessState::Ready)
    }

    /// Whether a manual retry is offered
    pub fn can_retry(&self) -> bool {
        matches!(
            self,
            ReadinessState::BackendUnreachable { .. } | ReadinessState::ServiceNotInitialized { .. }
        )
    }

    /// User-facing message for the non-ready screens
    pub fn message(&self) -> Option<&str> {
        match self {
            ReadinessState::BackendUnreachable { message }
            | ReadinessState::ServiceNotInitialized { message } => Some(message),
            _ => None,
        }
    }
}
