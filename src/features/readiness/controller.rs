//! Readiness Controller
//!
//! Gates every overlay and analysis operation behind a backend health check.

use crate::domain::health::HealthReport;
use crate::error::{Error, Result};
use crate::services::dispatcher::Dispatcher;
use crate::state::notifications::Notice;
use crate::state::readiness_state::ReadinessState;

/// Readiness gate
pub struct ReadinessGate {
    state: ReadinessState,
    base_url: String,
}

impl ReadinessGate {
    /// Create a gate in the `Checking` state; call [`check`](Self::check) to start
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            state: ReadinessState::Checking,
            base_url: base_url.into(),
        }
    }

    pub fn state(&self) -> &ReadinessState {
        &self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state.is_ready()
    }

    /// Enter `Checking` and issue a health check
    pub fn check(&mut self, dispatcher: &Dispatcher) {
        tracing::info!("Checking backend health at {}", self.base_url);
        self.state = ReadinessState::Checking;
        dispatcher.check_health();
    }

    /// Manual retry, offered only from the non-ready states
    pub fn retry(&mut self, dispatcher: &Dispatcher) -> Result<()> {
        if !self.state.can_retry() {
            return Err(Error::Invalid {
                message: format!("Nothing to retry, backend is {}", self.state.label()),
            });
        }
        self.check(dispatcher);
        Ok(())
    }

    /// Apply a finished health check.
    ///
    /// Returns the gate notice for non-ready outcomes. Checks arriving outside
    /// `Checking` are ignored.
    pub fn on_health(&mut self, outcome: Result<HealthReport>) -> Option<Notice> {
        if self.state != ReadinessState::Checking {
            tracing::debug!("Ignoring health result while {}", self.state.label());
            return None;
        }
        self.state = ReadinessState::from_health(outcome, &self.base_url);
        tracing::info!("Readiness gate: {}", self.state.label());

        let url = self.base_url.clone();
        let error = match self.state {
            ReadinessState::BackendUnreachable { .. } => Error::BackendUnreachable { url },
            ReadinessState::ServiceNotInitialized { .. } => Error::ServiceNotInitialized { url },
            _ => return None,
        };
        Some(Notice::gate(&error))
    }

    /// Refuse interaction unless the gate is open
    pub fn ensure_ready(&self) -> Result<()> {
        if self.state.is_ready() {
            Ok(())
        } else {
            Err(Error::NotReady {
                state: self.state.label().to_string(),
            })
        }
    }
}
