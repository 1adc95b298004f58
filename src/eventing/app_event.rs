//! AppEvent - Application Event Enum
//!
//! All events that background tasks send back to the application loop.

use crate::domain::health::HealthReport;
use crate::error::Result;
use crate::state::view_state::ViewEvent;

/// Application events for service -> loop communication
#[derive(Debug)]
pub enum AppEvent {
    /// Health check finished (successfully or not)
    HealthChecked { outcome: Result<HealthReport> },

    /// Overlay or analysis request completed or timed out
    View(ViewEvent),
}

impl From<ViewEvent> for AppEvent {
    fn from(event: ViewEvent) -> Self {
        Self::View(event)
    }
}
