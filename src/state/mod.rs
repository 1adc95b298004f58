//! State - View State Modules
//!
//! Each module represents a distinct piece of application state with a single
//! writer: the view slots, the busy indicator, the readiness gate, the control
//! panel selections and the notification history.

pub mod busy;
pub mod controls;
pub mod notifications;
pub mod readiness_state;
pub mod view_state;
