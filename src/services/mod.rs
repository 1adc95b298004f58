//! Service Layer
//!
//! The service layer talks to the analysis backend and runs every request off
//! the application loop, reporting outcomes back as events.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       Dispatcher                             │
//! │  ┌─────────────────┐  ┌──────────────┐  ┌───────────────┐   │
//! │  │ NightLightsApi  │  │ fetch tasks  │  │ timeout timers│   │
//! │  │ (HttpApi)       │  │ (runtime)    │  │ (runtime)     │   │
//! │  └─────────────────┘  └──────────────┘  └───────────────┘   │
//! └─────────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼ AppEvent
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   Application loop                           │
//! │              (ViewState, ReadinessGate)                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod api;
pub mod dispatcher;
pub mod runtime;

#[cfg(test)]
pub mod scripted;

pub use api::{HttpApi, NightLightsApi};
pub use dispatcher::Dispatcher;
pub use runtime::spawn_named_in_tokio;
