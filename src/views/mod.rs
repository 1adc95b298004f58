//! Views
//!
//! View models of the application state, shared by the desktop window and the
//! console host.
//!
//! ## Layout Structure
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │              Gate screen (until the backend is ready)        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Control panel: mode, years, action label, overlay           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Analysis panel (when a result is bound)                     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Notifications                                               │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod analysis_panel;
pub mod status;

pub use analysis_panel::AnalysisPanel;
