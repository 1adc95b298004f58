//! Features - Vertical Feature Slices
//!
//! Each feature owns the controller for one user-facing capability.

pub mod analysis;
pub mod overlay;
pub mod readiness;
