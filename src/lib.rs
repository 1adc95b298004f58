//! Night Lights Client Library
//!
//! Orchestration core of the night-lights map client: overlay layer lifecycle,
//! click-to-analyze with stale-response rejection, tile addressing and the
//! backend readiness gate.

pub mod app;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod features;
pub mod services;
pub mod state;
pub mod theme;
pub mod utils;
pub mod views;
