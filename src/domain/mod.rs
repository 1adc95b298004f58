//! Domain - Pure Data Structures and Wire Types
//!
//! These types don't depend on the runtime, the map host or the HTTP client.

pub mod analysis;
pub mod config;
pub mod geo;
pub mod health;
pub mod overlay;
pub mod tile;
pub mod year;
