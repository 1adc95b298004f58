//! Utilities

pub mod config_store;
pub mod format;
pub mod logging;
