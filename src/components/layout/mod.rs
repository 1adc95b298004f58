//! Layout Components
//!
//! Header, map pane and notification log.

pub mod header;
pub mod log_panel;
pub mod map_pane;
