//! Overlay - Imagery Layer Lifecycle

pub mod controller;
pub mod page;
