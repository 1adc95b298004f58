//! Components - Reusable UI Components
//!
//! Pure UI building blocks. They take data and click handlers and never touch
//! the application loop themselves.

pub mod layout;
pub mod primitives;
