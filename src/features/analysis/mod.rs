//! Analysis - Click-to-Analyze

pub mod controller;
pub mod page;
