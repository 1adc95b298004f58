//! Readiness - Backend Health Gate

pub mod controller;
pub mod page;
