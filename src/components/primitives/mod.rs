//! Primitive Components

pub mod button;
pub mod select;
