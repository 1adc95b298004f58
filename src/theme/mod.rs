//! Theme - Night Palette

pub mod colors;
