//! Application Layer
//!
//! Contains the event loop, the map host boundary, the desktop window and the
//! console front end.

pub mod application;
pub mod console;
pub mod gui;
pub mod map_host;
pub mod map_surface;
pub mod workspace;
