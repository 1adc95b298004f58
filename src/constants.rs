//! Constants
//!
//! Centralized constants for imagery ranges, map defaults and request policy.

/// Supported imagery years (inclusive)
pub const MIN_YEAR: u16 = 2012;
pub const MAX_YEAR: u16 = 2023;

/// Default selector values
pub const DEFAULT_SINGLE_YEAR: u16 = 2023;
pub const DEFAULT_COMPARE_YEARS: (u16, u16) = (2020, 2023);

/// Default point-analysis window (last four supported years)
pub const DEFAULT_ANALYSIS_START_YEAR: u16 = 2020;
pub const DEFAULT_ANALYSIS_END_YEAR: u16 = MAX_YEAR;

/// Map tiles are square, in logical pixels
pub const TILE_SIZE: u32 = 256;

/// Overlay opacity, independent of imagery content
pub const DEFAULT_OVERLAY_OPACITY: f64 = 0.8;

/// Initial map view handed to the map host
pub const MAP_CENTER_LAT: f64 = 20.0;
pub const MAP_CENTER_LNG: f64 = 0.0;
pub const MAP_INITIAL_ZOOM: u8 = 3;

/// Backend defaults
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;
pub const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Notification ring buffer capacity
pub const NOTIFICATION_CAPACITY: usize = 200;

/// Number of trailing series values shown in the analysis panel
pub const RECENT_SERIES_LEN: usize = 6;

/// Environment overrides
pub const ENV_BACKEND_URL: &str = "NIGHT_LIGHTS_BACKEND_URL";
pub const ENV_TIMEOUT_MS: &str = "NIGHT_LIGHTS_TIMEOUT_MS";
