//! Error types for Night Lights
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;

/// Main error type for the application
#[derive(Debug, Snafu)]
pub enum Error {
    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// IO error (config files, log directory)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// JSON serialization/deserialization error
    #[snafu(display("JSON error: {source}"))]
    Json { source: serde_json::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// TOML serialization error
    #[snafu(display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },

    /// Transport-level HTTP failure (connection refused, reset, TLS)
    #[snafu(display("HTTP error: {source}"))]
    Http { source: reqwest::Error },

    /// Backend answered with a non-success status
    #[snafu(display("{message}"))]
    Api { status: u16, message: String },

    /// Backend returned a tile template that cannot be resolved
    #[snafu(display("Malformed tile template {template:?}: {reason}"))]
    MalformedTemplate { template: String, reason: String },

    /// Year outside the supported imagery range
    #[snafu(display("Year {year} is outside the supported range {min}-{max}"))]
    InvalidYear { year: i64, min: u16, max: u16 },

    /// Map location outside valid latitude/longitude bounds
    #[snafu(display("Invalid map location ({lat}, {lng})"))]
    InvalidPoint { lat: f64, lng: f64 },

    /// An overlay-mutating request is already outstanding
    #[snafu(display("Cannot {operation} while another request is in progress, please wait"))]
    Busy { operation: String },

    /// Interaction attempted before the readiness gate opened
    #[snafu(display("Backend is not ready ({state})"))]
    NotReady { state: String },

    /// Request did not complete within the configured timeout
    #[snafu(display("{operation} timed out after {millis} ms"))]
    Timeout { operation: String, millis: u64 },

    /// Health check could not reach the backend
    #[snafu(display(
        "Cannot connect to backend server at {url}. Make sure the backend is running."
    ))]
    BackendUnreachable { url: String },

    /// Backend reachable but its imagery engine is not initialized
    #[snafu(display("Earth Engine is not properly initialized on the backend at {url}."))]
    ServiceNotInitialized { url: String },
}

impl Error {
    /// Errors caused by the backend breaking its response contract rather than by
    /// anything the user did.
    pub fn is_backend_defect(&self) -> bool {
        matches!(self, Error::MalformedTemplate { .. } | Error::Json { .. })
    }

    /// Gate-level errors that halt all interaction until resolved
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::BackendUnreachable { .. } | Error::ServiceNotInitialized { .. }
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

impl From<reqwest::Error> for Error {
    fn from(source: reqwest::Error) -> Self {
        Error::Http { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
