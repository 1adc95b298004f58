//! Config - Application Configuration

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BACKEND_URL, DEFAULT_OVERLAY_OPACITY, DEFAULT_REQUEST_TIMEOUT_MS};
use crate::domain::analysis::AnalysisWindow;
use crate::error::{Error, Result};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the analysis backend (e.g., "http://localhost:5000")
    pub backend_url: String,
    /// Per-request timeout; releases the busy indicator when it expires
    pub request_timeout_ms: u64,
    /// Opacity applied to every mounted overlay
    pub overlay_opacity: f64,
    /// Directory for rolling log files (stderr only when unset)
    pub log_dir: Option<PathBuf>,
    /// Window queried by point analysis
    pub analysis_window: AnalysisWindow,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            overlay_opacity: DEFAULT_OVERLAY_OPACITY,
            log_dir: None,
            analysis_window: AnalysisWindow::default(),
        }
    }
}

impl AppConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Backend URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.backend_url.trim_end_matches('/')
    }

    /// Check values that serde alone cannot constrain
    pub fn validate(&self) -> Result<()> {
        let url = self.base_url();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(Error::Invalid {
                message: format!("backend_url must be an http(s) URL, got {:?}", self.backend_url),
            });
        }
        if self.request_timeout_ms == 0 {
            return Err(Error::Invalid {
                message: "request_timeout_ms must be greater than zero".to_string(),
            });
        }
        if !(self.overlay_opacity > 0.0 && self.overlay_opacity <= 1.0) {
            return Err(Error::Invalid {
                message: format!("overlay_opacity must be in (0, 1], got {}", self.overlay_opacity),
            });
        }
        Ok(())
    }
}
