//! Health - Backend Health Report

use serde::Deserialize;

/// Response body of `GET /api/health`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthReport {
    /// Whether the imagery engine finished initializing
    pub earth_engine_ready: bool,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_health() {
        let json = r#"{
            "status": "healthy",
            "earth_engine_ready": true,
            "message": "Night Mapping API is running"
        }"#;
        let report: HealthReport = serde_json::from_str(json).expect("health");
        assert!(report.earth_engine_ready);
        assert_eq!(report.message.as_deref(), Some("Night Mapping API is running"));
    }

    #[test]
    fn minimal_health() {
        let report: HealthReport =
            serde_json::from_str(r#"{"earth_engine_ready": false}"#).expect("health");
        assert_eq!(report, HealthReport {
            earth_engine_ready: false,
            status: None,
            message: None,
        });
    }
}
