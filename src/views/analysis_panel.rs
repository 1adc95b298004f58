//! Analysis Panel - Location Analysis Rendering
//!
//! Turns a bound [`AnalysisResult`] into display lines. Statistics and recent
//! values are separate sections and are omitted entirely when absent.

use crate::constants::RECENT_SERIES_LEN;
use crate::domain::analysis::AnalysisResult;
use crate::utils::format::{format_coord, format_count, format_value};

/// Formatted statistics section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatisticsView {
    pub mean: String,
    pub min: String,
    pub max: String,
}

/// View model of the dismissible analysis panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisPanel {
    pub location: String,
    pub period: String,
    pub observations: String,
    pub statistics: Option<StatisticsView>,
    /// Trailing `(date, value)` pairs, oldest first
    pub recent: Vec<(String, String)>,
}

impl AnalysisPanel {
    pub const TITLE: &'static str = "Location Analysis";

    pub fn from_result(result: &AnalysisResult) -> Self {
        let statistics = result.statistics.map(|s| StatisticsView {
            mean: format_value(s.mean),
            min: format_value(s.min),
            max: format_value(s.max),
        });
        let skip = result.series.len().saturating_sub(RECENT_SERIES_LEN);
        let recent = result.series[skip..]
            .iter()
            .map(|p| (p.date.clone(), format_value(p.value)))
            .collect();

        Self {
            location: format_coord(result.location.lat, result.location.lng),
            period: result.period.clone(),
            observations: format_count(result.total_observations),
            statistics,
            recent,
        }
    }

    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            Self::TITLE.to_string(),
            format!("Location: {}", self.location),
            format!("Period: {}", self.period),
            format!("Observations: {}", self.observations),
        ];

        if let Some(stats) = &self.statistics {
            lines.push("Statistics:".to_string());
            lines.push(format!("  Mean: {}", stats.mean));
            lines.push(format!("  Min: {}", stats.min));
            lines.push(format!("  Max: {}", stats.max));
        }

        if !self.recent.is_empty() {
            lines.push("Recent Values:".to_string());
            for (date, value) in &self.recent {
                lines.push(format!("  {date}  {value}"));
            }
        }

        lines
    }
}
