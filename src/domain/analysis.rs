//! Analysis - Point Analysis Requests and Results

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::{DEFAULT_ANALYSIS_END_YEAR, DEFAULT_ANALYSIS_START_YEAR};
use crate::domain::geo::GeoPoint;
use crate::domain::year::Year;
use crate::error::{Error, Result};

/// Strictly increasing per-session identifier of an analysis request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sequence(u64);

impl Sequence {
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Historical window queried for every click
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWindow")]
pub struct AnalysisWindow {
    pub start_year: Year,
    pub end_year: Year,
}

#[derive(Deserialize)]
struct RawWindow {
    start_year: Year,
    end_year: Year,
}

impl AnalysisWindow {
    pub fn new(start_year: Year, end_year: Year) -> Result<Self> {
        if start_year > end_year {
            return Err(Error::Invalid {
                message: format!(
                    "analysis window starts after it ends ({start_year} > {end_year})"
                ),
            });
        }
        Ok(Self {
            start_year,
            end_year,
        })
    }
}

impl TryFrom<RawWindow> for AnalysisWindow {
    type Error = Error;

    fn try_from(raw: RawWindow) -> Result<Self> {
        AnalysisWindow::new(raw.start_year, raw.end_year)
    }
}

impl Default for AnalysisWindow {
    fn default() -> Self {
        Self {
            start_year: Year::new(i64::from(DEFAULT_ANALYSIS_START_YEAR)).unwrap_or(Year::MIN),
            end_year: Year::new(i64::from(DEFAULT_ANALYSIS_END_YEAR)).unwrap_or(Year::MAX),
        }
    }
}

/// A point query issued for one map click
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisRequest {
    pub point: GeoPoint,
    pub window: AnalysisWindow,
    pub sequence: Sequence,
}

/// Summary statistics over the window
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Statistics {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

/// One observation in the time series
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeriesPoint {
    pub date: String,
    pub value: f64,
}

/// Server-computed summary for one point.
///
/// `statistics` and `time_series` may be absent (or null); both decode to
/// empty values rather than failing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalysisResult {
    pub location: GeoPoint,
    pub period: String,
    pub total_observations: u64,
    #[serde(default)]
    pub statistics: Option<Statistics>,
    #[serde(default, rename = "time_series", deserialize_with = "nullable_series")]
    pub series: Vec<SeriesPoint>,
}

fn nullable_series<'de, D>(deserializer: D) -> std::result::Result<Vec<SeriesPoint>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<SeriesPoint>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_increases() {
        let first = Sequence::default().next();
        let second = first.next();
        assert!(second > first);
        assert_eq!(second.get(), 2);
    }

    #[test]
    fn default_window_is_last_four_years() {
        let window = AnalysisWindow::default();
        assert_eq!(window.start_year.get(), 2020);
        assert_eq!(window.end_year.get(), 2023);
    }

    #[test]
    fn inverted_window_rejected() {
        let start = Year::new(2022).expect("year");
        let end = Year::new(2019).expect("year");
        assert!(AnalysisWindow::new(start, end).is_err());
        assert!(
            serde_json::from_str::<AnalysisWindow>(r#"{"start_year": 2022, "end_year": 2019}"#)
                .is_err()
        );
    }

    #[test]
    fn full_result_decodes() {
        let json = r#"{
            "location": {"lat": 10.0, "lng": 20.0},
            "period": "2020-2023",
            "total_observations": 48,
            "statistics": {"mean": 3.25, "min": 0.5, "max": 9.0},
            "time_series": [{"date": "2023-01", "value": 2.5}, {"date": "2023-02", "value": 3.0}]
        }"#;
        let result: AnalysisResult = serde_json::from_str(json).expect("result");
        assert_eq!(result.total_observations, 48);
        assert_eq!(result.statistics.map(|s| s.max), Some(9.0));
        assert_eq!(result.series.len(), 2);
        assert_eq!(result.series[1].date, "2023-02");
    }

    #[test]
    fn partial_result_decodes() {
        let json = r#"{
            "location": {"lat": 10.0, "lng": 20.0},
            "period": "2020-2023",
            "total_observations": 0
        }"#;
        let result: AnalysisResult = serde_json::from_str(json).expect("result");
        assert!(result.statistics.is_none());
        assert!(result.series.is_empty());

        let with_nulls = r#"{
            "location": {"lat": 10.0, "lng": 20.0},
            "period": "2020-2023",
            "total_observations": 0,
            "statistics": null,
            "time_series": null
        }"#;
        let result: AnalysisResult = serde_json::from_str(with_nulls).expect("result");
        assert!(result.statistics.is_none());
        assert!(result.series.is_empty());
    }
}
