//! Overlay - Imagery Layer Requests and Mounted Layers

use std::fmt;

use serde::Deserialize;

use crate::constants::TILE_SIZE;
use crate::domain::geo::TileCoord;
use crate::domain::tile::TileTemplate;
use crate::domain::year::Year;
use crate::error::{Error, Result};

/// A user intent to view imagery
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerRequest {
    /// One year of imagery
    Single(Year),
    /// Two years compared (order as selected, equal years allowed)
    Compare(Year, Year),
}

impl LayerRequest {
    /// Deterministic layer name derived from the requested years
    pub fn default_name(&self) -> String {
        match self {
            LayerRequest::Single(year) => format!("Night Lights {year}"),
            LayerRequest::Compare(year1, year2) => format!("Night Lights {year1} vs {year2}"),
        }
    }

    /// What the request does, for user-facing failure messages
    pub fn action(&self) -> &'static str {
        match self {
            LayerRequest::Single(_) => "load night lights",
            LayerRequest::Compare(..) => "load comparison",
        }
    }
}

impl fmt::Display for LayerRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayerRequest::Single(year) => write!(f, "single year {year}"),
            LayerRequest::Compare(year1, year2) => write!(f, "compare {year1} vs {year2}"),
        }
    }
}

/// Response body of `/api/night-lights/{year}` and `/api/compare-years`
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LayerPayload {
    pub tile_url_template: String,
    /// Display label, only sent for comparisons
    #[serde(default)]
    pub comparison: Option<String>,
}

/// An imagery layer mounted (or about to be mounted) on the map host
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayLayer {
    template: TileTemplate,
    display_name: String,
    opacity: f64,
}

impl OverlayLayer {
    pub fn new(
        template: TileTemplate,
        display_name: impl Into<String>,
        opacity: f64,
    ) -> Result<Self> {
        if !(opacity > 0.0 && opacity <= 1.0) {
            return Err(Error::Invalid {
                message: format!("overlay opacity must be in (0, 1], got {opacity}"),
            });
        }
        Ok(Self {
            template,
            display_name: display_name.into(),
            opacity,
        })
    }

    /// Build the layer for a completed fetch.
    ///
    /// A comparison keeps the backend label unless it is blank.
    pub fn from_payload(
        request: LayerRequest,
        payload: LayerPayload,
        opacity: f64,
    ) -> Result<Self> {
        let template = TileTemplate::parse(payload.tile_url_template)?;
        let display_name = match (request, payload.comparison) {
            (LayerRequest::Compare(..), Some(label)) if !label.trim().is_empty() => label,
            _ => request.default_name(),
        };
        Self::new(template, display_name, opacity)
    }

    pub fn template(&self) -> &TileTemplate {
        &self.template
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn tile_size(&self) -> u32 {
        TILE_SIZE
    }

    /// Address for one tile requested by the map host
    pub fn tile_address(&self, coord: TileCoord) -> String {
        self.template.address(coord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn year(y: i64) -> Year {
        Year::new(y).expect("year")
    }

    fn payload(template: &str, comparison: Option<&str>) -> LayerPayload {
        LayerPayload {
            tile_url_template: template.to_string(),
            comparison: comparison.map(str::to_string),
        }
    }

    #[test]
    fn single_year_name() {
        let layer = OverlayLayer::from_payload(
            LayerRequest::Single(year(2020)),
            payload("https://t/{z}/{x}/{y}", None),
            0.8,
        )
        .expect("layer");
        assert_eq!(layer.display_name(), "Night Lights 2020");
        assert_eq!(layer.tile_size(), 256);
    }

    #[test]
    fn comparison_prefers_backend_label() {
        let request = LayerRequest::Compare(year(2020), year(2023));
        let layer = OverlayLayer::from_payload(
            request,
            payload("https://t/{z}/{x}/{y}", Some("2020 vs 2023 change")),
            0.8,
        )
        .expect("layer");
        assert_eq!(layer.display_name(), "2020 vs 2023 change");

        let blank = payload("https://t/{z}/{x}/{y}", Some("  "));
        let fallback = OverlayLayer::from_payload(request, blank, 0.8).expect("layer");
        assert_eq!(fallback.display_name(), "Night Lights 2020 vs 2023");
    }

    #[test]
    fn equal_years_are_allowed() {
        let request = LayerRequest::Compare(year(2018), year(2018));
        let layer = OverlayLayer::from_payload(request, payload("https://t/{z}/{x}/{y}", None), 0.8)
            .expect("layer");
        assert_eq!(layer.display_name(), "Night Lights 2018 vs 2018");
    }

    #[test]
    fn malformed_payload_is_rejected() {
        let err = OverlayLayer::from_payload(
            LayerRequest::Single(year(2020)),
            payload("https://t/{z}/{x}", None),
            0.8,
        )
        .expect_err("malformed");
        assert!(err.is_backend_defect());
    }

    #[test]
    fn opacity_bounds() {
        let template = TileTemplate::parse("https://t/{z}/{x}/{y}").expect("template");
        assert!(OverlayLayer::new(template.clone(), "a", 1.0).is_ok());
        assert!(OverlayLayer::new(template.clone(), "a", 0.0).is_err());
        assert!(OverlayLayer::new(template, "a", 1.2).is_err());
    }

    #[test]
    fn payload_decodes_without_comparison() {
        let json = r#"{"tile_url_template": "https://t/{z}/{x}/{y}"}"#;
        let p: LayerPayload = serde_json::from_str(json).expect("payload");
        assert_eq!(p.comparison, None);
    }
}
