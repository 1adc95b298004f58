//! MapSurface - Map Host for the Desktop Window
//!
//! Keeps what the map shows (view, mounted overlay, analysis markers) for the
//! map pane to render. The world is laid out as a coarse grid of equal-angle
//! cells; a click on a cell analyzes its center.

use crate::app::map_host::MapHost;
use crate::domain::geo::{GeoPoint, MapView};
use crate::domain::overlay::OverlayLayer;

pub const GRID_ROWS: usize = 12;
pub const GRID_COLS: usize = 24;
const CELL_DEGREES: f64 = 180.0 / GRID_ROWS as f64;

/// Center of a grid cell as `(lat, lng)`; row 0 is the northernmost band
pub fn cell_center(row: usize, col: usize) -> (f64, f64) {
    let lat = 90.0 - (row as f64 + 0.5) * CELL_DEGREES;
    let lng = -180.0 + (col as f64 + 0.5) * CELL_DEGREES;
    (lat, lng)
}

/// Grid cell containing a point as `(row, col)`
pub fn cell_of(point: GeoPoint) -> (usize, usize) {
    let row = ((90.0 - point.lat) / CELL_DEGREES).floor() as usize;
    let col = ((point.lng + 180.0) / CELL_DEGREES).floor() as usize;
    (row.min(GRID_ROWS - 1), col.min(GRID_COLS - 1))
}

/// Marker placed for an analysis click
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub point: GeoPoint,
    pub title: String,
}

#[derive(Debug, Default)]
pub struct MapSurface {
    view: Option<MapView>,
    mounted: Option<OverlayLayer>,
    markers: Vec<Marker>,
}

impl MapSurface {
    /// Initial view, once the readiness gate has opened
    pub fn view(&self) -> Option<&MapView> {
        self.view.as_ref()
    }

    pub fn mounted(&self) -> Option<&OverlayLayer> {
        self.mounted.as_ref()
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Whether a marker sits in the given cell
    pub fn has_marker_at(&self, row: usize, col: usize) -> bool {
        self.markers.iter().any(|m| cell_of(m.point) == (row, col))
    }
}

impl MapHost for MapSurface {
    fn initialize(&mut self, view: &MapView) {
        tracing::info!("Map initialized at zoom {}", view.zoom);
        self.view = Some(*view);
    }

    fn mount_overlay(&mut self, layer: &OverlayLayer) {
        if let Some(previous) = &self.mounted {
            tracing::warn!("Mounting {} over {}", layer.display_name(), previous.display_name());
        }
        self.mounted = Some(layer.clone());
    }

    fn unmount_overlay(&mut self) {
        self.mounted = None;
    }

    fn place_marker(&mut self, point: GeoPoint, title: &str) {
        self.markers.push(Marker {
            point,
            title: title.to_string(),
        });
    }
}
