//! Geo - Map Locations and Tile Coordinates

use serde::{Deserialize, Serialize};

use crate::constants::{MAP_CENTER_LAT, MAP_CENTER_LNG, MAP_INITIAL_ZOOM};
use crate::error::{Error, Result};

/// A map click location
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPoint")]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Deserialize)]
struct RawPoint {
    lat: f64,
    lng: f64,
}

impl GeoPoint {
    /// Create a point, rejecting non-finite or out-of-range coordinates
    pub fn new(lat: f64, lng: f64) -> Result<Self> {
        let valid = lat.is_finite()
            && lng.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lng);
        if valid {
            Ok(Self { lat, lng })
        } else {
            Err(Error::InvalidPoint { lat, lng })
        }
    }
}

impl TryFrom<RawPoint> for GeoPoint {
    type Error = Error;

    fn try_from(raw: RawPoint) -> Result<Self> {
        GeoPoint::new(raw.lat, raw.lng)
    }
}

/// One raster tile in the standard quad-tree tiling scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoord {
    /// Zoom level
    pub z: u8,
    /// Column
    pub x: u32,
    /// Row
    pub y: u32,
}

impl TileCoord {
    pub fn new(z: u8, x: u32, y: u32) -> Self {
        Self { z, x, y }
    }
}

/// Initial camera handed to the map host when the gate opens
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    pub center: GeoPoint,
    pub zoom: u8,
}

impl MapView {
    pub fn initial() -> Self {
        Self {
            center: GeoPoint {
                lat: MAP_CENTER_LAT,
                lng: MAP_CENTER_LNG,
            },
            zoom: MAP_INITIAL_ZOOM,
        }
    }
}
