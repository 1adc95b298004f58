//! Tile - Tile Template Addressing
//!
//! The backend hands out a URL pattern with `{z}`, `{x}` and `{y}` placeholders;
//! the map host asks for concrete addresses tile by tile.

use std::fmt;

use crate::domain::geo::TileCoord;
use crate::error::{Error, Result};

const ZOOM: &str = "{z}";
const COLUMN: &str = "{x}";
const ROW: &str = "{y}";

/// Resolve a raw template for one tile.
///
/// Each placeholder must occur exactly once; anything else is a backend
/// contract violation reported as [`Error::MalformedTemplate`].
pub fn resolve(template: &str, coord: TileCoord) -> Result<String> {
    validate(template)?;
    Ok(substitute(template, coord))
}

fn validate(template: &str) -> Result<()> {
    for placeholder in [ZOOM, COLUMN, ROW] {
        let count = template.matches(placeholder).count();
        if count != 1 {
            let reason = if count == 0 {
                format!("missing {placeholder} placeholder")
            } else {
                format!("{placeholder} placeholder appears {count} times")
            };
            return Err(Error::MalformedTemplate {
                template: template.to_string(),
                reason,
            });
        }
    }
    Ok(())
}

fn substitute(template: &str, coord: TileCoord) -> String {
    template
        .replacen(ZOOM, &coord.z.to_string(), 1)
        .replacen(COLUMN, &coord.x.to_string(), 1)
        .replacen(ROW, &coord.y.to_string(), 1)
}

/// A validated tile URL template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileTemplate(String);

impl TileTemplate {
    /// Validate a backend-supplied template
    pub fn parse(template: impl Into<String>) -> Result<Self> {
        let template = template.into();
        validate(&template)?;
        Ok(Self(template))
    }

    /// Concrete fetch address for one tile
    pub fn address(&self, coord: TileCoord) -> String {
        substitute(&self.0, coord)
    }
}

impl fmt::Display for TileTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
