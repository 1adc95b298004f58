//! MapHost - Boundary to the Map Widget
//!
//! The map widget renders tiles and reports clicks. The application loop only
//! tells it what to mount; tile addresses are resolved through
//! [`OverlayLayer::tile_address`].

use crate::domain::geo::{GeoPoint, MapView};
use crate::domain::overlay::OverlayLayer;

pub trait MapHost {
    /// Create the map once the readiness gate opens
    fn initialize(&mut self, view: &MapView);

    /// Mount an overlay; called only when nothing is mounted
    fn mount_overlay(&mut self, layer: &OverlayLayer);

    /// Remove the mounted overlay
    fn unmount_overlay(&mut self);

    fn place_marker(&mut self, point: GeoPoint, title: &str);
}
