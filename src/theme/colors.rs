//! Colors - Night Lights Theme Colors

use gpui::{Rgba, rgb, rgba};

/// Night palette - all colors are accessed via associated functions
pub struct NlColors;

impl NlColors {
    // Backgrounds
    /// Window background
    pub fn background() -> Rgba { rgb(0x0b1020) }
    /// Header bar
    pub fn header_bg() -> Rgba { rgb(0x10172a) }
    /// Cards and side panels
    pub fn panel_bg() -> Rgba { rgb(0x141b2d) }
    /// Notification log
    pub fn log_panel_bg() -> Rgba { rgb(0x080d19) }
    /// Map area without imagery
    pub fn map_bg() -> Rgba { rgb(0x050814) }
    /// Map cell under the pointer
    pub fn map_cell_hover() -> Rgba { rgba(0xffffff1a) }
    /// Tint of cells covered by the mounted overlay
    pub fn overlay_tint() -> Rgba { rgba(0xf5c51840) }

    // Text
    pub fn text_primary() -> Rgba { rgb(0xe5e7eb) }
    pub fn text_secondary() -> Rgba { rgb(0x9ca3af) }
    pub fn text_muted() -> Rgba { rgb(0x6b7280) }

    // Accents
    /// Night-light yellow, used for primary actions
    pub fn accent() -> Rgba { rgb(0xf5c518) }
    /// Analysis marker
    pub fn marker() -> Rgba { rgb(0xef4444) }

    // Status
    pub fn success() -> Rgba { rgb(0x22c55e) }
    pub fn warning() -> Rgba { rgb(0xf59e0b) }
    pub fn danger() -> Rgba { rgb(0xef4444) }
    pub fn info() -> Rgba { rgb(0x3b82f6) }
    /// Badge for backend-defect notifications
    pub fn defect() -> Rgba { rgb(0xa855f7) }

    // Borders
    pub fn border() -> Rgba { rgb(0x263149) }
    pub fn border_focus() -> Rgba { rgb(0xf5c518) }

    // Buttons
    pub fn button_primary_bg() -> Rgba { rgb(0xf5c518) }
    pub fn button_primary_text() -> Rgba { rgb(0x111827) }
    pub fn button_primary_hover() -> Rgba { rgb(0xd4a817) }
    pub fn button_secondary_bg() -> Rgba { rgb(0x263149) }
    pub fn button_secondary_hover() -> Rgba { rgb(0x334063) }
    pub fn button_ghost_text() -> Rgba { rgb(0x9ca3af) }
    pub fn button_ghost_hover() -> Rgba { rgba(0xffffff14) }

    // Inputs
    pub fn input_bg() -> Rgba { rgb(0x0f1626) }
    pub fn input_border() -> Rgba { rgb(0x334063) }
}
