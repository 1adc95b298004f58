//! Status - Gate Screen, Control Panel and Notification Rendering

use crate::state::controls::{ControlPanel, Mode};
use crate::state::notifications::Notification;
use crate::state::readiness_state::ReadinessState;
use crate::state::view_state::ViewState;
use crate::utils::format::{format_time, truncate};

const MESSAGE_WIDTH: usize = 120;

/// What the gate shows while closed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateScreen {
    pub title: &'static str,
    pub detail: String,
    /// Whether the host should offer a retry action
    pub can_retry: bool,
}

/// Screen shown while the readiness gate is closed; `None` once ready
pub fn gate_screen(state: &ReadinessState) -> Option<GateScreen> {
    match state {
        ReadinessState::Ready => None,
        ReadinessState::Checking => Some(GateScreen {
            title: "Night Lights",
            detail: "Checking backend connection...".to_string(),
            can_retry: false,
        }),
        other => Some(GateScreen {
            title: "Connection Error",
            detail: other.message().unwrap_or_else(|| other.label()).to_string(),
            can_retry: other.can_retry(),
        }),
    }
}

/// Who holds the busy indicator, if anyone
pub fn busy_line(view: &ViewState) -> Option<String> {
    let busy = view.busy();
    if let Some(ticket) = busy.overlay_holder() {
        return Some(format!("Busy: loading {ticket}"));
    }
    busy.pending_analysis()
        .map(|sequence| format!("Busy: analyzing location {sequence}"))
}

/// Control panel summary: mode, selections, action, overlay and busy holder
pub fn control_panel(controls: &ControlPanel, view: &ViewState) -> Vec<String> {
    let selection = match controls.mode {
        Mode::Single => format!("Year: {}", controls.selected_year),
        Mode::Compare => format!(
            "Compare: {} vs {}",
            controls.compare_years.0, controls.compare_years.1
        ),
    };
    let overlay = view
        .overlay()
        .map(|layer| {
            format!(
                "Overlay: {} (opacity {})",
                layer.display_name(),
                layer.opacity()
            )
        })
        .unwrap_or_else(|| "Overlay: none".to_string());

    let mut lines = vec![
        format!("Mode: {}", controls.mode.label()),
        selection,
        format!("Action: {}", controls.action_label(view.is_busy())),
        overlay,
    ];
    lines.extend(busy_line(view));
    lines
}

/// One notification line; backend defects and gate notices carry their origin
pub fn notification_line(entry: &Notification) -> String {
    let origin = entry
        .origin
        .tag()
        .map(|tag| format!("[{tag}] "))
        .unwrap_or_default();
    format!(
        "[{}] {:<5} {}{}",
        format_time(&entry.timestamp),
        entry.severity.label(),
        origin,
        truncate(&entry.message, MESSAGE_WIDTH)
    )
}
