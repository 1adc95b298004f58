//! Controls - Control Panel Selections

use crate::constants::{DEFAULT_COMPARE_YEARS, DEFAULT_SINGLE_YEAR};
use crate::domain::overlay::LayerRequest;
use crate::domain::year::Year;

/// View mode selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Single,
    Compare,
}

impl Mode {
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Single => "Single Year",
            Mode::Compare => "Compare Years",
        }
    }
}

/// Mode and year selections of the control panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlPanel {
    pub mode: Mode,
    pub selected_year: Year,
    pub compare_years: (Year, Year),
}

impl Default for ControlPanel {
    fn default() -> Self {
        let year = |y: u16| Year::new(i64::from(y)).unwrap_or(Year::MAX);
        Self {
            mode: Mode::Single,
            selected_year: year(DEFAULT_SINGLE_YEAR),
            compare_years: (year(DEFAULT_COMPARE_YEARS.0), year(DEFAULT_COMPARE_YEARS.1)),
        }
    }
}

impl ControlPanel {
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn select_year(&mut self, year: Year) {
        self.selected_year = year;
    }

    pub fn select_compare_years(&mut self, year1: Year, year2: Year) {
        self.compare_years = (year1, year2);
    }

    /// Request issued by the load/compare action for the current mode
    pub fn layer_request(&self) -> LayerRequest {
        match self.mode {
            Mode::Single => LayerRequest::Single(self.selected_year),
            Mode::Compare => LayerRequest::Compare(self.compare_years.0, self.compare_years.1),
        }
    }

    /// Label of the load/compare button
    pub fn action_label(&self, busy: bool) -> String {
        if busy {
            return "Loading...".to_string();
        }
        match self.mode {
            Mode::Single => format!("Load {}", self.selected_year),
            Mode::Compare => "Compare".to_string(),
        }
    }
}
