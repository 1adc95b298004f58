//! Overlay Controller
//!
//! Show and clear operations of the overlay layer manager. Completion is applied
//! later by the application loop through [`ViewState::apply`].

use crate::domain::overlay::LayerRequest;
use crate::domain::year::Year;
use crate::error::Result;
use crate::services::dispatcher::Dispatcher;
use crate::state::busy::OverlayTicket;
use crate::state::view_state::{Effect, ViewState};

/// Overlay layer manager bound to the view state for one operation
pub struct OverlayLayerManager<'a> {
    view: &'a mut ViewState,
    dispatcher: &'a Dispatcher,
}

impl<'a> OverlayLayerManager<'a> {
    pub fn new(view: &'a mut ViewState, dispatcher: &'a Dispatcher) -> Self {
        Self { view, dispatcher }
    }

    pub fn show_single_year(&mut self, year: Year) -> Result<OverlayTicket> {
        self.show(LayerRequest::Single(year))
    }

    /// Equal years are allowed and overlay a year against itself
    pub fn show_comparison(&mut self, year1: Year, year2: Year) -> Result<OverlayTicket> {
        self.show(LayerRequest::Compare(year1, year2))
    }

    /// Take the busy slot and start the fetch; rejected while busy
    pub fn show(&mut self, request: LayerRequest) -> Result<OverlayTicket> {
        let ticket = self.view.begin_overlay(request)?;
        self.dispatcher.fetch_layer(ticket, request);
        Ok(ticket)
    }

    pub fn clear(&mut self) -> Result<Vec<Effect>> {
        self.view.clear_overlay()
    }
}
