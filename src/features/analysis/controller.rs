//! Analysis Controller
//!
//! Turns map clicks into point-analysis requests. Binding of the response is
//! done by the view state reducer using the request's sequence number.

use crate::domain::analysis::{AnalysisRequest, AnalysisWindow, Sequence};
use crate::domain::geo::GeoPoint;
use crate::error::Result;
use crate::services::dispatcher::Dispatcher;
use crate::state::view_state::{Effect, ViewState};

/// Point analysis controller bound to the view state for one operation
pub struct PointAnalysisController<'a> {
    view: &'a mut ViewState,
    dispatcher: &'a Dispatcher,
    window: AnalysisWindow,
}

impl<'a> PointAnalysisController<'a> {
    pub fn new(
        view: &'a mut ViewState,
        dispatcher: &'a Dispatcher,
        window: AnalysisWindow,
    ) -> Self {
        Self {
            view,
            dispatcher,
            window,
        }
    }

    /// Issue a query for the clicked location.
    ///
    /// Never rejected for being busy; the returned effects place the marker.
    pub fn on_map_click(&mut self, lat: f64, lng: f64) -> Result<(Sequence, Vec<Effect>)> {
        let point = GeoPoint::new(lat, lng)?;
        let (sequence, effects) = self.view.begin_analysis(point);
        tracing::info!("Analysis {sequence} requested at ({lat}, {lng})");
        self.dispatcher.analyze(AnalysisRequest {
            point,
            window: self.window,
            sequence,
        });
        Ok((sequence, effects))
    }

    pub fn dismiss(&mut self) {
        self.view.dismiss_analysis();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::services::scripted::{Call, ScriptedApi};
    use std::sync::Arc;
    use std::time::Duration;

    fn setup() -> (Arc<ScriptedApi>, Dispatcher) {
        let api = Arc::new(ScriptedApi::new());
        let (tx, _rx) = crossbeam_channel::unbounded();
        let dispatcher = Dispatcher::new(api.clone(), tx, Duration::from_secs(30), 0.8);
        (api, dispatcher)
    }

    #[test]
    fn clicks_issue_increasing_sequences() {
        let (api, dispatcher) = setup();
        let mut view = ViewState::new();
        let window = AnalysisWindow::default();
        let mut controller = PointAnalysisController::new(&mut view, &dispatcher, window);

        let (first, _) = controller.on_map_click(10.0, 20.0).expect("click");
        let (second, effects) = controller.on_map_click(-33.5, 151.2).expect("click");
        assert!(second > first);
        assert!(matches!(effects[0], Effect::PlaceMarker { .. }));

        let calls = api.calls();
        assert_eq!(calls.len(), 2);
        match &calls[1] {
            Call::PointAnalysis(request) => {
                assert_eq!(request.sequence, second);
                assert_eq!(request.window, AnalysisWindow::default());
                assert_eq!(request.point.lat, -33.5);
            }
            other => panic!("unexpected call: {other:?}"),
        }
    }

    #[test]
    fn invalid_click_issues_nothing() {
        let (api, dispatcher) = setup();
        let mut view = ViewState::new();
        let err = PointAnalysisController::new(&mut view, &dispatcher, AnalysisWindow::default())
            .on_map_click(95.0, 0.0)
            .expect_err("invalid point");
        assert!(matches!(err, Error::InvalidPoint { .. }));
        assert_eq!(api.call_count(), 0);
        assert_eq!(view.last_sequence(), Sequence::default());
    }
}
