//! ViewState - Overlay and Analysis Slots
//!
//! The single owner of the mounted overlay, the bound analysis result, the busy
//! indicator and the analysis sequence counter. Every transition is a reducer
//! step that mutates the state and returns the [`Effect`]s the application loop
//! must carry out on the map host and the notification log.

use std::time::Duration;

use crate::domain::analysis::{AnalysisResult, Sequence};
use crate::domain::geo::GeoPoint;
use crate::domain::overlay::{LayerRequest, OverlayLayer};
use crate::error::{Error, Result};
use crate::state::busy::{BusyFlag, OverlayTicket};
use crate::state::notifications::Notice;
use crate::utils::format::format_coord;

/// Side effect requested by a transition, applied in order
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Remove the mounted overlay from the map host
    UnmountOverlay,
    /// Mount a new overlay; always preceded by `UnmountOverlay` when replacing
    MountOverlay(OverlayLayer),
    /// Drop a marker at a clicked location
    PlaceMarker { point: GeoPoint, title: String },
    /// Surface a message to the user
    Notify(Notice),
}

/// Completion messages for outstanding requests
#[derive(Debug)]
pub enum ViewEvent {
    OverlayFetched {
        ticket: OverlayTicket,
        request: LayerRequest,
        outcome: Result<OverlayLayer>,
    },
    OverlayTimedOut {
        ticket: OverlayTicket,
        request: LayerRequest,
        after: Duration,
    },
    AnalysisFetched {
        sequence: Sequence,
        outcome: Result<AnalysisResult>,
    },
    AnalysisTimedOut {
        sequence: Sequence,
        after: Duration,
    },
}

/// Lifecycle of the analysis slot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnalysisSlot {
    #[default]
    Idle,
    Pending(Sequence),
    Bound(Sequence),
    Failed(Sequence),
}

const ANALYZE_ACTION: &str = "analyze point";

/// Process-wide view state
#[derive(Debug, Default)]
pub struct ViewState {
    overlay: Option<OverlayLayer>,
    analysis: Option<AnalysisResult>,
    slot: AnalysisSlot,
    busy: BusyFlag,
    last_sequence: Sequence,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently mounted overlay
    pub fn overlay(&self) -> Option<&OverlayLayer> {
        self.overlay.as_ref()
    }

    /// Currently bound analysis result
    pub fn analysis(&self) -> Option<&AnalysisResult> {
        self.analysis.as_ref()
    }

    pub fn analysis_slot(&self) -> AnalysisSlot {
        self.slot
    }

    pub fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }

    pub fn busy(&self) -> &BusyFlag {
        &self.busy
    }

    pub fn last_sequence(&self) -> Sequence {
        self.last_sequence
    }

    // ==================== Overlay ====================

    /// Acquire the busy indicator for a layer fetch.
    ///
    /// Rejected with [`Error::Busy`] while any request is outstanding.
    pub fn begin_overlay(&mut self, request: LayerRequest) -> Result<OverlayTicket> {
        let ticket = self.busy.try_acquire_overlay().ok_or_else(|| Error::Busy {
            operation: request.action().to_string(),
        })?;
        tracing::debug!("{ticket} started: {request}");
        Ok(ticket)
    }

    /// Unmount the current overlay; a no-op when nothing is mounted
    pub fn clear_overlay(&mut self) -> Result<Vec<Effect>> {
        if self.busy.is_busy() {
            return Err(Error::Busy {
                operation: "clear layers".to_string(),
            });
        }
        match self.overlay.take() {
            Some(layer) => {
                tracing::info!("Cleared overlay {}", layer.display_name());
                Ok(vec![Effect::UnmountOverlay])
            }
            None => Ok(Vec::new()),
        }
    }

    // ==================== Analysis ====================

    /// Issue the next analysis sequence for a click and place its marker
    pub fn begin_analysis(&mut self, point: GeoPoint) -> (Sequence, Vec<Effect>) {
        let sequence = self.last_sequence.next();
        self.last_sequence = sequence;
        self.slot = AnalysisSlot::Pending(sequence);
        self.busy.hold_analysis(sequence);

        let marker = Effect::PlaceMarker {
            point,
            title: format!("Analysis Point: {}", format_coord(point.lat, point.lng)),
        };
        (sequence, vec![marker])
    }

    /// Hide the bound result; in-flight requests and the counter are untouched
    pub fn dismiss_analysis(&mut self) {
        self.analysis = None;
        if !matches!(self.slot, AnalysisSlot::Pending(_)) {
            self.slot = AnalysisSlot::Idle;
        }
    }

    // ==================== Reducer ====================

    /// Apply a completion message
    pub fn apply(&mut self, event: ViewEvent) -> Vec<Effect> {
        match event {
            ViewEvent::OverlayFetched {
                ticket,
                request,
                outcome,
            } => self.on_overlay_fetched(ticket, request, outcome),
            ViewEvent::OverlayTimedOut {
                ticket,
                request,
                after,
            } => self.on_overlay_timed_out(ticket, request, after),
            ViewEvent::AnalysisFetched { sequence, outcome } => {
                self.on_analysis_fetched(sequence, outcome)
            }
            ViewEvent::AnalysisTimedOut { sequence, after } => {
                self.on_analysis_timed_out(sequence, after)
            }
        }
    }

    /// Last completed wins: a successful fetch replaces whatever is mounted, even
    /// if its own timeout already released the busy indicator.
    fn on_overlay_fetched(
        &mut self,
        ticket: OverlayTicket,
        request: LayerRequest,
        outcome: Result<OverlayLayer>,
    ) -> Vec<Effect> {
        let held = self.busy.release_overlay(ticket);
        match outcome {
            Ok(layer) => {
                let mut effects = Vec::with_capacity(3);
                if self.overlay.take().is_some() {
                    effects.push(Effect::UnmountOverlay);
                }
                tracing::info!("{ticket} mounted {}", layer.display_name());
                effects.push(Effect::Notify(Notice::info(format!(
                    "Showing {}",
                    layer.display_name()
                ))));
                effects.push(Effect::MountOverlay(layer.clone()));
                self.overlay = Some(layer);
                effects
            }
            Err(error) if held => {
                tracing::warn!("{ticket} failed ({request}): {error}");
                vec![Effect::Notify(Notice::failure(request.action(), &error))]
            }
            Err(error) => {
                // timeout already reported this request
                tracing::debug!("{ticket} failed after timeout ({request}): {error}");
                Vec::new()
            }
        }
    }

    fn on_overlay_timed_out(
        &mut self,
        ticket: OverlayTicket,
        request: LayerRequest,
        after: Duration,
    ) -> Vec<Effect> {
        if !self.busy.release_overlay(ticket) {
            return Vec::new();
        }
        let error = timeout_error(after);
        tracing::warn!("{ticket} timed out ({request})");
        vec![Effect::Notify(Notice::failure(request.action(), &error))]
    }

    /// Stale responses (any sequence other than the latest) are discarded
    fn on_analysis_fetched(
        &mut self,
        sequence: Sequence,
        outcome: Result<AnalysisResult>,
    ) -> Vec<Effect> {
        if sequence != self.last_sequence {
            tracing::debug!(
                "Discarding stale analysis {sequence} (latest is {})",
                self.last_sequence
            );
            return Vec::new();
        }
        let was_pending = self.slot == AnalysisSlot::Pending(sequence);
        self.busy.release_analysis(sequence);

        match outcome {
            Ok(result) => {
                tracing::info!(
                    "Analysis {sequence} bound: {} observations",
                    result.total_observations
                );
                self.analysis = Some(result);
                self.slot = AnalysisSlot::Bound(sequence);
                Vec::new()
            }
            Err(error) => {
                // the previously bound result, if any, stays visible
                self.slot = AnalysisSlot::Failed(sequence);
                if was_pending {
                    tracing::warn!("Analysis {sequence} failed: {error}");
                    vec![Effect::Notify(Notice::failure(ANALYZE_ACTION, &error))]
                } else {
                    tracing::debug!("Analysis {sequence} failed after timeout: {error}");
                    Vec::new()
                }
            }
        }
    }

    fn on_analysis_timed_out(&mut self, sequence: Sequence, after: Duration) -> Vec<Effect> {
        if self.slot != AnalysisSlot::Pending(sequence) {
            return Vec::new();
        }
        self.busy.release_analysis(sequence);
        self.slot = AnalysisSlot::Failed(sequence);
        let error = timeout_error(after);
        tracing::warn!("Analysis {sequence} timed out");
        vec![Effect::Notify(Notice::failure(ANALYZE_ACTION, &error))]
    }
}

fn timeout_error(after: Duration) -> Error {
    Error::Timeout {
        operation: "request".to_string(),
        millis: after.as_millis() as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tile::TileTemplate;
    use crate::domain::year::Year;
    use crate::state::notifications::NoticeOrigin;

    const TIMEOUT: Duration = Duration::from_secs(30);

    fn year(y: i64) -> Year {
        Year::new(y).expect("year")
    }

    fn layer(name: &str) -> OverlayLayer {
        let template = TileTemplate::parse(format!("https://tiles/{name}/{{z}}/{{x}}/{{y}}"))
            .expect("template");
        OverlayLayer::new(template, name, 0.8).expect("layer")
    }

    fn result_at(lat: f64, lng: f64) -> AnalysisResult {
        AnalysisResult {
            location: GeoPoint::new(lat, lng).expect("point"),
            period: "2020-2023".to_string(),
            total_observations: 48,
            statistics: None,
            series: Vec::new(),
        }
    }

    fn point(lat: f64, lng: f64) -> GeoPoint {
        GeoPoint::new(lat, lng).expect("point")
    }

    fn api_error() -> Error {
        Error::Api {
            status: 500,
            message: "Earth Engine quota exceeded".to_string(),
        }
    }

    fn notices(effects: &[Effect]) -> Vec<&Notice> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::Notify(n) => Some(n),
                _ => None,
            })
            .collect()
    }

    /// Mirror of the map host: counts mounted layers and checks the invariant
    #[derive(Default)]
    struct MountCounter {
        mounted: usize,
        top: Option<String>,
    }

    impl MountCounter {
        fn run(&mut self, effects: &[Effect]) {
            for effect in effects {
                match effect {
                    Effect::UnmountOverlay => {
                        assert_eq!(self.mounted, 1, "unmount with nothing mounted");
                        self.mounted -= 1;
                        self.top = None;
                    }
                    Effect::MountOverlay(layer) => {
                        assert_eq!(self.mounted, 0, "mount while another overlay is mounted");
                        self.mounted += 1;
                        self.top = Some(layer.display_name().to_string());
                    }
                    _ => {}
                }
            }
        }
    }

    fn load(
        state: &mut ViewState,
        counter: &mut MountCounter,
        request: LayerRequest,
        name: &str,
    ) {
        let ticket = state.begin_overlay(request).expect("ticket");
        let effects = state.apply(ViewEvent::OverlayFetched {
            ticket,
            request,
            outcome: Ok(layer(name)),
        });
        counter.run(&effects);
    }

    #[test]
    fn show_then_clear_for_every_year() {
        for y in Year::all_descending() {
            let mut state = ViewState::new();
            let mut counter = MountCounter::default();
            load(&mut state, &mut counter, LayerRequest::Single(y), &format!("Night Lights {y}"));
            assert!(state.overlay().is_some());
            assert!(!state.is_busy());

            let effects = state.clear_overlay().expect("clear");
            counter.run(&effects);
            assert!(state.overlay().is_none());
            assert_eq!(counter.mounted, 0);
        }
    }

    #[test]
    fn clear_on_empty_slot_is_noop() {
        let mut state = ViewState::new();
        let effects = state.clear_overlay().expect("clear");
        assert!(effects.is_empty());
        assert!(state.overlay().is_none());
        assert!(!state.is_busy());
    }

    #[test]
    fn replace_unmounts_before_mounting() {
        let mut state = ViewState::new();
        let mut counter = MountCounter::default();
        load(&mut state, &mut counter, LayerRequest::Single(year(2020)), "a");

        let request = LayerRequest::Compare(year(2020), year(2023));
        let ticket = state.begin_overlay(request).expect("ticket");
        let effects = state.apply(ViewEvent::OverlayFetched {
            ticket,
            request,
            outcome: Ok(layer("b")),
        });
        let unmount = effects.iter().position(|e| *e == Effect::UnmountOverlay);
        let mount = effects
            .iter()
            .position(|e| matches!(e, Effect::MountOverlay(_)));
        assert!(unmount.expect("unmount") < mount.expect("mount"));
        counter.run(&effects);
        assert_eq!(counter.top.as_deref(), Some("b"));
    }

    #[test]
    fn second_overlay_request_rejected_while_busy() {
        let mut state = ViewState::new();
        state
            .begin_overlay(LayerRequest::Single(year(2020)))
            .expect("ticket");
        let err = state
            .begin_overlay(LayerRequest::Single(year(2021)))
            .expect_err("busy");
        assert!(matches!(err, Error::Busy { .. }));
        assert!(matches!(state.clear_overlay(), Err(Error::Busy { .. })));
    }

    #[test]
    fn failed_fetch_keeps_previous_overlay_and_releases_busy() {
        let mut state = ViewState::new();
        let mut counter = MountCounter::default();
        load(&mut state, &mut counter, LayerRequest::Single(year(2019)), "kept");

        let request = LayerRequest::Single(year(2020));
        let ticket = state.begin_overlay(request).expect("ticket");
        let effects = state.apply(ViewEvent::OverlayFetched {
            ticket,
            request,
            outcome: Err(api_error()),
        });
        counter.run(&effects);

        assert_eq!(state.overlay().map(|l| l.display_name()), Some("kept"));
        assert!(!state.is_busy());
        let notices = notices(&effects);
        assert_eq!(notices.len(), 1);
        assert!(notices[0].message.contains("Earth Engine quota exceeded"));
    }

    #[test]
    fn malformed_template_is_reported_as_backend_defect() {
        let mut state = ViewState::new();
        let request = LayerRequest::Single(year(2020));
        let ticket = state.begin_overlay(request).expect("ticket");
        let effects = state.apply(ViewEvent::OverlayFetched {
            ticket,
            request,
            outcome: Err(Error::MalformedTemplate {
                template: "https://t/{z}".to_string(),
                reason: "missing {x} placeholder".to_string(),
            }),
        });
        let notices = notices(&effects);
        assert_eq!(notices[0].origin, NoticeOrigin::BackendDefect);
        assert!(state.overlay().is_none());
    }

    #[test]
    fn timeout_releases_busy_once() {
        let mut state = ViewState::new();
        let request = LayerRequest::Single(year(2020));
        let ticket = state.begin_overlay(request).expect("ticket");

        let effects = state.apply(ViewEvent::OverlayTimedOut {
            ticket,
            request,
            after: TIMEOUT,
        });
        assert!(!state.is_busy());
        assert!(notices(&effects)[0].message.contains("timed out"));

        // the late failure is not reported twice
        let effects = state.apply(ViewEvent::OverlayFetched {
            ticket,
            request,
            outcome: Err(api_error()),
        });
        assert!(effects.is_empty());
    }

    #[test]
    fn timeout_after_completion_is_ignored() {
        let mut state = ViewState::new();
        let mut counter = MountCounter::default();
        let request = LayerRequest::Single(year(2020));
        let ticket = state.begin_overlay(request).expect("ticket");
        counter.run(&state.apply(ViewEvent::OverlayFetched {
            ticket,
            request,
            outcome: Ok(layer("a")),
        }));

        let effects = state.apply(ViewEvent::OverlayTimedOut {
            ticket,
            request,
            after: TIMEOUT,
        });
        assert!(effects.is_empty());
        assert!(state.overlay().is_some());
    }

    /// A success arriving after its timeout and a user clear still mounts
    #[test]
    fn late_success_after_timeout_and_clear_remounts() {
        let mut state = ViewState::new();
        let mut counter = MountCounter::default();
        load(&mut state, &mut counter, LayerRequest::Single(year(2018)), "2018");

        let request = LayerRequest::Single(year(2020));
        let ticket = state.begin_overlay(request).expect("ticket");
        counter.run(&state.apply(ViewEvent::OverlayTimedOut {
            ticket,
            request,
            after: TIMEOUT,
        }));
        assert!(!state.is_busy());

        counter.run(&state.clear_overlay().expect("clear after timeout"));
        assert!(state.overlay().is_none());
        assert_eq!(counter.mounted, 0);

        let effects = state.apply(ViewEvent::OverlayFetched {
            ticket,
            request,
            outcome: Ok(layer("2020")),
        });
        counter.run(&effects);
        assert!(!effects.contains(&Effect::UnmountOverlay));
        assert_eq!(state.overlay().map(|l| l.display_name()), Some("2020"));
        assert_eq!(counter.mounted, 1);
        assert_eq!(counter.top.as_deref(), Some("2020"));
        assert!(!state.is_busy());
    }

    /// 2020 is issued first and times out; 2021 is issued and completes; the
    /// late 2020 response arrives last and wins.
    #[test]
    fn overlay_order_follows_completion_not_issuance() {
        let mut state = ViewState::new();
        let mut counter = MountCounter::default();

        let first = LayerRequest::Single(year(2020));
        let t1 = state.begin_overlay(first).expect("ticket");
        state.apply(ViewEvent::OverlayTimedOut {
            ticket: t1,
            request: first,
            after: TIMEOUT,
        });

        let second = LayerRequest::Single(year(2021));
        let t2 = state.begin_overlay(second).expect("ticket");
        counter.run(&state.apply(ViewEvent::OverlayFetched {
            ticket: t2,
            request: second,
            outcome: Ok(layer("T2")),
        }));
        assert_eq!(counter.top.as_deref(), Some("T2"));

        counter.run(&state.apply(ViewEvent::OverlayFetched {
            ticket: t1,
            request: first,
            outcome: Ok(layer("T1")),
        }));
        assert_eq!(counter.top.as_deref(), Some("T1"));
        assert_eq!(state.overlay().map(|l| l.display_name()), Some("T1"));
        assert_eq!(counter.mounted, 1);
    }

    fn permutations(items: &[usize]) -> Vec<Vec<usize>> {
        if items.len() <= 1 {
            return vec![items.to_vec()];
        }
        let mut out = Vec::new();
        for i in 0..items.len() {
            let mut rest = items.to_vec();
            let head = rest.remove(i);
            for mut tail in permutations(&rest) {
                tail.insert(0, head);
                out.push(tail);
            }
        }
        out
    }

    /// Three overlay requests, each released by timeout so all are in flight
    /// at once, completed in every order with clears interleaved. The map host
    /// never sees more than one overlay and always agrees with the state.
    #[test]
    fn at_most_one_overlay_under_any_completion_order() {
        let requests = [
            LayerRequest::Single(year(2014)),
            LayerRequest::Compare(year(2015), year(2022)),
            LayerRequest::Single(year(2023)),
        ];
        let succeeds = [true, false, true];

        for order in permutations(&[0, 1, 2]) {
            for clear_after in 0..3 {
                let mut state = ViewState::new();
                let mut counter = MountCounter::default();

                let mut tickets = Vec::new();
                for request in requests {
                    let ticket = state.begin_overlay(request).expect("ticket");
                    counter.run(&state.apply(ViewEvent::OverlayTimedOut {
                        ticket,
                        request,
                        after: TIMEOUT,
                    }));
                    tickets.push(ticket);
                }

                let mut last_success = None;
                for (step, &i) in order.iter().enumerate() {
                    let outcome = if succeeds[i] {
                        Ok(layer(&format!("layer-{i}")))
                    } else {
                        Err(api_error())
                    };
                    counter.run(&state.apply(ViewEvent::OverlayFetched {
                        ticket: tickets[i],
                        request: requests[i],
                        outcome,
                    }));
                    if succeeds[i] {
                        last_success = Some(format!("layer-{i}"));
                    }
                    if step == clear_after {
                        counter.run(&state.clear_overlay().expect("clear"));
                        last_success = None;
                    }
                    assert!(counter.mounted <= 1);
                    assert_eq!(counter.mounted, usize::from(state.overlay().is_some()));
                }
                assert_eq!(
                    state.overlay().map(|l| l.display_name().to_string()),
                    last_success
                );
            }
        }
    }

    #[test]
    fn stale_analysis_response_is_discarded() {
        let mut state = ViewState::new();
        let (first, _) = state.begin_analysis(point(1.0, 1.0));
        let (second, _) = state.begin_analysis(point(2.0, 2.0));
        assert!(second > first);

        state.apply(ViewEvent::AnalysisFetched {
            sequence: second,
            outcome: Ok(result_at(2.0, 2.0)),
        });
        assert_eq!(state.analysis().map(|r| r.location.lat), Some(2.0));
        assert!(!state.is_busy());

        let effects = state.apply(ViewEvent::AnalysisFetched {
            sequence: first,
            outcome: Ok(result_at(1.0, 1.0)),
        });
        assert!(effects.is_empty());
        assert_eq!(state.analysis().map(|r| r.location.lat), Some(2.0));
        assert_eq!(state.analysis_slot(), AnalysisSlot::Bound(second));
    }

    #[test]
    fn stale_failure_is_silent() {
        let mut state = ViewState::new();
        let (first, _) = state.begin_analysis(point(1.0, 1.0));
        let (_second, _) = state.begin_analysis(point(2.0, 2.0));
        let effects = state.apply(ViewEvent::AnalysisFetched {
            sequence: first,
            outcome: Err(api_error()),
        });
        assert!(effects.is_empty());
        assert!(state.is_busy());
    }

    #[test]
    fn failed_analysis_keeps_previous_result() {
        let mut state = ViewState::new();
        let (first, _) = state.begin_analysis(point(10.0, 20.0));
        state.apply(ViewEvent::AnalysisFetched {
            sequence: first,
            outcome: Ok(result_at(10.0, 20.0)),
        });

        let (second, _) = state.begin_analysis(point(30.0, 40.0));
        let effects = state.apply(ViewEvent::AnalysisFetched {
            sequence: second,
            outcome: Err(api_error()),
        });
        assert_eq!(notices(&effects).len(), 1);
        assert_eq!(state.analysis().map(|r| r.location.lat), Some(10.0));
        assert_eq!(state.analysis_slot(), AnalysisSlot::Failed(second));
        assert_eq!(state.last_sequence(), second);
        assert!(!state.is_busy());
    }

    #[test]
    fn click_places_marker_immediately() {
        let mut state = ViewState::new();
        let (sequence, effects) = state.begin_analysis(point(10.0, 20.0));
        assert_eq!(sequence.get(), 1);
        assert_eq!(effects, vec![Effect::PlaceMarker {
            point: point(10.0, 20.0),
            title: "Analysis Point: 10.0000, 20.0000".to_string(),
        }]);
        assert_eq!(state.analysis_slot(), AnalysisSlot::Pending(sequence));
        assert!(state.is_busy());
    }

    #[test]
    fn dismiss_keeps_counter_and_pending_request() {
        let mut state = ViewState::new();
        let (first, _) = state.begin_analysis(point(1.0, 1.0));
        state.apply(ViewEvent::AnalysisFetched {
            sequence: first,
            outcome: Ok(result_at(1.0, 1.0)),
        });
        let (second, _) = state.begin_analysis(point(2.0, 2.0));

        state.dismiss_analysis();
        assert!(state.analysis().is_none());
        assert_eq!(state.last_sequence(), second);
        assert_eq!(state.analysis_slot(), AnalysisSlot::Pending(second));

        state.apply(ViewEvent::AnalysisFetched {
            sequence: second,
            outcome: Ok(result_at(2.0, 2.0)),
        });
        assert_eq!(state.analysis().map(|r| r.location.lat), Some(2.0));

        state.dismiss_analysis();
        assert_eq!(state.analysis_slot(), AnalysisSlot::Idle);
    }

    #[test]
    fn analysis_timeout_then_late_result_binds() {
        let mut state = ViewState::new();
        let (sequence, _) = state.begin_analysis(point(5.0, 5.0));
        let effects = state.apply(ViewEvent::AnalysisTimedOut {
            sequence,
            after: TIMEOUT,
        });
        assert!(notices(&effects)[0].message.contains("timed out"));
        assert!(!state.is_busy());
        assert_eq!(state.analysis_slot(), AnalysisSlot::Failed(sequence));

        state.apply(ViewEvent::AnalysisFetched {
            sequence,
            outcome: Ok(result_at(5.0, 5.0)),
        });
        assert_eq!(state.analysis_slot(), AnalysisSlot::Bound(sequence));
    }

    #[test]
    fn superseded_analysis_timeout_is_ignored() {
        let mut state = ViewState::new();
        let (first, _) = state.begin_analysis(point(1.0, 1.0));
        let (second, _) = state.begin_analysis(point(2.0, 2.0));
        let effects = state.apply(ViewEvent::AnalysisTimedOut {
            sequence: first,
            after: TIMEOUT,
        });
        assert!(effects.is_empty());
        assert_eq!(state.analysis_slot(), AnalysisSlot::Pending(second));
    }

    #[test]
    fn pending_analysis_blocks_overlay_but_not_clicks() {
        let mut state = ViewState::new();
        state.begin_analysis(point(1.0, 1.0));
        assert!(state.begin_overlay(LayerRequest::Single(year(2020))).is_err());
        let (next, _) = state.begin_analysis(point(2.0, 2.0));
        assert_eq!(next.get(), 2);
    }
}
