//! Request Dispatcher
//!
//! Turns loop-side intents into backend calls on the runtime bridge. Every
//! overlay or analysis request gets two detached tasks: the fetch itself and a
//! timer that reports a timeout. Both report through the event channel and the
//! view state decides which report counts.

use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::Sender;

use crate::domain::analysis::AnalysisRequest;
use crate::domain::overlay::{LayerRequest, OverlayLayer};
use crate::error::Error;
use crate::eventing::app_event::AppEvent;
use crate::services::api::NightLightsApi;
use crate::services::runtime::spawn_named_in_tokio;
use crate::state::busy::OverlayTicket;
use crate::state::view_state::ViewEvent;

pub struct Dispatcher {
    api: Arc<dyn NightLightsApi>,
    tx: Sender<AppEvent>,
    timeout: Duration,
    opacity: f64,
}

impl Dispatcher {
    pub fn new(
        api: Arc<dyn NightLightsApi>,
        tx: Sender<AppEvent>,
        timeout: Duration,
        opacity: f64,
    ) -> Self {
        Self {
            api,
            tx,
            timeout,
            opacity,
        }
    }

    pub fn base_url(&self) -> &str {
        self.api.base_url()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Check `/api/health`; the check is bounded by the request timeout
    pub fn check_health(&self) {
        let check = self.api.health();
        let tx = self.tx.clone();
        let timeout = self.timeout;

        spawn_named_in_tokio("health-check".to_string(), async move {
            let outcome = match tokio::time::timeout(timeout, check).await {
                Ok(outcome) => outcome,
                Err(_) => Err(Error::Timeout {
                    operation: "health check".to_string(),
                    millis: timeout.as_millis() as u64,
                }),
            };
            deliver(&tx, AppEvent::HealthChecked { outcome });
        });
    }

    /// Fetch and build the layer for `request` under `ticket`
    pub fn fetch_layer(&self, ticket: OverlayTicket, request: LayerRequest) {
        let fetch = match request {
            LayerRequest::Single(year) => self.api.night_lights(year),
            LayerRequest::Compare(year1, year2) => self.api.compare_years(year1, year2),
        };
        let tx = self.tx.clone();
        let opacity = self.opacity;

        spawn_named_in_tokio(ticket.to_string(), async move {
            let outcome = fetch
                .await
                .and_then(|payload| OverlayLayer::from_payload(request, payload, opacity));
            deliver(
                &tx,
                ViewEvent::OverlayFetched {
                    ticket,
                    request,
                    outcome,
                }
                .into(),
            );
        });

        self.spawn_timer(
            format!("{ticket}-timer"),
            ViewEvent::OverlayTimedOut {
                ticket,
                request,
                after: self.timeout,
            },
        );
    }

    /// Query the backend for one clicked point
    pub fn analyze(&self, request: AnalysisRequest) {
        let fetch = self.api.point_analysis(&request);
        let tx = self.tx.clone();
        let sequence = request.sequence;

        spawn_named_in_tokio(format!("analysis-{sequence}"), async move {
            let outcome = fetch.await;
            deliver(&tx, ViewEvent::AnalysisFetched { sequence, outcome }.into());
        });

        self.spawn_timer(
            format!("analysis-{sequence}-timer"),
            ViewEvent::AnalysisTimedOut {
                sequence,
                after: self.timeout,
            },
        );
    }

    fn spawn_timer(&self, name: String, event: ViewEvent) {
        let tx = self.tx.clone();
        let timeout = self.timeout;
        spawn_named_in_tokio(name, async move {
            tokio::time::sleep(timeout).await;
            deliver(&tx, event.into());
        });
    }
}

fn deliver(tx: &Sender<AppEvent>, event: AppEvent) {
    if let Err(e) = tx.send(event) {
        // loop already shut down
        tracing::debug!("Dropping event: {:?}", e.into_inner());
    }
}
