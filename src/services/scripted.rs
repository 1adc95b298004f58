//! Scripted backend for tests
//!
//! Every call is recorded and parked on a oneshot channel until the test
//! replies to it, so completion order is fully controlled by the test.

use std::sync::Mutex;

use futures::future::BoxFuture;
use tokio::sync::oneshot;

use crate::domain::analysis::{AnalysisRequest, AnalysisResult};
use crate::domain::health::HealthReport;
use crate::domain::overlay::LayerPayload;
use crate::domain::year::Year;
use crate::error::{Error, Result};
use crate::services::api::NightLightsApi;

/// A recorded backend call
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Health,
    NightLights(Year),
    Compare(Year, Year),
    PointAnalysis(AnalysisRequest),
}

enum Reply {
    Health(oneshot::Sender<Result<HealthReport>>),
    Layer(oneshot::Sender<Result<LayerPayload>>),
    Analysis(oneshot::Sender<Result<AnalysisResult>>),
}

#[derive(Default)]
pub struct ScriptedApi {
    calls: Mutex<Vec<(Call, Option<Reply>)>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls issued so far, in issuance order
    pub fn calls(&self) -> Vec<Call> {
        self.lock().iter().map(|(call, _)| call.clone()).collect()
    }

    pub fn call_count(&self) -> usize {
        self.lock().len()
    }

    pub fn reply_health(&self, index: usize, outcome: Result<HealthReport>) {
        match self.take(index) {
            Reply::Health(tx) => {
                let _ = tx.send(outcome);
            }
            _ => panic!("call {index} is not a health check"),
        }
    }

    pub fn reply_layer(&self, index: usize, outcome: Result<LayerPayload>) {
        match self.take(index) {
            Reply::Layer(tx) => {
                let _ = tx.send(outcome);
            }
            _ => panic!("call {index} is not a layer fetch"),
        }
    }

    pub fn reply_analysis(&self, index: usize, outcome: Result<AnalysisResult>) {
        match self.take(index) {
            Reply::Analysis(tx) => {
                let _ = tx.send(outcome);
            }
            _ => panic!("call {index} is not a point analysis"),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(Call, Option<Reply>)>> {
        self.calls.lock().expect("scripted api lock")
    }

    fn take(&self, index: usize) -> Reply {
        self.lock()
            .get_mut(index)
            .and_then(|(_, reply)| reply.take())
            .unwrap_or_else(|| panic!("call {index} missing or already answered"))
    }

    fn park<T: Send + 'static>(
        &self,
        call: Call,
        wrap: impl FnOnce(oneshot::Sender<Result<T>>) -> Reply,
    ) -> BoxFuture<'static, Result<T>> {
        let (tx, rx) = oneshot::channel();
        self.lock().push((call, Some(wrap(tx))));
        Box::pin(async move {
            rx.await.unwrap_or_else(|_| {
                Err(Error::Invalid {
                    message: "scripted reply dropped".to_string(),
                })
            })
        })
    }
}

impl NightLightsApi for ScriptedApi {
    fn health(&self) -> BoxFuture<'static, Result<HealthReport>> {
        self.park(Call::Health, Reply::Health)
    }

    fn night_lights(&self, year: Year) -> BoxFuture<'static, Result<LayerPayload>> {
        self.park(Call::NightLights(year), Reply::Layer)
    }

    fn compare_years(&self, year1: Year, year2: Year) -> BoxFuture<'static, Result<LayerPayload>> {
        self.park(Call::Compare(year1, year2), Reply::Layer)
    }

    fn point_analysis(
        &self,
        request: &AnalysisRequest,
    ) -> BoxFuture<'static, Result<AnalysisResult>> {
        self.park(Call::PointAnalysis(*request), Reply::Analysis)
    }

    fn base_url(&self) -> &str {
        "http://scripted.test"
    }
}

/// Health report of a fully initialized backend
pub fn ready_report() -> HealthReport {
    HealthReport {
        earth_engine_ready: true,
        status: Some("healthy".to_string()),
        message: None,
    }
}

/// Layer payload with a well-formed template
pub fn payload(tag: &str) -> LayerPayload {
    LayerPayload {
        tile_url_template: format!("https://tiles.test/{tag}/{{z}}/{{x}}/{{y}}"),
        comparison: None,
    }
}
