//! Backend API Client
//!
//! JSON-over-HTTP client for the analysis backend. The [`NightLightsApi`] trait
//! is the seam used by the dispatcher; [`HttpApi`] is the reqwest
//! implementation.

use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::constants::CONNECT_TIMEOUT_SECS;
use crate::domain::analysis::{AnalysisRequest, AnalysisResult};
use crate::domain::health::HealthReport;
use crate::domain::overlay::LayerPayload;
use crate::domain::year::Year;
use crate::error::{Error, Result};

/// Backend endpoints consumed by the client.
///
/// Futures are created eagerly by the caller and polled on the runtime bridge,
/// so implementations must not borrow `self` in the returned future.
pub trait NightLightsApi: Send + Sync {
    /// `GET /api/health`
    fn health(&self) -> BoxFuture<'static, Result<HealthReport>>;

    /// `GET /api/night-lights/{year}`
    fn night_lights(&self, year: Year) -> BoxFuture<'static, Result<LayerPayload>>;

    /// `POST /api/compare-years`
    fn compare_years(&self, year1: Year, year2: Year) -> BoxFuture<'static, Result<LayerPayload>>;

    /// `POST /api/point-analysis`
    fn point_analysis(
        &self,
        request: &AnalysisRequest,
    ) -> BoxFuture<'static, Result<AnalysisResult>>;

    /// Base URL, for user-facing messages
    fn base_url(&self) -> &str;
}

/// Request body of `/api/compare-years`; years travel as strings
#[derive(Debug, Serialize)]
struct CompareBody {
    year1: String,
    year2: String,
}

/// Request body of `/api/point-analysis`
#[derive(Debug, Serialize)]
struct PointAnalysisBody {
    lat: f64,
    lng: f64,
    start_year: u16,
    end_year: u16,
}

impl From<&AnalysisRequest> for PointAnalysisBody {
    fn from(request: &AnalysisRequest) -> Self {
        Self {
            lat: request.point.lat,
            lng: request.point.lng,
            start_year: request.window.start_year.get(),
            end_year: request.window.end_year.get(),
        }
    }
}

/// Error body returned by the backend on failures
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Decode a backend response body.
///
/// Non-success statuses surface the backend's `error` field when present.
pub fn decode_body<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<T> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_slice::<ErrorBody>(body)
            .map(|b| b.error)
            .unwrap_or_else(|_| format!("Request failed with status code {status}"));
        return Err(Error::Api { status, message });
    }
    Ok(serde_json::from_slice(body)?)
}

/// reqwest-backed client
#[derive(Clone, Debug)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: Arc<str>,
}

impl HttpApi {
    /// Create a client for `base_url` (e.g., "http://localhost:5000").
    ///
    /// Only the connect phase is bounded here; whole-request timeouts are
    /// owned by the dispatcher.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').into(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get<T>(&self, path: &str) -> BoxFuture<'static, Result<T>>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let request = self.client.get(self.endpoint(path));
        Box::pin(async move { send(request).await })
    }

    fn post<B, T>(&self, path: &str, body: &B) -> BoxFuture<'static, Result<T>>
    where
        B: Serialize,
        T: DeserializeOwned + Send + 'static,
    {
        let request = self.client.post(self.endpoint(path)).json(body);
        Box::pin(async move { send(request).await })
    }
}

async fn send<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> Result<T> {
    let response = request.send().await?;
    let status = response.status().as_u16();
    let body = response.bytes().await?;
    decode_body(status, &body)
}

impl NightLightsApi for HttpApi {
    fn health(&self) -> BoxFuture<'static, Result<HealthReport>> {
        self.get("/api/health")
    }

    fn night_lights(&self, year: Year) -> BoxFuture<'static, Result<LayerPayload>> {
        self.get(&format!("/api/night-lights/{year}"))
    }

    fn compare_years(&self, year1: Year, year2: Year) -> BoxFuture<'static, Result<LayerPayload>> {
        let body = CompareBody {
            year1: year1.to_string(),
            year2: year2.to_string(),
        };
        self.post("/api/compare-years", &body)
    }

    fn point_analysis(
        &self,
        request: &AnalysisRequest,
    ) -> BoxFuture<'static, Result<AnalysisResult>> {
        self.post("/api/point-analysis", &PointAnalysisBody::from(request))
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
