//! Application - Single-Threaded Event Loop
//!
//! Owns every piece of mutable state. User commands are applied synchronously;
//! backend completions arrive on the event channel and are applied by
//! [`Application::handle_event`]. Nothing else writes the view state.

use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{Receiver, TryRecvError};

use crate::app::map_host::MapHost;
use crate::domain::analysis::Sequence;
use crate::domain::config::AppConfig;
use crate::domain::geo::MapView;
use crate::domain::overlay::LayerRequest;
use crate::domain::year::Year;
use crate::error::Result;
use crate::eventing::app_event::AppEvent;
use crate::features::analysis::controller::PointAnalysisController;
use crate::features::overlay::controller::OverlayLayerManager;
use crate::features::readiness::controller::ReadinessGate;
use crate::services::api::{HttpApi, NightLightsApi};
use crate::services::dispatcher::Dispatcher;
use crate::state::busy::OverlayTicket;
use crate::state::controls::ControlPanel;
use crate::state::notifications::{Notice, NotificationLog, Severity};
use crate::state::readiness_state::ReadinessState;
use crate::state::view_state::{Effect, ViewState};

pub struct Application<H: MapHost> {
    config: AppConfig,
    view: ViewState,
    gate: ReadinessGate,
    controls: ControlPanel,
    notifications: NotificationLog,
    dispatcher: Dispatcher,
    events: Receiver<AppEvent>,
    host: H,
    map_initialized: bool,
}

impl<H: MapHost> Application<H> {
    pub fn new(config: AppConfig, api: Arc<dyn NightLightsApi>, host: H) -> Self {
        let (tx, events) = crossbeam_channel::unbounded();
        let dispatcher =
            Dispatcher::new(api, tx, config.request_timeout(), config.overlay_opacity);
        let gate = ReadinessGate::new(dispatcher.base_url());

        Self {
            config,
            view: ViewState::new(),
            gate,
            controls: ControlPanel::default(),
            notifications: NotificationLog::default(),
            dispatcher,
            events,
            host,
            map_initialized: false,
        }
    }

    /// Build an application talking HTTP to `config.backend_url`
    pub fn connect(config: AppConfig, host: H) -> Result<Self> {
        let api = HttpApi::new(config.base_url())?;
        Ok(Self::new(config, Arc::new(api), host))
    }

    // ==================== Accessors ====================

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn readiness(&self) -> &ReadinessState {
        self.gate.state()
    }

    pub fn controls(&self) -> &ControlPanel {
        &self.controls
    }

    pub fn controls_mut(&mut self) -> &mut ControlPanel {
        &mut self.controls
    }

    pub fn notifications(&self) -> &NotificationLog {
        &self.notifications
    }

    pub fn clear_notifications(&mut self) {
        self.notifications.clear();
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Receiver for completions, for callers multiplexing other input
    pub fn events(&self) -> Receiver<AppEvent> {
        self.events.clone()
    }

    // ==================== Readiness ====================

    /// Start the initial health check
    pub fn start(&mut self) {
        self.gate.check(&self.dispatcher);
    }

    pub fn retry(&mut self) -> Result<()> {
        let outcome = self.gate.retry(&self.dispatcher);
        self.rejected(outcome)
    }

    // ==================== Overlay ====================

    pub fn show_single_year(&mut self, year: Year) -> Result<OverlayTicket> {
        self.show(LayerRequest::Single(year))
    }

    pub fn show_comparison(&mut self, year1: Year, year2: Year) -> Result<OverlayTicket> {
        self.show(LayerRequest::Compare(year1, year2))
    }

    /// Run the load/compare action for the current control panel selection
    pub fn load_selected(&mut self) -> Result<OverlayTicket> {
        let request = self.controls.layer_request();
        self.show(request)
    }

    pub fn clear(&mut self) -> Result<()> {
        let outcome = self.gate.ensure_ready().and_then(|()| {
            OverlayLayerManager::new(&mut self.view, &self.dispatcher).clear()
        });
        let effects = self.rejected(outcome)?;
        self.run_effects(effects);
        Ok(())
    }

    fn show(&mut self, request: LayerRequest) -> Result<OverlayTicket> {
        let outcome = self.gate.ensure_ready().and_then(|()| {
            OverlayLayerManager::new(&mut self.view, &self.dispatcher).show(request)
        });
        self.rejected(outcome)
    }

    // ==================== Analysis ====================

    pub fn on_map_click(&mut self, lat: f64, lng: f64) -> Result<Sequence> {
        let window = self.config.analysis_window;
        let outcome = self.gate.ensure_ready().and_then(|()| {
            PointAnalysisController::new(&mut self.view, &self.dispatcher, window)
                .on_map_click(lat, lng)
        });
        let (sequence, effects) = self.rejected(outcome)?;
        self.run_effects(effects);
        Ok(sequence)
    }

    pub fn dismiss(&mut self) {
        let window = self.config.analysis_window;
        PointAnalysisController::new(&mut self.view, &self.dispatcher, window).dismiss();
    }

    // ==================== Event loop ====================

    /// Apply one completion
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::HealthChecked { outcome } => {
                if let Some(notice) = self.gate.on_health(outcome) {
                    self.notify(notice);
                }
                if self.gate.is_ready() && !self.map_initialized {
                    self.host.initialize(&MapView::initial());
                    self.map_initialized = true;
                    self.notify(Notice::info(format!(
                        "Connected to backend at {}",
                        self.dispatcher.base_url()
                    )));
                }
            }
            AppEvent::View(event) => {
                let effects = self.view.apply(event);
                self.run_effects(effects);
            }
        }
    }

    /// Apply every completion already queued; returns how many were applied
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        loop {
            match self.events.try_recv() {
                Ok(event) => {
                    self.handle_event(event);
                    applied += 1;
                }
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => return applied,
            }
        }
    }

    /// Block up to `timeout` for one completion; false if none arrived
    pub fn wait_for_event(&mut self, timeout: Duration) -> bool {
        match self.events.recv_timeout(timeout) {
            Ok(event) => {
                self.handle_event(event);
                true
            }
            Err(_) => false,
        }
    }

    fn run_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::UnmountOverlay => self.host.unmount_overlay(),
                Effect::MountOverlay(layer) => self.host.mount_overlay(&layer),
                Effect::PlaceMarker { point, title } => self.host.place_marker(point, &title),
                Effect::Notify(notice) => self.notify(notice),
            }
        }
    }

    /// Surface a rejected command as a warning and hand the error back
    fn rejected<T>(&mut self, outcome: Result<T>) -> Result<T> {
        if let Err(error) = &outcome {
            tracing::info!("Rejected: {error}");
            self.notify(Notice::warn(error.to_string()));
        }
        outcome
    }

    fn notify(&mut self, notice: Notice) {
        match notice.severity {
            Severity::Error => tracing::warn!("{}", notice.message),
            Severity::Info | Severity::Warn => tracing::debug!("{}", notice.message),
        }
        self.notifications.push(notice);
    }
}
