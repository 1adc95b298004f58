//! Workspace - Main Shell with Layout and Event Pump
//!
//! Holds the shared [`Session`] entity and lays out the header, control panel,
//! map/analysis area and notification log. Until the readiness gate opens the
//! gate page fills the window instead.
//!
//! Backend completions arrive on the application's event channel; an ingest
//! task drains it on the UI thread at a fixed interval.

use std::time::Duration;

use gpui::{
    Context, Entity, IntoElement, ParentElement, Render, Styled, Task, Window, div, prelude::*,
};

use crate::app::application::Application;
use crate::app::map_surface::MapSurface;
use crate::components::layout::header::Header;
use crate::components::layout::log_panel::LogPanel;
use crate::features::analysis::page::AnalysisPage;
use crate::features::overlay::page::ControlPanelPage;
use crate::features::readiness::page::GatePage;
use crate::theme::colors::NlColors;

/// Application loop as hosted by the desktop window
pub type Session = Application<MapSurface>;

const INGEST_INTERVAL_MS: u64 = 30;

pub struct Workspace {
    session: Entity<Session>,
    header: Entity<Header>,
    gate_page: Entity<GatePage>,
    control_page: Entity<ControlPanelPage>,
    analysis_page: Entity<AnalysisPage>,
    log_panel: Entity<LogPanel>,
    _ingest_task: Task<()>,
}

impl Workspace {
    pub fn new(session: Entity<Session>, cx: &mut Context<Self>) -> Self {
        let header = cx.new(|cx| Header::new(session.clone(), cx));
        let gate_page = cx.new(|cx| GatePage::new(session.clone(), cx));
        let control_page = cx.new(|cx| ControlPanelPage::new(session.clone(), cx));
        let analysis_page = cx.new(|cx| AnalysisPage::new(session.clone(), cx));
        let log_panel = cx.new(|cx| LogPanel::new(session.clone(), cx));

        cx.observe(&session, |_this, _, cx| cx.notify()).detach();

        session.update(cx, |session, _| session.start());
        let ingest_task = Self::start_ingest(session.clone(), cx);

        Self {
            session,
            header,
            gate_page,
            control_page,
            analysis_page,
            log_panel,
            _ingest_task: ingest_task,
        }
    }

    /// Apply queued completions to the session on the UI thread
    fn start_ingest(session: Entity<Session>, cx: &mut Context<Self>) -> Task<()> {
        cx.spawn(async move |_this, cx| {
            loop {
                cx.background_executor()
                    .timer(Duration::from_millis(INGEST_INTERVAL_MS))
                    .await;

                let applied = session.update(cx, |session, cx| {
                    let applied = session.pump();
                    if applied > 0 {
                        cx.notify();
                    }
                    applied
                });
                if applied.is_err() {
                    tracing::debug!("Session released, stopping ingest");
                    break;
                }
            }
        })
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let ready = self.session.read(cx).readiness().is_ready();

        let shell = div()
            .size_full()
            .flex()
            .flex_col()
            .bg(NlColors::background())
            .child(self.header.clone());

        let content = if ready {
            div()
                .flex_1()
                .flex()
                .flex_col()
                .overflow_hidden()
                .child(self.control_page.clone())
                .child(self.analysis_page.clone())
        } else {
            div().flex_1().child(self.gate_page.clone())
        };

        shell.child(content).child(self.log_panel.clone())
    }
}
