//! Analysis Page
//!
//! Map pane with click-to-analyze, and the dismissible Location Analysis card
//! beside it.

use gpui::{
    ClickEvent, Context, Div, Entity, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};
use gpui_component::{h_flex, v_flex};

use crate::app::workspace::Session;
use crate::components::layout::map_pane::MapPane;
use crate::state::view_state::AnalysisSlot;
use crate::theme::colors::NlColors;
use crate::views::AnalysisPanel;

pub struct AnalysisPage {
    session: Entity<Session>,
}

impl AnalysisPage {
    pub fn new(session: Entity<Session>, cx: &mut Context<Self>) -> Self {
        cx.observe(&session, |_this, _, cx| cx.notify()).detach();
        Self { session }
    }

    fn render_section(title: &'static str, rows: Vec<(String, String)>) -> Div {
        v_flex()
            .gap_1()
            .child(
                div()
                    .text_color(NlColors::accent())
                    .text_sm()
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .child(title),
            )
            .children(rows.into_iter().map(|(label, value)| {
                h_flex()
                    .justify_between()
                    .gap_4()
                    .child(div().text_color(NlColors::text_secondary()).child(label))
                    .child(div().text_color(NlColors::text_primary()).child(value))
            }))
    }

    fn render_panel(&self, panel: AnalysisPanel, cx: &mut Context<Self>) -> Div {
        let header = h_flex()
            .justify_between()
            .child(
                div()
                    .text_color(NlColors::text_primary())
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .child(AnalysisPanel::TITLE),
            )
            .child(
                div()
                    .id("dismiss-analysis")
                    .px_2()
                    .rounded_sm()
                    .text_color(NlColors::text_muted())
                    .cursor_pointer()
                    .hover(|s| s.bg(NlColors::button_ghost_hover()))
                    .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                        this.session.update(cx, |session, cx| {
                            session.dismiss();
                            cx.notify();
                        });
                    }))
                    .child("×"),
            );

        let mut card = v_flex()
            .w(px(300.0))
            .p_4()
            .gap_3()
            .text_size(px(12.0))
            .bg(NlColors::panel_bg())
            .border_1()
            .border_color(NlColors::border())
            .rounded_lg()
            .child(header)
            .child(Self::render_section(
                "Summary",
                vec![
                    ("Location".to_string(), panel.location),
                    ("Period".to_string(), panel.period),
                    ("Observations".to_string(), panel.observations),
                ],
            ));

        if let Some(stats) = panel.statistics {
            card = card.child(Self::render_section(
                "Statistics",
                vec![
                    ("Mean".to_string(), stats.mean),
                    ("Min".to_string(), stats.min),
                    ("Max".to_string(), stats.max),
                ],
            ));
        }
        if !panel.recent.is_empty() {
            card = card.child(Self::render_section("Recent Values", panel.recent));
        }
        card
    }

    fn render_pending() -> Div {
        v_flex()
            .w(px(300.0))
            .p_4()
            .bg(NlColors::panel_bg())
            .border_1()
            .border_color(NlColors::border())
            .rounded_lg()
            .text_color(NlColors::text_secondary())
            .text_sm()
            .child("Analyzing location...")
    }
}

impl Render for AnalysisPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let session = self.session.read(cx);
        let pane = MapPane::new(session.host());
        let panel = session.view().analysis().map(AnalysisPanel::from_result);
        let pending = matches!(session.view().analysis_slot(), AnalysisSlot::Pending(_));

        let handle = self.session.clone();
        let pane = pane.on_click(move |lat, lng, _window, cx| {
            handle.update(cx, |session, cx| {
                // rejections are already in the notification log
                let _ = session.on_map_click(lat, lng);
                cx.notify();
            });
        });

        let mut page = h_flex().items_start().gap_4().p_4().child(pane);
        if let Some(panel) = panel {
            page = page.child(self.render_panel(panel, cx));
        } else if pending {
            page = page.child(Self::render_pending());
        }
        page
    }
}
