//! Log Panel Component
//!
//! Notification log at the bottom of the window. Backend defects and gate
//! notices carry an origin badge so they stand apart from request failures.

use gpui::{
    ClickEvent, Context, Div, Entity, InteractiveElement, IntoElement, ParentElement, Render,
    Rgba, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};
use gpui_component::h_flex;

use crate::app::workspace::Session;
use crate::state::notifications::{NoticeOrigin, Notification, Severity};
use crate::theme::colors::NlColors;
use crate::utils::format::format_time;

const VISIBLE_ENTRIES: usize = 50;

fn severity_color(severity: Severity) -> Rgba {
    match severity {
        Severity::Info => NlColors::info(),
        Severity::Warn => NlColors::warning(),
        Severity::Error => NlColors::danger(),
    }
}

fn origin_color(origin: NoticeOrigin) -> Rgba {
    match origin {
        NoticeOrigin::BackendDefect => NlColors::defect(),
        NoticeOrigin::Gate | NoticeOrigin::User => NlColors::text_muted(),
    }
}

pub struct LogPanel {
    session: Entity<Session>,
    expanded: bool,
}

impl LogPanel {
    pub fn new(session: Entity<Session>, cx: &mut Context<Self>) -> Self {
        cx.observe(&session, |_this, _, cx| cx.notify()).detach();
        Self {
            session,
            expanded: true,
        }
    }

    fn toggle_expanded(&mut self, cx: &mut Context<Self>) {
        self.expanded = !self.expanded;
        cx.notify();
    }

    fn render_entry(entry: &Notification) -> Div {
        let mut row = h_flex()
            .w_full()
            .gap_2()
            .py_px()
            .child(
                div()
                    .text_color(NlColors::text_muted())
                    .text_size(px(11.0))
                    .min_w(px(60.0))
                    .child(format_time(&entry.timestamp)),
            )
            .child(
                div()
                    .text_color(severity_color(entry.severity))
                    .text_size(px(11.0))
                    .min_w(px(45.0))
                    .child(entry.severity.label()),
            );

        if let Some(tag) = entry.origin.tag() {
            row = row.child(
                div()
                    .px_1()
                    .rounded_sm()
                    .border_1()
                    .border_color(origin_color(entry.origin))
                    .text_color(origin_color(entry.origin))
                    .text_size(px(10.0))
                    .child(tag),
            );
        }

        row.child(
            div()
                .flex_1()
                .text_color(NlColors::text_primary())
                .text_size(px(12.0))
                .child(entry.message.clone()),
        )
    }
}

impl Render for LogPanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let height = if self.expanded { px(160.0) } else { px(32.0) };
        let session = self.session.clone();
        let count = self.session.read(cx).notifications().len();

        let header = h_flex()
            .h(px(32.0))
            .w_full()
            .px_4()
            .justify_between()
            .border_b_1()
            .border_color(NlColors::border())
            .child(
                h_flex()
                    .gap_2()
                    .child(
                        div()
                            .text_color(NlColors::text_primary())
                            .text_size(px(13.0))
                            .font_weight(gpui::FontWeight::MEDIUM)
                            .child("Notifications"),
                    )
                    .child(
                        div()
                            .text_color(NlColors::text_muted())
                            .text_size(px(11.0))
                            .child(format!("({count})")),
                    ),
            )
            .child(
                h_flex()
                    .gap_2()
                    .child(
                        div()
                            .id("clear-notifications")
                            .px_2()
                            .py_1()
                            .rounded_sm()
                            .text_color(NlColors::text_muted())
                            .text_size(px(11.0))
                            .cursor_pointer()
                            .hover(|s| s.bg(NlColors::button_ghost_hover()))
                            .on_click(move |_event: &ClickEvent, _window, cx| {
                                session.update(cx, |session, cx| {
                                    session.clear_notifications();
                                    cx.notify();
                                });
                            })
                            .child("Clear"),
                    )
                    .child(
                        div()
                            .id("toggle-notifications")
                            .px_2()
                            .py_1()
                            .rounded_sm()
                            .text_color(NlColors::text_muted())
                            .text_size(px(11.0))
                            .cursor_pointer()
                            .hover(|s| s.bg(NlColors::button_ghost_hover()))
                            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.toggle_expanded(cx);
                            }))
                            .child(if self.expanded { "▼" } else { "▲" }),
                    ),
            );

        let mut panel = div()
            .h(height)
            .w_full()
            .bg(NlColors::log_panel_bg())
            .flex()
            .flex_col()
            .child(header);

        if self.expanded {
            let notifications = self.session.read(cx).notifications();
            let entries: Vec<_> = notifications
                .entries()
                .iter()
                .rev()
                .take(VISIBLE_ENTRIES)
                .map(Self::render_entry)
                .collect();

            panel = panel.child(
                div()
                    .id("notification-entries")
                    .flex_1()
                    .overflow_y_scroll()
                    .px_4()
                    .py_1()
                    .children(entries),
            );
        }

        panel
    }
}
