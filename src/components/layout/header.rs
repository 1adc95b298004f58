//! Header Component
//!
//! Title, backend address, readiness indicator and the busy holder.

use gpui::{
    Context, Entity, IntoElement, ParentElement, Render, Styled, Window, div, prelude::*, px,
};
use gpui_component::h_flex;

use crate::app::workspace::Session;
use crate::state::readiness_state::ReadinessState;
use crate::theme::colors::NlColors;
use crate::views::status::busy_line;

pub struct Header {
    session: Entity<Session>,
}

impl Header {
    pub fn new(session: Entity<Session>, cx: &mut Context<Self>) -> Self {
        cx.observe(&session, |_this, _, cx| cx.notify()).detach();
        Self { session }
    }
}

impl Render for Header {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let session = self.session.read(cx);
        let readiness = session.readiness();
        let (dot_color, dot) = match readiness {
            ReadinessState::Ready => (NlColors::success(), "●"),
            ReadinessState::Checking => (NlColors::warning(), "●"),
            _ => (NlColors::danger(), "○"),
        };
        let busy = busy_line(session.view()).unwrap_or_default();

        h_flex()
            .h(px(48.0))
            .w_full()
            .px_4()
            .justify_between()
            .bg(NlColors::header_bg())
            .border_b_1()
            .border_color(NlColors::border())
            .child(
                div()
                    .text_color(NlColors::accent())
                    .text_size(px(16.0))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .child("Night Lights Explorer"),
            )
            .child(
                div()
                    .text_color(NlColors::text_secondary())
                    .text_size(px(12.0))
                    .child(busy),
            )
            .child(
                h_flex()
                    .gap_2()
                    .child(div().text_color(dot_color).text_size(px(10.0)).child(dot))
                    .child(
                        div()
                            .text_color(NlColors::text_primary())
                            .text_size(px(12.0))
                            .child(format!(
                                "{} ({})",
                                session.config().base_url(),
                                readiness.label()
                            )),
                    ),
            )
    }
}
