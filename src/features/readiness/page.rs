//! Readiness Page
//!
//! Full-window gate shown until the backend reports ready. Offers a retry
//! action from the non-ready states.

use gpui::{Context, Entity, IntoElement, ParentElement, Render, Styled, Window, div, px};
use gpui_component::v_flex;

use crate::app::workspace::Session;
use crate::components::primitives::button::Button;
use crate::theme::colors::NlColors;
use crate::views::status::gate_screen;

pub struct GatePage {
    session: Entity<Session>,
}

impl GatePage {
    pub fn new(session: Entity<Session>, cx: &mut Context<Self>) -> Self {
        cx.observe(&session, |_this, _, cx| cx.notify()).detach();
        Self { session }
    }
}

impl Render for GatePage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let screen = gate_screen(self.session.read(cx).readiness());

        let mut card = v_flex()
            .w(px(420.0))
            .p_6()
            .gap_3()
            .items_center()
            .bg(NlColors::panel_bg())
            .border_1()
            .border_color(NlColors::border())
            .rounded_lg();

        if let Some(screen) = screen {
            let title_color = if screen.can_retry {
                NlColors::danger()
            } else {
                NlColors::accent()
            };
            card = card
                .child(
                    div()
                        .text_color(title_color)
                        .text_size(px(18.0))
                        .font_weight(gpui::FontWeight::SEMIBOLD)
                        .child(screen.title),
                )
                .child(
                    div()
                        .text_color(NlColors::text_secondary())
                        .text_sm()
                        .child(screen.detail),
                );

            if screen.can_retry {
                let session = self.session.clone();
                card = card.child(Button::primary("retry-health", "Retry").on_click(
                    move |_event, _window, cx| {
                        session.update(cx, |session, cx| {
                            // rejections are already in the notification log
                            let _ = session.retry();
                            cx.notify();
                        });
                    },
                ));
            }
        }

        div()
            .size_full()
            .flex()
            .items_center()
            .justify_center()
            .bg(NlColors::background())
            .child(card)
    }
}
