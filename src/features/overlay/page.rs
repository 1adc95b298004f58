//! Overlay Page
//!
//! Control panel: mode selector, year selectors, the load/compare action and
//! clear. The action shows "Loading..." and both actions are disabled while the
//! busy indicator is raised.

use gpui::{App, Context, Div, Entity, IntoElement, ParentElement, Render, Styled, Window, div, px};
use gpui_component::{h_flex, v_flex};

use crate::app::workspace::Session;
use crate::components::primitives::button::{Button, ButtonSize};
use crate::components::primitives::select::{Select, SelectOption};
use crate::domain::year::Year;
use crate::state::controls::{ControlPanel, Mode};
use crate::theme::colors::NlColors;

fn year_options() -> Vec<SelectOption> {
    Year::all_descending()
        .map(|year| SelectOption::new(year.to_string(), year.to_string()))
        .collect()
}

/// Apply a selector change to the control panel
fn update_controls(
    session: &Entity<Session>,
    cx: &mut App,
    change: impl FnOnce(&mut ControlPanel),
) {
    session.update(cx, |session, cx| {
        change(session.controls_mut());
        cx.notify();
    });
}

pub struct ControlPanelPage {
    session: Entity<Session>,
}

impl ControlPanelPage {
    pub fn new(session: Entity<Session>, cx: &mut Context<Self>) -> Self {
        cx.observe(&session, |_this, _, cx| cx.notify()).detach();
        Self { session }
    }

    fn labeled(label: &'static str, control: impl IntoElement) -> Div {
        v_flex()
            .gap_1()
            .child(
                div()
                    .text_color(NlColors::text_secondary())
                    .text_size(px(11.0))
                    .child(label),
            )
            .child(control)
    }

    fn render_mode(&self, mode: Mode) -> Div {
        let buttons = [Mode::Single, Mode::Compare].map(|choice| {
            let session = self.session.clone();
            let id = match choice {
                Mode::Single => "mode-single",
                Mode::Compare => "mode-compare",
            };
            Button::secondary(id, choice.label())
                .size(ButtonSize::Small)
                .selected(choice == mode)
                .on_click(move |_event, _window, cx| {
                    update_controls(&session, cx, |controls| controls.set_mode(choice));
                })
        });
        Self::labeled("Mode", h_flex().gap_1().children(buttons))
    }

    fn year_select(&self, id: &'static str, selected: Year, disabled: bool) -> Select {
        Select::new(id)
            .options(year_options())
            .selected(selected.to_string())
            .disabled(disabled)
    }

    fn render_years(&self, controls: &ControlPanel, busy: bool) -> Div {
        match controls.mode {
            Mode::Single => {
                let session = self.session.clone();
                let select = self
                    .year_select("year-single", controls.selected_year, busy)
                    .on_change(move |value, _window, cx| {
                        if let Ok(year) = value.parse::<Year>() {
                            update_controls(&session, cx, |controls| controls.select_year(year));
                        }
                    });
                Self::labeled("Year", select)
            }
            Mode::Compare => {
                let (year1, year2) = controls.compare_years;
                let first = self.session.clone();
                let second = self.session.clone();
                let select1 = self.year_select("year-compare-1", year1, busy).on_change(
                    move |value, _window, cx| {
                        if let Ok(year) = value.parse::<Year>() {
                            update_controls(&first, cx, |controls| {
                                controls.select_compare_years(year, year2)
                            });
                        }
                    },
                );
                let select2 = self.year_select("year-compare-2", year2, busy).on_change(
                    move |value, _window, cx| {
                        if let Ok(year) = value.parse::<Year>() {
                            update_controls(&second, cx, |controls| {
                                controls.select_compare_years(year1, year)
                            });
                        }
                    },
                );
                h_flex()
                    .gap_3()
                    .child(Self::labeled("First year", select1))
                    .child(Self::labeled("Second year", select2))
            }
        }
    }

    fn render_actions(&self, controls: &ControlPanel, busy: bool) -> Div {
        let load = self.session.clone();
        let clear = self.session.clone();

        h_flex()
            .gap_2()
            .child(
                Button::primary("load-overlay", controls.action_label(busy))
                    .disabled(busy)
                    .on_click(move |_event, _window, cx| {
                        load.update(cx, |session, cx| {
                            // rejections are already in the notification log
                            let _ = session.load_selected();
                            cx.notify();
                        });
                    }),
            )
            .child(
                Button::secondary("clear-overlay", "Clear Layers")
                    .disabled(busy)
                    .on_click(move |_event, _window, cx| {
                        clear.update(cx, |session, cx| {
                            let _ = session.clear();
                            cx.notify();
                        });
                    }),
            )
    }
}

impl Render for ControlPanelPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let session = self.session.read(cx);
        let controls = session.controls().clone();
        let busy = session.view().is_busy();

        h_flex()
            .w_full()
            .p_4()
            .gap_6()
            .items_end()
            .bg(NlColors::panel_bg())
            .border_b_1()
            .border_color(NlColors::border())
            .child(self.render_mode(controls.mode))
            .child(self.render_years(&controls, busy))
            .child(self.render_actions(&controls, busy))
    }
}
