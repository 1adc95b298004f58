//! Select Component
//!
//! Shows the current choice between step arrows; each arrow moves the
//! selection one option along the list.

use std::rc::Rc;

use gpui::{
    App, ClickEvent, Div, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, Stateful, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::theme::colors::NlColors;

/// A select option
#[derive(Debug, Clone)]
pub struct SelectOption {
    pub value: String,
    pub label: SharedString,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<SharedString>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

type ChangeHandler = Rc<dyn Fn(&str, &mut Window, &mut App) + 'static>;

/// A stepping select
#[derive(IntoElement)]
pub struct Select {
    id: &'static str,
    selected: Option<String>,
    options: Vec<SelectOption>,
    placeholder: SharedString,
    disabled: bool,
    on_change: Option<ChangeHandler>,
}

impl Select {
    pub fn new(id: &'static str) -> Self {
        Self {
            id,
            selected: None,
            options: Vec::new(),
            placeholder: "Select...".into(),
            disabled: false,
            on_change: None,
        }
    }

    pub fn selected(mut self, value: impl Into<String>) -> Self {
        self.selected = Some(value.into());
        self
    }

    pub fn options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = options;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<SharedString>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Called with the newly selected value
    pub fn on_change(mut self, handler: impl Fn(&str, &mut Window, &mut App) + 'static) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }

    fn position(&self) -> Option<usize> {
        let selected = self.selected.as_deref()?;
        self.options.iter().position(|opt| opt.value == selected)
    }

    /// Value one step away from the current selection, if there is one
    fn neighbor(&self, forward: bool) -> Option<String> {
        let target = match (self.position(), forward) {
            (None, _) => 0,
            (Some(index), true) => index + 1,
            (Some(index), false) => index.checked_sub(1)?,
        };
        self.options.get(target).map(|opt| opt.value.clone())
    }

    fn render_arrow(
        &self,
        slot: usize,
        glyph: &'static str,
        target: Option<String>,
    ) -> Stateful<Div> {
        let mut arrow = div()
            .id((self.id, slot))
            .px_2()
            .text_size(px(10.0))
            .text_color(NlColors::text_muted());

        let handler = self.on_change.clone().filter(|_| !self.disabled);
        match (target, handler) {
            (Some(value), Some(handler)) => {
                arrow = arrow
                    .cursor_pointer()
                    .text_color(NlColors::text_primary())
                    .hover(|s| s.bg(NlColors::button_ghost_hover()))
                    .on_click(move |_event: &ClickEvent, window, cx| {
                        handler(&value, window, cx);
                    });
            }
            _ => arrow = arrow.opacity(0.4),
        }

        arrow.child(glyph)
    }
}

impl RenderOnce for Select {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let display_text = self
            .position()
            .and_then(|index| self.options.get(index))
            .map(|opt| opt.label.clone())
            .unwrap_or_else(|| self.placeholder.clone());

        let previous = self.neighbor(false);
        let next = self.neighbor(true);

        div()
            .px_1()
            .py_1()
            .bg(NlColors::input_bg())
            .border_1()
            .border_color(NlColors::input_border())
            .rounded_md()
            .text_sm()
            .min_w(px(150.0))
            .flex()
            .items_center()
            .justify_between()
            .opacity(if self.disabled { 0.5 } else { 1.0 })
            .child(self.render_arrow(0, "◀", previous))
            .child(
                div()
                    .text_color(NlColors::text_primary())
                    .child(display_text),
            )
            .child(self.render_arrow(1, "▶", next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn years() -> Select {
        Select::new("year").options(vec![
            SelectOption::new("2023", "2023"),
            SelectOption::new("2022", "2022"),
            SelectOption::new("2021", "2021"),
        ])
    }

    #[test]
    fn steps_along_the_options() {
        let select = years().selected("2022");
        assert_eq!(select.neighbor(false).as_deref(), Some("2023"));
        assert_eq!(select.neighbor(true).as_deref(), Some("2021"));
    }

    #[test]
    fn stops_at_the_ends() {
        assert_eq!(years().selected("2023").neighbor(false), None);
        assert_eq!(years().selected("2021").neighbor(true), None);
    }

    #[test]
    fn unknown_selection_starts_at_first_option() {
        let select = years().selected("1999");
        assert_eq!(select.position(), None);
        assert_eq!(select.neighbor(true).as_deref(), Some("2023"));
    }
}
