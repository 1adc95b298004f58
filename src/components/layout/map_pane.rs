//! Map Pane Component
//!
//! Renders a [`MapSurface`] as a grid of clickable cells. The overlay is shown
//! as a tint with its name and tile template; analysis markers sit in their
//! cells.

use std::rc::Rc;

use gpui::{
    App, ClickEvent, Div, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, Stateful, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};
use gpui_component::{h_flex, v_flex};

use crate::app::map_surface::{GRID_COLS, GRID_ROWS, MapSurface, cell_center};
use crate::theme::colors::NlColors;
use crate::utils::format::format_coord;

const CELL_SIZE: f32 = 28.0;

type MapClickHandler = Rc<dyn Fn(f64, f64, &mut Window, &mut App) + 'static>;

#[derive(IntoElement)]
pub struct MapPane {
    initialized: bool,
    caption: SharedString,
    tinted: bool,
    marked: Vec<(usize, usize)>,
    on_click: Option<MapClickHandler>,
}

impl MapPane {
    pub fn new(surface: &MapSurface) -> Self {
        let caption = match (surface.view(), surface.mounted()) {
            (None, _) => "Map not initialized".to_string(),
            (Some(_), None) => "No overlay".to_string(),
            (Some(_), Some(layer)) => format!(
                "{} · opacity {} · {}",
                layer.display_name(),
                layer.opacity(),
                layer.template()
            ),
        };
        let marked = (0..GRID_ROWS)
            .flat_map(|row| (0..GRID_COLS).map(move |col| (row, col)))
            .filter(|&(row, col)| surface.has_marker_at(row, col))
            .collect();

        Self {
            initialized: surface.view().is_some(),
            caption: caption.into(),
            tinted: surface.mounted().is_some(),
            marked,
            on_click: None,
        }
    }

    /// Called with the `(lat, lng)` of the clicked cell center
    pub fn on_click(
        mut self,
        handler: impl Fn(f64, f64, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Rc::new(handler));
        self
    }

    fn render_cell(&self, row: usize, col: usize) -> Stateful<Div> {
        let (lat, lng) = cell_center(row, col);
        let mut cell = div()
            .id(("map-cell", row * GRID_COLS + col))
            .w(px(CELL_SIZE))
            .h(px(CELL_SIZE))
            .flex()
            .items_center()
            .justify_center()
            .border_1()
            .border_color(NlColors::border())
            .text_size(px(12.0))
            .text_color(NlColors::marker());

        if self.tinted {
            cell = cell.bg(NlColors::overlay_tint());
        }
        if self.marked.contains(&(row, col)) {
            cell = cell.child("●");
        }
        if let Some(handler) = self.on_click.clone().filter(|_| self.initialized) {
            cell = cell
                .cursor_pointer()
                .hover(|s| s.bg(NlColors::map_cell_hover()))
                .on_click(move |_event: &ClickEvent, window, cx| {
                    handler(lat, lng, window, cx);
                });
        }
        cell
    }
}

impl RenderOnce for MapPane {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let rows: Vec<_> = (0..GRID_ROWS)
            .map(|row| h_flex().children((0..GRID_COLS).map(|col| self.render_cell(row, col))))
            .collect();
        let (lat, lng) = cell_center(0, 0);

        v_flex()
            .gap_2()
            .child(
                div()
                    .text_color(NlColors::text_secondary())
                    .text_size(px(12.0))
                    .child(self.caption.clone()),
            )
            .child(v_flex().bg(NlColors::map_bg()).children(rows))
            .child(
                div()
                    .text_color(NlColors::text_muted())
                    .text_size(px(11.0))
                    .child(format!(
                        "Click a cell to analyze its center; top-left cell is {}",
                        format_coord(lat, lng)
                    )),
            )
    }
}
