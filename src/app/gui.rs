//! GUI - Desktop Window
//!
//! Opens the main window around a [`Workspace`] bound to a new session.

use gpui::{
    App, AppContext, Bounds, SharedString, TitlebarOptions, WindowBounds, WindowOptions, actions,
    px,
};

use crate::app::application::Application;
use crate::app::map_surface::MapSurface;
use crate::app::workspace::Workspace;
use crate::domain::config::AppConfig;

actions!(night_lights, [Quit]);

/// Run the desktop client until its last window closes
pub fn run_gui(config: AppConfig) {
    gpui::Application::new().run(move |cx: &mut App| {
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let session = match Application::connect(config, MapSurface::default()) {
            Ok(session) => session,
            Err(e) => {
                tracing::error!("Failed to create backend client: {e}");
                cx.quit();
                return;
            }
        };
        let session = cx.new(|_| session);

        let bounds = Bounds::centered(None, gpui::size(px(1100.0), px(820.0)), cx);
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("Night Lights Explorer")),
                appears_transparent: false,
                traffic_light_position: None,
            }),
            ..Default::default()
        };

        if let Err(e) = cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| Workspace::new(session.clone(), cx))
        }) {
            tracing::error!("Failed to open window: {e}");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
