//! Console - Line-Oriented Front End
//!
//! Implements [`MapHost`] on the terminal and drives the application loop from
//! stdin. Input lines and backend completions are multiplexed with
//! `crossbeam_channel::select!` so the loop never blocks on either.

use std::io::BufRead;

use crossbeam_channel::Receiver;

use crate::app::application::Application;
use crate::app::map_host::MapHost;
use crate::domain::config::AppConfig;
use crate::domain::geo::{GeoPoint, MapView, TileCoord};
use crate::domain::overlay::OverlayLayer;
use crate::domain::year::Year;
use crate::error::{Error, Result};
use crate::state::controls::Mode;
use crate::utils::format::format_coord;
use crate::views::AnalysisPanel;
use crate::views::status::{control_panel, gate_screen, notification_line};

const HELP: &str = "\
Commands:
  mode single|compare     switch the view mode
  year <YEAR>             select the single-year view year
  compare <YEAR> <YEAR>   select the comparison years
  load                    load the selected year (or comparison)
  clear                   remove the overlay
  click <LAT> <LNG>       analyze a map location
  dismiss                 hide the analysis panel
  tile <Z> <X> <Y>        print the overlay tile address
  retry                   re-check the backend
  status                  print the current state
  help                    show this help
  quit                    exit";

/// A parsed console command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Mode(Mode),
    Year(Year),
    Compare(Year, Year),
    Load,
    Clear,
    Click { lat: f64, lng: f64 },
    Dismiss,
    Tile(TileCoord),
    Retry,
    Status,
    Help,
    Quit,
}

fn invalid(message: impl Into<String>) -> Error {
    Error::Invalid {
        message: message.into(),
    }
}

fn arg<'a>(args: &[&'a str], index: usize, name: &str) -> Result<&'a str> {
    args.get(index)
        .copied()
        .ok_or_else(|| invalid(format!("missing {name}")))
}

fn number<T: std::str::FromStr>(raw: &str, name: &str) -> Result<T> {
    raw.parse()
        .map_err(|_| invalid(format!("{name} must be a number, got {raw:?}")))
}

/// Parse one input line
pub fn parse_command(line: &str) -> Result<Command> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, args)) = words.split_first() else {
        return Err(invalid("empty command"));
    };

    let command = match head.to_ascii_lowercase().as_str() {
        "mode" => match arg(args, 0, "mode")? {
            "single" => Command::Mode(Mode::Single),
            "compare" => Command::Mode(Mode::Compare),
            other => return Err(invalid(format!("unknown mode {other:?}"))),
        },
        "year" => Command::Year(arg(args, 0, "year")?.parse()?),
        "compare" => Command::Compare(
            arg(args, 0, "first year")?.parse()?,
            arg(args, 1, "second year")?.parse()?,
        ),
        "load" => Command::Load,
        "clear" => Command::Clear,
        "click" => Command::Click {
            lat: number(arg(args, 0, "latitude")?, "latitude")?,
            lng: number(arg(args, 1, "longitude")?, "longitude")?,
        },
        "dismiss" => Command::Dismiss,
        "tile" => Command::Tile(TileCoord::new(
            number(arg(args, 0, "zoom")?, "zoom")?,
            number(arg(args, 1, "column")?, "column")?,
            number(arg(args, 2, "row")?, "row")?,
        )),
        "retry" => Command::Retry,
        "status" => Command::Status,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(invalid(format!("unknown command {other:?}, try `help`"))),
    };
    Ok(command)
}

/// Terminal map host: prints what a map widget would do
#[derive(Debug, Default)]
pub struct ConsoleHost {
    mounted: Option<OverlayLayer>,
}

impl ConsoleHost {
    pub fn mounted(&self) -> Option<&OverlayLayer> {
        self.mounted.as_ref()
    }
}

impl MapHost for ConsoleHost {
    fn initialize(&mut self, view: &MapView) {
        println!(
            "map: centered at {} zoom {}",
            format_coord(view.center.lat, view.center.lng),
            view.zoom
        );
    }

    fn mount_overlay(&mut self, layer: &OverlayLayer) {
        println!(
            "map: + {} ({}px tiles, opacity {}) {}",
            layer.display_name(),
            layer.tile_size(),
            layer.opacity(),
            layer.template()
        );
        self.mounted = Some(layer.clone());
    }

    fn unmount_overlay(&mut self) {
        if let Some(layer) = self.mounted.take() {
            println!("map: - {}", layer.display_name());
        }
    }

    fn place_marker(&mut self, _point: GeoPoint, title: &str) {
        println!("map: marker {title}");
    }
}

/// Run the console front end until `quit` or end of input
pub fn run_console(config: AppConfig) -> Result<()> {
    let mut app = Application::connect(config, ConsoleHost::default())?;
    let events = app.events();
    let input = spawn_stdin_reader();
    let mut printed = 0;

    println!("{HELP}");
    app.start();
    print_gate(&app);

    loop {
        crossbeam_channel::select! {
            recv(events) -> event => match event {
                Ok(event) => {
                    let was_ready = app.readiness().is_ready();
                    let slot = app.view().analysis_slot();
                    app.handle_event(event);
                    if !was_ready {
                        print_gate(&app);
                    } else if app.view().analysis_slot() != slot {
                        print_status(&app);
                    }
                }
                Err(_) => break,
            },
            recv(input) -> line => match line {
                Ok(line) if line.trim().is_empty() => {}
                Ok(line) => match parse_command(&line) {
                    Ok(Command::Quit) => break,
                    Ok(command) => execute(&mut app, command),
                    Err(e) => println!("{e}"),
                },
                Err(_) => break,
            },
        }
        printed = print_notifications(&app, printed);
    }

    tracing::info!("Console closed");
    Ok(())
}

fn execute(app: &mut Application<ConsoleHost>, command: Command) {
    // rejections are already in the notification log
    let _ = match command {
        Command::Mode(mode) => {
            app.controls_mut().set_mode(mode);
            print_status(app);
            Ok(())
        }
        Command::Year(year) => {
            app.controls_mut().set_mode(Mode::Single);
            app.controls_mut().select_year(year);
            print_status(app);
            Ok(())
        }
        Command::Compare(year1, year2) => {
            app.controls_mut().set_mode(Mode::Compare);
            app.controls_mut().select_compare_years(year1, year2);
            print_status(app);
            Ok(())
        }
        Command::Load => app.load_selected().map(|ticket| println!("{ticket} loading...")),
        Command::Clear => app.clear(),
        Command::Click { lat, lng } => app.on_map_click(lat, lng).map(|_| ()),
        Command::Dismiss => {
            app.dismiss();
            Ok(())
        }
        Command::Tile(coord) => {
            match app.host().mounted() {
                Some(layer) => println!("{}", layer.tile_address(coord)),
                None => println!("No overlay mounted"),
            }
            Ok(())
        }
        Command::Retry => app.retry(),
        Command::Status => {
            print_status(app);
            Ok(())
        }
        Command::Help => {
            println!("{HELP}");
            Ok(())
        }
        Command::Quit => Ok(()),
    };
}

fn print_gate(app: &Application<ConsoleHost>) {
    if let Some(screen) = gate_screen(app.readiness()) {
        println!("{}", screen.title);
        println!("{}", screen.detail);
        if screen.can_retry {
            println!("Type `retry` to check again.");
        }
    }
}

fn print_status(app: &Application<ConsoleHost>) {
    if gate_screen(app.readiness()).is_some() {
        print_gate(app);
        return;
    }
    for line in control_panel(app.controls(), app.view()) {
        println!("{line}");
    }
    if let Some(result) = app.view().analysis() {
        for line in AnalysisPanel::from_result(result).lines() {
            println!("{line}");
        }
    }
}

/// Print notifications newer than `after`; returns the newest id printed
fn print_notifications(app: &Application<ConsoleHost>, after: u64) -> u64 {
    let mut newest = after;
    for entry in app.notifications().entries().iter().filter(|n| n.id > after) {
        println!("{}", notification_line(entry));
        newest = entry.id;
    }
    newest
}

fn spawn_stdin_reader() -> Receiver<String> {
    let (tx, rx) = crossbeam_channel::unbounded();
    let reader = std::thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || {
            for line in std::io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if tx.send(line).is_err() {
                    break;
                }
            }
        });
    if let Err(e) = reader {
        tracing::error!("Failed to spawn stdin reader: {e}");
    }
    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tile::TileTemplate;

    fn year(y: i64) -> Year {
        Year::new(y).expect("year")
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_command("mode compare").expect("cmd"), Command::Mode(Mode::Compare));
        assert_eq!(parse_command("year 2015").expect("cmd"), Command::Year(year(2015)));
        assert_eq!(
            parse_command("  compare 2020 2023 ").expect("cmd"),
            Command::Compare(year(2020), year(2023))
        );
        assert_eq!(
            parse_command("click 10.5 -20").expect("cmd"),
            Command::Click { lat: 10.5, lng: -20.0 }
        );
        assert_eq!(
            parse_command("tile 5 3 2").expect("cmd"),
            Command::Tile(TileCoord::new(5, 3, 2))
        );
        assert_eq!(parse_command("QUIT").expect("cmd"), Command::Quit);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(parse_command("year 2005"), Err(Error::InvalidYear { .. })));
        assert!(parse_command("compare 2020").is_err());
        assert!(parse_command("click north 20").is_err());
        assert!(parse_command("mode satellite").is_err());
        assert!(parse_command("zoom 4").is_err());
        assert!(parse_command("   ").is_err());
    }

    #[test]
    fn console_host_tracks_mounted_layer() {
        let template = TileTemplate::parse("https://t/{z}/{x}/{y}.png").expect("template");
        let layer = OverlayLayer::new(template, "Night Lights 2020", 0.8).expect("layer");
        let mut host = ConsoleHost::default();
        host.mount_overlay(&layer);
        assert_eq!(
            host.mounted().map(|l| l.tile_address(TileCoord::new(5, 3, 2))),
            Some("https://t/5/3/2.png".to_string())
        );
        host.unmount_overlay();
        assert!(host.mounted().is_none());
    }
}
