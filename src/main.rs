// Calendar Widget
// Main entry point: interactive text front end over the calendar controller

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;

use calendar_widget::models::ui::ViewType;
use calendar_widget::services::settings::SettingsService;
use calendar_widget::ui::app::CalendarApp;
use calendar_widget::ui::commands::{parse_command, Command, HELP};
use calendar_widget::ui::messages::Message;
use calendar_widget::ui::views::render_current;
use calendar_widget::ui::views::utils::format_event_line;

#[derive(Debug, Clone, Parser)]
#[clap(bin_name = env!("CARGO_PKG_NAME"), version = env!("CARGO_PKG_VERSION"), about = env!("CARGO_PKG_DESCRIPTION"))]
struct Cli {
    /// Path to the settings file (defaults to the per-user config directory)
    #[clap(long)]
    config: Option<PathBuf>,

    /// Date to open the calendar at, YYYY-MM-DD
    #[clap(long)]
    date: Option<NaiveDate>,

    /// Initial view: month or week
    #[clap(long)]
    view: Option<ViewType>,

    /// Write the default settings to the settings file and exit (never overwrites)
    #[clap(long)]
    init_config: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Calendar Widget");

    let cli = Cli::parse();

    let path = match cli.config {
        Some(path) => path,
        None => SettingsService::default_path()
            .context("Could not determine the user config directory; pass --config")?,
    };
    let settings_service = SettingsService::new(path);

    if cli.init_config {
        settings_service.init_default()?;
        println!("Wrote default settings to {}", settings_service.path().display());
        return Ok(());
    }

    let settings = settings_service.load()?;
    let mut app = CalendarApp::new(settings);

    if let Some(date) = cli.date {
        app.update(Message::GoTo(date))?;
    }
    if let Some(view) = cli.view {
        app.update(Message::SwitchView(view))?;
    }

    println!("{}", render_current(&app));
    run(&mut app)
}

fn run(app: &mut CalendarApp) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    prompt(&mut stdout)?;
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read command")?;

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => {
                prompt(&mut stdout)?;
                continue;
            }
            Err(err) => {
                eprintln!("Error: {:#}", err);
                prompt(&mut stdout)?;
                continue;
            }
        };

        match command {
            Command::Apply(message) => match app.update(message) {
                Ok(()) => println!("{}", render_current(app)),
                Err(err) => eprintln!("Error: {}", err),
            },
            Command::Show => println!("{}", render_current(app)),
            Command::List { json } => list_events(app, json)?,
            Command::Search(query) => {
                let use_24h = app.settings().uses_24h_clock();
                let found = app.events().search(&query);
                if found.is_empty() {
                    println!("No events match '{}'", query);
                }
                for event in found {
                    println!("{}  {}", event.start.format("%Y-%m-%d"), format_event_line(event, use_24h));
                }
            }
            Command::Help => println!("{}", HELP),
            Command::Quit => break,
        }

        prompt(&mut stdout)?;
    }

    log::info!("Exiting with {} event(s) in memory", app.events().len());
    Ok(())
}

fn list_events(app: &CalendarApp, json: bool) -> Result<()> {
    let events = app.events().list_all();

    if json {
        let text = serde_json::to_string_pretty(events).context("Failed to serialize events")?;
        println!("{}", text);
        return Ok(());
    }

    if events.is_empty() {
        println!("No events");
    }
    let use_24h = app.settings().uses_24h_clock();
    for event in events {
        println!("{}  {}", event.start.format("%Y-%m-%d"), format_event_line(event, use_24h));
    }
    Ok(())
}

fn prompt(stdout: &mut io::Stdout) -> Result<()> {
    print!("> ");
    stdout.flush().context("Failed to flush stdout")
}
