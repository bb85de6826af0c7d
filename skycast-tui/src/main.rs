//! Binary crate for the `skycast` terminal weather viewer.
//!
//! This crate focuses on:
//! - Terminal setup and teardown
//! - The event loop wiring key presses, dispatch, and the weather lookup

use std::io;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_subscriber::EnvFilter;

use skycast_core::{Config, WeatherProvider, provider_from_config};
use skycast_tui::ui::{
    self, App,
    actions::{Action, Effect},
};

/// Current weather for a city, in your terminal.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Current weather for a city, in your terminal")]
struct Args {}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    Args::parse();
    init_logging()?;

    let config = Config::from_env();
    // Resolved once here; a missing key only surfaces when a lookup is
    // triggered.
    let provider = provider_from_config(&config).ok();
    let mut app = App::new(config.has_api_key());
    tracing::debug!("starting ui, credential configured: {}", config.has_api_key());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, provider.as_deref()).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Log to a file when `RUST_LOG` is set; stdout belongs to the terminal UI.
fn init_logging() -> anyhow::Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }

    let file = std::fs::File::create("skycast.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    provider: Option<&dyn WeatherProvider>,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        let Some(action) = ui::action_for_key(key) else {
            continue;
        };

        match app.dispatch(action) {
            Some(Effect::Quit) => return Ok(()),
            Some(Effect::FetchWeather { city }) => {
                // Dispatch only asks for a fetch when a credential exists, so
                // the provider is present here. The lookup blocks the event
                // loop until it resolves; there is no loading state.
                if let Some(provider) = provider {
                    let outcome = provider.current_weather(&city).await;
                    app.dispatch(Action::LookupDidFinish(outcome));
                }
            }
            None => {}
        }
    }
}
