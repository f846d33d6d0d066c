pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod logging;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_support;

use std::{
    io::{self, Stdout},
    time::Duration,
};

use anyhow::Result;
use app::{
    events::{AppEvent, spawn_input_task},
    settings::load_runtime_settings,
    state::AppState,
};
use cli::Cli;
use crossterm::{
    event::DisableMouseCapture,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use data::catalog::{CatalogClient, SnapshotCatalog};
use domain::view::ViewInputs;
use futures::StreamExt;
use log::{error, info};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;

pub async fn run(cli: Cli) -> Result<()> {
    cli.validate()?;
    let _logger = logging::init(&cli)?;
    info!("weather-pulse {} starting", env!("CARGO_PKG_VERSION"));

    let catalog = load_catalog(&cli).await?;

    if cli.one_shot {
        let markup = one_shot_markup(&cli, &catalog);
        println!("{markup}");
        return Ok(());
    }

    let client = CatalogClient::new(catalog, Duration::from_millis(cli.lookup_delay_ms));
    let (settings, settings_path) = load_runtime_settings(&cli, true);
    let app = AppState::new(&cli, client).with_settings(settings, settings_path);

    let mut terminal = setup_terminal()?;
    let result = run_inner(&mut terminal, app).await;
    restore_terminal(&mut terminal)?;
    info!("weather-pulse exiting");
    result
}

async fn run_inner(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: AppState,
) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<AppEvent>(256);
    let input_stream = spawn_input_task();
    tokio::pin!(input_stream);

    tx.send(AppEvent::Bootstrap).await?;

    while app.running {
        tokio::select! {
            maybe_input = input_stream.next() => {
                if let Some(input) = maybe_input {
                    app.handle_event(AppEvent::Input(input), &tx).await?;
                }
            }
            maybe_event = rx.recv() => {
                if let Some(event) = maybe_event {
                    app.handle_event(event, &tx).await?;
                }
            }
        }

        terminal.draw(|frame| ui::render(frame, &app))?;
    }

    Ok(())
}

async fn load_catalog(cli: &Cli) -> Result<SnapshotCatalog> {
    let catalog = match &cli.catalog {
        Some(path) => SnapshotCatalog::load(path).await?,
        None => SnapshotCatalog::builtin(),
    };
    info!("catalog ready with {} cities", catalog.len());
    Ok(catalog)
}

/// Resolves the start-up city synchronously and renders the resulting branch.
pub fn one_shot_markup(cli: &Cli, catalog: &SnapshotCatalog) -> String {
    let inputs = match cli.city.as_deref() {
        None => ViewInputs::default(),
        Some(city) => match catalog.lookup(city) {
            Ok(snapshot) => ViewInputs::ready(snapshot),
            Err(err) => ViewInputs::failed(err.to_string()),
        },
    };
    ui::markup::render_markup(inputs.resolve())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    install_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn install_panic_hook() {
    let existing = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
        error!("panic: {panic}");
        existing(panic);
    }));
}
