#![allow(dead_code)]

use std::time::Duration;

use ratatui::{Terminal, backend::TestBackend};
use weather_pulse::{
    app::state::AppState,
    cli::{Cli, ColorArg},
    data::catalog::{CatalogClient, SnapshotCatalog},
    domain::{view::ViewInputs, weather::WeatherSnapshot},
    ui,
};

/// CLI with all motion disabled so renders are deterministic.
pub fn quiet_cli() -> Cli {
    Cli {
        city: None,
        catalog: None,
        lookup_delay_ms: 0,
        fps: 30,
        no_animation: true,
        reduced_motion: false,
        loader_ms: 2000,
        particles: 30,
        color: ColorArg::Never,
        no_color: false,
        one_shot: false,
        log_dir: None,
        log_level: "info".to_string(),
    }
}

pub fn instant_client() -> CatalogClient {
    CatalogClient::new(SnapshotCatalog::builtin(), Duration::ZERO)
}

pub fn state_with(inputs: ViewInputs) -> AppState {
    let mut state = AppState::new(&quiet_cli(), instant_client());
    state.inputs = inputs;
    state
}

pub fn tokyo() -> WeatherSnapshot {
    WeatherSnapshot::new("Tokyo", "Japan", 22.0, "Sunny")
}

pub fn paris() -> WeatherSnapshot {
    WeatherSnapshot::new("Paris", "France", 18.0, "Rainy")
}

pub fn render_state_to_string(width: u16, height: u16, state: &AppState) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal
        .draw(|frame| ui::render(frame, state))
        .expect("draw");

    let buffer = terminal.backend().buffer().clone();
    let mut lines = Vec::new();
    for y in 0..height {
        let mut line = String::new();
        for x in 0..width {
            line.push_str(buffer[(x, y)].symbol());
        }
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}
