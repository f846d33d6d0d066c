use std::time::Duration;

use crate::{
    app::state::AppState,
    cli::{Cli, ColorArg, DEFAULT_LOADER_MS, DEFAULT_LOOKUP_DELAY_MS, DEFAULT_PARTICLES},
    data::catalog::{CatalogClient, SnapshotCatalog},
    domain::weather::WeatherSnapshot,
};

pub(crate) fn test_cli() -> Cli {
    Cli {
        city: None,
        catalog: None,
        lookup_delay_ms: DEFAULT_LOOKUP_DELAY_MS,
        fps: 30,
        no_animation: false,
        reduced_motion: false,
        loader_ms: DEFAULT_LOADER_MS,
        particles: DEFAULT_PARTICLES,
        color: ColorArg::Auto,
        no_color: false,
        one_shot: false,
        log_dir: None,
        log_level: "info".to_string(),
    }
}

pub(crate) fn instant_client() -> CatalogClient {
    CatalogClient::new(SnapshotCatalog::builtin(), Duration::ZERO)
}

pub(crate) fn test_state() -> AppState {
    AppState::new(&test_cli(), instant_client())
}

pub(crate) fn tokyo() -> WeatherSnapshot {
    WeatherSnapshot::new("Tokyo", "Japan", 22.0, "Sunny")
}
