use std::{
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

use log::debug;
use thiserror::Error;
use tokio::time::sleep;

use crate::domain::weather::WeatherSnapshot;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Could not read weather catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Weather catalog {} is malformed: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Please enter a city name")]
    EmptyQuery,
    #[error("No weather data found for \"{city}\"")]
    NotFound { city: String },
}

/// Snapshots known to the dashboard, keyed by city.
#[derive(Debug, Clone, Default)]
pub struct SnapshotCatalog {
    entries: Vec<WeatherSnapshot>,
}

impl SnapshotCatalog {
    #[must_use]
    pub fn new(entries: Vec<WeatherSnapshot>) -> Self {
        Self { entries }
    }

    /// Demo data used when no `--catalog` file is given.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(vec![
            WeatherSnapshot::new("Tokyo", "Japan", 22.0, "Sunny"),
            WeatherSnapshot::new("New York", "USA", 15.0, "Cloudy"),
            WeatherSnapshot::new("Paris", "France", 18.0, "Rainy"),
            WeatherSnapshot::new("London", "UK", 11.5, "Drizzle"),
            WeatherSnapshot::new("Stockholm", "Sweden", -3.0, "Snow"),
            WeatherSnapshot::new("Cairo", "Egypt", 31.0, "Clear"),
            WeatherSnapshot::new("Sydney", "Australia", 25.5, "Partly cloudy"),
            WeatherSnapshot::new("Reykjavik", "Iceland", 0.0, "Windy"),
        ])
    }

    pub fn from_json_str(payload: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Vec<WeatherSnapshot>>(payload).map(Self::new)
    }

    pub async fn load(path: &Path) -> Result<Self, CatalogError> {
        let payload = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CatalogError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let catalog = Self::from_json_str(&payload).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(
            "loaded {} snapshots from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cities(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.city.as_str())
    }

    pub fn lookup(&self, query: &str) -> Result<WeatherSnapshot, CatalogError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(CatalogError::EmptyQuery);
        }
        self.entries
            .iter()
            .find(|entry| entry.matches_query(query))
            .cloned()
            .ok_or_else(|| CatalogError::NotFound {
                city: query.to_string(),
            })
    }
}

/// Async front for the catalog that mimics a remote lookup's latency.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    catalog: Arc<SnapshotCatalog>,
    latency: Duration,
}

impl CatalogClient {
    #[must_use]
    pub fn new(catalog: SnapshotCatalog, latency: Duration) -> Self {
        Self {
            catalog: Arc::new(catalog),
            latency,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &SnapshotCatalog {
        &self.catalog
    }

    pub async fn fetch(&self, query: &str) -> Result<WeatherSnapshot, CatalogError> {
        if !self.latency.is_zero() {
            sleep(self.latency).await;
        }
        self.catalog.lookup(query)
    }
}
