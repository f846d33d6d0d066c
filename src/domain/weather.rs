use serde::{Deserialize, Serialize};

use crate::domain::format::format_temperature;

/// One weather result for a single location, as handed over by the lookup
/// collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub city: String,
    pub country: String,
    pub temperature: f64,
    pub condition: String,
}

impl WeatherSnapshot {
    pub fn new(
        city: impl Into<String>,
        country: impl Into<String>,
        temperature: f64,
        condition: impl Into<String>,
    ) -> Self {
        Self {
            city: city.into(),
            country: country.into(),
            temperature,
            condition: condition.into(),
        }
    }

    #[must_use]
    pub fn location_label(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }

    #[must_use]
    pub fn temperature_label(&self) -> String {
        format_temperature(self.temperature)
    }

    /// Case-insensitive match against either `city` or `city, country`.
    #[must_use]
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return false;
        }
        if self.city.to_lowercase() == query.to_lowercase() {
            return true;
        }
        match query.split_once(',') {
            Some((city, country)) => {
                self.city.to_lowercase() == city.trim().to_lowercase()
                    && self.country.to_lowercase() == country.trim().to_lowercase()
            }
            None => false,
        }
    }
}
