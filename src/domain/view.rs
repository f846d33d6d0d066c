use crate::domain::weather::WeatherSnapshot;

pub const LOADING_TEXT: &str = "Fetching weather data...";
pub const EMPTY_PROMPT: &str = "Search for a city to see weather information";

/// The raw triple produced by the lookup collaborator. Any combination is
/// legal; [`ViewInputs::resolve`] settles ambiguity by priority.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewInputs {
    pub loading: bool,
    pub error: Option<String>,
    pub current_weather: Option<WeatherSnapshot>,
}

impl ViewInputs {
    #[must_use]
    pub fn loading() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn ready(snapshot: WeatherSnapshot) -> Self {
        Self {
            current_weather: Some(snapshot),
            ..Self::default()
        }
    }

    /// Loading beats error, error beats data, data beats empty.
    #[must_use]
    pub fn resolve(&self) -> DashboardView<'_> {
        if self.loading {
            return DashboardView::Loading;
        }
        if let Some(message) = self.error.as_deref().filter(|msg| !msg.is_empty()) {
            return DashboardView::Error(message);
        }
        match &self.current_weather {
            Some(snapshot) => DashboardView::Weather(snapshot),
            None => DashboardView::Empty,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DashboardView<'a> {
    Loading,
    Error(&'a str),
    Weather(&'a WeatherSnapshot),
    Empty,
}

impl DashboardView<'_> {
    #[must_use]
    pub fn branch(&self) -> Branch {
        match self {
            Self::Loading => Branch::Loading,
            Self::Error(_) => Branch::Error,
            Self::Weather(_) => Branch::Weather,
            Self::Empty => Branch::Empty,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    Loading,
    Error,
    Weather,
    Empty,
}

impl Branch {
    pub const ALL: [Self; 4] = [Self::Loading, Self::Error, Self::Weather, Self::Empty];

    /// Stable lookup id carried by the rendered branch.
    #[must_use]
    pub fn test_id(self) -> &'static str {
        match self {
            Self::Loading => "loading-state",
            Self::Error => "error-state",
            Self::Weather => "weather-state",
            Self::Empty => "empty-state",
        }
    }
}
