use std::{path::PathBuf, time::Instant};

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, info, warn};
use tokio::sync::mpsc;

use crate::{
    app::{
        events::{AppEvent, start_frame_task},
        settings::{MotionSetting, RuntimeSettings, save_runtime_settings},
    },
    cli::Cli,
    data::catalog::{CatalogClient, CatalogError},
    domain::view::ViewInputs,
    ui::{
        decor::Decorations,
        theme::{Theme, detect_color_capability, theme_for},
    },
};

const MAX_QUERY_CHARS: usize = 64;

#[derive(Debug)]
pub struct AppState {
    pub running: bool,
    pub inputs: ViewInputs,
    pub query: String,
    pub last_query: Option<String>,
    pub settings: RuntimeSettings,
    pub settings_path: Option<PathBuf>,
    pub decorations: Decorations,
    pub theme: Theme,
    pub fetch_in_flight: bool,
    pub last_frame_at: Instant,
    pub frame_tick: u64,
    initial_city: Option<String>,
    fps: u8,
    client: CatalogClient,
}

impl AppState {
    pub fn new(cli: &Cli, client: CatalogClient) -> Self {
        let settings = RuntimeSettings::from_cli_defaults(cli);
        Self {
            running: true,
            inputs: ViewInputs::default(),
            query: String::new(),
            last_query: None,
            settings,
            settings_path: None,
            decorations: Decorations::install(&settings),
            theme: theme_for(detect_color_capability(cli.effective_color_mode())),
            fetch_in_flight: false,
            last_frame_at: Instant::now(),
            frame_tick: 0,
            initial_city: cli.city.clone(),
            fps: cli.fps,
            client,
        }
    }

    /// Replaces CLI-derived settings with the merged on-disk ones and
    /// reinstalls the decorations to match.
    #[must_use]
    pub fn with_settings(mut self, settings: RuntimeSettings, path: Option<PathBuf>) -> Self {
        self.settings = settings;
        self.settings_path = path;
        self.decorations = Decorations::install(&settings);
        self
    }

    pub async fn handle_event(
        &mut self,
        event: AppEvent,
        tx: &mpsc::Sender<AppEvent>,
    ) -> Result<()> {
        match event {
            AppEvent::Bootstrap => {
                let fps = match self.settings.motion {
                    MotionSetting::Full => self.fps,
                    MotionSetting::Reduced | MotionSetting::Off => self.fps.min(20),
                };
                start_frame_task(tx.clone(), fps);
                if let Some(city) = self.initial_city.take() {
                    self.start_search(city, tx).await?;
                }
            }
            AppEvent::TickFrame => {
                let now = Instant::now();
                let delta = now.duration_since(self.last_frame_at);
                self.last_frame_at = now;
                self.frame_tick = self.frame_tick.saturating_add(1);
                self.decorations.update(delta);
            }
            AppEvent::Input(event) => self.handle_input(event, tx).await?,
            AppEvent::FetchStarted { query } => {
                info!("looking up weather for {query:?}");
                self.fetch_in_flight = true;
                self.inputs.loading = true;
                self.inputs.error = None;
            }
            AppEvent::FetchSucceeded(snapshot) => {
                info!("weather ready for {}", snapshot.location_label());
                self.fetch_in_flight = false;
                self.inputs.loading = false;
                self.inputs.error = None;
                self.inputs.current_weather = Some(snapshot);
            }
            AppEvent::FetchFailed(message) => {
                warn!("lookup failed: {message}");
                self.fetch_in_flight = false;
                self.inputs.loading = false;
                self.inputs.error = Some(message);
            }
            AppEvent::Quit => {
                self.running = false;
            }
        }

        Ok(())
    }

    async fn handle_input(&mut self, event: Event, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key, tx).await?,
            Event::Resize(width, height) => {
                debug!("terminal resized to {width}x{height}");
            }
            _ => {}
        }
        Ok(())
    }

    async fn handle_key(&mut self, key: KeyEvent, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => tx.send(AppEvent::Quit).await?,
                KeyCode::Char('r') => {
                    if let Some(previous) = self.last_query.clone() {
                        self.start_search(previous, tx).await?;
                    }
                }
                KeyCode::Char('l') => self.clear_result(),
                _ => {}
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Esc if self.query.is_empty() => tx.send(AppEvent::Quit).await?,
            KeyCode::Esc => self.query.clear(),
            KeyCode::Enter if self.fetch_in_flight => {
                debug!("enter ignored, a lookup is running; keeping {:?}", self.query);
            }
            KeyCode::Enter => {
                let query = std::mem::take(&mut self.query);
                self.start_search(query, tx).await?;
            }
            KeyCode::Backspace => {
                self.query.pop();
            }
            KeyCode::Tab => self.cycle_motion(),
            KeyCode::Char(ch)
                if is_city_char(ch) && self.query.chars().count() < MAX_QUERY_CHARS =>
            {
                self.query.push(ch);
            }
            _ => {}
        }
        Ok(())
    }

    /// Kicks off a catalog lookup. Ignored while another lookup is running.
    pub async fn start_search(&mut self, query: String, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        if self.fetch_in_flight {
            debug!("lookup for {query:?} ignored, another lookup is running");
            return Ok(());
        }

        let query = query.trim().to_string();
        if query.is_empty() {
            tx.send(AppEvent::FetchFailed(CatalogError::EmptyQuery.to_string()))
                .await?;
            return Ok(());
        }

        self.fetch_in_flight = true;
        self.last_query = Some(query.clone());
        tx.send(AppEvent::FetchStarted {
            query: query.clone(),
        })
        .await?;

        let client = self.client.clone();
        let tx2 = tx.clone();
        tokio::spawn(async move {
            let event = match client.fetch(&query).await {
                Ok(snapshot) => AppEvent::FetchSucceeded(snapshot),
                Err(err) => AppEvent::FetchFailed(err.to_string()),
            };
            let _ = tx2.send(event).await;
        });

        Ok(())
    }

    /// Back to the empty prompt; a running lookup still lands when it finishes.
    pub fn clear_result(&mut self) {
        self.inputs.error = None;
        self.inputs.current_weather = None;
    }

    pub fn cycle_motion(&mut self) {
        let motion = self.settings.motion.next();
        self.settings.motion = motion;
        self.decorations.set_motion(motion, &mut rand::rng());
        info!("motion set to {}", motion.label());
        if let Some(path) = &self.settings_path
            && let Err(err) = save_runtime_settings(path, &self.settings)
        {
            warn!("could not persist settings: {err:#}");
        }
    }
}

pub(crate) fn is_city_char(ch: char) -> bool {
    ch.is_alphanumeric() || matches!(ch, ' ' | '-' | '\'' | '’' | ',' | '.')
}

#[cfg(test)]
mod tests;
