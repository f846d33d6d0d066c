use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::cli::{Cli, DEFAULT_LOADER_MS, DEFAULT_PARTICLES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MotionSetting {
    #[default]
    Full,
    Reduced,
    Off,
}

impl MotionSetting {
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Full => Self::Reduced,
            Self::Reduced => Self::Off,
            Self::Off => Self::Full,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Reduced => "reduced",
            Self::Off => "off",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeSettings {
    pub motion: MotionSetting,
    pub loader_ms: u64,
    pub particle_count: u16,
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self {
            motion: MotionSetting::Full,
            loader_ms: DEFAULT_LOADER_MS,
            particle_count: DEFAULT_PARTICLES,
        }
    }
}

impl RuntimeSettings {
    pub fn from_cli_defaults(cli: &Cli) -> Self {
        Self {
            motion: motion_from_cli(cli),
            loader_ms: cli.loader_ms,
            particle_count: cli.particles,
        }
    }
}

fn motion_from_cli(cli: &Cli) -> MotionSetting {
    if cli.no_animation {
        MotionSetting::Off
    } else if cli.reduced_motion {
        MotionSetting::Reduced
    } else {
        MotionSetting::Full
    }
}

pub fn load_runtime_settings(cli: &Cli, enable_disk: bool) -> (RuntimeSettings, Option<PathBuf>) {
    if !enable_disk {
        return (RuntimeSettings::from_cli_defaults(cli), None);
    }
    match settings_path() {
        Some(path) => (load_runtime_settings_from(cli, &path), Some(path)),
        None => (RuntimeSettings::from_cli_defaults(cli), None),
    }
}

/// Saved values win over CLI defaults; explicitly passed flags win over both.
pub fn load_runtime_settings_from(cli: &Cli, path: &Path) -> RuntimeSettings {
    let mut settings = RuntimeSettings::from_cli_defaults(cli);

    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<RuntimeSettings>(&content) {
            Ok(saved) => settings = saved,
            Err(err) => warn!("ignoring unreadable settings {}: {err}", path.display()),
        },
        Err(err) => debug!("no saved settings at {}: {err}", path.display()),
    }

    if cli.no_animation {
        settings.motion = MotionSetting::Off;
    } else if cli.reduced_motion {
        settings.motion = MotionSetting::Reduced;
    }
    if cli.loader_ms != DEFAULT_LOADER_MS {
        settings.loader_ms = cli.loader_ms;
    }
    if cli.particles != DEFAULT_PARTICLES {
        settings.particle_count = cli.particles;
    }

    settings
}

pub fn save_runtime_settings(path: &Path, settings: &RuntimeSettings) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("creating settings directory failed")?;
    }
    let payload =
        serde_json::to_string_pretty(settings).context("serializing settings payload failed")?;
    fs::write(path, payload).context("writing settings file failed")
}

fn settings_path() -> Option<PathBuf> {
    if let Some(base) = std::env::var_os("WEATHER_PULSE_CONFIG_DIR") {
        return Some(PathBuf::from(base).join("settings.json"));
    }

    let home = std::env::var_os("HOME")?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join("weather-pulse")
            .join("settings.json"),
    )
}
