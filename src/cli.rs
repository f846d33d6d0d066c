#![allow(clippy::missing_errors_doc)]

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

pub const DEFAULT_LOADER_MS: u64 = 2000;
pub const DEFAULT_PARTICLES: u16 = 30;
pub const DEFAULT_LOOKUP_DELAY_MS: u64 = 600;

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ColorArg {
    Auto,
    Always,
    Never,
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Parser, Clone)]
#[command(
    name = "weather-pulse",
    version,
    about = "Terminal weather dashboard with an animated backdrop"
)]
pub struct Cli {
    /// City to look up at start-up
    pub city: Option<String>,

    /// JSON file with an array of weather snapshots (default: built-in demo data)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Simulated lookup latency in milliseconds
    #[arg(long, default_value_t = DEFAULT_LOOKUP_DELAY_MS)]
    pub lookup_delay_ms: u64,

    /// Target FPS (15..60)
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u8).range(15..=60))]
    pub fps: u8,

    /// Disable loader, particle and wave animation
    #[arg(long)]
    pub no_animation: bool,

    /// Lower motion mode
    #[arg(long)]
    pub reduced_motion: bool,

    /// How long the start-up loader stays up, in milliseconds
    #[arg(long, default_value_t = DEFAULT_LOADER_MS)]
    pub loader_ms: u64,

    /// Number of background particles (0..200)
    #[arg(
        long,
        default_value_t = DEFAULT_PARTICLES,
        value_parser = clap::value_parser!(u16).range(0..=200)
    )]
    pub particles: u16,

    /// Color output policy
    #[arg(long, value_enum, default_value_t = ColorArg::Auto, conflicts_with = "no_color")]
    pub color: ColorArg,

    /// Alias for --color never
    #[arg(long, conflicts_with = "color")]
    pub no_color: bool,

    /// Print the dashboard markup to stdout and exit (non-interactive)
    #[arg(long)]
    pub one_shot: bool,

    /// Directory for log files (default: <tmp>/weather-pulse)
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Log level spec, overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Cli {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self
            .city
            .as_deref()
            .is_some_and(|city| city.trim().is_empty())
        {
            anyhow::bail!("city must not be blank");
        }
        if self.log_level.trim().is_empty() {
            anyhow::bail!("--log-level must not be empty");
        }
        Ok(())
    }

    #[must_use]
    pub fn effective_color_mode(&self) -> ColorArg {
        if self.no_color {
            ColorArg::Never
        } else {
            self.color
        }
    }

    #[must_use]
    pub fn log_dir(&self) -> PathBuf {
        self.log_dir
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("weather-pulse"))
    }
}
