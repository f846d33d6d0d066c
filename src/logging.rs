use anyhow::{Context, Result};
use flexi_logger::{Age, Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};

use crate::cli::Cli;

/// Starts file logging. The terminal belongs to the dashboard, so nothing is
/// duplicated to stdout or stderr. Keep the handle alive for the whole run.
pub fn init(cli: &Cli) -> Result<LoggerHandle> {
    let directory = cli.log_dir();
    Logger::try_with_env_or_str(cli.log_level.trim())
        .context("invalid log level spec")?
        .log_to_file(
            FileSpec::default()
                .directory(&directory)
                .basename("weather-pulse"),
        )
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(7),
        )
        .start()
        .with_context(|| format!("starting logger in {} failed", directory.display()))
}
