use anyhow::Result;
use clap::Parser;
use weather_pulse::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    weather_pulse::run(cli).await
}
