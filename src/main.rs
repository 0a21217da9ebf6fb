use std::io;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vote_runoff::config::DriverConfig;
use vote_runoff::driver;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vote_runoff=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = DriverConfig::from_env();
    tracing::info!(entries = %config.entries_path.display(), "Starting tournament");

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let final_state = driver::run(&config, stdin, stdout).context("tournament driver failed")?;

    match final_state.winner() {
        Some(winner) => tracing::info!(winner = %winner, "Tournament complete"),
        None => tracing::info!(phase = final_state.name(), "Input ended before a winner"),
    }
    Ok(())
}
