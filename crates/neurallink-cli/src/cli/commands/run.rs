//! Interactive surface command handler.

use anyhow::{Context, Result};
use neurallink_core::config::Config;

pub async fn run(config: Config) -> Result<()> {
    neurallink_tui::run_interactive(config).context("interactive surface failed")?;
    tracing::info!("interactive surface closed");
    Ok(())
}
