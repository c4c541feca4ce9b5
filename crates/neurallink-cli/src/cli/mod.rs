//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use neurallink_core::config;

use crate::logging;

mod commands;

#[derive(Parser)]
#[command(name = "neurallink")]
#[command(version)]
#[command(about = "NeuralLink terminal access portal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    overrides: Overrides,
}

/// Per-run overrides applied on top of the config file.
#[derive(clap::Args, Debug, Clone, Default)]
struct Overrides {
    /// Boot sequence duration in milliseconds
    #[arg(long, value_name = "MS", global = true)]
    boot_delay_ms: Option<u64>,

    /// Simulated submission latency in milliseconds
    #[arg(long, value_name = "MS", global = true)]
    submit_delay_ms: Option<u64>,
}

impl Overrides {
    fn apply(&self, config: &mut config::Config) {
        if let Some(ms) = self.boot_delay_ms {
            config.boot_delay_ms = ms;
        }
        if let Some(ms) = self.submit_delay_ms {
            config.submit_delay_ms = ms;
        }
    }
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
    /// Generate a fresh config from defaults
    Generate,
    /// Print the effective config (file plus overrides)
    Show,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = logging::init_tracing();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let Cli { command, overrides } = cli;

    match command {
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Path => commands::config::path(),
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::Generate => commands::config::generate(),
            ConfigCommands::Show => {
                let config = load_config(&overrides)?;
                commands::config::show(&config)
            }
        },
        // default to the interactive surface
        None => {
            let config = load_config(&overrides)?;
            commands::run::run(config).await
        }
    }
}

fn load_config(overrides: &Overrides) -> Result<config::Config> {
    let mut config = config::Config::load().context("load config")?;
    overrides.apply(&mut config);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_delays() {
        let mut config = config::Config::default();
        let overrides = Overrides {
            boot_delay_ms: Some(10),
            submit_delay_ms: None,
        };
        overrides.apply(&mut config);

        assert_eq!(config.boot_delay_ms, 10);
        assert_eq!(config.submit_delay_ms, config::Config::DEFAULT_SUBMIT_DELAY_MS);
    }

    #[test]
    fn test_cli_parses_global_overrides() {
        let cli = Cli::try_parse_from([
            "neurallink",
            "config",
            "show",
            "--submit-delay-ms",
            "500",
        ])
        .unwrap();

        assert_eq!(cli.overrides.submit_delay_ms, Some(500));
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                command: ConfigCommands::Show
            })
        ));
    }
}
