//! Clear Tape CLI
//!
//! Command-line interface for the compliance dashboard.

use anyhow::Context;
use clap::Parser;
use infrastructure::{AppConfig, ConfigValidator, init_telemetry};
use presentation_cli::{AppState, Cli, Commands, ProfileCommand, commands, log_filter_from_verbosity};
use tracing::{error, warn};

fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => AppConfig::load().context("Failed to load configuration")?,
    };
    Ok(config.resolved())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = load_config(&cli)?;
    if let Some(filter) = log_filter_from_verbosity(cli.verbose) {
        config.telemetry.log_filter = filter.to_string();
    }
    init_telemetry(&config.telemetry).context("Failed to initialize logging")?;

    let state = if cli.demo {
        AppState::demo(&config, chrono::Local::now().date_naive())?
    } else {
        let warnings = ConfigValidator::validate(&config);
        for warning in &warnings {
            if warning.is_critical() {
                error!(code = warning.code, "{warning}");
            } else {
                warn!(code = warning.code, "{warning}");
            }
        }
        if ConfigValidator::is_blocking(&config, &warnings) {
            anyhow::bail!("Configuration is incomplete; fix the errors above or run with --demo");
        }
        AppState::remote(&config)?
    };

    let today = chrono::Local::now().date_naive();
    match cli.command {
        Commands::Dashboard => commands::dashboard(&state).await,
        Commands::Tasks { filter, focus } => commands::tasks(&state, filter, focus).await,
        Commands::SetStatus { id, status } => commands::set_status(&state, id, status).await,
        Commands::Updates { filter } => commands::updates(&state, filter, today).await,
        Commands::Profile(ProfileCommand::Show { json }) => {
            commands::profile_show(&state, json).await
        },
        Commands::Profile(ProfileCommand::Set { field, value }) => {
            commands::profile_set(&state, &field, &value).await
        },
        Commands::Profile(ProfileCommand::Reset) => commands::profile_reset(&state).await,
        Commands::Onboard { sample } => commands::onboard(&state, sample).await,
        Commands::Chat { message } => commands::chat(&state, message).await,
        Commands::Structures => {
            commands::structures();
            Ok(())
        },
    }
}
