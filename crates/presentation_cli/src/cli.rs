//! Command-line arguments

use std::path::PathBuf;

use application::{TaskFilter, UpdateFilter};
use clap::{Parser, Subcommand};
use domain::TaskStatus;

/// Clear Tape CLI
#[derive(Debug, Parser)]
#[command(name = "cleartape-cli")]
#[command(author, version, about = "Clear Tape compliance tracker", long_about = None)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to ./config.toml when present)
    #[arg(short, long, env = "CLEARTAPE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Run against built-in sample data instead of the hosted store
    #[arg(long, global = true)]
    pub demo: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show progress, the roadmap, recent updates and warnings
    Dashboard,

    /// List compliance tasks
    ///
    /// Example: cleartape-cli tasks --filter critical --focus ci_gst
    Tasks {
        /// all, pending, in-progress, completed, or a priority
        #[arg(short, long, default_value = "all")]
        filter: TaskFilter,

        /// Task id to highlight
        #[arg(long)]
        focus: Option<String>,
    },

    /// Change a task's status
    SetStatus {
        /// Task id
        id: String,

        /// pending, in-progress or completed
        status: TaskStatus,
    },

    /// List legal updates
    Updates {
        /// all, urgent, upcoming, action-required, or an urgency
        #[arg(short, long, default_value = "all")]
        filter: UpdateFilter,
    },

    /// Business profile
    #[command(subcommand)]
    Profile(ProfileCommand),

    /// Walk through onboarding interactively
    Onboard {
        /// Start from the "Darwin Auto Repairs" sample business
        #[arg(long)]
        sample: bool,
    },

    /// Ask RegBot about compliance
    Chat {
        /// One-off question; starts an interactive session when omitted
        message: Option<String>,
    },

    /// Explain the business structures
    Structures,
}

#[derive(Debug, Subcommand)]
pub enum ProfileCommand {
    /// Print the profile
    Show {
        /// Print the stored JSON
        #[arg(long)]
        json: bool,
    },

    /// Change one field, e.g. `location.postcode 0800`
    Set {
        /// Field path
        field: String,

        /// New value; empty clears the field
        value: String,
    },

    /// Go through onboarding again on the next visit
    Reset,
}

/// Log filter for a `-v` count; `None` keeps the configured filter
pub const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}
