//! Clear Tape CLI
//!
//! Terminal pages for the dashboard, tasks, legal updates, the business
//! profile, onboarding and the RegBot chat.

#![allow(clippy::print_stdout)]

pub mod cli;
pub mod commands;
pub mod interactive;
pub mod render;
pub mod state;

pub use cli::{Cli, Commands, ProfileCommand, log_filter_from_verbosity};
pub use state::AppState;
