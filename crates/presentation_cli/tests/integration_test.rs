//! Integration tests for the CLI
//!
//! Argument parsing plus the demo wiring, without touching stdin.

#![allow(clippy::panic, clippy::unwrap_used)]

use application::{TaskFilter, UpdateFilter};
use chrono::NaiveDate;
use clap::Parser;
use domain::{Priority, RecordId, TaskStatus, Urgency};
use infrastructure::AppConfig;
use presentation_cli::{AppState, Cli, Commands, ProfileCommand, render};

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("cleartape-cli").chain(args.iter().copied())).unwrap()
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

#[test]
fn parses_dashboard_with_global_flags() {
    let cli = parse(&["dashboard", "--demo", "-vv"]);
    assert!(cli.demo);
    assert_eq!(cli.verbose, 2);
    assert!(matches!(cli.command, Commands::Dashboard));
}

#[test]
fn parses_task_filters() {
    let cli = parse(&["tasks", "--filter", "in-progress", "--focus", "ci_gst"]);
    match cli.command {
        Commands::Tasks { filter, focus } => {
            assert_eq!(filter, TaskFilter::InProgress);
            assert_eq!(focus.as_deref(), Some("ci_gst"));
        },
        other => panic!("unexpected command: {other:?}"),
    }

    match parse(&["tasks", "-f", "critical"]).command {
        Commands::Tasks { filter, .. } => {
            assert_eq!(filter, TaskFilter::Priority(Priority::Critical));
        },
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn tasks_default_to_all() {
    match parse(&["tasks"]).command {
        Commands::Tasks { filter, focus } => {
            assert_eq!(filter, TaskFilter::All);
            assert!(focus.is_none());
        },
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parses_set_status() {
    match parse(&["set-status", "ci_abn", "completed"]).command {
        Commands::SetStatus { id, status } => {
            assert_eq!(id, "ci_abn");
            assert_eq!(status, TaskStatus::Completed);
        },
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn rejects_unknown_status() {
    assert!(Cli::try_parse_from(["cleartape-cli", "set-status", "ci_abn", "done-ish"]).is_err());
}

#[test]
fn parses_update_filters() {
    match parse(&["updates", "--filter", "action-required"]).command {
        Commands::Updates { filter } => assert_eq!(filter, UpdateFilter::ActionRequired),
        other => panic!("unexpected command: {other:?}"),
    }
    match parse(&["updates", "-f", "high"]).command {
        Commands::Updates { filter } => assert_eq!(filter, UpdateFilter::Urgency(Urgency::High)),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parses_profile_subcommands() {
    assert!(matches!(
        parse(&["profile", "show", "--json"]).command,
        Commands::Profile(ProfileCommand::Show { json: true })
    ));
    match parse(&["profile", "set", "location.postcode", "0800"]).command {
        Commands::Profile(ProfileCommand::Set { field, value }) => {
            assert_eq!(field, "location.postcode");
            assert_eq!(value, "0800");
        },
        other => panic!("unexpected command: {other:?}"),
    }
    assert!(matches!(
        parse(&["profile", "reset"]).command,
        Commands::Profile(ProfileCommand::Reset)
    ));
}

#[test]
fn parses_chat_and_onboard() {
    match parse(&["chat", "What's GST?"]).command {
        Commands::Chat { message } => assert_eq!(message.as_deref(), Some("What's GST?")),
        other => panic!("unexpected command: {other:?}"),
    }
    assert!(matches!(
        parse(&["chat"]).command,
        Commands::Chat { message: None }
    ));
    assert!(matches!(
        parse(&["onboard", "--sample"]).command,
        Commands::Onboard { sample: true }
    ));
}

#[test]
fn requires_a_subcommand() {
    assert!(Cli::try_parse_from(["cleartape-cli"]).is_err());
}

#[tokio::test]
async fn demo_status_change_shows_on_the_board() {
    let state = AppState::demo(&AppConfig::default(), today()).unwrap();
    let mut board = state.task_board();
    board.refresh().await.unwrap();
    let before = board.progress_percentage();

    board
        .set_status(&RecordId::from("ci_gst"), TaskStatus::Completed)
        .await
        .unwrap();
    assert!(board.progress_percentage() > before);

    let mut reloaded = state.task_board();
    reloaded.refresh().await.unwrap();
    assert_eq!(reloaded.progress_percentage(), board.progress_percentage());

    reloaded.set_filter(TaskFilter::Completed);
    let rendered = render::task_board(&reloaded, None, None);
    assert!(rendered.contains("Register for GST"));
}

#[tokio::test]
async fn demo_dashboard_renders_greeting() {
    let state = AppState::demo(&AppConfig::default(), today()).unwrap();
    let context = state.session.load().await.unwrap();
    let data = state.dashboard.fetch().await.unwrap();

    let rendered = render::dashboard(&context, &data);
    assert!(rendered.starts_with("G'day Sam!"));
}
