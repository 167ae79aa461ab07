//! Command handlers

use anyhow::{Context, bail};
use application::{
    ApplicationError, ChatVariant, ChatWidget, Landing, OnboardingSession, PageState,
    SendOutcome, SessionContext, StepOutcome, TaskFilter, UpdateFeed, UpdateFilter,
    ports::SortSpec,
};
use chrono::NaiveDate;
use domain::{AustralianState, BusinessStructure, OnboardingForm, RecordId, TaskStatus};
use tracing::{debug, warn};

use crate::{
    interactive::{self, ChatInput, ConsoleConfirmer, ONBOARD_HELP, OnboardInput},
    render,
    state::AppState,
};

const ONBOARD_HINT: &str =
    "Your business profile is not set up yet. Run `cleartape-cli onboard` to get started.";

/// Load the session for a page
///
/// A missing session is an error; any other failure renders an empty page.
async fn load_context(state: &AppState) -> anyhow::Result<Option<SessionContext>> {
    match state.session.load_page().await {
        PageState::Ready(context) => Ok(Some(context)),
        PageState::Empty => {
            println!("Could not load your account right now. Please try again later.");
            Ok(None)
        },
        PageState::Unauthenticated => {
            bail!("Not signed in. Set an API token in config.toml, or run with --demo.")
        },
    }
}

fn profile_state(context: &SessionContext) -> Option<AustralianState> {
    context.profile().and_then(|p| p.location.state)
}

pub async fn dashboard(state: &AppState) -> anyhow::Result<()> {
    let Some(context) = load_context(state).await? else {
        return Ok(());
    };
    if context.landing() == Landing::Onboarding {
        println!("{ONBOARD_HINT}");
        return Ok(());
    }

    let data = state.dashboard.load().await;
    print!("{}", render::dashboard(&context, &data));
    Ok(())
}

pub async fn tasks(
    state: &AppState,
    filter: TaskFilter,
    focus: Option<String>,
) -> anyhow::Result<()> {
    let Some(context) = load_context(state).await? else {
        return Ok(());
    };

    let mut board = state.task_board();
    if board.refresh().await.is_err() {
        println!("Could not load your tasks right now.");
        return Ok(());
    }
    board.set_filter(filter);

    let focus = focus.map(RecordId::from).and_then(|id| {
        let found = board.focus(&id);
        if found.is_none() {
            println!("Task {id} is not in this view.");
        }
        found
    });
    print!("{}", render::task_board(&board, focus, profile_state(&context)));
    Ok(())
}

pub async fn set_status(state: &AppState, id: String, status: TaskStatus) -> anyhow::Result<()> {
    if load_context(state).await?.is_none() {
        return Ok(());
    }

    let id = RecordId::from(id);
    let mut board = state.task_board();
    board.refresh().await.context("Could not load your tasks")?;
    let Some(title) = board
        .items()
        .iter()
        .find(|i| i.id == id)
        .map(|i| i.title.clone())
    else {
        bail!("No task with id {id}");
    };

    board
        .set_status(&id, status)
        .await
        .with_context(|| format!("Could not update \"{title}\""))?;
    println!("\"{title}\" is now {status}.");
    println!("Progress: {}%", board.progress_percentage());
    Ok(())
}

pub async fn updates(
    state: &AppState,
    filter: UpdateFilter,
    today: NaiveDate,
) -> anyhow::Result<()> {
    let Some(context) = load_context(state).await? else {
        return Ok(());
    };

    let updates = match state.updates.list(Some(&SortSpec::newest_first())).await {
        Ok(updates) => updates,
        Err(e) => {
            warn!(error = %e, "Error loading legal updates");
            println!("Could not load legal updates right now.");
            return Ok(());
        },
    };
    let feed = UpdateFeed::new(updates);
    print!(
        "{}",
        render::update_feed(&feed, filter, today, profile_state(&context))
    );
    Ok(())
}

pub async fn profile_show(state: &AppState, json: bool) -> anyhow::Result<()> {
    let Some(context) = load_context(state).await? else {
        return Ok(());
    };
    let Some(profile) = context.profile() else {
        println!("{ONBOARD_HINT}");
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(profile)?);
    } else {
        print!("{}", render::profile(profile));
    }
    Ok(())
}

pub async fn profile_set(state: &AppState, field: &str, value: &str) -> anyhow::Result<()> {
    let Some(context) = load_context(state).await? else {
        return Ok(());
    };
    let Some(profile) = context.profile() else {
        println!("{ONBOARD_HINT}");
        return Ok(());
    };

    let mut form = OnboardingForm::from_profile(profile.clone());
    form.update_field(field, value)?;
    let saved = state
        .profiles
        .save(form.data())
        .await
        .context("Could not save your profile")?;
    print!("{}", render::profile(&saved));
    Ok(())
}

pub async fn profile_reset(state: &AppState) -> anyhow::Result<()> {
    let Some(context) = load_context(state).await? else {
        return Ok(());
    };
    let Some(profile) = context.profile() else {
        println!("{ONBOARD_HINT}");
        return Ok(());
    };

    state
        .profiles
        .reset_onboarding(profile)
        .await
        .context("Could not reset onboarding")?;
    println!("Onboarding will start again on your next visit.");
    Ok(())
}

pub fn structures() {
    for structure in BusinessStructure::ALL {
        println!("{}", render::structure_help(structure));
    }
}

fn print_new_messages(widget: &ChatWidget, seen: &mut usize) {
    let transcript = widget.transcript();
    for message in transcript.iter().skip(*seen) {
        if message.is_bot() {
            println!("{}", render::chat_message(message));
        }
    }
    *seen = transcript.len();
}

fn print_samples(state: &AppState, widget: &ChatWidget) {
    if !state.chat.show_sample_prompts {
        return;
    }
    let samples = widget.sample_prompts();
    if !samples.is_empty() {
        print!("{}", render::sample_prompts(&samples));
    }
}

/// Show the reply and offer any suggestion it carried
fn after_reply(
    widget: &ChatWidget,
    session: &mut OnboardingSession,
    outcome: &SendOutcome,
    seen: &mut usize,
) -> Result<(), ApplicationError> {
    print_new_messages(widget, seen);
    if !matches!(outcome, SendOutcome::Suggested(_)) {
        return Ok(());
    }
    match widget.resolve_suggestion(&ConsoleConfirmer) {
        Some(suggestion) => {
            debug!(field = %suggestion.field, "Applying suggestion");
            session.apply_suggestion(&suggestion)?;
            print!("{}", render::onboarding(session));
            Ok(())
        },
        None => Ok(()),
    }
}

pub async fn onboard(state: &AppState, sample: bool) -> anyhow::Result<()> {
    let Some(context) = load_context(state).await? else {
        return Ok(());
    };

    let mut session = OnboardingSession::resume(context, state.profiles.clone());
    if sample {
        session.prefill_sample()?;
    }

    let widget = state.chat_widget(
        ChatVariant::Onboarding {
            step: session.step(),
        },
        Some(session.form().data().clone()),
    );
    let mut seen = 0;

    print!("{}", render::onboarding(&session));
    print_new_messages(&widget, &mut seen);
    print_samples(state, &widget);

    loop {
        let Some(line) = interactive::read_line("onboarding> ")? else {
            return Ok(());
        };
        let input = match OnboardInput::parse(&line) {
            Ok(input) => input,
            Err(message) => {
                println!("{message}");
                continue;
            },
        };

        let result = match input {
            OnboardInput::Quit => return Ok(()),
            OnboardInput::Help => {
                println!("{ONBOARD_HELP}");
                Ok(())
            },
            OnboardInput::Show => {
                print!("{}", render::onboarding(&session));
                Ok(())
            },
            OnboardInput::Explain(structure) => {
                print!("{}", render::structure_help(structure));
                Ok(())
            },
            OnboardInput::Set { field, value } => session.update_field(&field, &value),
            OnboardInput::Toggle(activity) => session.toggle_activity(activity),
            OnboardInput::Suburb(name) => session.select_suburb(&name).map(|suburb| {
                println!("Suburb set to {} ({})", suburb.name, suburb.postcode);
            }),
            OnboardInput::Sample => session.prefill_sample(),
            OnboardInput::Back => session.back().map(|step| {
                widget.set_step(step);
                print!("{}", render::onboarding(&session));
            }),
            OnboardInput::Next => match session.next().await {
                Ok(StepOutcome::Advanced(step)) => {
                    widget.set_step(step);
                    print!("{}", render::onboarding(&session));
                    Ok(())
                },
                Ok(StepOutcome::Completed(profile)) => {
                    println!("All done! Your profile for {} is saved.", profile.display_name());
                    return Ok(());
                },
                Err(e) => {
                    println!("Could not save your profile: {e}. Type `next` to try again.");
                    continue;
                },
            },
            OnboardInput::Prompt(n) => {
                widget.set_context(Some(session.form().data().clone()));
                let outcome = widget.send_sample(n - 1).await;
                after_reply(&widget, &mut session, &outcome, &mut seen)
            },
            OnboardInput::Ask(text) => {
                widget.set_context(Some(session.form().data().clone()));
                let outcome = widget.send(Some(&text)).await;
                after_reply(&widget, &mut session, &outcome, &mut seen)
            },
        };

        if let Err(e) = result {
            println!("{e}");
        }
    }
}

pub async fn chat(state: &AppState, message: Option<String>) -> anyhow::Result<()> {
    let Some(context) = load_context(state).await? else {
        return Ok(());
    };
    let widget = state.chat_widget(ChatVariant::Dashboard, context.profile().cloned());
    let mut seen = 0;

    if let Some(message) = message {
        seen = widget.transcript().len();
        widget.send(Some(&message)).await;
        print_new_messages(&widget, &mut seen);
        return Ok(());
    }

    print_new_messages(&widget, &mut seen);
    print_samples(state, &widget);
    loop {
        let Some(line) = interactive::read_line("you> ")? else {
            return Ok(());
        };
        match ChatInput::parse(&line) {
            None => {},
            Some(ChatInput::Quit) => return Ok(()),
            Some(ChatInput::Clear) => {
                widget.close();
                widget.open();
                seen = 0;
                print_new_messages(&widget, &mut seen);
                print_samples(state, &widget);
            },
            Some(ChatInput::Prompt(n)) => {
                widget.send_sample(n - 1).await;
                print_new_messages(&widget, &mut seen);
            },
            Some(ChatInput::Ask(text)) => {
                widget.send(Some(&text)).await;
                print_new_messages(&widget, &mut seen);
            },
        }
    }
}
