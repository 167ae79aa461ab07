//! Console input for the interactive commands

use std::io::{self, BufRead, Write};

use application::SuggestionConfirmer;
use domain::{BusinessActivity, BusinessStructure};

/// Print a prompt and read one line; `None` at end of input
pub fn read_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Confirms suggestions with a yes/no question on the terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleConfirmer;

impl SuggestionConfirmer for ConsoleConfirmer {
    fn confirm(&self, question: &str) -> bool {
        match read_line(&format!("{question} [y/N] ")) {
            Ok(Some(answer)) => is_affirmative(&answer),
            _ => false,
        }
    }
}

/// A line typed during onboarding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OnboardInput {
    Set { field: String, value: String },
    Toggle(BusinessActivity),
    Suburb(String),
    Next,
    Back,
    Show,
    Sample,
    Explain(BusinessStructure),
    /// Send one of the suggested prompts (1-based)
    Prompt(usize),
    Ask(String),
    Help,
    Quit,
}

pub const ONBOARD_HELP: &str = "\
Commands:
  set <field> <value>   set a field, e.g. `set location.state NT`
  toggle <activity>     add or remove an activity, e.g. `toggle food_handling`
  suburb <name>         pick a listed suburb
  next / back           move between steps; `next` on the last step saves
  show                  show the form
  sample                fill in the sample business
  explain <structure>   explain a business structure
  prompt <n>            ask a suggested question
  quit                  leave without saving
Anything else is sent to RegBot.";

impl OnboardInput {
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (command, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(c, r)| (c, r.trim()));

        match command.to_lowercase().as_str() {
            "set" => {
                let (field, value) = rest
                    .split_once(char::is_whitespace)
                    .map_or((rest, ""), |(f, v)| (f, v.trim()));
                if field.is_empty() {
                    return Err("Usage: set <field> <value>".to_string());
                }
                Ok(Self::Set {
                    field: field.to_string(),
                    value: value.to_string(),
                })
            },
            "toggle" => rest.parse().map(Self::Toggle).map_err(|e| format!("{e}")),
            "suburb" if !rest.is_empty() => Ok(Self::Suburb(rest.to_string())),
            "explain" => rest.parse().map(Self::Explain).map_err(|e| format!("{e}")),
            "prompt" => rest
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .map(Self::Prompt)
                .ok_or_else(|| "Usage: prompt <number>".to_string()),
            "next" if rest.is_empty() => Ok(Self::Next),
            "back" if rest.is_empty() => Ok(Self::Back),
            "show" if rest.is_empty() => Ok(Self::Show),
            "sample" if rest.is_empty() => Ok(Self::Sample),
            "help" | "?" if rest.is_empty() => Ok(Self::Help),
            "quit" | "exit" if rest.is_empty() => Ok(Self::Quit),
            _ if line.is_empty() => Err("Type `help` for commands".to_string()),
            _ => Ok(Self::Ask(line.to_string())),
        }
    }
}

/// A line typed in the dashboard chat
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatInput {
    Prompt(usize),
    Clear,
    Quit,
    Ask(String),
}

impl ChatInput {
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        match line {
            "" => None,
            "/quit" | "/exit" => Some(Self::Quit),
            "/clear" => Some(Self::Clear),
            _ => match line.strip_prefix("/prompt") {
                Some(n) => n.trim().parse::<usize>().ok().filter(|n| *n > 0).map(Self::Prompt),
                None => Some(Self::Ask(line.to_string())),
            },
        }
    }
}
