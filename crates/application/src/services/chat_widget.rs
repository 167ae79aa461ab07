//! Chat widget - RegBot conversation state for onboarding and the dashboard
//!
//! A widget keeps its transcript, the pending input and a loading flag.
//! Only one request is in flight per widget; sends made while loading are
//! ignored. Closing the widget discards the transcript, and a reply that
//! arrives afterwards is dropped.

use std::{fmt, sync::Arc};

use domain::{
    BusinessProfile, ChatMessage, FieldSuggestion, OnboardingStep, suggestion::parse_reply,
};
#[cfg(test)]
use mockall::automock;
use parking_lot::Mutex;
use tracing::{debug, error, instrument, warn};

use super::prompts;
use crate::ports::{AssistantPort, AssistantRequest, SpeechInputPort};

/// Which assistant the widget talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatVariant {
    /// Form-aware; replies may carry a field suggestion
    Onboarding { step: OnboardingStep },
    /// Profile-aware; no suggestions
    Dashboard,
}

impl ChatVariant {
    pub const fn welcome(&self) -> &'static str {
        match self {
            Self::Onboarding { step } => prompts::onboarding_welcome(*step),
            Self::Dashboard => prompts::DASHBOARD_WELCOME,
        }
    }

    pub const fn apology(&self) -> &'static str {
        match self {
            Self::Onboarding { .. } => prompts::ONBOARDING_APOLOGY,
            Self::Dashboard => prompts::DASHBOARD_APOLOGY,
        }
    }
}

/// Result of a send attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Empty input, or a request already in flight
    Ignored,
    Replied,
    /// Reply carried a suggestion, now pending confirmation
    Suggested(FieldSuggestion),
    /// The assistant failed and the apology was appended
    Failed,
    /// The widget was closed before the reply arrived
    Discarded,
}

/// Asks the user whether an assistant suggestion should be applied
#[cfg_attr(test, automock)]
pub trait SuggestionConfirmer: Send + Sync {
    fn confirm(&self, question: &str) -> bool;
}

#[derive(Debug, Default)]
struct ChatState {
    transcript: Vec<ChatMessage>,
    input: String,
    loading: bool,
    generation: u64,
    pending_suggestion: Option<FieldSuggestion>,
}

/// Clears the loading flag when a send finishes, however it finishes
struct LoadingGuard<'a> {
    state: &'a Mutex<ChatState>,
    generation: u64,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        let mut state = self.state.lock();
        if state.generation == self.generation {
            state.loading = false;
        }
    }
}

/// A RegBot conversation
pub struct ChatWidget {
    variant: Mutex<ChatVariant>,
    assistant: Arc<dyn AssistantPort>,
    speech: Option<Arc<dyn SpeechInputPort>>,
    /// Form data (onboarding) or business profile (dashboard)
    context: Mutex<Option<BusinessProfile>>,
    state: Mutex<ChatState>,
}

impl fmt::Debug for ChatWidget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatWidget")
            .field("variant", &*self.variant.lock())
            .field("speech", &self.speech.is_some())
            .finish_non_exhaustive()
    }
}

impl ChatWidget {
    /// Open a widget with the variant's welcome message
    pub fn new(variant: ChatVariant, assistant: Arc<dyn AssistantPort>) -> Self {
        let widget = Self {
            variant: Mutex::new(variant),
            assistant,
            speech: None,
            context: Mutex::new(None),
            state: Mutex::new(ChatState::default()),
        };
        widget.open();
        widget
    }

    #[must_use]
    pub fn with_speech(mut self, speech: Arc<dyn SpeechInputPort>) -> Self {
        self.speech = Some(speech);
        self
    }

    #[must_use]
    pub fn with_context(self, context: Option<BusinessProfile>) -> Self {
        self.set_context(context);
        self
    }

    pub fn variant(&self) -> ChatVariant {
        *self.variant.lock()
    }

    /// Replace the form or profile the prompts are built from
    pub fn set_context(&self, context: Option<BusinessProfile>) {
        *self.context.lock() = context;
    }

    /// Follow the onboarding form to another step
    pub fn set_step(&self, step: OnboardingStep) {
        let mut variant = self.variant.lock();
        if let ChatVariant::Onboarding { .. } = *variant {
            *variant = ChatVariant::Onboarding { step };
        }
    }

    /// Show the welcome message if the transcript is empty
    pub fn open(&self) {
        let welcome = self.variant().welcome();
        let mut state = self.state.lock();
        if state.transcript.is_empty() {
            state.transcript.push(ChatMessage::bot(welcome));
        }
    }

    /// Discard the conversation; in-flight replies are dropped on arrival
    pub fn close(&self) {
        let mut state = self.state.lock();
        state.generation = state.generation.wrapping_add(1);
        state.transcript.clear();
        state.input.clear();
        state.loading = false;
        state.pending_suggestion = None;
    }

    pub fn transcript(&self) -> Vec<ChatMessage> {
        self.state.lock().transcript.clone()
    }

    pub fn input(&self) -> String {
        self.state.lock().input.clone()
    }

    pub fn set_input(&self, text: impl Into<String>) {
        self.state.lock().input = text.into();
    }

    pub fn is_loading(&self) -> bool {
        self.state.lock().loading
    }

    pub fn pending_suggestion(&self) -> Option<FieldSuggestion> {
        self.state.lock().pending_suggestion.clone()
    }

    /// Sample prompts, offered only before the first message is sent
    pub fn sample_prompts(&self) -> Vec<String> {
        let only_welcome = {
            let state = self.state.lock();
            state.transcript.len() == 1 && state.transcript[0].is_bot()
        };
        if !only_welcome {
            return Vec::new();
        }
        self.all_sample_prompts()
    }

    fn all_sample_prompts(&self) -> Vec<String> {
        match self.variant() {
            ChatVariant::Onboarding { step } => prompts::onboarding_samples(step)
                .iter()
                .map(ToString::to_string)
                .collect(),
            ChatVariant::Dashboard => prompts::dashboard_samples(self.context.lock().as_ref()),
        }
    }

    /// Send a sample prompt through the normal send path
    pub async fn send_sample(&self, index: usize) -> SendOutcome {
        let Some(prompt) = self.sample_prompts().into_iter().nth(index) else {
            return SendOutcome::Ignored;
        };
        self.set_input(prompt);
        self.send(None).await
    }

    /// Send `text`, or the current input when `None`
    ///
    /// Assistant failures never propagate; the variant's apology is appended
    /// instead.
    #[instrument(skip(self, text))]
    pub async fn send(&self, text: Option<&str>) -> SendOutcome {
        let variant = self.variant();
        let (request, generation) = {
            let mut state = self.state.lock();
            if state.loading {
                return SendOutcome::Ignored;
            }
            let message = text.map_or_else(|| state.input.trim(), str::trim).to_string();
            if message.is_empty() {
                return SendOutcome::Ignored;
            }

            state.transcript.push(ChatMessage::user(&message));
            state.input.clear();
            state.loading = true;
            state.pending_suggestion = None;
            (self.compose(variant, &message), state.generation)
        };

        let _loading = LoadingGuard {
            state: &self.state,
            generation,
        };
        let result = self.assistant.invoke(request).await;

        let mut state = self.state.lock();
        if state.generation != generation {
            debug!("Chat closed before the reply arrived");
            return SendOutcome::Discarded;
        }

        match result {
            Ok(reply) => match variant {
                ChatVariant::Onboarding { .. } => {
                    let parsed = parse_reply(&reply.text);
                    let suggestion = reply.suggestion.or(parsed.suggestion);
                    state.transcript.push(ChatMessage::bot(parsed.display_text));
                    state.pending_suggestion.clone_from(&suggestion);
                    suggestion.map_or(SendOutcome::Replied, SendOutcome::Suggested)
                },
                ChatVariant::Dashboard => {
                    state.transcript.push(ChatMessage::bot(reply.text));
                    SendOutcome::Replied
                },
            },
            Err(e) => {
                error!(error = %e, "RegBot error");
                state.transcript.push(ChatMessage::bot(variant.apology()));
                SendOutcome::Failed
            },
        }
    }

    fn compose(&self, variant: ChatVariant, message: &str) -> AssistantRequest {
        let context = self.context.lock();
        match variant {
            ChatVariant::Onboarding { step } => {
                let form = context.clone().unwrap_or_default();
                AssistantRequest::with_suggestion(prompts::onboarding_prompt(&form, step, message))
            },
            ChatVariant::Dashboard => {
                AssistantRequest::text(prompts::dashboard_prompt(context.as_ref(), message))
            },
        }
    }

    /// Ask the user about the pending suggestion
    ///
    /// The suggestion is consumed either way. Returns it only when accepted;
    /// the caller applies it to the form.
    pub fn resolve_suggestion(&self, confirmer: &dyn SuggestionConfirmer) -> Option<FieldSuggestion> {
        let suggestion = self.state.lock().pending_suggestion.take()?;
        let question = prompts::confirmation_question(&suggestion.field, &suggestion.value);
        confirmer.confirm(&question).then_some(suggestion)
    }

    /// Fill the input from speech, when speech input is available
    pub async fn listen(&self) -> Option<String> {
        let speech = self.speech.as_ref()?;
        match speech.listen().await {
            Ok(Some(transcript)) => {
                self.set_input(transcript.clone());
                Some(transcript)
            },
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "Speech recognition failed");
                None
            },
        }
    }
}
