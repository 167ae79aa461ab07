//! Speech input port - Optional speech-to-text capability of the host

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for capturing one spoken utterance as text
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SpeechInputPort: Send + Sync {
    /// Listen for a single utterance (en-AU)
    ///
    /// Returns `None` when nothing was recognised.
    async fn listen(&self) -> Result<Option<String>, ApplicationError>;
}
