//! RegBot chat widget settings

use serde::{Deserialize, Serialize};

use super::default_true;

/// Chat widget configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatAppConfig {
    /// Offer sample prompts before the first message
    #[serde(default = "default_true")]
    pub show_sample_prompts: bool,
}

impl Default for ChatAppConfig {
    fn default() -> Self {
        Self {
            show_sample_prompts: true,
        }
    }
}
