//! Generated feedback on daily submissions.
//!
//! [`FeedbackGateway`] sends one instruction per call through a
//! [`TextGenerator`] and hands back plain text. Failures never reach the
//! caller: they are logged and replaced with [`FALLBACK_MESSAGE`], written
//! into the same slot a real answer would occupy.
//!
//! ```text
//! output + prompt ──▶ build_prompt ──▶ TextGenerator ──┬─ Ok(text) ──▶ Feedback::Generated
//!                                                      └─ Err(e)   ──▶ log + Feedback::Fallback
//! ```
//!
//! There is no retry, timeout override or streaming.

use std::fmt;

use async_trait::async_trait;
use log::error;

use crate::error::Result;

pub mod gemini;
pub mod prompt;

pub use gemini::{GeminiClient, GeminiConfig};
pub use prompt::build_prompt;

/// Text shown when the service could not produce feedback.
pub const FALLBACK_MESSAGE: &str = "⚠️ 抱歉，老师正在批改其他卷子，请确认网络连接或稍后再试。";

/// Minimum number of characters a submission needs before feedback may be
/// requested.
pub const MIN_OUTPUT_CHARS: usize = 5;

/// Returns true if `output` is long enough to send for feedback.
pub fn is_submittable(output: &str) -> bool {
    output.chars().count() >= MIN_OUTPUT_CHARS
}

/// A remote text generation service.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Sends one prompt and returns the generated text.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Outcome of a feedback request. Both cases carry displayable text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// Text produced by the service, verbatim
    Generated(String),
    /// The fixed fallback message
    Fallback(String),
}

impl Feedback {
    pub fn fallback() -> Self {
        Feedback::Fallback(FALLBACK_MESSAGE.to_string())
    }

    pub fn text(&self) -> &str {
        match self {
            Feedback::Generated(text) | Feedback::Fallback(text) => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Feedback::Generated(text) | Feedback::Fallback(text) => text,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Feedback::Fallback(_))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Sends submissions to a [`TextGenerator`] and never fails.
pub struct FeedbackGateway {
    generator: Box<dyn TextGenerator>,
}

impl FeedbackGateway {
    pub fn new(generator: impl TextGenerator + 'static) -> Self {
        Self {
            generator: Box::new(generator),
        }
    }

    /// Gateway backed by the Gemini API.
    pub fn gemini(config: GeminiConfig) -> Self {
        Self::new(GeminiClient::new(config))
    }

    /// Requests a critique of `user_output` against `task_prompt`.
    ///
    /// Callers are expected to check [`is_submittable`] first; this method
    /// does not.
    pub async fn request_feedback(&self, user_output: &str, task_prompt: &str) -> Feedback {
        let prompt = build_prompt(user_output, task_prompt);
        match self.generator.generate(&prompt).await {
            Ok(text) => Feedback::Generated(text),
            Err(e) => {
                error!("Feedback request failed: {e}");
                Feedback::fallback()
            }
        }
    }
}
