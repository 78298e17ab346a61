/// AI provider abstraction
///
/// This module defines the contract for chat-completion backends and the
/// helpers shared by the AI routes.
///
/// # Architecture
///
/// Handlers never talk to a provider directly. They build a prompt (see
/// [`prompts`]), hand it to a [`ChatModel`], and post-process the returned
/// text. The provider is chosen at startup:
///
/// - **Gemini**: the production backend, enabled when `GEMINI_API_KEY` is set
/// - **Disabled**: stands in when no key is configured; every call fails
///   with [`AiError::NotConfigured`] so routes answer 503
/// - **Mock**: deterministic canned replies for tests
///
/// # Response salvage
///
/// Providers frequently wrap JSON answers in prose or markdown fences.
/// [`extract_json`] recovers the JSON object by slicing from the first `{`
/// to the last `}`; routes fall back to a degraded-but-valid payload when
/// even that fails.
pub mod gemini;
pub mod prompts;

use async_trait::async_trait;

pub use gemini::GeminiClient;

/// AI provider error types
#[derive(Debug, thiserror::Error)]
pub enum AiError {
    /// No API key configured
    #[error("AI provider is not configured")]
    NotConfigured,

    /// Provider did not answer within the request timeout
    #[error("AI provider timed out")]
    Timeout,

    /// Provider returned an error
    #[error("AI provider request failed: {0}")]
    Upstream(String),

    /// Provider answered with a body we could not use
    #[error("unusable AI response: {0}")]
    InvalidResponse(String),
}

/// AI result type alias
pub type AiResult<T> = Result<T, AiError>;

/// Chat-completion backend contract
///
/// Implementations take a fully rendered prompt and return the model's raw
/// text reply. Prompt construction and JSON salvage live outside the trait
/// so every backend behaves identically from the routes' point of view.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Returns the backend name, used for logging
    fn name(&self) -> &str;

    /// Generates a completion for the given prompt
    async fn generate(&self, prompt: &str) -> AiResult<String>;
}

/// Backend used when no API key is configured
///
/// Keeps the AI routes mounted so clients get a clear 503 instead of a 404.
pub struct DisabledModel;

#[async_trait]
impl ChatModel for DisabledModel {
    fn name(&self) -> &str {
        "disabled"
    }

    async fn generate(&self, _prompt: &str) -> AiResult<String> {
        Err(AiError::NotConfigured)
    }
}

/// Mock backend returning a fixed reply, for tests
pub struct MockModel {
    reply: String,
}

impl MockModel {
    /// Creates a mock that always answers with `reply`
    pub fn new(reply: impl Into<String>) -> Self {
        MockModel {
            reply: reply.into(),
        }
    }
}

#[async_trait]
impl ChatModel for MockModel {
    fn name(&self) -> &str {
        "mock"
    }

    async fn generate(&self, _prompt: &str) -> AiResult<String> {
        Ok(self.reply.clone())
    }
}

/// Extracts the outermost JSON object embedded in `text`
///
/// Slices from the first `{` to the last `}` and parses the result. Returns
/// `None` when no such slice exists or it is not valid JSON.
pub fn extract_json(text: &str) -> Option<serde_json::Value> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    serde_json::from_str(&text[start..=end]).ok()
}
