use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed sampling parameters sent with every completion request.
pub const TEMPERATURE: f64 = 0.7;
pub const TOP_P: f64 = 0.95;

/// The one string end users ever see for an upstream failure. Failure detail
/// goes to the operator log only.
pub const FALLBACK_REPLY: &str =
    "An error occurred while processing your request. Please try again later.";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// One message in the visible transcript.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

impl ChatTurn {
    pub fn user<S: Into<String>>(s: S) -> Self {
        Self {
            role: Role::User,
            content: s.into(),
        }
    }
    pub fn assistant<S: Into<String>>(s: S) -> Self {
        Self {
            role: Role::Assistant,
            content: s.into(),
        }
    }
}

/// Body of `POST {base_url}/completions`. Built fresh per call; `temperature`,
/// `top_p` and `stream` are always the fixed constants.
#[derive(Clone, Debug, Serialize)]
pub struct CompletionRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub temperature: f64,
    pub top_p: f64,
    pub max_tokens: u32,
    pub stream: bool,
}

impl<'a> CompletionRequest<'a> {
    pub fn new(model: &'a str, prompt: &'a str, max_tokens: u32) -> Self {
        Self {
            model,
            prompt,
            temperature: TEMPERATURE,
            top_p: TOP_P,
            max_tokens,
            stream: false,
        }
    }
}

/// Response body of the completions endpoint. Unknown fields are ignored;
/// `choices[0].text` is the only part consumed.
#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionChoice {
    #[serde(default)]
    pub text: Option<String>,
}

impl CompletionResponse {
    /// Generated text of the first choice, if the body carried one.
    pub fn into_text(self) -> Option<String> {
        self.choices.into_iter().next().and_then(|c| c.text)
    }
}

#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("empty input")] EmptyInput,
    #[error("auth error: {0}")] Auth(String),
    #[error("rate limit: {0}")] RateLimit(String),
    #[error("timeout: {0}")] Timeout(String),
    #[error("network: {0}")] Network(String),
    #[error("decode: {0}")] Decode(String),
    #[error("protocol: {0}")] Protocol(String),
    #[error("other: {0}")] Other(String),
}

impl CompletionError {
    /// What the presentation layer shows. Upstream failures all collapse to
    /// the fixed fallback string; only the user can fix an empty input.
    pub fn user_message(&self) -> &'static str {
        match self {
            CompletionError::EmptyInput => "Please enter a valid question or topic.",
            _ => FALLBACK_REPLY,
        }
    }
}

#[allow(async_fn_in_trait)]
pub trait CompletionModel: Send + Sync {
    /// Issue a single completion request. One attempt, no retry; any
    /// transport, status or decode problem surfaces as a `CompletionError`.
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, CompletionError>;
}
