//! Composer and narrative-service configuration.

use std::time::Duration;

use tj_core::ScoreTable;
use tj_core::relation::{DEFAULT_BASELINE, SCORE_MAX, SCORE_MIN};

/// Configuration for the daily fortune composer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComposerConfig {
    /// Starting score for every radar dimension, 0-100.
    pub baseline: i32,
    /// Relation weights per radar dimension.
    pub score_table: ScoreTable,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            baseline: DEFAULT_BASELINE,
            score_table: ScoreTable::default(),
        }
    }
}

impl ComposerConfig {
    /// Create a config with the default baseline and weight table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the baseline (clamped to 0-100).
    pub fn with_baseline(mut self, baseline: i32) -> Self {
        self.baseline = baseline.clamp(SCORE_MIN, SCORE_MAX);
        self
    }

    /// Replace the weight table.
    pub fn with_score_table(mut self, table: ScoreTable) -> Self {
        self.score_table = table;
        self
    }
}

/// Request/response shape an endpoint speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiFlavor {
    /// Anthropic-style messages API.
    Messages,
    /// OpenAI-style chat completions API.
    ChatCompletions,
}

impl ApiFlavor {
    /// Path appended to the base URL.
    pub fn path(self) -> &'static str {
        match self {
            Self::Messages => "/v1/messages",
            Self::ChatCompletions => "/v1/chat/completions",
        }
    }
}

/// One (endpoint, model) pair to try.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointCandidate {
    /// Which API the endpoint speaks.
    pub flavor: ApiFlavor,
    /// Model name sent in the request body.
    pub model: String,
}

impl EndpointCandidate {
    /// Create a candidate.
    pub fn new(flavor: ApiFlavor, model: impl Into<String>) -> Self {
        Self {
            flavor,
            model: model.into(),
        }
    }

    /// Full URL of this candidate under `base_url`.
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.flavor.path())
    }
}

/// Default service base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.minimax.io/anthropic";
/// Longest prompt sent, in characters.
pub const DEFAULT_PROMPT_LIMIT: usize = 600;

const MAX_TEMPERATURE: f64 = 2.0;
const MAX_TIMEOUT: Duration = Duration::from_secs(600);

/// Configuration for the narrative-service client.
#[derive(Debug, Clone, PartialEq)]
pub struct NarrativeConfig {
    /// Base URL the candidate paths are appended to.
    pub base_url: String,
    /// Bearer token, if the service needs one.
    pub api_key: Option<String>,
    /// Candidates tried in order until one answers.
    pub candidates: Vec<EndpointCandidate>,
    /// System message overriding the one chosen by the reading kind.
    pub system_prompt: Option<String>,
    /// Prompts are cut to this many characters.
    pub prompt_limit: usize,
    /// Sampling temperature, 0.0-2.0.
    pub temperature: f64,
    /// Upper bound on generated tokens.
    pub max_tokens: u32,
    /// Per-attempt timeout handed to the transport.
    pub timeout: Duration,
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            candidates: vec![
                EndpointCandidate::new(ApiFlavor::Messages, "claude-sonnet-4-20250514"),
                EndpointCandidate::new(ApiFlavor::Messages, "claude-3-5-sonnet-20241022"),
                EndpointCandidate::new(ApiFlavor::ChatCompletions, "abab6.5s-chat"),
            ],
            system_prompt: None,
            prompt_limit: DEFAULT_PROMPT_LIMIT,
            temperature: 0.7,
            max_tokens: 2000,
            timeout: Duration::from_secs(60),
        }
    }
}

impl NarrativeConfig {
    /// Create a config with the default candidates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the bearer token.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Replace the candidate list.
    pub fn with_candidates(mut self, candidates: Vec<EndpointCandidate>) -> Self {
        self.candidates = candidates;
        self
    }

    /// Override the system prompt for every reading kind.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    /// Set the prompt limit (at least 1 character).
    pub fn with_prompt_limit(mut self, limit: usize) -> Self {
        self.prompt_limit = limit.max(1);
        self
    }

    /// Set the temperature (clamped to 0.0-2.0).
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature.clamp(0.0, MAX_TEMPERATURE);
        self
    }

    /// Set the token limit (at least 1).
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens.max(1);
        self
    }

    /// Set the per-attempt timeout (1 s to 10 min).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout.clamp(Duration::from_secs(1), MAX_TIMEOUT);
        self
    }
}
