//! Narrative-service client with ordered endpoint fallback.
//!
//! The HTTP layer is injected as a [`Transport`]. The client builds the
//! request body, tries each configured candidate in order and returns the
//! first text it can classify as a success.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::config::{EndpointCandidate, NarrativeConfig};
use crate::error::{NarrativeError, NarrativeResult};
use crate::prompt::truncate_chars;
use crate::response::NarrativeResponse;

/// Prefix put in front of every user prompt.
const USER_PREFIX: &str = "请用中文回答：";

/// Sends one JSON request and returns the raw response body.
pub trait Transport {
    /// POST `body` to `url`, with `bearer` as the authorization token when given.
    fn post_json(
        &self,
        url: &str,
        bearer: Option<&str>,
        body: &Value,
        timeout: Duration,
    ) -> NarrativeResult<String>;
}

/// What kind of reading a request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReadingKind {
    /// Four-pillar analysis.
    #[default]
    Bazi,
    /// Hexagram interpretation.
    Hexagram,
    /// Daily fortune.
    Fortune,
}

impl ReadingKind {
    /// System prompt used when the config does not override it.
    pub fn system_prompt(self) -> &'static str {
        match self {
            Self::Bazi | Self::Fortune => {
                "你是中国八字命理专家。你必须用简体中文回答所有问题。不要用英文。"
            }
            Self::Hexagram => "你是精通周易的占卜师。你必须用简体中文回答所有问题。不要用英文。",
        }
    }
}

/// A prompt plus the kind of reading it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeRequest {
    /// Kind of reading.
    pub kind: ReadingKind,
    /// Prompt text, cut to the configured limit before sending.
    pub prompt: String,
}

impl NarrativeRequest {
    /// Create a request.
    pub fn new(kind: ReadingKind, prompt: impl Into<String>) -> Self {
        Self {
            kind,
            prompt: prompt.into(),
        }
    }
}

/// Client for the narrative service.
#[derive(Debug, Clone)]
pub struct NarrativeClient<T: Transport> {
    config: NarrativeConfig,
    transport: T,
}

impl<T: Transport> NarrativeClient<T> {
    /// Create a client over `transport`.
    pub fn new(config: NarrativeConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// The client's config.
    pub fn config(&self) -> &NarrativeConfig {
        &self.config
    }

    /// The injected transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Request body sent to `candidate`.
    pub fn request_body(&self, candidate: &EndpointCandidate, request: &NarrativeRequest) -> Value {
        let system = self
            .config
            .system_prompt
            .as_deref()
            .unwrap_or_else(|| request.kind.system_prompt());
        let user = format!(
            "{USER_PREFIX}{}",
            truncate_chars(&request.prompt, self.config.prompt_limit)
        );
        json!({
            "model": candidate.model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": user },
            ],
            "temperature": self.config.temperature,
            "max_tokens": self.config.max_tokens,
        })
    }

    fn attempt(
        &self,
        candidate: &EndpointCandidate,
        request: &NarrativeRequest,
    ) -> NarrativeResult<String> {
        let url = candidate.url(&self.config.base_url);
        let body = self.request_body(candidate, request);
        let raw = self.transport.post_json(
            &url,
            self.config.api_key.as_deref(),
            &body,
            self.config.timeout,
        )?;
        NarrativeResponse::parse(&raw)?.into_text()
    }

    /// Generate narrative text, trying each candidate in order.
    ///
    /// Returns the first success. When every candidate fails the error
    /// carries the last failure's message.
    pub fn generate(&self, request: &NarrativeRequest) -> NarrativeResult<String> {
        if self.config.candidates.is_empty() {
            return Err(NarrativeError::NoCandidates);
        }
        let mut last = String::new();
        for (i, candidate) in self.config.candidates.iter().enumerate() {
            tracing::debug!(
                attempt = i + 1,
                flavor = ?candidate.flavor,
                model = %candidate.model,
                kind = ?request.kind,
                "trying narrative endpoint"
            );
            match self.attempt(candidate, request) {
                Ok(text) => return Ok(text),
                Err(e) => {
                    tracing::warn!(attempt = i + 1, model = %candidate.model, error = %e, "narrative endpoint failed");
                    last = e.to_string();
                }
            }
        }
        Err(NarrativeError::AllAttemptsFailed {
            attempts: self.config.candidates.len(),
            last,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiFlavor;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Replays canned replies and records every call.
    #[derive(Default)]
    struct Scripted {
        replies: RefCell<VecDeque<NarrativeResult<String>>>,
        calls: RefCell<Vec<(String, Option<String>, Value)>>,
    }

    impl Scripted {
        fn new(replies: Vec<NarrativeResult<String>>) -> Self {
            Self {
                replies: RefCell::new(replies.into()),
                calls: RefCell::default(),
            }
        }
    }

    impl Transport for Scripted {
        fn post_json(
            &self,
            url: &str,
            bearer: Option<&str>,
            body: &Value,
            _timeout: Duration,
        ) -> NarrativeResult<String> {
            self.calls
                .borrow_mut()
                .push((url.to_string(), bearer.map(str::to_string), body.clone()));
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(NarrativeError::Transport("no reply".into())))
        }
    }

    fn request() -> NarrativeRequest {
        NarrativeRequest::new(ReadingKind::Bazi, "八字：甲子 丙午 丙辰 戊子")
    }

    fn client(replies: Vec<NarrativeResult<String>>) -> NarrativeClient<Scripted> {
        let config = NarrativeConfig::new()
            .with_base_url("http://svc")
            .with_api_key("secret");
        NarrativeClient::new(config, Scripted::new(replies))
    }

    #[test]
    fn first_candidate_wins() {
        let c = client(vec![Ok(r#"{"content":[{"type":"text","text":"分析"}]}"#.into())]);
        assert_eq!(c.generate(&request()).unwrap(), "分析");
        let calls = c.transport().calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "http://svc/v1/messages");
        assert_eq!(calls[0].1.as_deref(), Some("secret"));
        assert_eq!(calls[0].2["model"], "claude-sonnet-4-20250514");
    }

    #[test]
    fn falls_back_in_order() {
        let c = client(vec![
            Err(NarrativeError::Transport("timed out".into())),
            Ok(r#"{"base_resp":{"status_code":1004,"status_msg":"auth failed"}}"#.into()),
            Ok(r#"{"choices":[{"message":{"content":"第三次成功"}}]}"#.into()),
        ]);
        assert_eq!(c.generate(&request()).unwrap(), "第三次成功");
        let calls = c.transport().calls.borrow();
        let tried: Vec<(&str, &Value)> = calls
            .iter()
            .map(|(url, _, body)| (url.as_str(), &body["model"]))
            .collect();
        assert_eq!(
            tried,
            vec![
                ("http://svc/v1/messages", &json!("claude-sonnet-4-20250514")),
                ("http://svc/v1/messages", &json!("claude-3-5-sonnet-20241022")),
                ("http://svc/v1/chat/completions", &json!("abab6.5s-chat")),
            ]
        );
    }

    #[test]
    fn all_failed_reports_last() {
        let c = client(vec![
            Ok("not json".into()),
            Ok(r#"{"error":"overloaded"}"#.into()),
            Ok(r#"{"base_resp":{"status_code":1008,"status_msg":"insufficient balance"}}"#.into()),
        ]);
        let err = c.generate(&request()).unwrap_err();
        match &err {
            NarrativeError::AllAttemptsFailed { attempts, last } => {
                assert_eq!(*attempts, 3);
                assert_eq!(last, "insufficient balance (1008)");
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(
            err.to_string(),
            "All API attempts failed. Last error: insufficient balance (1008)"
        );
    }

    #[test]
    fn request_body_shape() {
        let c = client(vec![]);
        let long = format!("{}尾", "卦".repeat(600));
        let req = NarrativeRequest::new(ReadingKind::Hexagram, long);
        let body = c.request_body(&c.config().candidates[0], &req);
        assert_eq!(body["temperature"], json!(0.7));
        assert_eq!(body["max_tokens"], json!(2000));
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(
            body["messages"][0]["content"],
            ReadingKind::Hexagram.system_prompt()
        );
        let user = body["messages"][1]["content"].as_str().unwrap();
        assert!(user.starts_with(USER_PREFIX));
        assert!(!user.ends_with('尾'));
        assert_eq!(user.chars().count(), USER_PREFIX.chars().count() + 600);
    }

    #[test]
    fn system_prompt_override() {
        let config = NarrativeConfig::new().with_system_prompt("自定义");
        let c = NarrativeClient::new(config, Scripted::default());
        let body = c.request_body(&c.config().candidates[0], &request());
        assert_eq!(body["messages"][0]["content"], "自定义");
    }

    #[test]
    fn no_candidates() {
        let config = NarrativeConfig::new().with_candidates(vec![]);
        let c = NarrativeClient::new(config, Scripted::default());
        assert!(matches!(
            c.generate(&request()),
            Err(NarrativeError::NoCandidates)
        ));
    }

    #[test]
    fn custom_candidate_list() {
        let config = NarrativeConfig::new()
            .with_base_url("http://svc/")
            .with_candidates(vec![EndpointCandidate::new(ApiFlavor::ChatCompletions, "local")]);
        let transport = Scripted::new(vec![Ok(r#"{"text":"ok"}"#.into())]);
        let c = NarrativeClient::new(config, transport);
        assert_eq!(c.generate(&request()).unwrap(), "ok");
        assert_eq!(c.transport().calls.borrow()[0].0, "http://svc/v1/chat/completions");
        assert_eq!(c.transport().calls.borrow()[0].1, None);
    }
}
