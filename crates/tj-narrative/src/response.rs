//! Narrative-service response shapes.
//!
//! Services behind the configured endpoints answer in several shapes. The
//! body is classified once, checking in this order:
//!
//! 1. `content` as an array of blocks, or a string holding such an array,
//!    or a plain string
//! 2. a top-level `text`
//! 3. `choices[0].message.content`
//! 4. `base_resp.status_code == 0`
//! 5. `base_resp.status_msg` or `error` as a failure

use serde_json::Value;

use crate::error::{NarrativeError, NarrativeResult};

/// A classified response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NarrativeResponse {
    /// Text of the first `type: "text"` block of a content array.
    TextBlocks(String),
    /// Content of the first chat-completion choice.
    ChatCompletion(String),
    /// Text returned without structure.
    RawText(String),
    /// The service reported an error.
    ErrorEnvelope(String),
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.abs() > 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn present<'a>(value: &'a Value, pointer: &str) -> Option<&'a Value> {
    value.pointer(pointer).filter(|v| truthy(v))
}

fn first_text_block(blocks: &Value) -> Option<String> {
    blocks
        .as_array()?
        .iter()
        .find(|b| b.get("type").and_then(Value::as_str) == Some("text"))
        .and_then(|b| b.get("text"))
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

fn as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn error_message(error: &Value) -> String {
    error
        .get("message")
        .and_then(Value::as_str)
        .map_or_else(|| as_text(error), str::to_string)
}

impl NarrativeResponse {
    /// Classify a JSON body. `None` when it matches no known shape.
    pub fn from_value(body: &Value) -> Option<Self> {
        if let Some(content) = present(body, "/content") {
            match content {
                Value::String(s) => match serde_json::from_str::<Value>(s) {
                    Err(_) => return Some(Self::RawText(s.clone())),
                    Ok(parsed) => {
                        if let Some(text) = first_text_block(&parsed) {
                            return Some(Self::TextBlocks(text));
                        }
                    }
                },
                other => {
                    if let Some(text) = first_text_block(other) {
                        return Some(Self::TextBlocks(text));
                    }
                }
            }
        }

        if let Some(text) = present(body, "/text") {
            return Some(Self::RawText(as_text(text)));
        }

        if let Some(content) = present(body, "/choices/0/message/content") {
            let text = first_text_block(content).unwrap_or_else(|| as_text(content));
            return Some(Self::ChatCompletion(text));
        }

        if body.pointer("/base_resp/status_code").and_then(Value::as_i64) == Some(0) {
            return Some(Self::RawText(body.to_string()));
        }

        if let Some(msg) = present(body, "/base_resp/status_msg") {
            let code = body
                .pointer("/base_resp/status_code")
                .map_or_else(|| "?".to_string(), as_text);
            return Some(Self::ErrorEnvelope(format!("{} ({code})", as_text(msg))));
        }

        present(body, "/error").map(|e| Self::ErrorEnvelope(error_message(e)))
    }

    /// Parse and classify a raw body.
    pub fn parse(body: &str) -> NarrativeResult<Self> {
        let value: Value = serde_json::from_str(body)?;
        Self::from_value(&value).ok_or(NarrativeError::Unrecognized)
    }

    /// The narrative text, or the service's error.
    pub fn into_text(self) -> NarrativeResult<String> {
        match self {
            Self::TextBlocks(t) | Self::ChatCompletion(t) | Self::RawText(t) => Ok(t),
            Self::ErrorEnvelope(msg) => Err(NarrativeError::Service(msg)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn classify(v: Value) -> Option<NarrativeResponse> {
        NarrativeResponse::from_value(&v)
    }

    #[test]
    fn content_blocks_skip_thinking() {
        let body = json!({
            "content": [
                {"type": "thinking", "thinking": "..."},
                {"type": "text", "text": "日主丙火"}
            ]
        });
        assert_eq!(
            classify(body),
            Some(NarrativeResponse::TextBlocks("日主丙火".into()))
        );
    }

    #[test]
    fn stringified_content_blocks() {
        let inner = json!([{"type": "text", "text": "吉"}]).to_string();
        assert_eq!(
            classify(json!({ "content": inner })),
            Some(NarrativeResponse::TextBlocks("吉".into()))
        );
    }

    #[test]
    fn plain_string_content() {
        assert_eq!(
            classify(json!({"content": "直接文本"})),
            Some(NarrativeResponse::RawText("直接文本".into()))
        );
    }

    #[test]
    fn text_field() {
        assert_eq!(
            classify(json!({"text": "hello"})),
            Some(NarrativeResponse::RawText("hello".into()))
        );
    }

    #[test]
    fn content_without_text_block_falls_through() {
        let body = json!({
            "content": [{"type": "thinking"}],
            "choices": [{"message": {"content": "来自 choices"}}]
        });
        assert_eq!(
            classify(body),
            Some(NarrativeResponse::ChatCompletion("来自 choices".into()))
        );
    }

    #[test]
    fn chat_completion_with_blocks() {
        let body = json!({
            "choices": [{"message": {"content": [{"type": "text", "text": "块"}]}}]
        });
        assert_eq!(
            classify(body),
            Some(NarrativeResponse::ChatCompletion("块".into()))
        );
    }

    #[test]
    fn base_resp_success_dumps_body() {
        let body = json!({"base_resp": {"status_code": 0, "status_msg": "success"}});
        match classify(body.clone()) {
            Some(NarrativeResponse::RawText(t)) => assert_eq!(t, body.to_string()),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn base_resp_failure() {
        let body = json!({"base_resp": {"status_code": 1008, "status_msg": "insufficient balance"}});
        assert_eq!(
            classify(body),
            Some(NarrativeResponse::ErrorEnvelope(
                "insufficient balance (1008)".into()
            ))
        );
    }

    #[test]
    fn error_envelopes() {
        assert_eq!(
            classify(json!({"error": "bad key"})),
            Some(NarrativeResponse::ErrorEnvelope("bad key".into()))
        );
        assert_eq!(
            classify(json!({"type": "error", "error": {"type": "not_found", "message": "model not found"}})),
            Some(NarrativeResponse::ErrorEnvelope("model not found".into()))
        );
    }

    #[test]
    fn unknown_shapes() {
        assert_eq!(classify(json!({"id": "x"})), None);
        assert_eq!(classify(json!({"content": "", "text": null})), None);
        assert!(matches!(
            NarrativeResponse::parse(r#"{"id": 1}"#),
            Err(NarrativeError::Unrecognized)
        ));
        assert!(matches!(
            NarrativeResponse::parse("<html>502</html>"),
            Err(NarrativeError::Malformed(_))
        ));
    }

    #[test]
    fn into_text() {
        assert_eq!(
            NarrativeResponse::RawText("a".into()).into_text().unwrap(),
            "a"
        );
        let err = NarrativeResponse::ErrorEnvelope("quota (1)".into())
            .into_text()
            .unwrap_err();
        assert_eq!(err.to_string(), "quota (1)");
    }
}
