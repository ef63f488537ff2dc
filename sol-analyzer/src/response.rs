//! Messages API wire format

use crate::{
    error::{AnalyzeError, Result},
    report::AnalysisReport,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct MessagesRequest<'a> {
    pub model: &'a str,
    pub max_tokens: u32,
    pub messages: Vec<Message<'a>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Message<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessagesResponse {
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentBlock {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: Option<String>,
}

impl MessagesResponse {
    /// All text blocks joined and trimmed
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(|block| block.text.as_deref())
            .collect::<String>()
            .trim()
            .to_string()
    }
}

/// Message for a non-2xx reply: the service's own message, else the status
pub fn api_error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.error)
        .and_then(|detail| detail.message)
        .unwrap_or_else(|| format!("HTTP {}", status))
}

/// Remove a surrounding markdown code fence, if the model added one
pub fn strip_code_fence(raw: &str) -> &str {
    let mut s = raw.trim();
    if let Some(rest) = s.strip_prefix("```") {
        let rest = rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric() || c == '_');
        s = rest.strip_prefix('\n').unwrap_or(rest);
    }
    s.strip_suffix("```").unwrap_or(s).trim()
}

/// Turn a successful Messages API body into a report
pub fn parse_messages_body(body: &str) -> Result<AnalysisReport> {
    let response: MessagesResponse = serde_json::from_str(body)
        .map_err(|e| AnalyzeError::malformed(format!("unreadable API reply: {}", e)))?;
    let text = response.text();
    if text.is_empty() {
        return Err(AnalyzeError::malformed("empty reply from model"));
    }
    AnalysisReport::from_json(strip_code_fence(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_code_fence() {
        assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```{\"a\":1}```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("  {\"a\":1}  "), "{\"a\":1}");
    }

    #[test]
    fn test_api_error_message() {
        let body = r#"{"type":"error","error":{"type":"authentication_error","message":"invalid x-api-key"}}"#;
        assert_eq!(api_error_message(401, body), "invalid x-api-key");
        assert_eq!(api_error_message(502, "<html>bad gateway</html>"), "HTTP 502");
        assert_eq!(api_error_message(500, r#"{"error":{}}"#), "HTTP 500");
    }

    #[test]
    fn test_text_blocks_are_joined() {
        let body = r#"{"content":[{"type":"text","text":"{\"success\":"},{"type":"tool_use"},{"type":"text","text":"true}"}]}"#;
        let report = parse_messages_body(body).unwrap();
        assert!(report.success);
    }

    #[test]
    fn test_empty_reply_is_malformed() {
        let err = parse_messages_body(r#"{"content":[]}"#).unwrap_err();
        assert!(matches!(err, AnalyzeError::MalformedResponse { .. }));
    }

    #[test]
    fn test_request_serialization() {
        let request = MessagesRequest {
            model: "m",
            max_tokens: 3000,
            messages: vec![Message { role: "user", content: "hi" }],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["max_tokens"], 3000);
        assert_eq!(json["messages"][0]["role"], "user");
    }
}
