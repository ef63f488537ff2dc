//! Analyzer trait and the Messages API client

use crate::{
    config::AnalyzerConfig,
    error::{AnalyzeError, Result},
    prompt::build_prompt,
    report::AnalysisReport,
    response::{api_error_message, parse_messages_body, Message, MessagesRequest},
};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info};

/// Something that compiles and audits Solidity source
#[async_trait]
pub trait Analyzer: Send + Sync {
    async fn analyze(&self, source: &str) -> Result<AnalysisReport>;
}

/// Analyzer backed by the Anthropic Messages API
pub struct AnthropicAnalyzer {
    http: reqwest::Client,
    config: AnalyzerConfig,
    api_key: String,
}

impl std::fmt::Debug for AnthropicAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnthropicAnalyzer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl AnthropicAnalyzer {
    pub fn new(config: AnalyzerConfig, api_key: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AnalyzeError::config(e.to_string()))?;
        Ok(Self {
            http,
            config,
            api_key: api_key.into(),
        })
    }

    /// Build a client with the key read from `config.api_key_env`
    pub fn from_env(config: AnalyzerConfig) -> Result<Self> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| AnalyzeError::missing_api_key(&config.api_key_env))?;
        Self::new(config, api_key)
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }
}

#[async_trait]
impl Analyzer for AnthropicAnalyzer {
    async fn analyze(&self, source: &str) -> Result<AnalysisReport> {
        let prompt = build_prompt(source);
        let request = MessagesRequest {
            model: &self.config.model,
            max_tokens: self.config.max_tokens,
            messages: vec![Message {
                role: "user",
                content: &prompt,
            }],
        };

        debug!(
            endpoint = %self.config.endpoint,
            model = %self.config.model,
            source_bytes = source.len(),
            "sending analysis request"
        );

        let response = self
            .http
            .post(&self.config.endpoint)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", &self.config.api_version)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(AnalyzeError::api(
                status.as_u16(),
                api_error_message(status.as_u16(), &body),
            ));
        }

        let report = parse_messages_body(&body)?;
        info!(
            contract = %report.contract_name,
            success = !report.is_failure(),
            "analysis received"
        );
        Ok(report)
    }
}
