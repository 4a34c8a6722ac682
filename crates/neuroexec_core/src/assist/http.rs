//! Blocking HTTP gateway against an Ollama-style generation endpoint.
//!
//! # Responsibility
//! - Send each assist prompt as one `POST {base}/api/generate` round trip.
//! - Demand JSON-only answers and parse them into the typed payloads.
//!
//! # Invariants
//! - One agent per call, bounded by the configured timeout.
//! - Any transport error, bad status or schema violation maps to
//!   `AssistError`; nothing here panics or retries.

use super::{AssistError, AssistGateway, AssistResult, CategorizeItem, MAX_DECOMPOSE_STEPS};
use crate::model::assist::{CategorySuggestion, PanicSolution};
use serde::Deserialize;
use std::time::Duration;

/// Connection settings for the generation endpoint.
#[derive(Debug, Clone)]
pub struct AssistConfig {
    /// Base URL of the generation API.
    pub base_url: String,
    /// Model name to prompt.
    pub model: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for AssistConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".into(),
            model: "llama3.2".into(),
            timeout_secs: 60,
        }
    }
}

/// `AssistGateway` implementation over the REST generation API.
#[derive(Debug)]
pub struct HttpAssistGateway {
    config: AssistConfig,
}

#[derive(Deserialize)]
struct DecomposeResponse {
    steps: Vec<String>,
}

#[derive(Deserialize)]
struct BoostResponse {
    boost: String,
}

impl HttpAssistGateway {
    pub fn new(config: AssistConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AssistConfig {
        &self.config
    }

    /// One generation round trip; returns the raw model answer text.
    fn generate(&self, prompt: &str, system: &str) -> AssistResult<String> {
        let url = format!("{}/api/generate", self.config.base_url);
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .build();

        let body = serde_json::json!({
            "model": self.config.model,
            "prompt": prompt,
            "system": system,
            "stream": false,
        });

        let resp = agent
            .post(&url)
            .set("Content-Type", "application/json")
            .send_string(&body.to_string())
            .map_err(|err: ureq::Error| match err {
                ureq::Error::Status(code, _) => AssistError::Status(code),
                other => AssistError::Transport(other.to_string()),
            })?;

        let text = resp
            .into_string()
            .map_err(|err| AssistError::Transport(err.to_string()))?;

        let json: serde_json::Value = serde_json::from_str(&text)
            .map_err(|err| AssistError::Schema(format!("envelope parse error: {err}")))?;

        json["response"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| AssistError::Schema("missing `response` field".into()))
    }
}

impl AssistGateway for HttpAssistGateway {
    fn categorize(&self, items: &[CategorizeItem]) -> AssistResult<Vec<CategorySuggestion>> {
        let payload = serde_json::to_string(items)
            .map_err(|err| AssistError::Schema(format!("request encode error: {err}")))?;
        let system = "You triage tasks on an Eisenhower matrix. For every input task return \
            an object {\"id\": <same id>, \"priority\": \"Q1\"|\"Q2\"|\"Q3\"|\"Q4\", \
            \"energy\": \"low\"|\"medium\"|\"high\"}. \
            Answer with the JSON array only, no other text.";
        let prompt = format!("Categorize these tasks by urgency/importance and energy demand: {payload}");

        let answer = self.generate(&prompt, system)?;
        let slice = extract_json_slice(&answer, '[', ']')?;
        serde_json::from_str(slice).map_err(|err| AssistError::Schema(err.to_string()))
    }

    fn decompose(&self, task_text: &str) -> AssistResult<Vec<String>> {
        let system = "You break tasks into tiny granular first steps to lower executive \
            friction. Answer with JSON only: {\"steps\": [<at most 5 short strings>]}.";
        let prompt = format!(
            "Decompose the task \"{task_text}\" into at most {MAX_DECOMPOSE_STEPS} tiny, \
             extremely specific micro-steps."
        );

        let answer = self.generate(&prompt, system)?;
        let slice = extract_json_slice(&answer, '{', '}')?;
        let parsed: DecomposeResponse =
            serde_json::from_str(slice).map_err(|err| AssistError::Schema(err.to_string()))?;

        let mut steps = parsed.steps;
        steps.truncate(MAX_DECOMPOSE_STEPS);
        Ok(steps)
    }

    fn rescue(&self, task_text: &str, obstacle: &str) -> AssistResult<PanicSolution> {
        let system = "You are an executive-function coach. Name the psychological barrier \
            and give a three-step unblocking protocol. Answer with JSON only: \
            {\"diagnosis\": string, \"steps\": [string], \"encouragement\": string}.";
        let prompt = format!(
            "The user is stuck on the task \"{task_text}\" because of: \"{obstacle}\". \
             Diagnose the barrier and provide the protocol to get moving right now."
        );

        let answer = self.generate(&prompt, system)?;
        let slice = extract_json_slice(&answer, '{', '}')?;
        serde_json::from_str(slice).map_err(|err| AssistError::Schema(err.to_string()))
    }

    fn identity_boost(&self, task_text: &str) -> AssistResult<String> {
        let system = "You reinforce the identity of someone who executes with excellence. \
            Answer with JSON only: {\"boost\": <two short lines>}.";
        let prompt = format!(
            "The user just completed the task \"{task_text}\". Write a short identity \
             reinforcement focused on the progress this repetition builds."
        );

        let answer = self.generate(&prompt, system)?;
        let slice = extract_json_slice(&answer, '{', '}')?;
        let parsed: BoostResponse =
            serde_json::from_str(slice).map_err(|err| AssistError::Schema(err.to_string()))?;
        Ok(parsed.boost)
    }
}

/// Finds the JSON payload inside a possibly chatty model answer.
fn extract_json_slice(raw: &str, open: char, close: char) -> AssistResult<&str> {
    let trimmed = raw.trim();
    if trimmed.starts_with(open) {
        return Ok(trimmed);
    }

    match (trimmed.find(open), trimmed.rfind(close)) {
        (Some(start), Some(end)) if end > start => Ok(&trimmed[start..=end]),
        _ => Err(AssistError::Schema(
            "no JSON payload found in response".into(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::{extract_json_slice, AssistConfig, HttpAssistGateway};
    use crate::assist::{AssistError, AssistGateway};

    #[test]
    fn default_config_targets_the_local_endpoint() {
        let config = AssistConfig::default();
        assert_eq!(config.base_url, "http://localhost:11434");
        assert_eq!(config.model, "llama3.2");
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn unreachable_endpoint_reports_a_transport_error() {
        let gateway = HttpAssistGateway::new(AssistConfig {
            base_url: "http://127.0.0.1:1".into(), // unreachable port
            timeout_secs: 1,
            ..AssistConfig::default()
        });

        let err = gateway.identity_boost("test").expect_err("must fail");
        assert!(matches!(err, AssistError::Transport(_)), "got {err:?}");
    }

    #[test]
    fn extract_finds_embedded_objects_and_arrays() {
        let object = extract_json_slice("Sure! {\"boost\": \"x\"} hope it helps", '{', '}')
            .expect("object found");
        assert_eq!(object, "{\"boost\": \"x\"}");

        let array = extract_json_slice("[1, 2]", '[', ']').expect("array found");
        assert_eq!(array, "[1, 2]");
    }

    #[test]
    fn extract_rejects_answers_without_json() {
        let err = extract_json_slice("plain prose answer", '{', '}').expect_err("must fail");
        assert!(matches!(err, AssistError::Schema(_)));
    }
}
