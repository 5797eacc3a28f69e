//! Live Azure OpenAI round-trip check.
//!
//! The only check that leaves the machine. One chat-completion request with
//! a fixed short prompt and a small output cap goes to the deployment named
//! in the environment; a non-empty reply is a pass. Every failure mode,
//! missing configuration included, is caught here and downgraded to a failed
//! verdict carrying the error text as its note.

use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;

use crate::checks::outcome::{CheckResult, ItemOutcome};
use crate::config::Environment;

pub const NAME: &str = "Azure OpenAI connectivity";

/// Fixed prompt sent on the probe request.
pub const PROBE_PROMPT: &str = "Just say 'Connection OK'";

/// Response-size cap for the probe.
const MAX_TOKENS: u32 = 10;

/// Default request deadline. The original leaves the call unbounded; a
/// readiness check should not hang on a dead endpoint.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

/// Issue the probe request and report the verdict.
pub fn run(env: &Environment, timeout: Duration) -> CheckResult {
    let item = match round_trip(env, timeout) {
        Ok(reply) => {
            tracing::debug!("probe reply: {reply}");
            ItemOutcome::satisfied("chat completion round trip").with_note(reply)
        }
        Err(e) => ItemOutcome::unsatisfied("chat completion round trip", Some(format!("{e:#}"))),
    };

    CheckResult::from_items(NAME, vec![item])
}

fn round_trip(env: &Environment, timeout: Duration) -> Result<String> {
    let endpoint = required(env, "AZURE_OPENAI_ENDPOINT")?;
    let api_key = required(env, "AZURE_OPENAI_API_KEY")?;
    let deployment = required(env, "AZURE_OPENAI_DEPLOYMENT")?;
    let api_version = required(env, "API_VERSION")?;

    let url = format!(
        "{}/openai/deployments/{deployment}/chat/completions?api-version={api_version}",
        endpoint.trim_end_matches('/')
    );

    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .context("failed to build HTTP client")?;

    let body = serde_json::json!({
        "messages": [{ "role": "user", "content": PROBE_PROMPT }],
        "max_tokens": MAX_TOKENS,
    });

    let response = client
        .post(&url)
        .header("api-key", api_key)
        .json(&body)
        .send()
        .context("request failed")?
        .error_for_status()
        .context("service returned an error status")?;

    let payload: ChatResponse = response.json().context("malformed response body")?;

    let reply = payload
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .unwrap_or_default();

    if reply.trim().is_empty() {
        bail!("deployment '{deployment}' returned empty message content");
    }

    Ok(reply)
}

fn required<'a>(env: &'a Environment, key: &str) -> Result<&'a str> {
    env.get_non_blank(key)
        .ok_or_else(|| anyhow!("{key} is not configured"))
}
