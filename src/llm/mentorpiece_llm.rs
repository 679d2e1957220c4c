use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use super::llm_interface::{join_prompt, ModelInvoker, ModelReply, ModelResult};

/// Body of the outbound call
#[derive(Debug, Serialize)]
pub struct ProcessRequest<'a> {
    pub model_name: &'a str,
    pub prompt: String,
}

/// Body the endpoint answers with
#[derive(Debug, Deserialize)]
pub struct ProcessResponse {
    #[serde(default = "missing_response")]
    pub response: Option<Value>,
}

fn missing_response() -> Option<Value> {
    Some(Value::String(String::new()))
}

impl ProcessResponse {
    /// The field is passed through as-is; non-string values keep their JSON text
    pub fn into_reply(self) -> ModelReply {
        match self.response {
            None | Some(Value::Null) => None,
            Some(Value::String(text)) => Some(text),
            Some(other) => Some(other.to_string()),
        }
    }
}

/// Calls the Mentorpiece process-ai-request endpoint over HTTP
#[derive(Debug, Clone)]
pub struct MentorpieceLLM {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl MentorpieceLLM {
    pub fn new(endpoint: String, api_key: Option<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        info!(
            "Initialized MentorpieceLLM: endpoint={}, timeout={:?}, api_key_set={}",
            endpoint,
            timeout,
            api_key.is_some()
        );

        Ok(Self {
            client,
            endpoint,
            api_key,
        })
    }
}

#[async_trait]
impl ModelInvoker for MentorpieceLLM {
    async fn invoke(&self, model_name: &str, prompt_parts: &[String]) -> ModelResult {
        let request = ProcessRequest {
            model_name,
            prompt: join_prompt(prompt_parts),
        };

        debug!(
            "Sending request: model={}, prompt_chars={}",
            model_name,
            request.prompt.chars().count()
        );

        let mut builder = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(&request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await?.error_for_status()?;
        let body: ProcessResponse = response.json().await?;

        Ok(body.into_reply())
    }
}
