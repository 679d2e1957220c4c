use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::config::Config;
use crate::llm::{MentorpieceLLM, MockLLM, ModelInvoker};

/// Factory for the model invoker used by the handlers
pub struct LLMFactory;

impl LLMFactory {
    /// Pick the fixture-backed invoker in mock mode, the HTTP one otherwise.
    pub fn create_llm(config: &Config) -> Result<Arc<dyn ModelInvoker>> {
        if config.mock_mode {
            info!("Mock mode enabled, model calls will not reach the network");
            return Ok(Arc::new(MockLLM::new()));
        }

        Ok(Arc::new(MentorpieceLLM::new(
            config.endpoint.clone(),
            config.api_key.clone(),
            config.request_timeout,
        )?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_mode_never_calls_endpoint() {
        let config = Config {
            endpoint: "http://127.0.0.1:9/unreachable".to_string(),
            mock_mode: true,
            ..Config::default()
        };
        let llm = LLMFactory::create_llm(&config).unwrap();

        let reply = llm
            .invoke("claude-sonnet-4-5-20250929", &["x".to_string()])
            .await
            .unwrap();

        assert!(reply.unwrap().starts_with("(mock) Оценка"));
    }

    #[test]
    fn test_http_invoker_is_built_when_not_mocked() {
        assert!(LLMFactory::create_llm(&Config::default()).is_ok());
    }
}
