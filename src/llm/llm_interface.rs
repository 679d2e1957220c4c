use async_trait::async_trait;
use tracing::error;

use crate::error::InvocationError;

/// Prefix of the text shown in place of a result when a call fails
pub const ERROR_PREFIX: &str = "Ошибка при обращении к LLM";

/// What the model sent back in `response`.
/// `None` means the upstream sent an explicit `null`; a missing field is `Some("")`.
pub type ModelReply = Option<String>;

pub type ModelResult = Result<ModelReply, InvocationError>;

/// Interface for something that can answer a prompt with a named model
#[async_trait]
pub trait ModelInvoker: Send + Sync {
    /// Send the prompt parts to `model_name` and return its reply
    async fn invoke(&self, model_name: &str, prompt_parts: &[String]) -> ModelResult;
}

/// Prompt parts are sent as a single text separated by blank lines
pub fn join_prompt(prompt_parts: &[String]) -> String {
    prompt_parts.join("\n\n")
}

/// Invoke a model and turn any failure into display text.
///
/// Failures are logged with full detail and never propagated; the caller
/// renders the returned text the same way as a successful reply.
pub async fn invoke_model(
    llm: &dyn ModelInvoker,
    model_name: &str,
    prompt_parts: &[String],
) -> Option<String> {
    match llm.invoke(model_name, prompt_parts).await {
        Ok(reply) => reply,
        Err(e) => {
            error!(
                "Model call failed: model={}, kind={}, status={:?}, error={:?}",
                model_name,
                e.kind(),
                e.status(),
                e
            );
            Some(format!("{}: {}", ERROR_PREFIX, e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedLLM(fn() -> ModelResult);

    #[async_trait]
    impl ModelInvoker for FixedLLM {
        async fn invoke(&self, _model_name: &str, _prompt_parts: &[String]) -> ModelResult {
            (self.0)()
        }
    }

    #[test]
    fn test_join_prompt() {
        let parts = vec!["first".to_string(), "second".to_string()];
        assert_eq!(join_prompt(&parts), "first\n\nsecond");
        assert_eq!(join_prompt(&[]), "");
    }

    #[tokio::test]
    async fn test_invoke_model_passes_reply_through() {
        let llm = FixedLLM(|| Ok(Some("X".to_string())));
        assert_eq!(invoke_model(&llm, "m", &["p".to_string()]).await, Some("X".to_string()));

        let llm = FixedLLM(|| Ok(None));
        assert_eq!(invoke_model(&llm, "m", &["p".to_string()]).await, None);
    }

    #[tokio::test]
    async fn test_invoke_model_maps_error_to_text() {
        let llm = FixedLLM(|| Err(InvocationError::Transport("Connection failed".to_string())));
        let text = invoke_model(&llm, "m", &["p".to_string()]).await.unwrap();
        assert_eq!(text, "Ошибка при обращении к LLM: Connection failed");
        assert!(text.starts_with(ERROR_PREFIX));
    }
}
