use async_trait::async_trait;
use tracing::debug;

use super::llm_interface::{ModelInvoker, ModelResult};

const EVALUATION_FIXTURE: &str =
    "(mock) Оценка: 8/10. Аргументация: перевод адекватен, но требует стилистической правки.";

/// Deterministic stand-in for the remote endpoint.
/// Picks a canned reply from the model name and never touches the network.
#[derive(Debug, Default, Clone)]
pub struct MockLLM;

impl MockLLM {
    pub fn new() -> Self {
        Self
    }

    pub fn reply_for(model_name: &str, prompt_parts: &[String]) -> String {
        let prompt_sample = prompt_parts.first().map(String::as_str).unwrap_or("");
        let model_lower = model_name.to_lowercase();

        if model_lower.contains("qwen") {
            let tail = prompt_sample.rsplit("\n\n").next().unwrap_or("");
            return format!("(mock) Перевод: {} ...", truncate_chars(tail, 300));
        }

        if model_lower.contains("claude") || model_lower.contains("judge") {
            return EVALUATION_FIXTURE.to_string();
        }

        format!(
            "(mock) Ответ модели {}: {}...",
            model_name,
            truncate_chars(prompt_sample, 200)
        )
    }
}

#[async_trait]
impl ModelInvoker for MockLLM {
    async fn invoke(&self, model_name: &str, prompt_parts: &[String]) -> ModelResult {
        debug!("MockLLM answering for model={}", model_name);
        Ok(Some(Self::reply_for(model_name, prompt_parts)))
    }
}

fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(text: &str) -> Vec<String> {
        vec![text.to_string()]
    }

    #[tokio::test]
    async fn test_translation_model_echoes_last_segment() {
        let reply = MockLLM::new()
            .invoke("Qwen/Qwen3-VL-30B-A3B-Instruct", &parts("Переведи:\n\nПривет"))
            .await
            .unwrap();
        assert_eq!(reply.as_deref(), Some("(mock) Перевод: Привет ..."));
    }

    #[test]
    fn test_translation_segment_is_truncated() {
        let long = "я".repeat(400);
        let reply = MockLLM::reply_for("qwen-small", &parts(&long));
        assert_eq!(reply, format!("(mock) Перевод: {} ...", "я".repeat(300)));
    }

    #[test]
    fn test_evaluator_models_get_fixed_score() {
        assert_eq!(MockLLM::reply_for("claude-sonnet-4-5-20250929", &parts("x")), EVALUATION_FIXTURE);
        assert_eq!(MockLLM::reply_for("My-JUDGE", &parts("x")), EVALUATION_FIXTURE);
    }

    #[test]
    fn test_other_models_echo_prompt_prefix() {
        let prompt = "a".repeat(250);
        let reply = MockLLM::reply_for("gpt", &parts(&prompt));
        assert_eq!(reply, format!("(mock) Ответ модели gpt: {}...", "a".repeat(200)));
    }

    #[test]
    fn test_no_prompt_parts() {
        assert_eq!(MockLLM::reply_for("gpt", &[]), "(mock) Ответ модели gpt: ...");
        assert_eq!(MockLLM::reply_for("qwen", &[]), "(mock) Перевод:  ...");
    }
}
