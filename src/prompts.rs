use crate::validation::Language;

pub const TRANSLATION_MODEL: &str = "Qwen/Qwen3-VL-30B-A3B-Instruct";
pub const EVALUATION_MODEL: &str = "claude-sonnet-4-5-20250929";

pub fn translation_prompt(language: Language, original_text: &str) -> String {
    format!("Переведи следующий текст на {}:\n\n{}", language, original_text)
}

/// Asks for a 1-10 score with reasoning for `translation` of `original_text`
pub fn evaluation_prompt(original_text: &str, translation: &str) -> String {
    format!(
        "Оцени качество перевода от 1 до 10 и аргументируй.\n\nОригинал:\n{}\n\nПеревод:\n{}",
        original_text, translation
    )
}
