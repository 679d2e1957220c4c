use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

pub const MAX_TEXT_CHARS: usize = 5000;

/// Target languages offered by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    French,
    German,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::French, Language::German];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::French => "French",
            Language::German => "German",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.as_str() == s)
            .ok_or_else(|| ValidationError::UnsupportedLanguage(s.to_string()))
    }
}

/// Raw form body of `POST /`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateForm {
    pub original_text: String,
    pub language: String,
}

fn default_language() -> String {
    Language::English.as_str().to_string()
}

impl Default for TranslateForm {
    fn default() -> Self {
        Self {
            original_text: String::new(),
            language: default_language(),
        }
    }
}

impl TranslateForm {
    /// Build from submitted name/value pairs.
    /// A repeated field keeps its first value; unknown fields are ignored.
    pub fn from_fields<I>(fields: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut original_text = None;
        let mut language = None;

        for (name, value) in fields {
            match name.as_str() {
                "original_text" if original_text.is_none() => original_text = Some(value),
                "language" if language.is_none() => language = Some(value),
                _ => {}
            }
        }

        Self {
            original_text: original_text.unwrap_or_default(),
            language: language.unwrap_or_else(default_language),
        }
    }
}

/// A form submission that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub original_text: String,
    pub language: Language,
}

impl TryFrom<TranslateForm> for TranslationRequest {
    type Error = ValidationError;

    /// Checks run in order and stop at the first failure
    fn try_from(form: TranslateForm) -> Result<Self, Self::Error> {
        let original_text = form.original_text.trim();

        if original_text.is_empty() {
            return Err(ValidationError::EmptyText);
        }
        if original_text.chars().count() > MAX_TEXT_CHARS {
            return Err(ValidationError::TextTooLong {
                max: MAX_TEXT_CHARS,
            });
        }
        let language = form.language.parse()?;

        Ok(Self {
            original_text: original_text.to_string(),
            language,
        })
    }
}
