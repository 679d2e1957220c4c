use thiserror::Error;

/// Failure of a single model invocation
///
/// The variant records which stage failed; the display text is the
/// underlying client message, which is what ends up on the page.
#[derive(Error, Debug)]
pub enum InvocationError {
    /// Upstream answered outside the 2xx range
    #[error("{detail}")]
    Status { status: u16, detail: String },

    /// Connection, DNS, TLS, timeout or body read failure
    #[error("{0}")]
    Transport(String),

    /// Upstream body was not JSON
    #[error("{0}")]
    Decode(String),
}

impl InvocationError {
    pub fn kind(&self) -> &'static str {
        match self {
            InvocationError::Status { .. } => "status",
            InvocationError::Transport(_) => "transport",
            InvocationError::Decode(_) => "decode",
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            InvocationError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for InvocationError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            InvocationError::Status {
                status: status.as_u16(),
                detail: err.to_string(),
            }
        } else if err.is_decode() {
            InvocationError::Decode(err.to_string())
        } else {
            InvocationError::Transport(err.to_string())
        }
    }
}

/// Rejected form input, rendered back to the user with a 400
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Пожалуйста, введите текст для перевода.")]
    EmptyText,

    #[error("Слишком длинный текст для перевода (макс. {max} символов).")]
    TextTooLong { max: usize },

    #[error("Язык \"{0}\" не поддерживается.")]
    UnsupportedLanguage(String),
}
