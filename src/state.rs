use std::sync::Arc;

use crate::config::Config;
use crate::llm::{LLMFactory, ModelInvoker};

/// Shared read-only state handed to every request
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub llm: Arc<dyn ModelInvoker>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let llm = LLMFactory::create_llm(&config)?;
        Ok(Self::with_llm(config, llm))
    }

    pub fn with_llm(config: Config, llm: Arc<dyn ModelInvoker>) -> Self {
        Self {
            config: Arc::new(config),
            llm,
        }
    }
}
