use std::env;

use crate::error::{GemimgError, Result};

pub const DEFAULT_MODEL: &str = "gemini-3-pro-image-preview";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Connection settings for the Gemini generative-image endpoint.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        GeminiConfig {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    /// Reads `GEMINI_API_KEY` (required) plus the optional `GEMINI_MODEL`
    /// and `GEMINI_API_BASE` overrides. A missing or empty key is fatal.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                GemimgError::Config(
                    "GEMINI_API_KEY environment variable not set. \
                     Set it with: export GEMINI_API_KEY='your-api-key'"
                        .to_string(),
                )
            })?;

        let mut config = GeminiConfig::new(api_key);
        if let Some(model) = env::var("GEMINI_MODEL").ok().filter(|m| !m.is_empty()) {
            config.model = model;
        }
        if let Some(base) = env::var("GEMINI_API_BASE").ok().filter(|b| !b.is_empty()) {
            config.api_base = base;
        }
        Ok(config)
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Full URL of the `generateContent` call for the configured model.
    pub fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        )
    }
}
