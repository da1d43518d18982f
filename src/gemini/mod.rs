pub mod image_client;

pub use image_client::ImageClient;

use crate::config::GeminiConfig;

/// Entry point for talking to the Gemini API. Holds one reqwest client and
/// hands out the per-capability clients built on top of it.
#[derive(Clone)]
pub struct GeminiClient {
    image_client: ImageClient,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        let http = reqwest::Client::new();
        Self {
            image_client: ImageClient::new(http, config),
        }
    }

    pub fn image(&self) -> &ImageClient {
        &self.image_client
    }
}
