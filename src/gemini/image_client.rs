use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use reqwest::Client;
use serde_json::{json, Value};

use crate::{
    config::GeminiConfig,
    error::{GemimgError, Result},
    models::{GenerateContentResponse, ImageGenerationRequest},
};

#[derive(Clone)]
pub struct ImageClient {
    http: Client,
    config: GeminiConfig,
}

impl ImageClient {
    pub fn new(http: Client, config: GeminiConfig) -> Self {
        Self { http, config }
    }

    /// Sends exactly one `generateContent` request: the prompt, the reference
    /// images in their given order, and the size bucket. No timeout, no
    /// retry; any transport or API failure surfaces as a `Request` error.
    pub async fn generate(
        &self,
        request: ImageGenerationRequest,
    ) -> Result<GenerateContentResponse> {
        let payload = build_payload(&request);

        log::info!(
            "Generating image with model: {} (size: {})",
            self.config.model,
            request.size.as_str()
        );

        let response = self
            .http
            .post(self.config.generate_url())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| GemimgError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GemimgError::Request(format!(
                "API returned {status}: {body}"
            )));
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| GemimgError::Response(e.to_string()))
    }
}

/// Request body for `generateContent`: one content entry whose parts are the
/// prompt followed by each reference as base64 inline data.
fn build_payload(request: &ImageGenerationRequest) -> Value {
    let mut parts = vec![json!({ "text": request.prompt })];
    for reference in &request.references {
        parts.push(json!({
            "inlineData": {
                "mimeType": reference.mime_type,
                "data": BASE64.encode(&reference.data),
            }
        }));
    }

    json!({
        "contents": [{ "parts": parts }],
        "generationConfig": {
            "imageConfig": {
                "imageSize": request.size.as_str(),
            }
        }
    })
}
