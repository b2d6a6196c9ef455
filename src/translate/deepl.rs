use async_trait::async_trait;
use reqwest::{header, Client};
use std::time::Duration;
use tracing::debug;

use super::interface::{
    decode_body, EngineError, TranslationEngine, TranslationRequest, TranslationResponse,
    UpstreamReply,
};

pub const DEFAULT_API_URL: &str = "https://api-free.deepl.com/v2/translate";

/// DeepL engine. The DeepL wire format matches the internal request and
/// response shapes field for field, so bodies pass straight through.
pub struct DeepLEngine {
    client: Client,
    api_url: String,
    auth_key: String,
    timeout: Duration,
}

impl DeepLEngine {
    pub fn new(api_url: String, auth_key: String, timeout: Duration) -> Self {
        debug!("Initialized DeepLEngine: api_url={}", api_url);
        Self {
            client: Client::new(),
            api_url,
            auth_key,
            timeout,
        }
    }
}

#[async_trait]
impl TranslationEngine for DeepLEngine {
    fn name(&self) -> &'static str {
        "deepl"
    }

    async fn translate(&self, request: &TranslationRequest) -> Result<UpstreamReply, EngineError> {
        let body = serde_json::to_vec(request).map_err(EngineError::Encode)?;

        let response = self
            .client
            .post(&self.api_url)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::AUTHORIZATION, format!("DeepL-Auth-Key {}", self.auth_key))
            .timeout(self.timeout)
            .body(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let bytes = response.bytes().await?;
        debug!("DeepL answered {} with {} bytes", status, bytes.len());

        let body: TranslationResponse = decode_body(&bytes, status)?;
        Ok(UpstreamReply { body, status })
    }
}
