use async_trait::async_trait;
use reqwest::{header, Client};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use super::interface::{
    decode_body, EngineError, TranslationEngine, TranslationItem, TranslationRequest,
    TranslationResponse, UpstreamReply,
};

pub const DEFAULT_API_URL: &str = "https://translation.googleapis.com/language/translate/v2";

/// Google Cloud Translation (v2) engine
pub struct GoogleEngine {
    client: Client,
    api_url: String,
    api_key: String,
    timeout: Duration,
}

#[derive(Debug, Serialize)]
struct GoogleRequest<'a> {
    q: &'a [String],
    target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
    format: &'static str,
}

#[derive(Debug, Default, Deserialize)]
struct GoogleResponse {
    #[serde(default)]
    data: GoogleData,
}

#[derive(Debug, Default, Deserialize)]
struct GoogleData {
    #[serde(default)]
    translations: Vec<GoogleTranslation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GoogleTranslation {
    #[serde(default)]
    translated_text: String,
    #[serde(default)]
    detected_source_language: Option<String>,
}

impl<'a> GoogleRequest<'a> {
    fn from_request(request: &'a TranslationRequest) -> Self {
        Self {
            q: &request.text,
            target: request.target_lang.to_lowercase(),
            source: request
                .source_lang
                .as_deref()
                .filter(|s| !s.is_empty())
                .map(str::to_lowercase),
            format: "text",
        }
    }
}

impl From<GoogleResponse> for TranslationResponse {
    fn from(response: GoogleResponse) -> Self {
        let translations = response
            .data
            .translations
            .into_iter()
            .map(|t| TranslationItem {
                text: t.translated_text,
                detected_source_language: t.detected_source_language,
            })
            .collect();
        Self { translations }
    }
}

impl GoogleEngine {
    pub fn new(api_url: String, api_key: String, timeout: Duration) -> Self {
        debug!("Initialized GoogleEngine: api_url={}", api_url);
        Self {
            client: Client::new(),
            api_url,
            api_key,
            timeout,
        }
    }
}

#[async_trait]
impl TranslationEngine for GoogleEngine {
    fn name(&self) -> &'static str {
        "google"
    }

    async fn translate(&self, request: &TranslationRequest) -> Result<UpstreamReply, EngineError> {
        let body = serde_json::to_vec(&GoogleRequest::from_request(request))
            .map_err(EngineError::Encode)?;

        // Google takes the key as a query parameter, not a header.
        let response = self
            .client
            .post(&self.api_url)
            .query(&[("key", self.api_key.as_str())])
            .header(header::CONTENT_TYPE, "application/json")
            .timeout(self.timeout)
            .body(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let bytes = response.bytes().await?;
        debug!("Google answered {} with {} bytes", status, bytes.len());

        let parsed: GoogleResponse = decode_body(&bytes, status)?;
        Ok(UpstreamReply {
            body: parsed.into(),
            status,
        })
    }
}
