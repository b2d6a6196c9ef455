use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Translation request accepted from clients and handed to every engine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranslationRequest {
    #[serde(default)]
    pub text: Vec<String>,
    #[serde(default)]
    pub target_lang: String,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub source_lang: Option<String>,
}

/// One translated string, index-aligned with the request text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationItem {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detected_source_language: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranslationResponse {
    #[serde(default)]
    pub translations: Vec<TranslationItem>,
}

/// Normalized body plus the status code the provider answered with
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamReply {
    pub body: TranslationResponse,
    pub status: u16,
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("failed to encode upstream request: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to decode upstream response: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Translation engine interface implemented once per upstream provider.
///
/// A non-2xx answer from the provider is still `Ok`: the status is carried in
/// [`UpstreamReply`] so callers can forward it. Dropping the returned future
/// aborts the outbound request.
#[async_trait]
pub trait TranslationEngine: Send + Sync {
    /// Provider name used in logs
    fn name(&self) -> &'static str;

    async fn translate(&self, request: &TranslationRequest) -> Result<UpstreamReply, EngineError>;
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

/// Decode a provider body, tolerating garbage when the provider already
/// reported a failure status.
pub(crate) fn decode_body<T>(bytes: &[u8], status: u16) -> Result<T, EngineError>
where
    T: for<'de> Deserialize<'de> + Default,
{
    match serde_json::from_slice(bytes) {
        Ok(parsed) => Ok(parsed),
        Err(_) if !(200..300).contains(&status) => Ok(T::default()),
        Err(e) => Err(EngineError::Decode(e)),
    }
}
