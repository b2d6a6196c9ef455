use std::sync::Arc;
use tracing::{info, warn};

use super::deepl::DeepLEngine;
use super::google::GoogleEngine;
use super::interface::TranslationEngine;
use crate::config::{Config, EngineKind};

/// Factory for creating translation engines
pub struct EngineFactory;

impl EngineFactory {
    /// Build the engine selected by `config.translation_engine`.
    ///
    /// Only the selected provider's credential is handed to the engine. A
    /// missing credential is logged; the provider rejects such calls itself.
    pub fn create_engine(config: &Config) -> Arc<dyn TranslationEngine> {
        info!("Initializing translation engine: {}", config.translation_engine);

        match config.translation_engine {
            EngineKind::DeepL => {
                if config.deepl_auth_key.is_empty() {
                    warn!("DEEPL_AUTH_KEY is not set; DeepL will reject requests");
                }
                Arc::new(DeepLEngine::new(
                    config.deepl_api_url.clone(),
                    config.deepl_auth_key.clone(),
                    config.upstream_timeout(),
                ))
            }
            EngineKind::Google => {
                if config.google_api_key.is_empty() {
                    warn!("GOOGLE_API_KEY is not set; Google will reject requests");
                }
                Arc::new(GoogleEngine::new(
                    config.google_api_url.clone(),
                    config.google_api_key.clone(),
                    config.upstream_timeout(),
                ))
            }
        }
    }
}
