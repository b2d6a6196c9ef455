use std::sync::Arc;
use uuid::Uuid;

use crate::config::Config;
use crate::translate::{EngineFactory, TranslationService};

/// Immutable state shared by every request handler
#[derive(Clone)]
pub struct AppState {
    pub translation: TranslationService,
    pub client_api_key: Option<Arc<str>>,
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self::with_service(TranslationService::new(EngineFactory::create_engine(config)), config)
    }

    pub fn with_service(translation: TranslationService, config: &Config) -> Self {
        Self {
            translation,
            client_api_key: config.client_api_key.as_deref().map(Arc::from),
            max_body_bytes: config.max_body_bytes,
        }
    }

    pub fn generate_connection_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
