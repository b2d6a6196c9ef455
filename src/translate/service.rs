use std::sync::Arc;

use super::interface::{EngineError, TranslationEngine, TranslationRequest, UpstreamReply};

/// Front door for translation work. Holds the engine chosen at startup and
/// forwards every call to it unchanged.
#[derive(Clone)]
pub struct TranslationService {
    engine: Arc<dyn TranslationEngine>,
}

impl TranslationService {
    pub fn new(engine: Arc<dyn TranslationEngine>) -> Self {
        Self { engine }
    }

    pub fn engine_name(&self) -> &'static str {
        self.engine.name()
    }

    pub async fn translate(&self, request: &TranslationRequest) -> Result<UpstreamReply, EngineError> {
        self.engine.translate(request).await
    }
}
