pub mod deepl;
pub mod factory;
pub mod google;
pub mod interface;
pub mod service;

#[cfg(test)]
pub(crate) mod test_support;

pub use factory::EngineFactory;
pub use interface::*;
pub use service::TranslationService;
