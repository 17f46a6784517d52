pub mod defaults;
pub mod index_config;
pub mod retrieval_config;

pub use index_config::IndexConfig;
pub use retrieval_config::{RetrievalConfig, TopicPolicy};

use serde::{Deserialize, Serialize};

/// Root configuration, deserializable from TOML. Every field has a
/// default, so an empty document yields a fully usable config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NormaConfig {
    pub index: IndexConfig,
    pub retrieval: RetrievalConfig,
}

impl NormaConfig {
    /// Parse a TOML document. Unknown keys are ignored; missing keys fall
    /// back to defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }
}
