use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

/// Module token used in derived table names when an entity has no module.
pub const DEFAULT_MODULE: &str = "MDS";

/// Package generated entity classes are placed in.
pub const DEFAULT_ENTITY_PACKAGE: &str = "dynmeta.entity";

/// Vendor name for runtime-specific extensions.
pub const DEFAULT_VENDOR: &str = "datanucleus";

/// Framework base class that declares the audit fields.
pub const DEFAULT_FRAMEWORK_BASE_CLASS: &str = "dynmeta.domain.MdsEntity";

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("invalid mapping config: {0}")]
    Parse(#[from] toml::de::Error),
}

///
/// MappingConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct MappingConfig {
    pub default_module: String,
    pub generated_entity_package: String,
    pub vendor: String,
    pub framework_base_class: String,
}

impl MappingConfig {
    /// Parse a config from TOML; missing keys keep their defaults.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml)?)
    }
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            default_module: DEFAULT_MODULE.to_string(),
            generated_entity_package: DEFAULT_ENTITY_PACKAGE.to_string(),
            vendor: DEFAULT_VENDOR.to_string(),
            framework_base_class: DEFAULT_FRAMEWORK_BASE_CLASS.to_string(),
        }
    }
}
