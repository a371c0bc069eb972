/// Configuration for building a taxonomy store
use serde::{Deserialize, Serialize};

/// Options controlling key composition and load-time checks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxonomyConfig {
    /// Separator placed between path segments in branch keys
    pub key_separator: String,

    /// Path segment for branches with neither name nor range
    pub general_segment: String,

    /// Require every branch key in the source to equal its composed path
    pub verify_key_paths: bool,
}

impl Default for TaxonomyConfig {
    fn default() -> Self {
        Self {
            key_separator: "/".to_string(),
            general_segment: "general".to_string(),
            verify_key_paths: false,
        }
    }
}

impl TaxonomyConfig {
    /// Default configuration with key path verification turned on
    pub fn strict() -> Self {
        Self {
            verify_key_paths: true,
            ..Self::default()
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.key_separator.is_empty() {
            return Err("key_separator cannot be empty".to_string());
        }

        if self.general_segment.is_empty() {
            return Err("general_segment cannot be empty".to_string());
        }

        if self.general_segment.contains(&self.key_separator) {
            return Err(format!(
                "general_segment '{}' cannot contain the key separator '{}'",
                self.general_segment, self.key_separator
            ));
        }

        Ok(())
    }
}
