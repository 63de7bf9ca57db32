use crate::config::ApigenConfig;
use crate::error::{ConfigError, Result};

impl ApigenConfig {
    /// Validate configuration for logical consistency.
    pub fn validate(&self) -> Result<()> {
        if self.sources.is_empty() {
            return Err(ConfigError::MissingField {
                field: "sources".to_string(),
                hint: "Pass source paths on the command line or add 'sources' to apigen.config.json"
                    .to_string(),
            }
            .into());
        }

        if self.max_depth == 0 {
            return Err(ConfigError::InvalidValue {
                field: "maxDepth".to_string(),
                value: "0".to_string(),
                hint: "Use a depth of at least 1".to_string(),
            }
            .into());
        }

        if self.out_dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "outDir".to_string(),
                value: String::new(),
                hint: "Output directory cannot be empty".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
