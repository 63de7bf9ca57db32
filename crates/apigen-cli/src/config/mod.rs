//! Configuration for apigen with multi-source loading.
//!
//! Merges settings from CLI args, environment variables, and config files.
//! Priority: CLI > Environment > File > Defaults

mod conversions;
mod defaults;
mod loading;
mod tests;
mod validation;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use defaults::*;
pub use loading::CONFIG_FILE_NAME;

use crate::cli::DocsFormat;

/// apigen configuration - loaded from apigen.config.json or CLI args.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ApigenConfig {
    /// Java source files or directories to index
    #[serde(default)]
    pub sources: Vec<PathBuf>,

    /// Output directory for generated documents
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    /// Output format (md, json, both)
    #[serde(default)]
    pub format: DocsFormat,

    /// Maximum nesting depth of expanded types
    #[schemars(range(min = 1))]
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Maven coordinates for the dependency snippet
    #[serde(default, skip_serializing_if = "ArtifactConfig::is_empty")]
    pub artifact: ArtifactConfig,
}

/// Maven coordinates of the documented API.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ArtifactConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl ArtifactConfig {
    pub fn is_empty(&self) -> bool {
        self.group_id.is_none() && self.artifact_id.is_none() && self.version.is_none()
    }
}

impl ApigenConfig {
    /// Generate JSON Schema for apigen.config.json.
    pub fn json_schema() -> serde_json::Value {
        let schema = schemars::schema_for!(ApigenConfig);
        serde_json::to_value(schema).unwrap_or_default()
    }

    /// Generate example apigen.config.json content.
    pub fn example_config() -> crate::error::Result<String> {
        let example = Self {
            sources: vec![PathBuf::from("src/main/java")],
            out_dir: default_out_dir(),
            format: DocsFormat::Markdown,
            max_depth: default_max_depth(),
            artifact: ArtifactConfig {
                group_id: Some("com.example".to_string()),
                artifact_id: Some("example-api".to_string()),
                version: Some("1.0.0".to_string()),
            },
        };
        Ok(serde_json::to_string_pretty(&example)?)
    }
}
