use crate::cli::{DocsFormat, GenerateArgs};
use crate::config::{ApigenConfig, ArtifactConfig, default_max_depth, default_out_dir};
use crate::error::{ConfigError, Result};
use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized},
};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when `--config` is absent.
pub const CONFIG_FILE_NAME: &str = "apigen.config.json";

/// Keys accepted from `APIGEN_*` environment variables. `sources` is a list
/// and only comes from the file or the command line.
const ENV_KEYS: &[&str] = &["out_dir", "format", "max_depth"];

/// Values given on the command line. Unset flags are skipped so they never
/// mask file or environment values.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct CliOverrides {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    sources: Vec<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    out_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<DocsFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_depth: Option<usize>,
    #[serde(skip_serializing_if = "ArtifactConfig::is_empty")]
    artifact: ArtifactConfig,
}

impl ApigenConfig {
    /// Load configuration from multiple sources.
    /// Priority: CLI args > environment variables > config file > defaults
    pub fn load(args: &GenerateArgs) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default_config()));

        if let Some(path) = Self::config_file(args.config.as_deref())? {
            tracing::debug!(path = %path.display(), "loading config file");
            figment = figment.merge(Json::file(path));
        }

        // APIGEN_OUT_DIR, APIGEN_MAX_DEPTH, ...
        figment = figment.merge(
            Env::prefixed("APIGEN_")
                .only(ENV_KEYS)
                .map(|key| env_key(key.as_str()).into())
                .lowercase(false),
        );

        figment = figment.merge(Serialized::defaults(CliOverrides::from(args)));

        figment.extract().map_err(|e| {
            ConfigError::InvalidValue {
                field: "configuration".to_string(),
                value: e.to_string(),
                hint: "Check apigen.config.json syntax and field types".to_string(),
            }
            .into()
        })
    }

    /// An explicit `--config` path must exist; the default file is optional.
    fn config_file(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        match explicit {
            Some(path) if path.is_file() => Ok(Some(path.to_path_buf())),
            Some(path) => Err(ConfigError::NotFound(path.to_path_buf()).into()),
            None => {
                let default_path = Path::new(CONFIG_FILE_NAME);
                Ok(default_path.is_file().then(|| default_path.to_path_buf()))
            }
        }
    }

    /// Get default configuration values.
    pub(crate) fn default_config() -> Self {
        Self {
            sources: Vec::new(),
            out_dir: default_out_dir(),
            format: DocsFormat::Markdown,
            max_depth: default_max_depth(),
            artifact: ArtifactConfig::default(),
        }
    }
}

impl From<&GenerateArgs> for CliOverrides {
    fn from(args: &GenerateArgs) -> Self {
        Self {
            sources: args.sources.clone(),
            out_dir: args.out_dir.clone(),
            format: args.format,
            max_depth: args.max_depth,
            artifact: ArtifactConfig {
                group_id: args.group_id.clone(),
                artifact_id: args.artifact_id.clone(),
                version: args.artifact_version.clone(),
            },
        }
    }
}

/// `OUT_DIR` -> `outDir`, matching the camelCase file format.
fn env_key(key: &str) -> String {
    let mut output = String::with_capacity(key.len());
    let mut upper = false;
    for c in key.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            output.push(c.to_ascii_uppercase());
            upper = false;
        } else {
            output.push(c.to_ascii_lowercase());
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::env_key;

    #[test]
    fn test_env_key_camel_case() {
        assert_eq!(env_key("OUT_DIR"), "outDir");
        assert_eq!(env_key("max_depth"), "maxDepth");
        assert_eq!(env_key("SOURCES"), "sources");
    }
}
