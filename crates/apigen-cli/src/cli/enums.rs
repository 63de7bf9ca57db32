use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for generated documentation.
#[derive(
    Copy, Clone, PartialEq, Eq, Debug, Default, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
pub enum DocsFormat {
    /// One Markdown page per method
    #[default]
    #[value(name = "md")]
    #[serde(rename = "md")]
    Markdown,

    /// A single JSON file with every documented method
    #[value(name = "json")]
    #[serde(rename = "json")]
    Json,

    /// Markdown pages plus the JSON model
    #[value(name = "both")]
    #[serde(rename = "both")]
    Both,
}

impl DocsFormat {
    pub fn includes_markdown(self) -> bool {
        matches!(self, Self::Markdown | Self::Both)
    }

    pub fn includes_json(self) -> bool {
        matches!(self, Self::Json | Self::Both)
    }
}
