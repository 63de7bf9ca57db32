#[cfg(test)]
mod tests {
    use crate::cli::DocsFormat;
    use crate::config::*;
    use std::path::PathBuf;

    #[test]
    fn test_serialization() {
        let config = ApigenConfig {
            sources: vec![PathBuf::from("src/main/java")],
            out_dir: PathBuf::from("docs"),
            format: DocsFormat::Both,
            max_depth: 8,
            artifact: ArtifactConfig {
                group_id: Some("com.example".to_string()),
                ..ArtifactConfig::default()
            },
        };
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: ApigenConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);

        // Enum serialization
        assert_eq!(serde_json::to_string(&DocsFormat::Markdown).unwrap(), "\"md\"");

        // camelCase field names
        let json_val = serde_json::to_value(&config).unwrap();
        assert!(json_val.get("outDir").is_some());
        assert!(json_val.get("maxDepth").is_some());
        assert!(json_val.get("out_dir").is_none());
        assert_eq!(json_val["artifact"]["groupId"], "com.example");
        assert!(json_val["artifact"].get("version").is_none());

        // skip_serializing_if
        let minimal = ApigenConfig::default_config();
        let json_val = serde_json::to_value(&minimal).unwrap();
        assert!(json_val.get("artifact").is_none());
    }

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config: ApigenConfig = serde_json::from_str(r#"{ "sources": ["src"] }"#).unwrap();
        assert_eq!(config.out_dir, PathBuf::from("api_docs"));
        assert_eq!(config.format, DocsFormat::Markdown);
        assert_eq!(config.max_depth, 16);
        assert!(config.artifact.is_empty());
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: Result<ApigenConfig, _> =
            serde_json::from_str(r#"{ "sources": ["src"], "outdir": "x" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_validation() {
        // Empty sources fail
        assert!(ApigenConfig::default_config().validate().is_err());

        let valid = ApigenConfig {
            sources: vec![PathBuf::from("src")],
            ..ApigenConfig::default_config()
        };
        assert!(valid.validate().is_ok());

        // Zero depth fails
        let err = ApigenConfig {
            max_depth: 0,
            ..valid.clone()
        }
        .validate()
        .unwrap_err();
        assert!(err.to_string().contains("maxDepth"));

        // Empty output directory fails
        assert!(ApigenConfig {
            out_dir: PathBuf::new(),
            ..valid
        }
        .validate()
        .is_err());
    }

    #[test]
    fn test_example_config_is_valid() {
        let example = ApigenConfig::example_config().unwrap();
        let parsed: ApigenConfig = serde_json::from_str(&example).unwrap();
        assert!(parsed.validate().is_ok());
        assert_eq!(parsed.artifact.artifact_id.as_deref(), Some("example-api"));
    }

    #[test]
    fn test_json_schema() {
        let schema = ApigenConfig::json_schema();
        let properties = &schema["properties"];
        assert!(properties.get("outDir").is_some());
        assert!(properties.get("maxDepth").is_some());
        assert!(properties.get("artifact").is_some());
    }
}
