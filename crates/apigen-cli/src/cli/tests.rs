#[cfg(test)]
mod tests {
    use crate::cli::validation::parse_java_identifier;
    use crate::cli::{Cli, Command, DocsFormat};
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_parse_java_identifier_valid() {
        assert_eq!(parse_java_identifier("UserService"), Ok("UserService".to_string()));
        assert_eq!(parse_java_identifier("_internal"), Ok("_internal".to_string()));
        assert_eq!(parse_java_identifier("$Proxy1"), Ok("$Proxy1".to_string()));
    }

    #[test]
    fn test_parse_java_identifier_qualified() {
        assert_eq!(
            parse_java_identifier("com.example.UserService"),
            Ok("UserService".to_string())
        );
    }

    #[test]
    fn test_parse_java_identifier_invalid() {
        assert!(parse_java_identifier("1Service").is_err());
        assert!(parse_java_identifier("user-service").is_err());
        assert!(parse_java_identifier("com..Service").is_err());
        assert!(parse_java_identifier("com.example.").is_err());
        assert_eq!(
            parse_java_identifier("").unwrap_err(),
            "Name cannot be empty"
        );
    }

    #[test]
    fn test_generate_minimal() {
        let cli = Cli::try_parse_from(["apigen", "generate", "src", "--class", "UserService"]).unwrap();
        match cli.command {
            Command::Generate(args) => {
                assert_eq!(args.sources, vec![PathBuf::from("src")]);
                assert_eq!(args.class, "UserService");
                assert!(args.method.is_none());
                assert!(args.out_dir.is_none());
                assert!(args.format.is_none());
            }
            _ => panic!("Expected Generate command"),
        }
    }

    #[test]
    fn test_generate_all_flags() {
        let cli = Cli::try_parse_from([
            "apigen",
            "generate",
            "api",
            "model",
            "--class",
            "com.example.UserService",
            "--method",
            "getUser",
            "--out-dir",
            "docs",
            "--format",
            "both",
            "--max-depth",
            "4",
            "--group-id",
            "com.example",
            "--artifact-id",
            "user-api",
            "--artifact-version",
            "1.0.0",
        ])
        .unwrap();

        match cli.command {
            Command::Generate(args) => {
                assert_eq!(args.sources.len(), 2);
                assert_eq!(args.class, "UserService");
                assert_eq!(args.method.as_deref(), Some("getUser"));
                assert_eq!(args.out_dir, Some(PathBuf::from("docs")));
                assert_eq!(args.format, Some(DocsFormat::Both));
                assert_eq!(args.max_depth, Some(4));
                assert_eq!(args.artifact_id.as_deref(), Some("user-api"));
            }
            _ => panic!("Expected Generate command"),
        }
    }

    #[test]
    fn test_generate_requires_class() {
        assert!(Cli::try_parse_from(["apigen", "generate", "src"]).is_err());
    }

    #[test]
    fn test_invalid_format_rejected() {
        let result = Cli::try_parse_from([
            "apigen", "generate", "src", "--class", "A", "--format", "html",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["apigen", "list", "src", "--verbose", "--no-color"]).unwrap();
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["apigen", "list", "src", "-v", "-q"]).is_err());
    }

    #[test]
    fn test_list_requires_sources() {
        assert!(Cli::try_parse_from(["apigen", "list"]).is_err());
    }

    #[test]
    fn test_init_force() {
        let cli = Cli::try_parse_from(["apigen", "init", "--force"]).unwrap();
        match cli.command {
            Command::Init(args) => assert!(args.force),
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn test_schema_output() {
        let cli = Cli::try_parse_from(["apigen", "schema", "-o", "schema.json"]).unwrap();
        match cli.command {
            Command::Schema(args) => {
                assert_eq!(args.output, Some(PathBuf::from("schema.json")))
            }
            _ => panic!("Expected Schema command"),
        }
    }
}
