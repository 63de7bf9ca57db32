//! Miette diagnostic conversion for CLI errors.

use apigen_docs::DocsError;
use miette::Report;

use crate::error::CliError;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Docs(e) => docs_error_to_miette(e),
        CliError::Config(e) => miette::miette!("Configuration error: {}", e),
        _ => miette::miette!("{}", err),
    }
}

/// Convert DocsError to miette Report, adding hints for lookup failures
pub fn docs_error_to_miette(err: DocsError) -> Report {
    match err {
        DocsError::ClassNotFound { name } => miette::miette!(
            "Type '{}' not found in indexed sources\n\nHint: Check the source paths, or run 'apigen list <SOURCES>' to see indexed types",
            name
        ),
        DocsError::MethodNotFound { class, method } => miette::miette!(
            "Method '{}' not found on type '{}'\n\nHint: Run 'apigen list <SOURCES> --class {}' to see its methods",
            method,
            class,
            class
        ),
        _ => miette::miette!("{}", err),
    }
}
