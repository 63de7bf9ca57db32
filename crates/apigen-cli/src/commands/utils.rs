//! Shared utilities for command implementations.

use apigen_docs::JavaSourceIndex;
use std::path::PathBuf;
use tracing::info;

use crate::error::{CliError, Result};

/// Index every source path, failing early on paths that don't exist.
pub fn load_index(sources: &[PathBuf]) -> Result<JavaSourceIndex> {
    if let Some(missing) = sources.iter().find(|path| !path.exists()) {
        return Err(CliError::FileNotFound(missing.clone()));
    }

    let index = JavaSourceIndex::from_paths(sources)?;
    info!(
        sources = sources.len(),
        types = index.len(),
        "indexed Java sources"
    );
    Ok(index)
}

/// `1 document`, `3 documents`.
pub fn count_noun(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_noun() {
        assert_eq!(count_noun(1, "document"), "1 document");
        assert_eq!(count_noun(0, "document"), "0 documents");
        assert_eq!(count_noun(3, "type"), "3 types");
    }

    #[test]
    fn test_load_index_missing_path() {
        let temp = tempfile::tempdir().unwrap();
        let missing = temp.path().join("absent");
        let err = load_index(&[missing.clone()]).unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(path) if path == missing));
    }
}
