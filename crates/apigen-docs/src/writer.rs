//! Write rendered documents to an output directory.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, warn};

use crate::error::{DocsError, Result};
use crate::model::MethodDoc;

/// A document ready to be written, named relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDoc {
    pub file_name: String,
    pub contents: String,
}

impl RenderedDoc {
    pub fn new(file_name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            contents: contents.into(),
        }
    }
}

/// A document that could not be written.
#[derive(Debug)]
pub struct WriteFailure {
    pub file_name: String,
    pub error: DocsError,
}

/// Outcome of a batch write.
#[derive(Debug, Default)]
pub struct WriteReport {
    /// Paths of documents written, in batch order.
    pub written: Vec<PathBuf>,
    /// Documents that failed; the rest of the batch was still attempted.
    pub failures: Vec<WriteFailure>,
}

impl WriteReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Writes documents atomically into a single directory.
#[derive(Debug, Clone)]
pub struct DocsWriter {
    out_dir: PathBuf,
}

impl DocsWriter {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Create the output directory if it does not exist.
    pub fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.out_dir).map_err(|error| DocsError::io(&self.out_dir, error))
    }

    /// Write one document through a temp file in the output directory.
    ///
    /// The temp file is removed on every error path, so the target is either
    /// the complete new document or untouched. A replaced document keeps its
    /// permissions; a new one gets the usual `0644` less the umask.
    pub fn write_one(&self, doc: &RenderedDoc) -> Result<PathBuf> {
        let target = self.out_dir.join(&doc.file_name);
        let mut file = temp_builder()
            .tempfile_in(&self.out_dir)
            .map_err(|error| DocsError::io(&self.out_dir, error))?;
        file.write_all(doc.contents.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|error| DocsError::io(file.path(), error))?;
        if let Some(existing) = fs::metadata(&target).ok().filter(|meta| meta.is_file()) {
            file.as_file()
                .set_permissions(existing.permissions())
                .map_err(|error| DocsError::io(file.path(), error))?;
        }
        file.persist(&target)
            .map_err(|error| DocsError::io(&target, error.error))?;
        debug!(path = %target.display(), "wrote document");
        Ok(target)
    }

    /// Write every document, recording failures instead of stopping.
    pub fn write_all(&self, docs: &[RenderedDoc]) -> WriteReport {
        let mut report = WriteReport::default();

        if let Err(error) = self.ensure_dir() {
            warn!(dir = %self.out_dir.display(), %error, "cannot create output directory");
            report.failures = docs
                .iter()
                .map(|doc| WriteFailure {
                    file_name: doc.file_name.clone(),
                    error: DocsError::Other {
                        message: error.to_string(),
                    },
                })
                .collect();
            return report;
        }

        for doc in docs {
            match self.write_one(doc) {
                Ok(path) => report.written.push(path),
                Err(error) => {
                    warn!(file = %doc.file_name, %error, "failed to write document");
                    report.failures.push(WriteFailure {
                        file_name: doc.file_name.clone(),
                        error,
                    });
                }
            }
        }

        report
    }
}

fn temp_builder() -> tempfile::Builder<'static, 'static> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(".apigen-");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // Created through open(2), so the process umask still applies.
        builder.permissions(fs::Permissions::from_mode(0o644));
    }
    builder
}

/// File stems for a batch of methods: the method name, with `_2`, `_3`, ...
/// appended to later overloads. A suffix that collides with a stem already
/// issued (for example a method really called `find_2`) is skipped.
pub fn unique_stems(methods: &[MethodDoc]) -> Vec<String> {
    let mut counters: FxHashMap<&str, usize> = FxHashMap::default();
    let mut issued: FxHashSet<String> = FxHashSet::default();
    let mut stems = Vec::with_capacity(methods.len());

    for method in methods {
        let name = method.name.as_str();
        let stem = if issued.contains(name) {
            let counter = counters.entry(name).or_insert(1);
            loop {
                *counter += 1;
                let candidate = format!("{name}_{counter}");
                if !issued.contains(&candidate) {
                    break candidate;
                }
            }
        } else {
            name.to_string()
        };
        issued.insert(stem.clone());
        stems.push(stem);
    }

    stems
}
