//! Generate command implementation.

use apigen_docs::{
    ArtifactCoordinates, BuildOptions, DocModelBuilder, DocsWriter, MethodDoc, RenderedDoc,
    render_json, render_markdown, unique_stems,
};
use tracing::{debug, info};

use crate::cli::{DocsFormat, GenerateArgs};
use crate::commands::utils;
use crate::config::ApigenConfig;
use crate::error::{CliError, Result};
use crate::ui;

/// Execute the generate command.
///
/// # Process
///
/// 1. Load and validate configuration
/// 2. Index the Java sources
/// 3. Build documentation models for the selected methods
/// 4. Render Markdown and/or JSON
/// 5. Write every document, then report failures
///
/// # Errors
///
/// Returns errors for invalid configuration, unknown types or methods, and
/// when any document could not be written. A failed write does not stop the
/// remaining documents from being written.
pub fn execute(args: GenerateArgs) -> Result<()> {
    let config = ApigenConfig::load(&args)?;
    config.validate()?;

    let index = utils::load_index(&config.sources)?;
    let builder = DocModelBuilder::new(&index, BuildOptions::from(&config));
    let docs = match &args.method {
        Some(method) => builder.build(&args.class, method)?,
        None => builder.build_all(&args.class)?,
    };
    if docs.is_empty() {
        ui::warning(&format!("Type '{}' declares no methods to document", args.class));
        return Ok(());
    }
    info!(class = %args.class, methods = docs.len(), "built documentation models");

    let artifact = ArtifactCoordinates::from(&config.artifact);
    if artifact.is_empty() {
        debug!("no Maven coordinates configured; dependency section omitted");
    }

    let json_stem = args.method.as_deref().unwrap_or(&args.class);
    let rendered = render_documents(&docs, config.format, &artifact, json_stem)?;

    let writer = DocsWriter::new(&config.out_dir);
    let report = writer.write_all(&rendered);
    for failure in &report.failures {
        ui::error(&format!("{}: {}", failure.file_name, failure.error));
    }
    if !report.is_success() {
        return Err(CliError::WriteFailed {
            failed: report.failures.len(),
            total: rendered.len(),
        });
    }

    ui::success(&format!(
        "Wrote {} to {}",
        utils::count_noun(report.written.len(), "document"),
        writer.out_dir().display()
    ));
    Ok(())
}

/// Render the batch in the requested formats.
///
/// Markdown pages are named after their method; the JSON model is a single
/// file named after `json_stem`.
pub fn render_documents(
    docs: &[MethodDoc],
    format: DocsFormat,
    artifact: &ArtifactCoordinates,
    json_stem: &str,
) -> Result<Vec<RenderedDoc>> {
    let mut rendered = Vec::new();

    if format.includes_markdown() {
        for (doc, stem) in docs.iter().zip(unique_stems(docs)) {
            rendered.push(RenderedDoc::new(
                format!("{stem}.md"),
                render_markdown(doc, Some(artifact)),
            ));
        }
    }

    if format.includes_json() {
        rendered.push(RenderedDoc::new(
            format!("{json_stem}.json"),
            render_json(docs)?,
        ));
    }

    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use apigen_docs::JavaSourceIndex;

    fn docs() -> Vec<MethodDoc> {
        let mut index = JavaSourceIndex::new();
        index
            .add_source(
                "Repo.java",
                "interface Repo { String find(long id); String find(String key); void clear(); }",
            )
            .unwrap();
        DocModelBuilder::new(&index, BuildOptions::default())
            .build_all("Repo")
            .unwrap()
    }

    #[test]
    fn test_render_markdown_names_overloads() {
        let rendered = render_documents(
            &docs(),
            DocsFormat::Markdown,
            &ArtifactCoordinates::default(),
            "Repo",
        )
        .unwrap();
        let names: Vec<_> = rendered.iter().map(|doc| doc.file_name.as_str()).collect();
        assert_eq!(names, ["find.md", "find_2.md", "clear.md"]);
    }

    #[test]
    fn test_render_both_formats() {
        let rendered = render_documents(
            &docs(),
            DocsFormat::Both,
            &ArtifactCoordinates::default(),
            "Repo",
        )
        .unwrap();
        assert_eq!(rendered.len(), 4);
        assert_eq!(rendered[3].file_name, "Repo.json");

        let json_only =
            render_documents(&docs(), DocsFormat::Json, &ArtifactCoordinates::default(), "find")
                .unwrap();
        assert_eq!(json_only.len(), 1);
        assert_eq!(json_only[0].file_name, "find.json");
    }
}
