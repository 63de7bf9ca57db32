use std::fmt::Write;

use crate::generators::example::build_example;
use crate::model::{ArtifactCoordinates, FieldInfo, MethodDoc, ParamKind};

/// Marker prepended once per nesting level in parameter tables.
const CHILD_MARKER: char = '└';

/// Body of the Description section for methods without Javadoc.
pub const NO_DESCRIPTION: &str = "_No description provided._";

/// Render one method as a Markdown API page.
///
/// The dependency section is only emitted when `artifact` carries at least
/// one coordinate.
pub fn render_markdown(doc: &MethodDoc, artifact: Option<&ArtifactCoordinates>) -> String {
    let mut output = String::new();

    let _ = writeln!(&mut output, "# {}\n", doc.name);
    let _ = writeln!(&mut output, "## Description\n");
    let description = doc.description.as_deref().and_then(non_empty);
    let _ = writeln!(&mut output, "{}\n", description.unwrap_or(NO_DESCRIPTION));

    if let Some(artifact) = artifact.filter(|artifact| !artifact.is_empty()) {
        render_dependency(&mut output, artifact);
    }

    render_declaration(&mut output, doc);

    let _ = writeln!(&mut output, "## Request\n");
    render_section(&mut output, "Request", &doc.request);
    let _ = writeln!(&mut output, "## Response\n");
    render_section(&mut output, "Response", &doc.response);

    output
}

fn render_dependency(buffer: &mut String, artifact: &ArtifactCoordinates) {
    let coordinate = |value: &Option<String>| value.clone().unwrap_or_default();
    let _ = writeln!(buffer, "## Maven Dependency\n");
    let _ = writeln!(buffer, "```xml");
    let _ = writeln!(buffer, "<dependency>");
    let _ = writeln!(
        buffer,
        "    <groupId>{}</groupId>",
        coordinate(&artifact.group_id)
    );
    let _ = writeln!(
        buffer,
        "    <artifactId>{}</artifactId>",
        coordinate(&artifact.artifact_id)
    );
    let _ = writeln!(
        buffer,
        "    <version>{}</version>",
        coordinate(&artifact.version)
    );
    let _ = writeln!(buffer, "</dependency>");
    let _ = writeln!(buffer, "```\n");
}

fn render_declaration(buffer: &mut String, doc: &MethodDoc) {
    let _ = writeln!(buffer, "## Interface Declaration\n");
    let _ = writeln!(buffer, "```java");
    if !doc.package.is_empty() {
        let _ = writeln!(buffer, "package {};\n", doc.package);
    }
    let _ = writeln!(buffer, "public interface {} {{\n", doc.declaring_type);
    let _ = writeln!(
        buffer,
        "\t{} {}{};\n",
        doc.return_type, doc.name, doc.params
    );
    let _ = writeln!(buffer, "}}");
    let _ = writeln!(buffer, "```\n");
}

fn render_section(buffer: &mut String, title: &str, fields: &[FieldInfo]) {
    let _ = writeln!(buffer, "### {title} Example\n");
    if !fields.is_empty() {
        let _ = writeln!(buffer, "```json");
        let _ = writeln!(buffer, "{:#}", build_example(fields));
        let _ = writeln!(buffer, "```\n");
    }

    let _ = writeln!(buffer, "### {title} Parameters\n");
    if !fields.is_empty() {
        let _ = writeln!(buffer, "Name|Type|Required|Range|Description");
        let _ = writeln!(buffer, "--|--|--|--|--");
        for field in fields {
            render_rows(buffer, field, 0);
        }
        buffer.push('\n');
    }
}

fn render_rows(buffer: &mut String, field: &FieldInfo, depth: usize) {
    let prefix: String = std::iter::repeat_n(CHILD_MARKER, depth).collect();
    let name = if field.is_compound() {
        format!("**{}**", field.name)
    } else {
        field.name.clone()
    };
    let _ = writeln!(
        buffer,
        "{prefix}{name}|{}|{}|{}|{}",
        escape_cell(&type_column(field)),
        if field.required { "Y" } else { "N" },
        field.range.as_deref().map(escape_cell).unwrap_or_default(),
        field
            .description
            .as_deref()
            .map(escape_cell)
            .unwrap_or_default(),
    );

    for child in &field.children {
        render_rows(buffer, child, depth + 1);
    }
}

fn type_column(field: &FieldInfo) -> String {
    match field.kind {
        ParamKind::Literal => field.ty.to_string(),
        ParamKind::Object if field.opaque => "Object".to_string(),
        ParamKind::Object => field.ty.to_string(),
        ParamKind::Array => match &field.element {
            Some(element) if !field.opaque => format!("{element}[]"),
            _ => "Object[]".to_string(),
        },
    }
}

/// Flatten whitespace and escape characters with table or HTML meaning, so
/// `Page<Product>` is not swallowed as a tag.
fn escape_cell(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('|', "\\|")
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TypeRef;

    #[test]
    fn cells_escape_pipes_and_flatten_newlines() {
        assert_eq!(escape_cell("a|b\n  c"), "a\\|b c");
    }

    #[test]
    fn cells_escape_angle_brackets() {
        assert_eq!(escape_cell("Page<Product>"), "Page&lt;Product&gt;");
        assert_eq!(escape_cell("a & b"), "a &amp; b");
    }

    #[test]
    fn opaque_nodes_render_as_object() {
        let mut object = FieldInfo::new("raw", TypeRef::named("Blob"), ParamKind::Object);
        object.opaque = true;
        assert_eq!(type_column(&object), "Object");

        let mut array = FieldInfo::new(
            "raws",
            TypeRef::generic("List", vec![TypeRef::named("Blob")]),
            ParamKind::Array,
        );
        array.element = Some(TypeRef::named("Blob"));
        assert_eq!(type_column(&array), "Blob[]");
        array.opaque = true;
        assert_eq!(type_column(&array), "Object[]");
    }
}
