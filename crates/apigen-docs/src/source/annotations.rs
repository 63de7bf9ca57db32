//! Validation annotations mapped onto required flags and value ranges.

use tree_sitter::Node;

const REQUIRED_MARKERS: &[&str] = &["NotNull", "NonNull", "Nonnull", "NotBlank", "NotEmpty"];

/// An annotation with its arguments as raw source text.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Annotation {
    pub name: String,
    /// `(key, value)` pairs; a single unnamed argument is keyed `value`.
    pub args: Vec<(String, String)>,
}

impl Annotation {
    fn arg(&self, key: &str) -> Option<&str> {
        self.args
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }
}

/// Annotations found among the children of a `modifiers` node.
pub(crate) fn collect(modifiers: Node<'_>, source: &[u8]) -> Vec<Annotation> {
    let mut cursor = modifiers.walk();
    modifiers
        .named_children(&mut cursor)
        .filter(|child| matches!(child.kind(), "annotation" | "marker_annotation"))
        .filter_map(|child| parse_annotation(child, source))
        .collect()
}

fn parse_annotation(node: Node<'_>, source: &[u8]) -> Option<Annotation> {
    let name = node.child_by_field_name("name")?.utf8_text(source).ok()?;
    let name = name.rsplit('.').next().unwrap_or(name).to_string();

    let mut args = Vec::new();
    if let Some(list) = node.child_by_field_name("arguments") {
        let mut cursor = list.walk();
        for argument in list.named_children(&mut cursor) {
            if argument.kind() == "element_value_pair" {
                let key = argument
                    .child_by_field_name("key")
                    .and_then(|key| key.utf8_text(source).ok());
                let value = argument
                    .child_by_field_name("value")
                    .and_then(|value| value.utf8_text(source).ok());
                if let (Some(key), Some(value)) = (key, value) {
                    args.push((key.to_string(), unquote(value)));
                }
            } else if let Ok(value) = argument.utf8_text(source) {
                args.push(("value".to_string(), unquote(value)));
            }
        }
    }
    Some(Annotation { name, args })
}

fn unquote(value: &str) -> String {
    let value = value.trim();
    value
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(value)
        .to_string()
}

pub(crate) fn is_required(annotations: &[Annotation]) -> bool {
    annotations
        .iter()
        .any(|annotation| REQUIRED_MARKERS.contains(&annotation.name.as_str()))
}

/// Human-readable range text derived from bean-validation style annotations.
pub(crate) fn value_range(annotations: &[Annotation]) -> Option<String> {
    let mut min = None;
    let mut max = None;
    let mut length = (None, None);
    let mut parts = Vec::new();

    for annotation in annotations {
        match annotation.name.as_str() {
            "Min" | "DecimalMin" => min = annotation.arg("value"),
            "Max" | "DecimalMax" => max = annotation.arg("value"),
            "Range" => {
                min = annotation.arg("min").or(min);
                max = annotation.arg("max").or(max);
            }
            "Size" | "Length" => {
                length = (annotation.arg("min"), annotation.arg("max"));
            }
            "Pattern" => {
                if let Some(pattern) = annotation.arg("regexp") {
                    parts.push(format!("pattern: {pattern}"));
                }
            }
            _ => {}
        }
    }

    if let Some(bounds) = format_bounds(min, max) {
        parts.insert(0, bounds);
    }
    if let Some(bounds) = format_bounds(length.0, length.1) {
        parts.push(format!("length {bounds}"));
    }
    (!parts.is_empty()).then(|| parts.join("; "))
}

fn format_bounds(min: Option<&str>, max: Option<&str>) -> Option<String> {
    match (min, max) {
        (Some(min), Some(max)) => Some(format!("[{min}, {max}]")),
        (Some(min), None) => Some(format!(">= {min}")),
        (None, Some(max)) => Some(format!("<= {max}")),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annotation(name: &str, args: &[(&str, &str)]) -> Annotation {
        Annotation {
            name: name.to_string(),
            args: args
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        }
    }

    #[test]
    fn not_null_marks_required() {
        assert!(is_required(&[annotation("NotNull", &[])]));
        assert!(is_required(&[annotation("NotBlank", &[])]));
        assert!(!is_required(&[annotation("Deprecated", &[])]));
    }

    #[test]
    fn min_and_max_form_closed_range() {
        let range = value_range(&[
            annotation("Min", &[("value", "1")]),
            annotation("Max", &[("value", "100")]),
        ]);
        assert_eq!(range.as_deref(), Some("[1, 100]"));
    }

    #[test]
    fn open_bounds_and_lengths() {
        assert_eq!(
            value_range(&[annotation("Min", &[("value", "0")])]).as_deref(),
            Some(">= 0")
        );
        assert_eq!(
            value_range(&[annotation("Size", &[("max", "32")])]).as_deref(),
            Some("length <= 32")
        );
        assert_eq!(
            value_range(&[
                annotation("Range", &[("min", "1"), ("max", "9")]),
                annotation("Pattern", &[("regexp", "^[0-9]+$")]),
            ])
            .as_deref(),
            Some("[1, 9]; pattern: ^[0-9]+$")
        );
        assert!(value_range(&[annotation("NotNull", &[])]).is_none());
    }
}
