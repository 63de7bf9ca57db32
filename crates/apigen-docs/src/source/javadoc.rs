/// Structured representation of a parsed Javadoc comment.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ParsedJavadoc {
    /// First paragraph of the comment body.
    pub summary: Option<String>,
    /// `@param` descriptions keyed by parameter name, in comment order.
    pub params: Vec<(String, String)>,
    /// Description from `@return`.
    pub returns: Option<String>,
}

impl ParsedJavadoc {
    /// Description attached to the parameter called `name`.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(param, _)| param == name)
            .map(|(_, description)| description.as_str())
    }
}

/// Parse a Javadoc block, with or without its `/** */` delimiters.
///
/// Only the tags used by the documentation model are interpreted; inline
/// tags such as `{@code x}` are reduced to their content.
pub fn parse_javadoc(raw: &str) -> ParsedJavadoc {
    let mut parsed = ParsedJavadoc::default();
    let mut summary_lines: Vec<String> = Vec::new();
    let mut current: Option<(String, String)> = None;

    for line in normalize_lines(raw) {
        if let Some(rest) = line.strip_prefix('@') {
            if let Some((tag, payload)) = current.take() {
                apply_tag(&mut parsed, &tag, &payload);
            }
            let (tag, payload) = split_tag_payload(rest);
            current = Some((tag.to_string(), payload.to_string()));
        } else if let Some((_, payload)) = current.as_mut() {
            if !line.is_empty() {
                if !payload.is_empty() {
                    payload.push(' ');
                }
                payload.push_str(&line);
            }
        } else {
            summary_lines.push(line);
        }
    }
    if let Some((tag, payload)) = current.take() {
        apply_tag(&mut parsed, &tag, &payload);
    }

    parsed.summary = compose_summary(summary_lines);
    parsed
}

fn apply_tag(parsed: &mut ParsedJavadoc, tag: &str, payload: &str) {
    match tag {
        "param" => {
            let (name, description) = split_tag_payload(payload);
            if !name.is_empty() && !description.is_empty() {
                parsed
                    .params
                    .push((name.to_string(), clean_inline(description)));
            }
        }
        "return" | "returns" => {
            if !payload.is_empty() {
                parsed.returns = Some(clean_inline(payload));
            }
        }
        _ => {}
    }
}

fn normalize_lines(raw: &str) -> Vec<String> {
    let raw = raw.trim();
    let raw = raw.strip_prefix("/**").unwrap_or(raw);
    let raw = raw.strip_suffix("*/").unwrap_or(raw);
    raw.lines()
        .map(|line| {
            let line = line.trim();
            let line = line.strip_prefix('*').unwrap_or(line);
            line.trim().to_string()
        })
        .collect()
}

fn compose_summary(lines: Vec<String>) -> Option<String> {
    let paragraph = lines
        .into_iter()
        .map(|line| line.replace("<p>", "").replace("</p>", ""))
        .skip_while(|line| line.trim().is_empty())
        .take_while(|line| !line.trim().is_empty())
        .collect::<Vec<_>>();
    let summary = clean_inline(&paragraph.join(" "));
    (!summary.is_empty()).then_some(summary)
}

fn clean_inline(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find("{@") {
        output.push_str(&rest[..start]);
        let inner = &rest[start + 2..];
        match inner.find('}') {
            Some(end) => {
                let (_, content) = split_tag_payload(&inner[..end]);
                output.push_str(content);
                rest = &inner[end + 1..];
            }
            None => {
                output.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    output.push_str(rest);
    output.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn split_tag_payload(input: &str) -> (&str, &str) {
    let mut parts = input.splitn(2, char::is_whitespace);
    let tag = parts.next().unwrap_or("");
    let payload = parts.next().unwrap_or("").trim();
    (tag, payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_summary_and_params() {
        let parsed = parse_javadoc(
            r#"/**
              * Looks up a user by id.
              * Returns {@code null} when absent.
              *
              * More detail that is not part of the summary.
              * @param id the user id
              *           assigned at signup
              * @return the user
              */"#,
        );
        assert_eq!(
            parsed.summary.as_deref(),
            Some("Looks up a user by id. Returns null when absent.")
        );
        assert_eq!(parsed.param("id"), Some("the user id assigned at signup"));
        assert_eq!(parsed.returns.as_deref(), Some("the user"));
    }

    #[test]
    fn empty_comment_has_no_summary() {
        let parsed = parse_javadoc("/** */");
        assert!(parsed.summary.is_none());
        assert!(parsed.params.is_empty());
    }

    #[test]
    fn returns_tag_alias() {
        let parsed = parse_javadoc("/** Count rows.\n * @returns number of rows\n * @deprecated\n */");
        assert_eq!(parsed.summary.as_deref(), Some("Count rows."));
        assert_eq!(parsed.returns.as_deref(), Some("number of rows"));
    }
}
