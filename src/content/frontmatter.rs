//! Split YAML frontmatter from document bodies and parse it into page data.

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

use crate::error::{Result, content};

/// Frontmatter of a document
///
/// `title` is required. Keys that are not known fields are kept in `extra`
/// so downstream consumers can read custom properties (author, date, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageData {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub full: bool,
    #[serde(flatten)]
    pub extra: Mapping,
}

impl PageData {
    /// Page data with only a title
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            icon: None,
            full: false,
            extra: Mapping::new(),
        }
    }

    /// Get a custom string property by key
    pub fn get_str(&self, key: &str) -> Option<String> {
        let v = self.extra.get(Value::String(key.to_string()))?;
        match v {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

/// Split content into the raw frontmatter (between first `---` and second `---`)
/// and the body. Returns `None` when the delimiters are missing.
///
/// The body is the original text after the closing `---` line, line
/// endings included.
pub fn split_frontmatter(content: &str) -> Option<(String, String)> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut lines = content.split_inclusive('\n');
    let opening = lines.next()?;
    if opening.trim() != "---" {
        return None;
    }

    let start = opening.len();
    let mut offset = start;
    for line in lines {
        if line.trim() == "---" {
            let frontmatter = content[start..offset].to_string();
            let body = content[offset + line.len()..].to_string();
            return Some((frontmatter, body));
        }
        offset += line.len();
    }
    None
}

/// Parse a document into validated page data and body.
///
/// `path` is only used for error messages.
pub fn parse_document(path: &str, content: &str) -> Result<(PageData, String)> {
    let (raw, body) = split_frontmatter(content)
        .ok_or_else(|| content::invalid_frontmatter(path, "missing `---` frontmatter block"))?;

    let value: Value = serde_yaml::from_str(&raw)
        .map_err(|e| content::invalid_frontmatter(path, e.to_string()))?;
    if value.is_null() {
        return Err(content::invalid_frontmatter(path, "frontmatter is empty"));
    }
    if value.as_mapping().is_none() {
        return Err(content::invalid_frontmatter(
            path,
            "frontmatter must be a mapping",
        ));
    }

    let data: PageData = serde_yaml::from_value(value)
        .map_err(|e| content::invalid_frontmatter(path, e.to_string()))?;
    Ok((data, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SourceError;

    #[test]
    fn split_no_frontmatter() {
        let content = "just body\nno delimiters";
        assert!(split_frontmatter(content).is_none());
    }

    #[test]
    fn split_unterminated_frontmatter() {
        assert!(split_frontmatter("---\ntitle: a\nbody").is_none());
    }

    #[test]
    fn test_parse_document() {
        let content = "---\ntitle: Hello\ndescription: first post\n---\n\nbody here";
        let (data, body) = parse_document("hello.mdx", content).expect("Should parse document");
        assert_eq!(data.title, "Hello");
        assert_eq!(data.description.as_deref(), Some("first post"));
        assert!(!data.full);
        assert_eq!(body.trim(), "body here");
    }

    #[test]
    fn parse_keeps_custom_fields() {
        let content = "---\ntitle: Hello\nauthor: jane\ndate: 2024-01-02\n---\n";
        let (data, _) = parse_document("hello.md", content).expect("Should parse document");
        assert_eq!(data.get_str("author").as_deref(), Some("jane"));
        assert_eq!(data.get_str("date").as_deref(), Some("2024-01-02"));
        assert!(data.get_str("missing").is_none());
    }

    #[test]
    fn parse_strips_bom() {
        let content = "\u{feff}---\ntitle: Bom\n---\nx";
        let (data, body) = parse_document("bom.md", content).expect("Should parse document");
        assert_eq!(data.title, "Bom");
        assert_eq!(body, "x");
    }

    #[test]
    fn split_keeps_body_line_endings() {
        let (frontmatter, body) = split_frontmatter("---\ntitle: A\n---\nline\n\n").unwrap();
        assert_eq!(frontmatter, "title: A\n");
        assert_eq!(body, "line\n\n");

        let crlf = "---\r\ntitle: A\r\n---\r\none\r\ntwo\r\n";
        let (data, body) = parse_document("crlf.md", crlf).expect("Should parse document");
        assert_eq!(data.title, "A");
        assert_eq!(body, "one\r\ntwo\r\n");
    }

    #[test]
    fn split_closing_delimiter_at_end_of_file() {
        let (_, body) = split_frontmatter("---\ntitle: A\n---").unwrap();
        assert_eq!(body, "");
    }

    #[test]
    fn parse_requires_title() {
        let err = parse_document("a.md", "---\ndescription: no title\n---\n").unwrap_err();
        assert!(matches!(err, SourceError::InvalidFrontmatter { .. }));
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn parse_rejects_empty_frontmatter() {
        let err = parse_document("a.md", "---\n---\nbody").unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn parse_rejects_missing_block() {
        let err = parse_document("a.md", "# Title\n").unwrap_err();
        assert!(matches!(err, SourceError::InvalidFrontmatter { .. }));
    }

    #[test]
    fn parse_rejects_sequence_frontmatter() {
        let err = parse_document("a.md", "---\n- a\n- b\n---\n").unwrap_err();
        assert!(err.to_string().contains("mapping"));
    }
}
