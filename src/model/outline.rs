//! Outline output types: the boundary with the serialization collaborator.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Heading depth of an outline entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeadingLevel {
    /// Top-level heading
    H1,
    /// Second-level heading
    H2,
    /// Third-level heading
    H3,
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeadingLevel::H1 => write!(f, "H1"),
            HeadingLevel::H2 => write!(f, "H2"),
            HeadingLevel::H3 => write!(f, "H3"),
        }
    }
}

/// A single heading in the extracted outline.
///
/// Immutable once created; deduplicated by (text, level, page) before output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineEntry {
    /// Heading level
    pub level: HeadingLevel,
    /// Heading text
    pub text: String,
    /// Zero-based page index the heading appears on
    pub page: u32,
}

impl OutlineEntry {
    /// Create a new outline entry.
    pub fn new(level: HeadingLevel, text: impl Into<String>, page: u32) -> Self {
        Self {
            level,
            text: text.into(),
            page,
        }
    }
}

/// The extraction result: a document title plus the ordered heading list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentOutline {
    /// Detected document title; empty when no line qualified
    pub title: String,
    /// Outline entries sorted by (page, text)
    pub outline: Vec<OutlineEntry>,
}

impl DocumentOutline {
    /// Check whether the outline has neither a title nor any entries.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.outline.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_serializes_as_plain_string() {
        let entry = OutlineEntry::new(HeadingLevel::H2, "1.1 Background", 0);
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            json,
            r#"{"level":"H2","text":"1.1 Background","page":0}"#
        );
    }

    #[test]
    fn test_level_display() {
        assert_eq!(HeadingLevel::H1.to_string(), "H1");
        assert_eq!(HeadingLevel::H3.to_string(), "H3");
    }

    #[test]
    fn test_outline_record_shape() {
        let outline = DocumentOutline {
            title: "A Title".to_string(),
            outline: vec![OutlineEntry::new(HeadingLevel::H1, "Overview", 0)],
        };
        let json = serde_json::to_string(&outline).unwrap();
        assert!(json.starts_with(r#"{"title":"A Title","outline":["#));
    }

    #[test]
    fn test_empty_outline() {
        assert!(DocumentOutline::default().is_empty());
    }
}
