//! # doctoc
//!
//! Document outline extraction for Rust.
//!
//! This library takes page dumps of positioned text lines — rendered text,
//! font runs, and geometry, as produced by a document parser — and derives a
//! structured outline: one document title plus hierarchical H1/H2/H3 headings
//! tagged with the page they appear on. It is intended for documents that
//! carry no embedded outline metadata.
//!
//! ## Quick Start
//!
//! ```no_run
//! use doctoc::{extract_file, render};
//!
//! fn main() -> doctoc::Result<()> {
//!     // Extract an outline from a page-dump JSON file
//!     let outline = extract_file("document.json")?;
//!
//!     let json = render::to_json(&outline, render::JsonFormat::Pretty)?;
//!     println!("{}", json);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## How it works
//!
//! Extraction is a single pass per document, in three stages:
//!
//! 1. **Filter & group** — per page, lines overlapping table regions,
//!    boilerplate dates and page numbers, and noise tokens are dropped;
//!    survivors are merged into paragraph units on a vertical-gap threshold.
//! 2. **Normalize** — document-wide font statistics (most frequent size,
//!    mean size) turn each unit into a feature vector whose sizes are
//!    relative to the document's own typography.
//! 3. **Classify** — a title is detected on the first page, then font-size
//!    ranks combined with typographic and numbering heuristics assign
//!    heading levels.
//!
//! All statistics are whole-document aggregates, so every page must be fed
//! before classification can begin. Thresholds live in [`PipelineConfig`].

pub mod error;
pub mod model;
pub mod pipeline;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{
    BoundingBox, DocumentContent, DocumentOutline, FeatureVector, FontRun, HeadingLevel,
    LineContent, OutlineEntry, PageContent, ParagraphUnit, RawLine,
};
pub use pipeline::{
    FeatureNormalizer, FontStatistics, HeadingClassifier, LineFilter, PipelineConfig,
};
pub use render::{to_json, JsonFormat};

use std::path::Path;

/// Extract an outline from a whole-document page dump.
///
/// # Example
///
/// ```
/// use doctoc::{extract_outline, DocumentContent};
///
/// let doc = DocumentContent::new();
/// // an empty dump has no text spans to classify
/// assert!(extract_outline(&doc).is_err());
/// ```
pub fn extract_outline(doc: &DocumentContent) -> Result<DocumentOutline> {
    extract_outline_with_config(doc, PipelineConfig::default())
}

/// Extract an outline with a custom pipeline configuration.
///
/// # Example
///
/// ```no_run
/// use doctoc::{extract_outline_with_config, DocumentContent, PipelineConfig};
///
/// let doc: DocumentContent = serde_json::from_str("...").unwrap();
/// let config = PipelineConfig::new().with_line_gap(20.0);
/// let outline = extract_outline_with_config(&doc, config).unwrap();
/// ```
pub fn extract_outline_with_config(
    doc: &DocumentContent,
    config: PipelineConfig,
) -> Result<DocumentOutline> {
    let mut extractor = OutlineExtractor::with_config(config);
    for page in &doc.pages {
        extractor.add_page(page);
    }
    extractor.finish()
}

/// Extract an outline from a JSON page dump.
///
/// # Example
///
/// ```no_run
/// use doctoc::extract_str;
///
/// let json = std::fs::read_to_string("document.json").unwrap();
/// let outline = extract_str(&json).unwrap();
/// println!("title: {}", outline.title);
/// ```
pub fn extract_str(json: &str) -> Result<DocumentOutline> {
    let doc: DocumentContent = serde_json::from_str(json)?;
    extract_outline(&doc)
}

/// Extract an outline from a JSON page-dump file.
///
/// # Example
///
/// ```no_run
/// use doctoc::extract_file;
///
/// let outline = extract_file("document.json").unwrap();
/// for entry in &outline.outline {
///     println!("{} {} (page {})", entry.level, entry.text, entry.page);
/// }
/// ```
pub fn extract_file<P: AsRef<Path>>(path: P) -> Result<DocumentOutline> {
    let json = std::fs::read_to_string(path)?;
    extract_str(&json)
}

/// Incremental outline extractor fed one page at a time.
///
/// Useful when pages arrive from a streaming parser. Font statistics are a
/// whole-document aggregate, so classification only happens in
/// [`finish`](OutlineExtractor::finish) after every page has been added.
/// Each extractor owns its own statistics and scan state; independent
/// documents can be processed by independent extractors in parallel.
///
/// # Example
///
/// ```
/// use doctoc::{OutlineExtractor, PageContent};
///
/// let mut extractor = OutlineExtractor::new();
/// extractor.add_page(&PageContent::new(0, 612.0, 792.0));
/// // a document with no text at all is an error
/// assert!(extractor.finish().is_err());
/// ```
pub struct OutlineExtractor {
    config: PipelineConfig,
    filter: LineFilter,
    units: Vec<ParagraphUnit>,
    stats: FontStatistics,
}

impl OutlineExtractor {
    /// Create an extractor with default configuration.
    pub fn new() -> Self {
        Self::with_config(PipelineConfig::default())
    }

    /// Create an extractor with a custom configuration.
    pub fn with_config(config: PipelineConfig) -> Self {
        let filter = LineFilter::new(&config);
        Self {
            config,
            filter,
            units: Vec::new(),
            stats: FontStatistics::new(),
        }
    }

    /// Filter one page's lines, record font statistics, and group the
    /// survivors into paragraph units.
    pub fn add_page(&mut self, page: &PageContent) {
        let lines = self.filter.filter_page(page.raw_lines(), &page.tables);
        for line in &lines {
            for run in &line.runs {
                self.stats.record(run.size);
            }
        }
        let units = self.filter.group_units(lines);
        self.units.extend(units);
    }

    /// Normalize and classify everything added so far.
    ///
    /// Fails with [`Error::EmptyDocument`] when no page contributed a
    /// single text span.
    pub fn finish(self) -> Result<DocumentOutline> {
        let normalizer = FeatureNormalizer::new(&self.config);
        let vectors = normalizer.normalize(&self.units, &self.stats)?;
        let classifier = HeadingClassifier::new(&self.config);
        Ok(classifier.classify(&vectors))
    }
}

impl Default for OutlineExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_with_line(text: &str, size: f32, family: &str) -> PageContent {
        let mut page = PageContent::new(0, 612.0, 792.0);
        page.lines.push(LineContent {
            text: text.to_string(),
            y: 72.0,
            runs: vec![FontRun::new(
                size,
                family,
                BoundingBox::new(72.0, 72.0, 300.0, 72.0 + size),
            )],
        });
        page
    }

    #[test]
    fn test_empty_document_errors() {
        let doc = DocumentContent::new();
        assert!(matches!(extract_outline(&doc), Err(Error::EmptyDocument)));
    }

    #[test]
    fn test_extract_str_invalid_json() {
        let result = extract_str("not json at all");
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_extract_str_minimal_document() {
        let json = r#"{
            "pages": [{
                "page": 0,
                "width": 612.0,
                "height": 792.0,
                "lines": [{
                    "text": "Some body content here",
                    "y": 72.0,
                    "runs": [{
                        "size": 12.0,
                        "family": "Helvetica",
                        "bbox": {"x0": 72.0, "y0": 72.0, "x1": 300.0, "y1": 84.0}
                    }]
                }]
            }]
        }"#;
        let outline = extract_str(json).unwrap();
        // single plain-text unit: no title, no headings, no error
        assert_eq!(outline.title, "");
        assert!(outline.outline.is_empty());
    }

    #[test]
    fn test_extractor_single_heading_document() {
        let mut extractor = OutlineExtractor::new();
        // mixed case keeps it out of the title candidate pool
        extractor.add_page(&page_with_line("1 Introduction to parsing", 12.0, "Helvetica"));
        let outline = extractor.finish().unwrap();
        assert_eq!(outline.title, "");
        assert_eq!(outline.outline.len(), 1);
        assert_eq!(outline.outline[0].level, HeadingLevel::H1);
        assert_eq!(outline.outline[0].text, "1 Introduction to parsing");
    }

    #[test]
    fn test_whitespace_only_document_errors() {
        let mut extractor = OutlineExtractor::new();
        extractor.add_page(&page_with_line("   ", 12.0, "Helvetica"));
        assert!(matches!(extractor.finish(), Err(Error::EmptyDocument)));
    }
}
