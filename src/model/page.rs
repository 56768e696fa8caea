//! Page-dump types: the input boundary with the document-parsing collaborator.
//!
//! The core makes no assumption about the originating file format beyond
//! "positioned text with font metadata" — any parser producing this shape is
//! substitutable.

use serde::{Deserialize, Serialize};

use super::{BoundingBox, FontRun, RawLine};

/// One line within a page dump.
///
/// Page index and dimensions are stored once per page and stamped onto each
/// line by [`PageContent::raw_lines`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineContent {
    /// The rendered text of the line
    pub text: String,
    /// Vertical position (top edge) in layout units
    pub y: f32,
    /// Font runs making up the line
    pub runs: Vec<FontRun>,
}

/// One page of collaborator output: positioned lines plus table regions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageContent {
    /// Zero-based page index
    pub page: u32,
    /// Page width in layout units
    pub width: f32,
    /// Page height in layout units
    pub height: f32,
    /// Bounding boxes of detected table regions on this page
    #[serde(default)]
    pub tables: Vec<BoundingBox>,
    /// Positioned text lines on this page
    pub lines: Vec<LineContent>,
}

impl PageContent {
    /// Create an empty page with the given index and dimensions.
    pub fn new(page: u32, width: f32, height: f32) -> Self {
        Self {
            page,
            width,
            height,
            tables: Vec::new(),
            lines: Vec::new(),
        }
    }

    /// Materialize this page's lines as self-contained [`RawLine`]s.
    pub fn raw_lines(&self) -> Vec<RawLine> {
        self.lines
            .iter()
            .map(|line| RawLine {
                text: line.text.clone(),
                runs: line.runs.clone(),
                y: line.y,
                page: self.page,
                page_width: self.width,
                page_height: self.height,
            })
            .collect()
    }
}

/// A whole-document page dump from the parsing collaborator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentContent {
    /// Pages in reading order
    pub pages: Vec<PageContent>,
}

impl DocumentContent {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page to the document.
    pub fn add_page(&mut self, page: PageContent) {
        self.pages.push(page);
    }

    /// Number of pages in the dump.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}
