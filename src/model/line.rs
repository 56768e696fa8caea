//! Raw positioned-line types supplied by the document-parsing collaborator.

use serde::{Deserialize, Serialize};

use super::BoundingBox;

/// A contiguous piece of text sharing one font size and family within a line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FontRun {
    /// Font size in points
    pub size: f32,
    /// Font family name (e.g., "Helvetica-Bold")
    pub family: String,
    /// Bounding box of the run
    pub bbox: BoundingBox,
}

impl FontRun {
    /// Create a new font run.
    pub fn new(size: f32, family: impl Into<String>, bbox: BoundingBox) -> Self {
        Self {
            size,
            family: family.into(),
            bbox,
        }
    }
}

/// A rendered text line with position and font metadata.
///
/// Lines are ephemeral: they exist only between the collaborator boundary and
/// paragraph grouping, and are never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawLine {
    /// The rendered text of the line
    pub text: String,
    /// Font runs making up the line
    pub runs: Vec<FontRun>,
    /// Vertical position (top edge) in layout units
    pub y: f32,
    /// Zero-based page index
    pub page: u32,
    /// Page width in layout units
    pub page_width: f32,
    /// Page height in layout units
    pub page_height: f32,
}

impl RawLine {
    /// Geometric box of the line: the union of its run boxes.
    ///
    /// Returns `None` for a line without runs.
    pub fn bbox(&self) -> Option<BoundingBox> {
        let mut runs = self.runs.iter();
        let first = runs.next()?.bbox;
        Some(runs.fold(first, |acc, run| acc.union(&run.bbox)))
    }
}
