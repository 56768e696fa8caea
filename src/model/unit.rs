//! Paragraph units: vertically-contiguous groups of lines.

use super::{BoundingBox, FontRun, RawLine};

/// A group of lines merged because the vertical gaps between them stayed
/// within the grouping threshold.
///
/// Units are owned transiently by a pipeline run and discarded after feature
/// extraction. A unit never spans lines separated by a larger gap.
#[derive(Debug, Clone, Default)]
pub struct ParagraphUnit {
    /// Member lines in vertical order
    pub lines: Vec<RawLine>,
}

impl ParagraphUnit {
    /// Create an empty unit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line to the unit.
    pub fn push(&mut self, line: RawLine) {
        self.lines.push(line);
    }

    /// Check whether the unit has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Combined text of the unit: member line texts space-joined and trimmed.
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string()
    }

    /// All font runs of the unit, in line order.
    pub fn runs(&self) -> impl Iterator<Item = &FontRun> {
        self.lines.iter().flat_map(|l| l.runs.iter())
    }

    /// Bounding box of the unit's first run.
    pub fn first_bbox(&self) -> Option<&BoundingBox> {
        self.runs().next().map(|r| &r.bbox)
    }

    /// Page index of the unit (from its first line).
    pub fn page(&self) -> u32 {
        self.lines.first().map(|l| l.page).unwrap_or(0)
    }

    /// Page width of the unit's page.
    pub fn page_width(&self) -> f32 {
        self.lines.first().map(|l| l.page_width).unwrap_or(0.0)
    }

    /// Page height of the unit's page.
    pub fn page_height(&self) -> f32 {
        self.lines.first().map(|l| l.page_height).unwrap_or(0.0)
    }
}
