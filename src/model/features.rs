//! Per-unit feature vectors consumed by the heading classifier.

use serde::{Deserialize, Serialize};

/// Normalized features for one paragraph unit.
///
/// Every field is always present; there is no "missing key" state. Sizes are
/// expressed relative to the document's own font-size statistics, never in
/// absolute points — this is what lets one rule set work across documents
/// with wildly different base typography.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeatureVector {
    /// The unit's combined text, trimmed
    pub text: String,

    /// Mean rounded run size divided by the document's most-frequent size,
    /// rounded to 2 decimals. The primary heading-rank signal.
    pub normalized_font_size: f32,

    /// Mean rounded run size divided by the document mean size, rounded to
    /// 2 decimals. Secondary signal.
    pub line_height_ratio: f32,

    /// Any run's family name carries a bold marker
    pub is_bold: bool,

    /// Any run's family name carries an italic or oblique marker
    pub is_italic: bool,

    /// First-run midpoint within the centering band of the page center
    pub is_centered: bool,

    /// All cased characters are upper-case (and at least one exists)
    pub is_upper: bool,

    /// Every alphabetic-leading word starts with an upper-case letter
    pub is_title_case: bool,

    /// Text starts with a 1–2 digit number, optionally `.` or `)`, then
    /// whitespace
    pub starts_number: bool,

    /// Text contains a colon
    pub has_colon: bool,

    /// Character count of the text
    pub char_count: usize,

    /// Whitespace-separated word count
    pub num_words: usize,

    /// Number of `.` characters in the text
    pub has_dots: usize,

    /// Length of the dominant font family name (coarse font-identity proxy)
    pub font_name_len: usize,

    /// First-run left edge divided by page width, rounded to 3 decimals
    pub indentation: f32,

    /// First-run top edge divided by page height, rounded to 3 decimals
    pub position_in_page: f32,

    /// First-run top edge in raw layout units, rounded to 2 decimals
    pub top_margin: f32,

    /// Zero-based page index
    pub page: u32,
}
