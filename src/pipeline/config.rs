//! Pipeline configuration.

/// Tunable thresholds for the extraction pipeline.
///
/// Every heuristic constant lives here so tests and callers can override
/// them without touching the filtering or classification logic. The defaults
/// are the values the rule set was tuned with; all size thresholds are
/// relative to the document's own font statistics, never absolute points.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Vertical gap (layout units) above which a new paragraph unit starts
    pub line_gap: f32,

    /// A line containing any single token with at least this many characters
    /// is dropped as noise (URLs, identifiers)
    pub max_token_len: usize,

    /// Units whose text has fewer non-space characters than this are dropped
    /// before feature extraction
    pub min_unit_chars: usize,

    /// A unit is centered when its midpoint is within this fraction of page
    /// width from the page center
    pub centering_band: f32,

    /// Tolerance for all normalized-font comparisons; never exact equality,
    /// since normalized sizes carry rounding noise
    pub font_tolerance: f32,

    /// A title candidate's normalized font must reach this fraction of the
    /// document maximum
    pub title_font_ratio: f32,

    /// Maximum character count for a title candidate line
    pub title_max_chars: usize,

    /// Units longer than this many characters are never headings
    pub heading_max_chars: usize,
}

impl PipelineConfig {
    /// Create a configuration with default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the paragraph-grouping gap threshold.
    pub fn with_line_gap(mut self, gap: f32) -> Self {
        self.line_gap = gap;
        self
    }

    /// Set the noise-token length cutoff.
    pub fn with_max_token_len(mut self, len: usize) -> Self {
        self.max_token_len = len;
        self
    }

    /// Set the minimum non-space character count for a unit.
    pub fn with_min_unit_chars(mut self, chars: usize) -> Self {
        self.min_unit_chars = chars;
        self
    }

    /// Set the centering band as a fraction of page width.
    pub fn with_centering_band(mut self, band: f32) -> Self {
        self.centering_band = band;
        self
    }

    /// Set the normalized-font comparison tolerance.
    pub fn with_font_tolerance(mut self, tolerance: f32) -> Self {
        self.font_tolerance = tolerance;
        self
    }

    /// Set the title font ratio.
    pub fn with_title_font_ratio(mut self, ratio: f32) -> Self {
        self.title_font_ratio = ratio;
        self
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            line_gap: 15.0,
            max_token_len: 15,
            min_unit_chars: 4,
            centering_band: 0.05,
            font_tolerance: 0.03,
            title_font_ratio: 0.95,
            title_max_chars: 100,
            heading_max_chars: 120,
        }
    }
}
