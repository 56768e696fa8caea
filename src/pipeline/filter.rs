//! Line filtering and paragraph grouping.
//!
//! First stage of the pipeline: per page, drop lines that cannot carry
//! structural meaning (table contents, boilerplate dates and page numbers,
//! noise tokens), then merge the survivors into paragraph units on a
//! vertical-gap threshold.

use regex::Regex;

use crate::model::{BoundingBox, ParagraphUnit, RawLine};

use super::config::PipelineConfig;

/// Filters raw lines and groups survivors into paragraph units.
///
/// This stage never fails: a page where every line is filtered simply
/// contributes zero units.
pub struct LineFilter {
    line_gap: f32,
    max_token_len: usize,
    date_regex: Regex,
    page_label_regex: Regex,
    bare_number_regex: Regex,
}

impl LineFilter {
    /// Create a new filter with the given configuration.
    pub fn new(config: &PipelineConfig) -> Self {
        Self {
            line_gap: config.line_gap,
            max_token_len: config.max_token_len,
            date_regex: Regex::new(
                r"(?i)\b(?:\d{1,2}[-/]\d{1,2}[-/]\d{2,4}|\d{4}[-/]\d{1,2}[-/]\d{1,2}|(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s+\d{4})\b",
            )
            .unwrap(),
            page_label_regex: Regex::new(r"^page\s*\d+$").unwrap(),
            bare_number_regex: Regex::new(r"^\d{1,3}$").unwrap(),
        }
    }

    /// Filter one page's lines against its table regions.
    ///
    /// Survivors are returned sorted by vertical position ascending.
    pub fn filter_page(&self, lines: Vec<RawLine>, tables: &[BoundingBox]) -> Vec<RawLine> {
        let total = lines.len();
        let mut kept: Vec<RawLine> = lines
            .into_iter()
            .filter(|line| self.keep_line(line, tables))
            .collect();
        kept.sort_by(|a, b| a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal));
        log::debug!("LineFilter: kept {} of {} lines", kept.len(), total);
        kept
    }

    fn keep_line(&self, line: &RawLine, tables: &[BoundingBox]) -> bool {
        // Even partial table overlap suppresses the whole line, so table
        // cell text never pollutes heading candidates.
        if let Some(bbox) = line.bbox() {
            if tables.iter().any(|t| bbox.intersects(t)) {
                return false;
            }
        }

        let text = line.text.trim();
        if text.is_empty() {
            return false;
        }
        if text
            .split_whitespace()
            .any(|token| token.chars().count() >= self.max_token_len)
        {
            return false;
        }
        if self.is_date_like(text) || self.is_page_label(text) {
            return false;
        }
        true
    }

    fn is_date_like(&self, text: &str) -> bool {
        self.date_regex.is_match(text)
    }

    fn is_page_label(&self, text: &str) -> bool {
        self.page_label_regex.is_match(&text.to_lowercase())
            || self.bare_number_regex.is_match(text)
    }

    /// Group vertically-sorted lines into paragraph units.
    ///
    /// A new unit starts whenever the gap to the previous line exceeds the
    /// configured threshold; the trailing unit is flushed at page end.
    pub fn group_units(&self, lines: Vec<RawLine>) -> Vec<ParagraphUnit> {
        let mut units = Vec::new();
        let mut current = ParagraphUnit::new();
        let mut last_y: Option<f32> = None;

        for line in lines {
            if let Some(prev_y) = last_y {
                if (line.y - prev_y).abs() > self.line_gap && !current.is_empty() {
                    units.push(std::mem::take(&mut current));
                }
            }
            last_y = Some(line.y);
            current.push(line);
        }
        if !current.is_empty() {
            units.push(current);
        }

        log::debug!("LineFilter: grouped into {} units", units.len());
        units
    }
}
