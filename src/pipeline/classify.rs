//! Heading classification over normalized feature vectors.
//!
//! Final stage of the pipeline: detect a title on the first page, derive
//! font-rank thresholds from the document's distinct normalized sizes, then
//! assign heading levels in a single left-to-right pass. A `used` set of
//! already-claimed texts is threaded through the pass so no line is
//! classified twice (the title seeds it).

use std::collections::HashSet;

use regex::Regex;

use crate::model::{DocumentOutline, FeatureVector, HeadingLevel, OutlineEntry};

use super::config::PipelineConfig;

/// Classifies feature vectors into a title and leveled outline entries.
pub struct HeadingClassifier {
    font_tolerance: f32,
    title_font_ratio: f32,
    title_max_chars: usize,
    heading_max_chars: usize,
    numbered_regex: Regex,
    depth3_regex: Regex,
    caption_regex: Regex,
}

impl HeadingClassifier {
    /// Create a classifier with the given configuration.
    pub fn new(config: &PipelineConfig) -> Self {
        Self {
            font_tolerance: config.font_tolerance,
            title_font_ratio: config.title_font_ratio,
            title_max_chars: config.title_max_chars,
            heading_max_chars: config.heading_max_chars,
            numbered_regex: Regex::new(r"^\s*(\d+(?:\.\d+)*)[.)]?\s+").unwrap(),
            depth3_regex: Regex::new(r"^\s*\d+\.\d+\.\d+[.:)]?\s+").unwrap(),
            caption_regex: Regex::new(r"(?i)^(?:table|figure|appendix|page)\s").unwrap(),
        }
    }

    /// Run the classification pass over the whole-document vector list.
    ///
    /// The input order matters only for title detection; the returned
    /// outline is sorted by (page, text) and deduplicated by
    /// (text, level, page). An empty input degrades to an empty result.
    pub fn classify(&self, vectors: &[FeatureVector]) -> DocumentOutline {
        if vectors.is_empty() {
            return DocumentOutline::default();
        }

        let mut used: HashSet<String> = HashSet::new();
        let title = self.detect_title(vectors, &mut used);

        let (h1_font, h2_font, h3_font) = self.font_thresholds(vectors);
        log::debug!(
            "HeadingClassifier: thresholds h1={:.2} h2={:.2} h3={:.2}",
            h1_font,
            h2_font,
            h3_font
        );

        let mut h1 = Vec::new();
        let mut h2 = Vec::new();
        let mut h3 = Vec::new();

        for v in vectors {
            let text = v.text.as_str();
            if used.contains(text)
                || text.is_empty()
                || v.char_count > self.heading_max_chars
            {
                continue;
            }

            let num_level = self.numbered_level(text);
            let valid = self.is_valid_heading(text);
            let font = v.normalized_font_size;
            let near = |target: f32| (font - target).abs() < self.font_tolerance;

            if (num_level == Some(1) && valid)
                || (near(h1_font)
                    && valid
                    && ((v.is_bold && v.is_centered) || (v.is_bold && v.indentation < 0.2)))
            {
                h1.push(OutlineEntry::new(HeadingLevel::H1, text, v.page));
                used.insert(text.to_string());
                continue;
            }

            if (num_level == Some(2) && valid)
                || (near(h2_font)
                    && valid
                    && ((v.is_bold && v.indentation < 0.3)
                        || (v.num_words <= 4 && v.is_title_case && font > 0.7)))
            {
                h2.push(OutlineEntry::new(HeadingLevel::H2, text, v.page));
                used.insert(text.to_string());
                continue;
            }

            if (num_level == Some(3) && v.num_words <= 10 && valid)
                || (near(h3_font)
                    && v.num_words <= 10
                    && valid
                    && (v.indentation > 0.15 || self.depth3_regex.is_match(text))
                    && (v.is_bold || v.is_title_case))
            {
                h3.push(OutlineEntry::new(HeadingLevel::H3, text, v.page));
                used.insert(text.to_string());
                continue;
            }

            // Unnumbered short heading falls back to H2. The probe is
            // lower-cased while the set stores original-case text.
            if v.num_words <= 3
                && valid
                && v.is_bold
                && font >= 0.7
                && v.indentation < 0.2
                && !used.contains(&text.to_lowercase())
            {
                h2.push(OutlineEntry::new(HeadingLevel::H2, text, v.page));
                used.insert(text.to_string());
            }
        }

        let mut outline: Vec<OutlineEntry> =
            h1.into_iter().chain(h2).chain(h3).collect();
        outline.sort_by(|a, b| a.page.cmp(&b.page).then_with(|| a.text.cmp(&b.text)));

        DocumentOutline {
            title,
            outline: dedup_entries(outline),
        }
    }

    /// Detect the title from the first page.
    ///
    /// Considers the first three page-0 units by top margin; qualifying
    /// lines are space-joined and their texts marked used.
    fn detect_title(&self, vectors: &[FeatureVector], used: &mut HashSet<String>) -> String {
        let max_font = vectors
            .iter()
            .map(|v| v.normalized_font_size)
            .fold(f32::MIN, f32::max);

        let mut first_page: Vec<&FeatureVector> =
            vectors.iter().filter(|v| v.page == 0).collect();
        first_page.sort_by(|a, b| {
            a.top_margin
                .partial_cmp(&b.top_margin)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mut merged: Vec<&str> = Vec::new();
        for v in first_page.iter().take(3) {
            if v.normalized_font_size >= self.title_font_ratio * max_font
                && !v.is_upper
                && !v.has_colon
                && v.char_count <= self.title_max_chars
                && (v.is_centered || v.is_bold || v.is_title_case)
            {
                merged.push(v.text.as_str());
            }
        }

        for text in &merged {
            used.insert((*text).to_string());
        }
        merged.join(" ")
    }

    /// Rank the distinct normalized sizes and derive the level thresholds.
    ///
    /// The largest rank is reserved for the title candidate pool, so H1 uses
    /// the next distinct size down when one exists.
    fn font_thresholds(&self, vectors: &[FeatureVector]) -> (f32, f32, f32) {
        let mut cents: Vec<i64> = vectors
            .iter()
            .map(|v| (v.normalized_font_size * 100.0).round() as i64)
            .collect();
        cents.sort_unstable_by(|a, b| b.cmp(a));
        cents.dedup();
        let ranks: Vec<f32> = cents.into_iter().map(|c| c as f32 / 100.0).collect();

        let h1_font = if ranks.len() > 1 { ranks[1] } else { ranks[0] };
        let h2_font = if ranks.len() > 2 { ranks[2] } else { h1_font - 0.1 };
        let h3_font = ranks
            .iter()
            .copied()
            .find(|f| *f < h2_font)
            .unwrap_or(h2_font - 0.1);

        (h1_font, h2_font, h3_font)
    }

    /// Depth of an explicit numbering prefix ("2.1 " has depth 2), capped
    /// at 3. `None` when the text has no such prefix.
    fn numbered_level(&self, text: &str) -> Option<u8> {
        let caps = self.numbered_regex.captures(text)?;
        let dots = caps[1].matches('.').count();
        Some((dots + 1).min(3) as u8)
    }

    /// Shared validity filter: at least 3 characters after trimming a
    /// trailing colon, not a caption, and containing at least one letter.
    fn is_valid_heading(&self, text: &str) -> bool {
        let stripped = text.trim().trim_end_matches(':');
        if stripped.chars().count() < 3 {
            return false;
        }
        if self.caption_regex.is_match(stripped) {
            return false;
        }
        stripped.chars().any(|c| c.is_alphabetic())
    }
}

/// Drop entries whose (text, level, page) triple was already seen,
/// preserving first-seen order.
fn dedup_entries(entries: Vec<OutlineEntry>) -> Vec<OutlineEntry> {
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .filter(|e| seen.insert((e.text.clone(), e.level, e.page)))
        .collect()
}
