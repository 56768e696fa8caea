//! Whole-document font statistics and feature derivation.
//!
//! Second stage of the pipeline. Statistics are a whole-document aggregate:
//! every page must be filtered before any feature vector can be derived,
//! because normalization divides by the document's most-frequent font size.

use std::collections::HashMap;

use regex::Regex;

use crate::error::{Error, Result};
use crate::model::{FeatureVector, ParagraphUnit};

use super::config::PipelineConfig;

/// Font-size observations accumulated over every surviving line.
///
/// Sizes are rounded to 2 decimals and keyed in centi-points, so equal
/// rounded sizes always land in the same bucket.
#[derive(Debug, Clone, Default)]
pub struct FontStatistics {
    histogram: HashMap<i64, usize>,
    sum: f64,
    count: usize,
}

impl FontStatistics {
    /// Create empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one run's font size.
    pub fn record(&mut self, size: f32) {
        let cents = (f64::from(size) * 100.0).round() as i64;
        *self.histogram.entry(cents).or_insert(0) += 1;
        self.sum += cents as f64 / 100.0;
        self.count += 1;
    }

    /// Check whether any size has been recorded.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Arithmetic mean of the rounded sizes.
    ///
    /// Fails with [`Error::EmptyDocument`] when nothing was recorded.
    pub fn mean(&self) -> Result<f32> {
        if self.is_empty() {
            return Err(Error::EmptyDocument);
        }
        Ok((self.sum / self.count as f64) as f32)
    }

    /// Most frequent rounded size.
    ///
    /// When several sizes tie for the highest frequency there is no unique
    /// mode and the mean is substituted.
    pub fn mode(&self) -> Result<f32> {
        if self.is_empty() {
            return Err(Error::EmptyDocument);
        }
        let max_count = self.histogram.values().copied().max().unwrap_or(0);
        let mut modes = self
            .histogram
            .iter()
            .filter(|(_, count)| **count == max_count)
            .map(|(cents, _)| *cents);
        let first = modes.next();
        match (first, modes.next()) {
            (Some(cents), None) => Ok(cents as f32 / 100.0),
            _ => self.mean(),
        }
    }
}

/// Derives one feature vector per retained paragraph unit.
pub struct FeatureNormalizer {
    min_unit_chars: usize,
    centering_band: f32,
    leading_number_regex: Regex,
}

impl FeatureNormalizer {
    /// Create a normalizer with the given configuration.
    pub fn new(config: &PipelineConfig) -> Self {
        Self {
            min_unit_chars: config.min_unit_chars,
            centering_band: config.centering_band,
            leading_number_regex: Regex::new(r"^[1-9]\d?[.)]?\s").unwrap(),
        }
    }

    /// Derive feature vectors for every non-trivial unit, in reading order.
    ///
    /// Units whose text has fewer than the configured non-space characters
    /// carry no classification signal and are silently excluded, as are
    /// malformed units without a single font run.
    pub fn normalize(
        &self,
        units: &[ParagraphUnit],
        stats: &FontStatistics,
    ) -> Result<Vec<FeatureVector>> {
        let mode_size = stats.mode()?;
        let mean_size = stats.mean()?;

        let mut vectors = Vec::new();
        for unit in units {
            let text = unit.text();
            if text.chars().filter(|c| *c != ' ').count() < self.min_unit_chars {
                continue;
            }
            if unit.runs().next().is_none() {
                log::debug!("FeatureNormalizer: skipping unit without runs: {:?}", text);
                continue;
            }
            vectors.push(self.vector_for(unit, text, mode_size, mean_size));
        }

        log::debug!(
            "FeatureNormalizer: {} vectors from {} units (mode {:.2}, mean {:.2})",
            vectors.len(),
            units.len(),
            mode_size,
            mean_size
        );
        Ok(vectors)
    }

    fn vector_for(
        &self,
        unit: &ParagraphUnit,
        text: String,
        mode_size: f32,
        mean_size: f32,
    ) -> FeatureVector {
        let sizes: Vec<f32> = unit.runs().map(|r| round_to(r.size, 2)).collect();
        let avg_size = sizes.iter().sum::<f32>() / sizes.len() as f32;

        let font_name = dominant_family(unit);
        let bbox = *unit.first_bbox().expect("unit has at least one run");
        let page_width = unit.page_width();
        let page_height = unit.page_height();

        let centered = (bbox.center_x() - page_width / 2.0).abs()
            < page_width * self.centering_band;

        FeatureVector {
            normalized_font_size: round_to(avg_size / mode_size, 2),
            line_height_ratio: round_to(avg_size / mean_size, 2),
            is_bold: unit
                .runs()
                .any(|r| r.family.to_lowercase().contains("bold")),
            is_italic: unit.runs().any(|r| {
                let family = r.family.to_lowercase();
                family.contains("italic") || family.contains("oblique")
            }),
            is_centered: centered,
            is_upper: is_fully_upper(&text),
            is_title_case: is_title_case(&text),
            starts_number: self.leading_number_regex.is_match(text.trim()),
            has_colon: text.contains(':'),
            char_count: text.chars().count(),
            num_words: text.split_whitespace().count(),
            has_dots: text.matches('.').count(),
            font_name_len: font_name.chars().count(),
            indentation: round_to(bbox.x0 / page_width, 3),
            position_in_page: round_to(bbox.y0 / page_height, 3),
            top_margin: round_to(bbox.y0, 2),
            page: unit.page(),
            text,
        }
    }
}

/// Dominant font family of a unit: plurality vote over its runs' family
/// names, ties broken by first-encountered order.
fn dominant_family(unit: &ParagraphUnit) -> String {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for run in unit.runs() {
        match counts.iter_mut().find(|entry| entry.0 == run.family) {
            Some(entry) => entry.1 += 1,
            None => counts.push((run.family.as_str(), 1)),
        }
    }
    let mut best: (&str, usize) = ("", 0);
    for (name, count) in counts {
        if count > best.1 {
            best = (name, count);
        }
    }
    best.0.to_string()
}

/// Every word that starts with an alphabetic character starts upper-case.
pub(crate) fn is_title_case(text: &str) -> bool {
    text.split_whitespace().all(|word| {
        match word.chars().next() {
            Some(c) if c.is_alphabetic() => c.is_uppercase(),
            _ => true,
        }
    })
}

/// All cased characters are upper-case and at least one cased character
/// exists.
pub(crate) fn is_fully_upper(text: &str) -> bool {
    let mut has_cased = false;
    for c in text.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}

fn round_to(value: f32, places: i32) -> f32 {
    let factor = 10f32.powi(places);
    (value * factor).round() / factor
}
