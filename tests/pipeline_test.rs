//! Integration tests for the outline-extraction pipeline.

use std::collections::HashSet;

use doctoc::{
    extract_outline, BoundingBox, DocumentContent, Error, FontRun, HeadingLevel, LineContent,
    PageContent,
};

/// Build a line whose single run spans `x0..x1` at vertical position `y`.
fn line(text: &str, size: f32, family: &str, x0: f32, y: f32, x1: f32) -> LineContent {
    LineContent {
        text: text.to_string(),
        y,
        runs: vec![FontRun::new(
            size,
            family,
            BoundingBox::new(x0, y, x1, y + size),
        )],
    }
}

fn page(index: u32, tables: Vec<BoundingBox>, lines: Vec<LineContent>) -> PageContent {
    PageContent {
        page: index,
        width: 612.0,
        height: 792.0,
        tables,
        lines,
    }
}

fn document(pages: Vec<PageContent>) -> DocumentContent {
    DocumentContent { pages }
}

/// A small report-like document used by several tests. `base` is the body
/// font size; every other size scales with it.
fn report_document(base: f32) -> DocumentContent {
    let body = "the quarterly figures continued to improve across every region";
    document(vec![
        page(
            0,
            vec![],
            vec![
                line("Annual Report Summary", base * 2.0, "Helvetica-Bold", 150.0, 50.0, 460.0),
                line("1 Market conditions", base * 1.5, "Helvetica-Bold", 72.0, 120.0, 300.0),
                line(body, base, "Helvetica", 72.0, 160.0, 540.0),
                line(body, base, "Helvetica", 72.0, 174.0, 540.0),
                line(body, base, "Helvetica", 72.0, 188.0, 540.0),
            ],
        ),
        page(
            1,
            vec![],
            vec![
                line("2 Forecast details", base * 1.5, "Helvetica-Bold", 72.0, 60.0, 300.0),
                line(body, base, "Helvetica", 72.0, 100.0, 540.0),
                line(body, base, "Helvetica", 72.0, 114.0, 540.0),
            ],
        ),
    ])
}

#[test]
fn test_report_title_and_headings() {
    let outline = extract_outline(&report_document(12.0)).unwrap();

    assert_eq!(outline.title, "Annual Report Summary");
    let texts: Vec<&str> = outline.outline.iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, vec!["1 Market conditions", "2 Forecast details"]);
    assert!(outline.outline.iter().all(|e| e.level == HeadingLevel::H1));
    assert_eq!(outline.outline[0].page, 0);
    assert_eq!(outline.outline[1].page, 1);
}

#[test]
fn test_title_text_never_reappears_in_outline() {
    let outline = extract_outline(&report_document(12.0)).unwrap();
    assert!(outline
        .outline
        .iter()
        .all(|e| e.text != "Annual Report Summary"));
}

#[test]
fn test_classification_is_relative_to_base_font() {
    // identical structure at different absolute base sizes must classify
    // identically, since all thresholds are document-relative
    let small = extract_outline(&report_document(10.0)).unwrap();
    let large = extract_outline(&report_document(20.0)).unwrap();

    assert_eq!(small.title, large.title);
    assert_eq!(small.outline, large.outline);
}

#[test]
fn test_dedup_invariant() {
    let outline = extract_outline(&report_document(12.0)).unwrap();
    let mut seen = HashSet::new();
    for entry in &outline.outline {
        assert!(
            seen.insert((entry.text.clone(), entry.level, entry.page)),
            "duplicate outline entry: {:?}",
            entry
        );
    }
}

#[test]
fn test_table_lines_never_classified() {
    let body = "plain paragraph content that fills the rest of the page";
    let table = BoundingBox::new(100.0, 100.0, 400.0, 200.0);
    let doc = document(vec![page(
        0,
        vec![table],
        vec![
            // fully inside the table region, styled like a heading
            line("Quarterly Revenue Figures", 18.0, "Helvetica-Bold", 120.0, 140.0, 380.0),
            // only partially overlapping the region
            line("Spillover Row Caption", 18.0, "Helvetica-Bold", 120.0, 195.0, 380.0),
            line(body, 12.0, "Helvetica", 72.0, 400.0, 540.0),
            line(body, 12.0, "Helvetica", 72.0, 414.0, 540.0),
        ],
    )]);

    let outline = extract_outline(&doc).unwrap();
    for entry in &outline.outline {
        assert_ne!(entry.text, "Quarterly Revenue Figures");
        assert_ne!(entry.text, "Spillover Row Caption");
    }
    assert!(!outline.title.contains("Quarterly"));
    assert!(!outline.title.contains("Spillover"));
}

#[test]
fn test_dates_and_page_numbers_excluded_even_when_styled() {
    let body = "ordinary sentence text keeps the statistics anchored here";
    let doc = document(vec![page(
        0,
        vec![],
        vec![
            line("March 2024", 20.0, "Helvetica-Bold", 200.0, 40.0, 410.0),
            line("12/04/2023", 20.0, "Helvetica-Bold", 200.0, 70.0, 410.0),
            line("Page 3", 20.0, "Helvetica-Bold", 280.0, 700.0, 330.0),
            line("42", 20.0, "Helvetica-Bold", 300.0, 730.0, 320.0),
            // plain face, so title detection cannot claim it on page 0
            line("1 Annual targets", 12.0, "Helvetica", 72.0, 150.0, 280.0),
            line(body, 12.0, "Helvetica", 72.0, 190.0, 540.0),
            line(body, 12.0, "Helvetica", 72.0, 204.0, 540.0),
        ],
    )]);

    let outline = extract_outline(&doc).unwrap();
    let texts: Vec<&str> = outline.outline.iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, vec!["1 Annual targets"]);
    assert_eq!(outline.title, "");
}

#[test]
fn test_numbered_prefix_beats_font_size() {
    let body = "surrounding body copy that sets the dominant font size";
    let doc = document(vec![page(
        1,
        vec![],
        vec![
            // body-sized, but the numbering depth decides the level
            line("2.1 Background material", 12.0, "Times", 72.0, 100.0, 320.0),
            line("3.1.2 Gradient flow", 12.0, "Times", 72.0, 160.0, 300.0),
            line(body, 12.0, "Times", 72.0, 220.0, 540.0),
            line(body, 12.0, "Times", 72.0, 234.0, 540.0),
        ],
    )]);

    let outline = extract_outline(&doc).unwrap();
    let by_text: Vec<(&str, HeadingLevel)> = outline
        .outline
        .iter()
        .map(|e| (e.text.as_str(), e.level))
        .collect();
    assert!(by_text.contains(&("2.1 Background material", HeadingLevel::H2)));
    assert!(by_text.contains(&("3.1.2 Gradient flow", HeadingLevel::H3)));
}

#[test]
fn test_empty_document_is_an_error() {
    // every line is boilerplate, so nothing is retained
    let doc = document(vec![page(
        0,
        vec![],
        vec![
            line("Page 1", 12.0, "Helvetica", 280.0, 700.0, 330.0),
            line("March 2024", 12.0, "Helvetica", 200.0, 40.0, 410.0),
        ],
    )]);
    assert!(matches!(extract_outline(&doc), Err(Error::EmptyDocument)));

    let no_pages = DocumentContent::new();
    assert!(matches!(extract_outline(&no_pages), Err(Error::EmptyDocument)));
}

#[test]
fn test_end_to_end_mixed_page() {
    let body = "body paragraph describing the chapter contents in prose";
    let doc = document(vec![page(
        0,
        vec![],
        vec![
            // colon keeps it out of the title; centered 20pt bold
            line("Chapter 1: Overview", 20.0, "Helvetica-Bold", 200.0, 50.0, 412.0),
            line("1.1 Background", 14.0, "Helvetica-Bold", 72.0, 120.0, 250.0),
            line("Table 3: Results", 12.0, "Helvetica", 72.0, 180.0, 240.0),
            line(body, 12.0, "Helvetica", 72.0, 240.0, 540.0),
            line(body, 12.0, "Helvetica", 72.0, 254.0, 540.0),
            line(body, 12.0, "Helvetica", 72.0, 268.0, 540.0),
        ],
    )]);

    let outline = extract_outline(&doc).unwrap();
    assert_eq!(outline.title, "");

    let entry = outline
        .outline
        .iter()
        .find(|e| e.text == "1.1 Background")
        .expect("numbered heading must be classified");
    assert_eq!(entry.level, HeadingLevel::H2);
    assert_eq!(entry.page, 0);

    assert!(outline.outline.iter().all(|e| e.text != "Table 3: Results"));
}

#[test]
fn test_multi_line_title_concatenation() {
    let body = "regular paragraph body text in the document flow";
    let doc = document(vec![page(
        0,
        vec![],
        vec![
            line("Deep Learning Primer", 24.0, "Helvetica-Bold", 150.0, 50.0, 460.0),
            line("A Practical Guide", 23.0, "Helvetica-Bold", 170.0, 90.0, 440.0),
            line(body, 12.0, "Helvetica", 72.0, 200.0, 540.0),
            line(body, 12.0, "Helvetica", 72.0, 214.0, 540.0),
            line(body, 12.0, "Helvetica", 72.0, 228.0, 540.0),
        ],
    )]);

    let outline = extract_outline(&doc).unwrap();
    assert_eq!(outline.title, "Deep Learning Primer A Practical Guide");
    assert!(outline.outline.iter().all(|e| e.text != "Deep Learning Primer"));
    assert!(outline.outline.iter().all(|e| e.text != "A Practical Guide"));
}
