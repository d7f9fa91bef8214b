mod state_tests;

use crate::results::{ExtractionResult, Section};

/// Extraction output for a page titled "T" with one h1 and one internal link
fn small_page_results() -> ExtractionResult {
    let mut results = ExtractionResult::new();
    results.insert(
        Section::MetaTags,
        "Title: T\nMeta Description: No meta description found\nMeta Keywords: No meta keywords found\n"
            .to_string(),
    );
    results.insert(Section::Headings, "H1: Hi\n".to_string());
    results.insert(Section::Images, String::new());
    results.insert(
        Section::Links,
        "Internal Links: [\"/a\"]\nExternal Links: []\n".to_string(),
    );
    results.insert(Section::LoadTime, "Page Load Time: 0.05 seconds\n".to_string());
    results.insert(Section::StructuredData, String::new());
    results.insert(
        Section::Viewport,
        "Viewport: No viewport meta tag found\n".to_string(),
    );
    results
}

fn pdf_page_count(path: &std::path::Path) -> usize {
    lopdf::Document::load(path).unwrap().get_pages().len()
}
