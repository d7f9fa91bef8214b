mod pipeline_order_tests;

use crate::document::Document;
use crate::extractors::{Extractor, PageContext};
use crate::fetcher::Fetcher;

/// Run one extractor against an inline HTML page
fn extract(extractor: &dyn Extractor, html: &str) -> String {
    let document = Document::parse(html);
    let fetcher = Fetcher::new().unwrap();
    let page = PageContext {
        url: "http://localhost/test",
        document: &document,
        fetcher: &fetcher,
        fetch_elapsed: None,
    };
    extractor.extract(&page).unwrap()
}
