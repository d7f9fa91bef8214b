use super::{Extractor, PageContext};
use crate::document::element_text;
use crate::error::SeoError;
use crate::results::Section;

const HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

const JSON_LD_TYPE: &str = "application/ld+json";

/// Headings grouped by level (h1 first), document order within a level
pub struct HeadingExtractor;

impl Extractor for HeadingExtractor {
    fn section(&self) -> Section {
        Section::Headings
    }

    fn extract(&self, page: &PageContext<'_>) -> Result<String, SeoError> {
        let mut out = String::new();
        for (index, tag) in HEADING_TAGS.iter().enumerate() {
            for heading in page.document.elements(tag) {
                let text = element_text(&heading);
                out.push_str(&format!("H{}: {}\n", index + 1, text.trim()));
            }
        }
        Ok(out)
    }
}

/// Image sources and their alt text
pub struct ImageExtractor;

impl Extractor for ImageExtractor {
    fn section(&self) -> Section {
        Section::Images
    }

    fn extract(&self, page: &PageContext<'_>) -> Result<String, SeoError> {
        let mut out = String::new();
        for img in page.document.elements("img") {
            let src = img.value().attr("src").unwrap_or_default();
            let alt = img
                .value()
                .attr("alt")
                .filter(|alt| !alt.is_empty())
                .unwrap_or("No alt text");
            out.push_str(&format!("Image: {src}, Alt Text: {alt}\n"));
        }
        Ok(out)
    }
}

/// Raw JSON-LD blocks, emitted as opaque text
pub struct StructuredDataExtractor;

impl Extractor for StructuredDataExtractor {
    fn section(&self) -> Section {
        Section::StructuredData
    }

    fn extract(&self, page: &PageContext<'_>) -> Result<String, SeoError> {
        let mut out = String::new();
        for script in page.document.elements("script") {
            if script.value().attr("type") != Some(JSON_LD_TYPE) {
                continue;
            }
            let data = element_text(&script);
            out.push_str(&format!("Structured Data: {}\n", data.trim()));
        }
        Ok(out)
    }
}
