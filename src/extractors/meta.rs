use super::{Extractor, PageContext};
use crate::error::SeoError;
use crate::results::Section;

/// Title, meta description and meta keywords
pub struct MetaTagExtractor;

impl Extractor for MetaTagExtractor {
    fn section(&self) -> Section {
        Section::MetaTags
    }

    fn extract(&self, page: &PageContext<'_>) -> Result<String, SeoError> {
        let doc = page.document;
        let title = doc.title().unwrap_or_else(|| "No title found".to_string());
        let description = doc
            .meta_content("description")
            .unwrap_or("No meta description found");
        let keywords = doc
            .meta_content("keywords")
            .unwrap_or("No meta keywords found");

        Ok(format!(
            "Title: {title}\nMeta Description: {description}\nMeta Keywords: {keywords}\n"
        ))
    }
}

/// Content of the viewport meta tag
pub struct ViewportExtractor;

impl Extractor for ViewportExtractor {
    fn section(&self) -> Section {
        Section::Viewport
    }

    fn extract(&self, page: &PageContext<'_>) -> Result<String, SeoError> {
        let viewport = page
            .document
            .meta_content("viewport")
            .unwrap_or("No viewport meta tag found");
        Ok(format!("Viewport: {viewport}\n"))
    }
}
