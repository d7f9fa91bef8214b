pub mod content;
pub mod links;
pub mod load_time;
pub mod meta;

#[cfg(test)]
mod tests;

use crate::config::SeoConfig;
use crate::document::Document;
use crate::error::SeoError;
use crate::fetcher::Fetcher;
use crate::results::{ExtractionResult, Section};
use std::time::Duration;

pub use content::{HeadingExtractor, ImageExtractor, StructuredDataExtractor};
pub use links::LinkExtractor;
pub use load_time::LoadTimeExtractor;
pub use meta::{MetaTagExtractor, ViewportExtractor};

/// Everything an extractor may look at for one analysed page
pub struct PageContext<'a> {
    /// URL the document was fetched from
    pub url: &'a str,
    pub document: &'a Document,
    /// Client for extractors that issue their own requests
    pub fetcher: &'a Fetcher,
    /// Duration of the request that produced `document`, when it was measured
    pub fetch_elapsed: Option<Duration>,
}

/// A single analysis pass producing the text of one report section
pub trait Extractor {
    /// The section this extractor fills
    fn section(&self) -> Section;

    /// Produce the section text
    fn extract(&self, page: &PageContext<'_>) -> Result<String, SeoError>;
}

/// The standard extractors, one per section, in presentation order
pub fn standard_extractors(config: &SeoConfig) -> Vec<Box<dyn Extractor>> {
    let extractors: Vec<Box<dyn Extractor>> = vec![
        Box::new(MetaTagExtractor),
        Box::new(HeadingExtractor),
        Box::new(ImageExtractor),
        Box::new(LinkExtractor::new(&config.internal_link_prefix)),
        Box::new(LoadTimeExtractor::new(config.reuse_fetch_timing)),
        Box::new(StructuredDataExtractor),
        Box::new(ViewportExtractor),
    ];
    debug_assert!(
        extractors
            .iter()
            .map(|e| e.section())
            .eq(Section::ALL.iter().copied())
    );
    extractors
}

/// Run every extractor in order; the first failure aborts the run
pub fn run_all(
    extractors: &[Box<dyn Extractor>],
    page: &PageContext<'_>,
) -> Result<ExtractionResult, SeoError> {
    let mut result = ExtractionResult::new();
    for extractor in extractors {
        let section = extractor.section();
        ::log::debug!("Running {} extractor", section.name());
        let text = extractor.extract(page)?;
        result.insert(section, text);
    }
    Ok(result)
}
