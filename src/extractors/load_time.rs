use super::{Extractor, PageContext};
use crate::error::SeoError;
use crate::results::Section;

/// Wall-clock load time of the page
///
/// By default the page is requested again and that second request is timed,
/// so the figure does not describe the response the other sections analysed.
/// With `reuse_fetch_timing` the timing of the original fetch is reported
/// when the pipeline measured it.
pub struct LoadTimeExtractor {
    reuse_fetch_timing: bool,
}

impl LoadTimeExtractor {
    pub fn new(reuse_fetch_timing: bool) -> Self {
        Self { reuse_fetch_timing }
    }
}

impl Extractor for LoadTimeExtractor {
    fn section(&self) -> Section {
        Section::LoadTime
    }

    fn extract(&self, page: &PageContext<'_>) -> Result<String, SeoError> {
        let elapsed = match page.fetch_elapsed {
            Some(elapsed) if self.reuse_fetch_timing => elapsed,
            _ => page.fetcher.time_request(page.url)?,
        };
        Ok(format!(
            "Page Load Time: {:.2} seconds\n",
            elapsed.as_secs_f64()
        ))
    }
}
