pub mod config;
pub mod document;
pub mod error;
pub mod extractors;
pub mod fetcher;
pub mod ranking;
pub mod report;
pub mod results;
pub mod tools;
pub mod utils;

#[cfg(test)]
mod test_support;
#[cfg(test)]
mod tests;

// Re-export commonly used types for convenience
pub use config::{DashboardConfig, SeoConfig};
pub use error::{AssemblyError, FetchError, SeoError, ToolError};
pub use results::{ExtractionResult, Section, TermScore};

use extractors::PageContext;
use fetcher::Fetcher;
use report::ReportOptions;
use std::path::{Path, PathBuf};

/// Builder for one SEO analysis: fetch a page, run every extractor, rank its
/// terms and write the report
pub struct SeoAnalysis {
    url: String,
    config: SeoConfig,
}

impl SeoAnalysis {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            config: SeoConfig::default(),
        }
    }

    /// Replace the whole SEO configuration
    pub fn with_config(mut self, config: SeoConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the directory the report is written to
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    /// Run the analysis and return the path of the written report
    pub fn run(self) -> Result<PathBuf, SeoError> {
        let output_dir = &self.config.output_dir;
        ensure_dir(output_dir)?;

        ::log::info!("Analysing {}", self.url);
        let fetcher = Fetcher::new()?;
        let (document, fetch_elapsed) = if self.config.reuse_fetch_timing {
            let (document, elapsed) = fetcher.fetch_with_timing(&self.url)?;
            (document, Some(elapsed))
        } else {
            (fetcher.fetch(&self.url)?, None)
        };

        let page = PageContext {
            url: &self.url,
            document: &document,
            fetcher: &fetcher,
            fetch_elapsed,
        };
        let extractors = extractors::standard_extractors(&self.config);
        let results = extractors::run_all(&extractors, &page)?;

        let terms = ranking::rank_document(&document, self.config.top_terms);
        ::log::debug!("Ranked {} terms", terms.len());

        let options = ReportOptions {
            cover_page: self.config.cover_page,
            top_terms: self.config.top_terms,
        };
        let mut report = report::assemble(&results, &terms, options)?;

        let path = output_dir.join(utils::report_filename(&chrono::Local::now()));
        report.finalize(&path)?;
        ::log::info!("Analysis of {} complete", self.url);

        Ok(path)
    }
}

/// Run an SEO analysis of `url` with `config` and return the report path
pub fn run_seo_analysis(url: &str, config: &SeoConfig) -> Result<PathBuf, SeoError> {
    SeoAnalysis::new(url).with_config(config.clone()).run()
}

fn ensure_dir(path: &Path) -> Result<(), SeoError> {
    std::fs::create_dir_all(path).map_err(|source| SeoError::OutputDir {
        path: path.to_path_buf(),
        source,
    })
}
