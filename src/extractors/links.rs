use super::{Extractor, PageContext};
use crate::error::SeoError;
use crate::results::Section;

/// Anchors split into internal and external links
pub struct LinkExtractor {
    internal_prefix: String,
}

/// Hrefs of a page partitioned by locality, document order kept in each
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LinkPartition {
    pub internal: Vec<String>,
    pub external: Vec<String>,
}

impl LinkExtractor {
    /// `internal_prefix` marks absolute URLs that still count as internal
    pub fn new(internal_prefix: &str) -> Self {
        Self {
            internal_prefix: internal_prefix.to_string(),
        }
    }

    /// Root-relative hrefs and hrefs under the internal prefix are internal.
    /// Everything else is external, including `mailto:`, fragments and
    /// page-relative paths.
    pub fn is_internal(&self, href: &str) -> bool {
        href.starts_with('/') || href.starts_with(&self.internal_prefix)
    }

    pub fn partition<'a, I>(&self, hrefs: I) -> LinkPartition
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut links = LinkPartition::default();
        for href in hrefs {
            if self.is_internal(href) {
                links.internal.push(href.to_string());
            } else {
                links.external.push(href.to_string());
            }
        }
        links
    }
}

impl Extractor for LinkExtractor {
    fn section(&self) -> Section {
        Section::Links
    }

    fn extract(&self, page: &PageContext<'_>) -> Result<String, SeoError> {
        let hrefs = page
            .document
            .elements("a")
            .filter_map(|a| a.value().attr("href"));
        let links = self.partition(hrefs);

        ::log::debug!(
            "Found {} internal and {} external links",
            links.internal.len(),
            links.external.len()
        );

        Ok(format!(
            "Internal Links: {:?}\nExternal Links: {:?}\n",
            links.internal, links.external
        ))
    }
}
