use crate::config::SeoConfig;
use crate::document::Document;
use crate::extractors::{Extractor, LoadTimeExtractor, PageContext, run_all, standard_extractors};
use crate::fetcher::Fetcher;
use crate::results::Section;
use crate::test_support::TestSite;
use regex::Regex;
use std::time::Duration;

#[cfg(test)]
mod tests {
    use super::*;

    fn is_load_time_line(text: &str) -> bool {
        Regex::new(r"^Page Load Time: \d+\.\d{2} seconds\n$")
            .unwrap()
            .is_match(text)
    }

    #[test]
    fn test_standard_extractors_follow_section_order() {
        let extractors = standard_extractors(&SeoConfig::default());
        let sections: Vec<Section> = extractors.iter().map(|e| e.section()).collect();
        assert_eq!(sections, Section::ALL.to_vec());
    }

    #[test]
    fn test_load_time_issues_its_own_request() {
        let site = TestSite::serve(200, "<p>timed</p>");
        let url = site.url();
        let document = Document::parse("");
        let fetcher = Fetcher::new().unwrap();
        let page = PageContext {
            url: &url,
            document: &document,
            fetcher: &fetcher,
            fetch_elapsed: Some(Duration::from_secs(42)),
        };

        // Without reuse the 42s of the original fetch are ignored
        let out = LoadTimeExtractor::new(false).extract(&page).unwrap();
        assert!(is_load_time_line(&out), "unexpected output: {out:?}");
        assert_ne!(out, "Page Load Time: 42.00 seconds\n");
    }

    #[test]
    fn test_load_time_reuses_fetch_timing() {
        let document = Document::parse("");
        let fetcher = Fetcher::new().unwrap();
        let page = PageContext {
            // Never contacted
            url: "http://127.0.0.1:1/",
            document: &document,
            fetcher: &fetcher,
            fetch_elapsed: Some(Duration::from_millis(1234)),
        };

        let out = LoadTimeExtractor::new(true).extract(&page).unwrap();
        assert_eq!(out, "Page Load Time: 1.23 seconds\n");
    }

    #[test]
    fn test_load_time_failure_propagates() {
        let document = Document::parse("");
        let fetcher = Fetcher::new().unwrap();
        let page = PageContext {
            url: "http://127.0.0.1:1/",
            document: &document,
            fetcher: &fetcher,
            fetch_elapsed: None,
        };

        assert!(LoadTimeExtractor::new(false).extract(&page).is_err());

        // One failing extractor aborts the whole run
        let extractors = standard_extractors(&SeoConfig::default());
        assert!(run_all(&extractors, &page).is_err());
    }

    #[test]
    fn test_run_all_fills_every_section() {
        let site = TestSite::serve(200, "<html><head><title>T</title></head></html>");
        let url = site.url();
        let fetcher = Fetcher::new().unwrap();
        let document = fetcher.fetch(&url).unwrap();
        let page = PageContext {
            url: &url,
            document: &document,
            fetcher: &fetcher,
            fetch_elapsed: None,
        };

        let result = run_all(&standard_extractors(&SeoConfig::default()), &page).unwrap();
        assert!(result.is_complete());
        let order: Vec<Section> = result.iter().map(|(s, _)| s).collect();
        assert_eq!(order, Section::ALL.to_vec());
        assert!(result.get(Section::MetaTags).unwrap().starts_with("Title: T\n"));
        assert!(is_load_time_line(result.get(Section::LoadTime).unwrap()));
    }
}
