use super::SMALL_PAGE;
use crate::config::SeoConfig;
use crate::error::{FetchError, SeoError};
use crate::test_support::TestSite;
use crate::{SeoAnalysis, run_seo_analysis};

#[cfg(test)]
mod tests {
    use super::*;

    fn page_count(path: &std::path::Path) -> usize {
        lopdf::Document::load(path).unwrap().get_pages().len()
    }

    #[test]
    fn test_small_page_report() {
        let site = TestSite::serve(200, SMALL_PAGE);
        let dir = tempfile::tempdir().unwrap();

        let path = SeoAnalysis::new(site.url())
            .with_output_dir(dir.path())
            .run()
            .unwrap();

        assert_eq!(path.parent(), Some(dir.path()));
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("report_"), "unexpected name {name}");
        assert!(name.ends_with(".pdf"));

        assert!(std::fs::metadata(&path).unwrap().len() > 0);
        assert_eq!(page_count(&path), 9);
    }

    #[test]
    fn test_output_dir_is_created() {
        let site = TestSite::serve(200, SMALL_PAGE);
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("reports").join("today");

        let config = SeoConfig {
            output_dir: nested.clone(),
            reuse_fetch_timing: true,
            ..SeoConfig::default()
        };
        let path = run_seo_analysis(&site.url(), &config).unwrap();

        assert!(nested.is_dir());
        assert!(path.starts_with(&nested));
    }

    #[test]
    fn test_cover_page_option() {
        let site = TestSite::serve(200, SMALL_PAGE);
        let dir = tempfile::tempdir().unwrap();

        let config = SeoConfig {
            cover_page: true,
            ..SeoConfig::default()
        };
        let path = SeoAnalysis::new(site.url())
            .with_config(config)
            .with_output_dir(dir.path())
            .run()
            .unwrap();

        assert_eq!(page_count(&path), 10);
    }

    #[test]
    fn test_error_status_still_reported() {
        let site = TestSite::serve(404, SMALL_PAGE);
        let dir = tempfile::tempdir().unwrap();

        let path = SeoAnalysis::new(site.url())
            .with_output_dir(dir.path())
            .run()
            .unwrap();
        assert_eq!(page_count(&path), 9);
    }

    #[test]
    fn test_unreachable_host_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();

        let result = SeoAnalysis::new("http://127.0.0.1:1/")
            .with_output_dir(dir.path())
            .run();

        assert!(matches!(
            result,
            Err(SeoError::Fetch(FetchError::Transport { .. }))
        ));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_invalid_url() {
        let dir = tempfile::tempdir().unwrap();

        let result = SeoAnalysis::new("not a url").with_output_dir(dir.path()).run();
        assert!(matches!(
            result,
            Err(SeoError::Fetch(FetchError::InvalidUrl { .. }))
        ));
    }

    #[test]
    fn test_output_dir_failure() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "not a directory").unwrap();

        let result = SeoAnalysis::new("http://127.0.0.1:1/")
            .with_output_dir(blocker.join("reports"))
            .run();
        assert!(matches!(result, Err(SeoError::OutputDir { .. })));
    }
}
