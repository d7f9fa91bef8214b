use super::{pdf_page_count, small_page_results};
use crate::error::AssemblyError;
use crate::report::{Report, ReportOptions, ReportState, SectionBody, assemble};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_report_is_empty() {
        let report = Report::new(ReportOptions::default());
        assert_eq!(report.state(), ReportState::Empty);
        assert_eq!(report.page_count(), 0);
    }

    #[test]
    fn test_first_section_starts_assembling() {
        let mut report = Report::new(ReportOptions::default());
        report
            .add_section("Meta Tags Analysis", &SectionBody::Text("Title: T\n".to_string()))
            .unwrap();
        assert_eq!(report.state(), ReportState::Assembling);
        assert_eq!(report.page_count(), 1);
    }

    #[test]
    fn test_empty_report_cannot_be_finalized() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.pdf");

        let mut report = Report::new(ReportOptions::default());
        assert!(matches!(
            report.finalize(&path),
            Err(AssemblyError::EmptyReport)
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_second_finalize_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.pdf");

        let mut report = assemble(&small_page_results(), &[], ReportOptions::default()).unwrap();
        report.finalize(&path).unwrap();
        let written = std::fs::read(&path).unwrap();

        assert!(matches!(
            report.finalize(&path),
            Err(AssemblyError::AlreadyFinalized)
        ));
        // The file is left exactly as the first call wrote it
        assert_eq!(std::fs::read(&path).unwrap(), written);
    }

    #[test]
    fn test_finalized_report_rejects_new_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.pdf");

        let mut report = assemble(&small_page_results(), &[], ReportOptions::default()).unwrap();
        report.finalize(&path).unwrap();
        let pages = report.page_count();

        let section = report.add_section("Extra", &SectionBody::Text("late".to_string()));
        assert!(matches!(section, Err(AssemblyError::AlreadyFinalized)));
        let table = report.add_term_table("Extra", &[]);
        assert!(matches!(table, Err(AssemblyError::AlreadyFinalized)));
        assert_eq!(report.page_count(), pages);
    }

    #[test]
    fn test_write_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("report.pdf");

        let mut report = assemble(&small_page_results(), &[], ReportOptions::default()).unwrap();
        assert!(matches!(
            report.finalize(&path),
            Err(AssemblyError::Write { .. })
        ));
        // Still assembling: a later finalize to a valid path may succeed
        assert_eq!(report.state(), ReportState::Assembling);
    }

    #[test]
    fn test_finalize_leaves_only_the_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.pdf");

        let mut report = assemble(&small_page_results(), &[], ReportOptions::default()).unwrap();
        report.finalize(&path).unwrap();

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("report.pdf")]);
        assert_eq!(pdf_page_count(&path), report.page_count());
    }

    #[test]
    fn test_failed_rename_leaves_no_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        // A directory occupies the target name, so the final rename fails
        let path = dir.path().join("report.pdf");
        std::fs::create_dir(&path).unwrap();

        let mut report = assemble(&small_page_results(), &[], ReportOptions::default()).unwrap();
        assert!(matches!(
            report.finalize(&path),
            Err(AssemblyError::Write { .. })
        ));
        assert_eq!(report.state(), ReportState::Assembling);
        assert!(path.is_dir());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
