pub mod fonts;
pub mod pdf;

use crate::error::AssemblyError;
use crate::ranking::DEFAULT_TOP_TERMS;
use crate::results::{ExtractionResult, TermScore};
use fonts::FontStyle;
use pdf::{Align, PAGE_WIDTH, PdfWriter};
use std::io::Write;
use std::path::Path;

const REPORT_TITLE: &str = "SEO Analysis Report";
const TERM_SECTION_TITLE: &str = "TF-IDF Analysis";

/// Lifecycle of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportState {
    /// No section added yet
    Empty,
    Assembling,
    /// Written to disk; terminal
    Finalized,
}

/// Body of a report section
#[derive(Debug, Clone, PartialEq)]
pub enum SectionBody {
    /// One wrapped block
    Text(String),
    /// One wrapped paragraph per entry
    Lines(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Start with a title page carrying the generation time
    pub cover_page: bool,
    /// Number of terms named in the table title
    pub top_terms: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            cover_page: false,
            top_terms: DEFAULT_TOP_TERMS,
        }
    }
}

/// A paginated report assembled section by section and written once
pub struct Report {
    writer: PdfWriter,
    state: ReportState,
    options: ReportOptions,
}

impl Report {
    pub fn new(options: ReportOptions) -> Self {
        let mut writer = PdfWriter::new();
        writer.set_header(REPORT_TITLE);
        Self {
            writer,
            state: ReportState::Empty,
            options,
        }
    }

    pub fn state(&self) -> ReportState {
        self.state
    }

    pub fn page_count(&self) -> usize {
        self.writer.page_count()
    }

    /// Adds a section starting on a new page
    pub fn add_section(&mut self, title: &str, body: &SectionBody) -> Result<(), AssemblyError> {
        self.begin()?;
        self.writer.add_page();
        self.chapter_title(title);
        self.chapter_body(body);
        Ok(())
    }

    /// Adds a page with a two-column table of terms and their percentages
    pub fn add_term_table(&mut self, title: &str, terms: &[TermScore]) -> Result<(), AssemblyError> {
        self.begin()?;
        self.writer.add_page();
        self.chapter_title(title);

        self.writer.set_font(FontStyle::Bold, 12.0);
        let column_width = PAGE_WIDTH / 4.5;
        let row_height = self.writer.font_size() + 2.0;
        for term in terms {
            self.writer
                .cell(column_width, row_height, &term.term, true, false, Align::Left);
            self.writer
                .cell(column_width, row_height, &term.percent(), true, true, Align::Left);
        }
        Ok(())
    }

    /// Serializes the report and writes it to `path`
    ///
    /// The bytes go to a temporary file next to `path` that is renamed into
    /// place once complete, so a failed write never leaves a partial report.
    /// A finalized report rejects every further call, including another
    /// `finalize`.
    pub fn finalize(&mut self, path: &Path) -> Result<(), AssemblyError> {
        match self.state {
            ReportState::Finalized => return Err(AssemblyError::AlreadyFinalized),
            ReportState::Empty => return Err(AssemblyError::EmptyReport),
            ReportState::Assembling => {}
        }

        let bytes = self.writer.to_bytes()?;
        write_atomically(path, &bytes).map_err(|source| AssemblyError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        ::log::info!(
            "Wrote {} page report to {} ({} bytes)",
            self.page_count(),
            path.display(),
            bytes.len()
        );
        self.state = ReportState::Finalized;
        Ok(())
    }

    fn begin(&mut self) -> Result<(), AssemblyError> {
        match self.state {
            ReportState::Finalized => Err(AssemblyError::AlreadyFinalized),
            ReportState::Empty => {
                if self.options.cover_page {
                    self.cover_page();
                }
                self.state = ReportState::Assembling;
                Ok(())
            }
            ReportState::Assembling => Ok(()),
        }
    }

    fn cover_page(&mut self) {
        self.writer.add_page();
        self.writer.set_font(FontStyle::Bold, 24.0);
        self.writer.cell(0.0, 60.0, REPORT_TITLE, false, true, Align::Center);
        self.writer.set_font(FontStyle::Italic, 12.0);
        let generated = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        self.writer.cell(
            0.0,
            10.0,
            &format!("Generated on {generated}"),
            false,
            true,
            Align::Center,
        );
    }

    fn chapter_title(&mut self, title: &str) {
        self.writer.set_font(FontStyle::Bold, 16.0);
        self.writer.cell(0.0, 10.0, title, false, true, Align::Left);
        self.writer.ln(Some(8.0));
    }

    fn chapter_body(&mut self, body: &SectionBody) {
        self.writer.set_font(FontStyle::Regular, 12.0);
        match body {
            SectionBody::Text(text) => {
                self.writer.multi_cell(0.0, 10.0, text);
                self.writer.ln(Some(5.0));
            }
            SectionBody::Lines(lines) => {
                for line in lines {
                    self.writer.multi_cell(0.0, 10.0, line);
                    self.writer.ln(Some(5.0));
                }
            }
        }
        self.writer.ln(None);
    }
}

/// Lays out a complete report: one page per extracted section in order, the
/// ranked terms as a list, then the term table
pub fn assemble(
    results: &ExtractionResult,
    terms: &[TermScore],
    options: ReportOptions,
) -> Result<Report, AssemblyError> {
    let table_title = format!("Top {} Most Used Words (TF-IDF)", options.top_terms);
    let mut report = Report::new(options);

    for (section, text) in results.iter() {
        report.add_section(&section.heading(), &SectionBody::Text(text.to_string()))?;
    }

    let lines = terms.iter().map(TermScore::to_string).collect();
    report.add_section(TERM_SECTION_TITLE, &SectionBody::Lines(lines))?;

    report.add_term_table(&table_title, terms)?;

    Ok(report)
}

/// Writes `bytes` to a temporary file in the directory of `path`, then renames it over `path`
fn write_atomically(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    let mut file = tempfile::NamedTempFile::new_in(dir)?;
    file.write_all(bytes)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|error| error.error)?;
    Ok(())
}

#[cfg(test)]
mod tests;
