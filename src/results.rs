use std::fmt;

/// The closed set of report sections produced by the extractors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    MetaTags,
    Headings,
    Images,
    Links,
    LoadTime,
    StructuredData,
    Viewport,
}

impl Section {
    /// Every section, in presentation order
    pub const ALL: [Section; 7] = [
        Section::MetaTags,
        Section::Headings,
        Section::Images,
        Section::Links,
        Section::LoadTime,
        Section::StructuredData,
        Section::Viewport,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Section::MetaTags => "Meta Tags",
            Section::Headings => "Headings",
            Section::Images => "Images",
            Section::Links => "Links",
            Section::LoadTime => "Load Time",
            Section::StructuredData => "Structured Data",
            Section::Viewport => "Viewport",
        }
    }

    /// Page title used in the report
    pub fn heading(&self) -> String {
        format!("{} Analysis", self.name())
    }
}

/// Extractor outputs keyed by section, in insertion order
#[derive(Debug, Clone, Default)]
pub struct ExtractionResult {
    entries: Vec<(Section, String)>,
}

impl ExtractionResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the text for `section`, replacing an earlier value in place
    pub fn insert(&mut self, section: Section, text: String) {
        match self.entries.iter_mut().find(|(s, _)| *s == section) {
            Some(entry) => entry.1 = text,
            None => self.entries.push((section, text)),
        }
    }

    pub fn get(&self, section: Section) -> Option<&str> {
        self.entries
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, text)| text.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Section, &str)> {
        self.entries.iter().map(|(s, text)| (*s, text.as_str()))
    }

    /// Whether every section has been filled
    pub fn is_complete(&self) -> bool {
        Section::ALL.iter().all(|section| self.get(*section).is_some())
    }
}

/// Relevance of a term within the analysed page
#[derive(Debug, Clone, PartialEq)]
pub struct TermScore {
    pub term: String,
    /// Normalized weight in `[0, 1]`
    pub score: f64,
}

impl TermScore {
    pub fn new(term: impl Into<String>, score: f64) -> Self {
        Self {
            term: term.into(),
            score,
        }
    }

    /// Score as a percentage with two decimals, e.g. `57.74%`
    pub fn percent(&self) -> String {
        format!("{:.2}%", self.score * 100.0)
    }
}

impl fmt::Display for TermScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.term, self.percent())
    }
}
