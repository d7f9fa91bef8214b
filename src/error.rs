use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Transport-level failure while retrieving a page.
///
/// HTTP error statuses are not failures: any response body is parsed.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The URL was rejected before any request was made
    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The request or the body download failed
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Failure while laying out or writing a report.
#[derive(Debug, Error)]
pub enum AssemblyError {
    /// The report was already written; it accepts no further calls
    #[error("report already finalized")]
    AlreadyFinalized,

    /// Finalize was called before any page was added
    #[error("report has no pages")]
    EmptyReport,

    /// The PDF writer failed to encode the document
    #[error("failed to serialize report: {0}")]
    Serialize(String),

    #[error("failed to write report to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Any failure of the SEO pipeline. Nothing is recovered locally.
#[derive(Debug, Error)]
pub enum SeoError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Assembly(#[from] AssemblyError),

    #[error("failed to create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors of the playlist, document and video tools
#[derive(Debug, Error)]
pub enum ToolError {
    /// The external program could not be started (usually not installed)
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}")]
    Failed { program: String, status: ExitStatus },

    #[error("input file not found: {0}")]
    InputNotFound(PathBuf),

    #[error("output would overwrite the input: {0}")]
    SameInputOutput(PathBuf),

    #[error("no files to process")]
    NothingToMerge,

    #[error("PDF error: {0}")]
    Pdf(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
