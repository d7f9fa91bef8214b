use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Configuration for the SEO report generator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeoConfig {
    /// Directory the timestamped reports are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Absolute hrefs starting with this prefix count as internal links
    #[serde(default = "default_internal_link_prefix")]
    pub internal_link_prefix: String,

    /// Number of ranked terms kept for the report
    #[serde(default = "default_top_terms")]
    pub top_terms: usize,

    /// Report the timing of the content fetch instead of issuing a second request
    #[serde(default)]
    pub reuse_fetch_timing: bool,

    /// Prepend a cover page to the report
    #[serde(default)]
    pub cover_page: bool,
}

/// Configuration for the playlist audio downloader
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistConfig {
    /// yt-dlp executable
    #[serde(default = "default_ytdlp_path")]
    pub ytdlp_path: String,

    /// ffmpeg executable handed to yt-dlp for audio extraction
    #[serde(default = "default_ffmpeg_path")]
    pub ffmpeg_path: String,

    /// Target audio codec
    #[serde(default = "default_audio_format")]
    pub audio_format: String,

    /// Target audio bitrate in kbit/s
    #[serde(default = "default_audio_quality")]
    pub audio_quality: String,
}

/// Configuration for the Word to PDF merger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentConfig {
    /// LibreOffice executable used for headless conversion
    #[serde(default = "default_libreoffice_path")]
    pub libreoffice_path: String,
}

/// Configuration for the video converter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoConfig {
    /// ffmpeg executable
    #[serde(default = "default_ffmpeg_path")]
    pub ffmpeg_path: String,

    #[serde(default = "default_video_codec")]
    pub video_codec: String,

    #[serde(default = "default_audio_codec")]
    pub audio_codec: String,
}

/// Top-level configuration with one section per tool
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub seo: SeoConfig,

    #[serde(default)]
    pub playlist: PlaylistConfig,

    #[serde(default)]
    pub documents: DocumentConfig,

    #[serde(default)]
    pub video: VideoConfig,
}

impl DashboardConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let mut contents = String::new();
        File::open(path)
            .and_then(|mut file| file.read_to_string(&mut contents))
            .map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Apply overrides from the environment
    ///
    /// `FFMPEG_PATH` replaces the ffmpeg binary of the playlist and video tools.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(ffmpeg) = std::env::var("FFMPEG_PATH") {
            if !ffmpeg.is_empty() {
                ::log::debug!("Using ffmpeg from FFMPEG_PATH: {}", ffmpeg);
                self.playlist.ffmpeg_path = ffmpeg.clone();
                self.video.ffmpeg_path = ffmpeg;
            }
        }
        self
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_internal_link_prefix() -> String {
    "http://localhost".to_string()
}

fn default_top_terms() -> usize {
    10
}

fn default_ytdlp_path() -> String {
    "yt-dlp".to_string()
}

/// ffmpeg is expected on the PATH by default
fn default_ffmpeg_path() -> String {
    "ffmpeg".to_string()
}

fn default_audio_format() -> String {
    "mp3".to_string()
}

fn default_audio_quality() -> String {
    "192".to_string()
}

fn default_libreoffice_path() -> String {
    "libreoffice".to_string()
}

fn default_video_codec() -> String {
    "libx264".to_string()
}

fn default_audio_codec() -> String {
    "aac".to_string()
}

impl Default for SeoConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            internal_link_prefix: default_internal_link_prefix(),
            top_terms: default_top_terms(),
            reuse_fetch_timing: false,
            cover_page: false,
        }
    }
}

impl Default for PlaylistConfig {
    fn default() -> Self {
        Self {
            ytdlp_path: default_ytdlp_path(),
            ffmpeg_path: default_ffmpeg_path(),
            audio_format: default_audio_format(),
            audio_quality: default_audio_quality(),
        }
    }
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            libreoffice_path: default_libreoffice_path(),
        }
    }
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            ffmpeg_path: default_ffmpeg_path(),
            video_codec: default_video_codec(),
            audio_codec: default_audio_codec(),
        }
    }
}
