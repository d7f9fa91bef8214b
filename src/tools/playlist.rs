use super::run;
use crate::config::PlaylistConfig;
use crate::error::ToolError;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Downloads every entry of a playlist as audio into `output_dir`
///
/// Failures of single entries are tolerated: yt-dlp skips them and its
/// non-zero exit is only logged. A missing yt-dlp binary is an error.
pub fn download_playlist(
    url: &str,
    output_dir: &Path,
    config: &PlaylistConfig,
) -> Result<PathBuf, ToolError> {
    std::fs::create_dir_all(output_dir)?;
    ::log::info!("Downloading playlist {} to {}", url, output_dir.display());

    let status = run(Command::new(&config.ytdlp_path).args(ytdlp_args(url, output_dir, config)))?;
    if !status.success() {
        ::log::warn!(
            "{} finished with {}; some entries may be missing",
            config.ytdlp_path,
            status
        );
    }

    Ok(output_dir.to_path_buf())
}

fn ytdlp_args(url: &str, output_dir: &Path, config: &PlaylistConfig) -> Vec<OsString> {
    let template = output_dir.join("%(title)s.%(ext)s");
    vec![
        "--ffmpeg-location".into(),
        config.ffmpeg_path.clone().into(),
        "--format".into(),
        "bestaudio/best".into(),
        "--extract-audio".into(),
        "--audio-format".into(),
        config.audio_format.clone().into(),
        "--audio-quality".into(),
        format!("{}K", config.audio_quality).into(),
        "--output".into(),
        template.into_os_string(),
        "--ignore-errors".into(),
        "--geo-bypass".into(),
        url.into(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ytdlp_args() {
        let config = PlaylistConfig::default();
        let args = ytdlp_args("https://soundcloud.com/a/sets/b", Path::new("out"), &config);
        let args: Vec<String> = args
            .into_iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();

        assert_eq!(args.last().unwrap(), "https://soundcloud.com/a/sets/b");
        assert!(args.windows(2).any(|w| w[0] == "--audio-format" && w[1] == "mp3"));
        assert!(args.windows(2).any(|w| w[0] == "--audio-quality" && w[1] == "192K"));
        assert!(args.windows(2).any(|w| w[0] == "--ffmpeg-location" && w[1] == "ffmpeg"));
        assert!(args.contains(&Path::new("out").join("%(title)s.%(ext)s").to_string_lossy().into_owned()));
        assert!(args.contains(&"--ignore-errors".to_string()));
    }

    #[test]
    fn test_missing_ytdlp() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("downloads");
        let config = PlaylistConfig {
            ytdlp_path: "tooldash-missing-yt-dlp".to_string(),
            ..PlaylistConfig::default()
        };

        let result = download_playlist("https://example.com/list", &output, &config);
        assert!(matches!(result, Err(ToolError::Spawn { .. })));
        // The directory is created before the download starts
        assert!(output.is_dir());
    }
}
