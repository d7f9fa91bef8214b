use super::run_checked;
use crate::config::VideoConfig;
use crate::error::ToolError;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Transcodes `input` into an MP4 file and returns the output path
pub fn convert_to_mp4(
    input: &Path,
    output: &Path,
    config: &VideoConfig,
) -> Result<PathBuf, ToolError> {
    if !input.exists() {
        return Err(ToolError::InputNotFound(input.to_path_buf()));
    }

    let output = with_mp4_extension(output);
    if output == input {
        return Err(ToolError::SameInputOutput(output));
    }
    ::log::info!("Converting {} to {}", input.display(), output.display());

    run_checked(
        Command::new(&config.ffmpeg_path)
            .arg("-y")
            .arg("-i")
            .arg(input)
            .args(["-c:v", config.video_codec.as_str(), "-c:a", config.audio_codec.as_str()])
            .arg(&output),
    )?;

    Ok(output)
}

/// Appends `.mp4` unless the path already ends with it (any case)
pub fn with_mp4_extension(path: &Path) -> PathBuf {
    if is_mp4(path) {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_owned();
        name.push(".mp4");
        PathBuf::from(name)
    }
}

/// Default output for `input`: same location, `.mp4` extension
///
/// An input that is already MP4 gets `.converted.mp4` so ffmpeg never
/// overwrites its own source.
pub fn default_output(input: &Path) -> PathBuf {
    if is_mp4(input) {
        input.with_extension("converted.mp4")
    } else {
        input.with_extension("mp4")
    }
}

fn is_mp4(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("mp4"))
}
