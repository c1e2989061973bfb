//! FFmpeg audio extraction.
//!
//! Drops the video stream and transcodes the audio track of one input
//! file into one output file. FFmpeg picks the audio encoder from the
//! output file's extension, so the step works for any configured audio
//! suffix ffmpeg knows.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::errors::{ExtractError, ExtractResult};

const TOOL: &str = "ffmpeg";

/// Extract the audio track of `input_path` into `output_path`.
///
/// With `overwrite` set, an existing output file is replaced without
/// warning (`-y`); otherwise ffmpeg refuses to clobber it (`-n`). The
/// call blocks until ffmpeg exits. On failure the captured stderr is
/// surfaced in the error; any partially-written output file is left
/// in place.
pub fn extract_audio(input_path: &Path, output_path: &Path, overwrite: bool) -> ExtractResult<()> {
    if !input_path.exists() {
        return Err(ExtractError::source_not_found(input_path));
    }

    let mut cmd = Command::new(TOOL);
    cmd.arg("-hide_banner")
        .arg("-loglevel")
        .arg("error")
        .arg(if overwrite { "-y" } else { "-n" })
        .arg("-i")
        .arg(input_path)
        .arg("-vn") // No video
        .arg(output_path);

    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped());

    tracing::debug!("Running FFmpeg: {:?}", cmd);

    let output = cmd
        .output()
        .map_err(|e| ExtractError::spawn(TOOL, e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ExtractError::command_failed(
            TOOL,
            output.status.code().unwrap_or(-1),
            stderr.trim(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_audio_rejects_missing_input() {
        let result = extract_audio(
            Path::new("/nonexistent/clip.mp4"),
            Path::new("/nonexistent/clip.mp3"),
            true,
        );
        assert!(matches!(result, Err(ExtractError::SourceNotFound { .. })));
    }
}
