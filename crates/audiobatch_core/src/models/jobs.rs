//! Job and run context data structures.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::config::Settings;
use crate::errors::{SetupError, SetupResult};

/// One unit of work: extract the audio of `input_path` into `output_path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    /// Path to the source video file.
    pub input_path: PathBuf,
    /// Path the extracted audio file is written to.
    pub output_path: PathBuf,
}

impl Job {
    /// Create a new job.
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
        }
    }
}

/// Per-invocation configuration computed once at startup.
///
/// The working directory and clock are injected rather than read from
/// process globals so tests can pin both.
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Folder scanned for input videos.
    pub source_folder: PathBuf,
    /// Timestamped folder the audio files are written to.
    pub output_folder: PathBuf,
    /// Run timestamp (`YYYYMMDD_HHMMSS`), also embedded in the folder name.
    pub timestamp: String,
}

impl RunContext {
    /// Derive the run folders from `cwd` and `now` and create the output
    /// folder on disk.
    ///
    /// The output folder is created recursively and an already-existing
    /// folder is not an error, so a second run within the same second
    /// reuses it. Creation failure is fatal for the whole run.
    pub fn create(cwd: &Path, now: DateTime<Local>, settings: &Settings) -> SetupResult<Self> {
        let timestamp = now.format("%Y%m%d_%H%M%S").to_string();
        let source_folder = cwd.join(&settings.paths.source_folder);
        let output_folder = cwd.join(format!("{}_{}", settings.paths.output_prefix, timestamp));

        fs::create_dir_all(&output_folder).map_err(|e| SetupError::CreateOutputFolder {
            path: output_folder.clone(),
            source: e,
        })?;

        tracing::debug!(
            "Run context ready: source={} output={}",
            source_folder.display(),
            output_folder.display()
        );

        Ok(Self {
            source_folder,
            output_folder,
            timestamp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    #[test]
    fn output_folder_name_uses_injected_clock() {
        let tmp = TempDir::new().unwrap();
        let now = Local.with_ymd_and_hms(2024, 3, 5, 4, 5, 6).unwrap();

        let ctx = RunContext::create(tmp.path(), now, &Settings::default()).unwrap();

        assert_eq!(ctx.timestamp, "20240305_040506");
        assert_eq!(
            ctx.output_folder,
            tmp.path().join("extracted_audio_20240305_040506")
        );
        assert_eq!(ctx.source_folder, tmp.path().join("source_videos"));
        assert!(ctx.output_folder.is_dir());
    }

    #[test]
    fn same_second_rerun_reuses_output_folder() {
        let tmp = TempDir::new().unwrap();
        let now = Local.with_ymd_and_hms(2024, 3, 5, 4, 5, 6).unwrap();

        let first = RunContext::create(tmp.path(), now, &Settings::default()).unwrap();
        let second = RunContext::create(tmp.path(), now, &Settings::default()).unwrap();

        assert_eq!(first.output_folder, second.output_folder);
    }

    #[test]
    fn create_fails_when_output_folder_is_uncreatable() {
        let tmp = TempDir::new().unwrap();
        // Occupy the output path with a plain file.
        let now = Local.with_ymd_and_hms(2024, 3, 5, 4, 5, 6).unwrap();
        std::fs::write(tmp.path().join("extracted_audio_20240305_040506"), b"x").unwrap();

        let result = RunContext::create(tmp.path(), now, &Settings::default());
        assert!(matches!(
            result,
            Err(SetupError::CreateOutputFolder { .. })
        ));
    }
}
