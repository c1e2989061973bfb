//! Settings struct with TOML-based sections.
//!
//! Every field has a serde default so a partial (or absent) config file
//! still yields a complete `Settings`. The defaults reproduce the tool's
//! documented behavior exactly; the config file only renames folders,
//! suffixes, or the worker count.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Path-related settings.
    #[serde(default)]
    pub paths: PathSettings,

    /// Extraction filter and output format settings.
    #[serde(default)]
    pub extraction: ExtractionSettings,

    /// Worker pool settings.
    #[serde(default)]
    pub workers: WorkerSettings,
}

impl Settings {
    /// Load settings from a TOML file, falling back to defaults.
    ///
    /// A missing file is the normal case (the tool runs unconfigured);
    /// an unreadable or malformed file logs a warning and falls back so
    /// a stray config can never abort a run.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match toml::from_str(&content) {
            Ok(settings) => {
                tracing::debug!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                tracing::warn!("Failed to parse {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

/// Folder naming for source discovery and run output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathSettings {
    /// Folder under the working directory that holds the input videos.
    #[serde(default = "default_source_folder")]
    pub source_folder: String,

    /// Prefix for the timestamped output folder name.
    #[serde(default = "default_output_prefix")]
    pub output_prefix: String,
}

fn default_source_folder() -> String {
    "source_videos".to_string()
}

fn default_output_prefix() -> String {
    "extracted_audio".to_string()
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            source_folder: default_source_folder(),
            output_prefix: default_output_prefix(),
        }
    }
}

/// Input filter and output format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionSettings {
    /// File name suffix selecting input videos (literal, case-sensitive).
    #[serde(default = "default_video_suffix")]
    pub video_suffix: String,

    /// Suffix appended to output audio files.
    #[serde(default = "default_audio_suffix")]
    pub audio_suffix: String,
}

fn default_video_suffix() -> String {
    ".mp4".to_string()
}

fn default_audio_suffix() -> String {
    ".mp3".to_string()
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        Self {
            video_suffix: default_video_suffix(),
            audio_suffix: default_audio_suffix(),
        }
    }
}

/// Worker pool sizing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerSettings {
    /// Number of extraction workers. 0 means one per available CPU.
    #[serde(default)]
    pub threads: usize,
}

impl Default for WorkerSettings {
    fn default() -> Self {
        Self { threads: 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_match_documented_behavior() {
        let settings = Settings::default();
        assert_eq!(settings.paths.source_folder, "source_videos");
        assert_eq!(settings.paths.output_prefix, "extracted_audio");
        assert_eq!(settings.extraction.video_suffix, ".mp4");
        assert_eq!(settings.extraction.audio_suffix, ".mp3");
        assert_eq!(settings.workers.threads, 0);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let settings = Settings::load_or_default(Path::new("/nonexistent/audiobatch.toml"));
        assert_eq!(settings.paths.source_folder, "source_videos");
    }

    #[test]
    fn partial_file_fills_remaining_fields() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[workers]\nthreads = 3").unwrap();

        let settings = Settings::load_or_default(file.path());
        assert_eq!(settings.workers.threads, 3);
        // Unspecified sections keep their defaults.
        assert_eq!(settings.extraction.video_suffix, ".mp4");
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not valid toml [[[").unwrap();

        let settings = Settings::load_or_default(file.path());
        assert_eq!(settings.paths.output_prefix, "extracted_audio");
    }
}
