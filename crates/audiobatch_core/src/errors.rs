//! Error types for a batch extraction run.
//!
//! Two tiers: `SetupError` is fatal and aborts the run before any job
//! executes; `ExtractError` belongs to a single job and never propagates
//! past the dispatcher.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal error while preparing a run.
#[derive(Error, Debug)]
pub enum SetupError {
    /// Output folder could not be created.
    #[error("Failed to create output folder {path}: {source}")]
    CreateOutputFolder {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Source folder does not exist or is not a directory.
    #[error("Source folder not found: {path}")]
    SourceFolderMissing { path: PathBuf },

    /// Source folder exists but could not be listed.
    #[error("Failed to read source folder {path}: {source}")]
    ReadSourceFolder {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Worker pool could not be built.
    #[error("Failed to build worker pool: {message}")]
    WorkerPool { message: String },
}

/// Error from a single extraction job.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Input file disappeared between discovery and extraction.
    #[error("Input file not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// The external tool could not be started.
    #[error("Failed to run {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: io::Error,
    },

    /// The external tool ran and reported failure.
    #[error("{tool} failed with exit code {exit_code}: {message}")]
    CommandFailed {
        tool: String,
        exit_code: i32,
        message: String,
    },
}

impl ExtractError {
    /// Create a source not found error.
    pub fn source_not_found(path: impl Into<PathBuf>) -> Self {
        Self::SourceNotFound { path: path.into() }
    }

    /// Create a spawn error.
    pub fn spawn(tool: impl Into<String>, source: io::Error) -> Self {
        Self::Spawn {
            tool: tool.into(),
            source,
        }
    }

    /// Create a command failed error.
    pub fn command_failed(
        tool: impl Into<String>,
        exit_code: i32,
        message: impl Into<String>,
    ) -> Self {
        Self::CommandFailed {
            tool: tool.into(),
            exit_code,
            message: message.into(),
        }
    }
}

/// Result type for run setup operations.
pub type SetupResult<T> = Result<T, SetupError>;

/// Result type for per-job extraction operations.
pub type ExtractResult<T> = Result<T, ExtractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_error_displays_context() {
        let err = ExtractError::command_failed("ffmpeg", 1, "Invalid data found");
        let msg = err.to_string();
        assert!(msg.contains("ffmpeg"));
        assert!(msg.contains("exit code 1"));
        assert!(msg.contains("Invalid data found"));
    }

    #[test]
    fn setup_error_displays_path() {
        let err = SetupError::SourceFolderMissing {
            path: PathBuf::from("/work/source_videos"),
        };
        assert!(err.to_string().contains("source_videos"));
    }
}
