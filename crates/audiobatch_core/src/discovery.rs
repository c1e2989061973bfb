//! Job discovery from the source folder.
//!
//! Scans the source folder (non-recursive) and creates one job per entry
//! whose name ends with the configured video suffix. Entries are taken in
//! whatever order the directory listing yields; no sorting is applied, so
//! job order is platform-dependent.

use std::fs;

use crate::config::Settings;
use crate::errors::{SetupError, SetupResult};
use crate::models::{Job, RunContext};

/// Map a matching file name to its output file name.
///
/// The video suffix is stripped and trailing whitespace in the remaining
/// base name is trimmed, so `"a .mp4"` becomes `"a.mp3"`. Two inputs that
/// trim to the same base name therefore collide on one output file; the
/// later-finishing job wins.
fn output_name(file_name: &str, settings: &Settings) -> Option<String> {
    let base = file_name.strip_suffix(&settings.extraction.video_suffix)?;
    Some(format!(
        "{}{}",
        base.trim_end(),
        settings.extraction.audio_suffix
    ))
}

/// Discover extraction jobs in the run's source folder.
///
/// The suffix match is literal and case-sensitive (`.mp4` does not match
/// `.MP4`). Entries are not stat'd, so a directory with a matching name
/// becomes a job and fails at extraction time. A missing or unreadable
/// source folder is fatal.
pub fn discover_jobs(ctx: &RunContext, settings: &Settings) -> SetupResult<Vec<Job>> {
    if !ctx.source_folder.is_dir() {
        return Err(SetupError::SourceFolderMissing {
            path: ctx.source_folder.clone(),
        });
    }

    let entries = fs::read_dir(&ctx.source_folder).map_err(|e| SetupError::ReadSourceFolder {
        path: ctx.source_folder.clone(),
        source: e,
    })?;

    let mut jobs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| SetupError::ReadSourceFolder {
            path: ctx.source_folder.clone(),
            source: e,
        })?;

        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            tracing::debug!("Skipping non-UTF-8 entry: {:?}", name);
            continue;
        };

        if let Some(out_name) = output_name(name, settings) {
            jobs.push(Job::new(
                entry.path(),
                ctx.output_folder.join(out_name),
            ));
        }
    }

    tracing::info!(
        "Discovered {} job(s) in {}",
        jobs.len(),
        ctx.source_folder.display()
    );

    Ok(jobs)
}
