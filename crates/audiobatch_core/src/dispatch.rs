//! Concurrent job dispatch with result collection.
//!
//! Every job is submitted to a bounded rayon pool and run through the
//! extraction step exactly once. The dispatcher blocks until the whole
//! batch has completed; there is no cancellation and no timeout. A failed
//! job is logged and captured in its outcome without disturbing the rest
//! of the batch.

use rayon::prelude::*;

use crate::errors::{ExtractResult, SetupError, SetupResult};
use crate::extraction;
use crate::models::{Job, JobOutcome, RunReport};

/// Run all jobs through `extract` on a pool of `workers` threads.
///
/// `workers == 0` sizes the pool to the host's available parallelism.
/// Outcomes are returned in submission order regardless of completion
/// order. The extraction function is the seam for tests; production code
/// goes through [`run_extraction`].
pub fn run_jobs<F>(jobs: Vec<Job>, workers: usize, extract: F) -> SetupResult<RunReport>
where
    F: Fn(&Job) -> ExtractResult<()> + Sync,
{
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .map_err(|e| SetupError::WorkerPool {
            message: e.to_string(),
        })?;

    tracing::info!(
        "Dispatching {} job(s) on {} worker(s)",
        jobs.len(),
        pool.current_num_threads()
    );

    let outcomes = pool.install(|| {
        jobs.into_par_iter()
            .map(|job| {
                tracing::debug!("Extracting {}", job.input_path.display());
                match extract(&job) {
                    Ok(()) => JobOutcome::success(job),
                    Err(e) => {
                        tracing::error!(
                            "Extraction failed for {}: {}",
                            job.input_path.display(),
                            e
                        );
                        JobOutcome::failure(job, e)
                    }
                }
            })
            .collect()
    });

    Ok(RunReport::new(outcomes))
}

/// Run all jobs through the ffmpeg extraction step.
///
/// Existing output files are overwritten without warning.
pub fn run_extraction(jobs: Vec<Job>, workers: usize) -> SetupResult<RunReport> {
    run_jobs(jobs, workers, |job| {
        extraction::extract_audio(&job.input_path, &job.output_path, true)
    })
}
