//! Per-job outcomes and the end-of-run report.

use crate::errors::{ExtractError, ExtractResult};

use super::Job;

/// Result of running a single extraction job.
///
/// A job gets exactly one attempt; whatever it produced (success or a
/// typed error) is final.
#[derive(Debug)]
pub struct JobOutcome {
    /// The job that was run.
    pub job: Job,
    /// Success, or the extraction error.
    pub result: ExtractResult<()>,
}

impl JobOutcome {
    /// Create a successful outcome.
    pub fn success(job: Job) -> Self {
        Self {
            job,
            result: Ok(()),
        }
    }

    /// Create a failed outcome.
    pub fn failure(job: Job, error: ExtractError) -> Self {
        Self {
            job,
            result: Err(error),
        }
    }

    /// Whether the job succeeded.
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Collected outcomes of a whole run, in submission order.
#[derive(Debug, Default)]
pub struct RunReport {
    outcomes: Vec<JobOutcome>,
}

impl RunReport {
    /// Create a report from collected outcomes.
    pub fn new(outcomes: Vec<JobOutcome>) -> Self {
        Self { outcomes }
    }

    /// All outcomes in submission order.
    pub fn outcomes(&self) -> &[JobOutcome] {
        &self.outcomes
    }

    /// Number of jobs that succeeded.
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    /// Number of jobs that failed.
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    /// Iterator over failed outcomes.
    pub fn failures(&self) -> impl Iterator<Item = &JobOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    /// Total number of jobs in the run.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Whether the run had no jobs at all.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn job(name: &str) -> Job {
        Job::new(
            PathBuf::from("/in").join(format!("{name}.mp4")),
            PathBuf::from("/out").join(format!("{name}.mp3")),
        )
    }

    #[test]
    fn report_tallies_outcomes() {
        let report = RunReport::new(vec![
            JobOutcome::success(job("a")),
            JobOutcome::failure(job("b"), ExtractError::command_failed("ffmpeg", 1, "bad data")),
            JobOutcome::success(job("c")),
        ]);

        assert_eq!(report.len(), 3);
        assert_eq!(report.succeeded(), 2);
        assert_eq!(report.failed(), 1);

        let failures: Vec<_> = report.failures().collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].job.input_path, PathBuf::from("/in/b.mp4"));
    }

    #[test]
    fn empty_report() {
        let report = RunReport::new(Vec::new());
        assert!(report.is_empty());
        assert_eq!(report.succeeded(), 0);
        assert_eq!(report.failed(), 0);
    }
}
