//! Data models for a batch extraction run.

mod jobs;
mod results;

pub use jobs::{Job, RunContext};
pub use results::{JobOutcome, RunReport};
