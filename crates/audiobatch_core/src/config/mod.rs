//! Configuration for a batch extraction run.

mod settings;

pub use settings::{ExtractionSettings, PathSettings, Settings, WorkerSettings};
