//! audiobatch core - backend logic for batch audio extraction.
//!
//! This crate contains all business logic with zero CLI dependencies.
//! A run walks a source folder for video files, pairs each one with an
//! output path in a timestamped output folder, and extracts the audio
//! track of every pair on a bounded worker pool.

pub mod config;
pub mod discovery;
pub mod dispatch;
pub mod errors;
pub mod extraction;
pub mod logging;
pub mod models;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_returns_value() {
        assert!(!version().is_empty());
    }
}
