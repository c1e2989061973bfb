//! audiobatch - batch-extract the audio track of every video in
//! `./source_videos` into a timestamped `./extracted_audio_<timestamp>`
//! folder.
//!
//! Takes no arguments; the run is determined by the working directory's
//! contents (plus an optional `audiobatch.toml` next to it). Per-job
//! extraction failures are reported and do not fail the process; only
//! setup failures exit non-zero.

use std::env;

use anyhow::Context;
use chrono::Local;

use audiobatch_core::config::Settings;
use audiobatch_core::models::RunContext;
use audiobatch_core::{discovery, dispatch, logging};

const CONFIG_FILE: &str = "audiobatch.toml";

fn main() -> anyhow::Result<()> {
    logging::init_tracing("info");

    let cwd = env::current_dir().context("failed to resolve working directory")?;
    let settings = Settings::load_or_default(&cwd.join(CONFIG_FILE));

    let ctx = RunContext::create(&cwd, Local::now(), &settings)?;
    let jobs = discovery::discover_jobs(&ctx, &settings)?;
    let report = dispatch::run_extraction(jobs, settings.workers.threads)?;

    tracing::info!(
        "Run complete: {} extracted, {} failed, output in {}",
        report.succeeded(),
        report.failed(),
        ctx.output_folder.display()
    );

    Ok(())
}
