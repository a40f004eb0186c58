mod aggregates;
mod engine;
mod export;
mod loader;
mod models;
mod settings;
mod types;
mod validation;

use std::io::{stderr, stdout, BufWriter, Write};
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::aggregates::Kpis;
use crate::engine::Pipeline;
use crate::settings::Settings;

fn main() -> Result<()> {
    let settings = Settings::parse();

    init_logging(settings.log_level)?;

    info!("Input ledger: [{}]", settings.input.display());
    info!("Output directory: [{}]", settings.output_dir.display());

    let pipeline = Pipeline::new(&settings.input, &settings.output_dir)
        .with_top_cities_limit(usize::from(settings.top_cities))
        .with_validation_mode(settings.validation_mode());

    let timer = Instant::now();
    let report = pipeline.run()?;
    let duration = timer.elapsed();

    info!("Summarized ledger in: {duration:?}");

    for path in &report.outputs {
        info!("Table written: [{}]", path.display());
    }

    if !report.validation.is_consistent() {
        warn!("Self-check found mismatches, review the tables before using them (rerun with --strict to fail instead)");
    }

    write_kpis_to_stdout(&report.summary.kpis)?;

    Ok(())
}

fn init_logging(level: LevelFilter) -> Result<()> {
    //NOTE: Progress and self-check lines go to stderr, stdout is reserved for the KPI table
    let progress_log = fmt::layer()
        .compact()
        .without_time()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(progress_log)
        .try_init()?;

    Ok(())
}

fn write_kpis_to_stdout(kpis: &Kpis) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    writeln!(output, "kpi,value")?;

    for (name, value) in kpis.rows() {
        writeln!(output, "{name},{value}")?;
    }

    output.flush()?;

    Ok(())
}
