/// Chart run entry point: fetch → aggregate → render → write.
///
/// Usage: precip_chart [job.toml]
///
/// Without an argument the run covers the built-in default job (New York
/// City, 2024). Failures are logged and leave no chart behind.

use std::time::Duration;

use precip_chart::analysis::monthly;
use precip_chart::chart::svg::{self, ChartOptions};
use precip_chart::config::ChartJob;
use precip_chart::ingest::open_meteo;
use precip_chart::logging::{self, DataSource};

fn main() {
    let config_path = std::env::args().nth(1);

    let job = match ChartJob::load(config_path.as_deref()) {
        Ok(job) => job,
        Err(e) => {
            // logger isn't up yet; config errors go straight to stderr
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    logging::init_logger(job.min_level(), job.log_file.as_deref());

    if let Err(e) = run(&job) {
        logging::error(DataSource::System, &format!("Run aborted: {}", e));
        std::process::exit(1);
    }
}

fn run(job: &ChartJob) -> Result<(), Box<dyn std::error::Error>> {
    logging::info(
        DataSource::System,
        &format!(
            "Charting precipitation for ({}, {}) over {}",
            job.latitude, job.longitude, job.year
        ),
    );

    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?;

    let daily = match open_meteo::fetch_daily_precipitation(&client, job) {
        Ok(daily) => daily,
        Err(e) => {
            logging::log_archive_failure("Archive fetch", &e);
            return Err(e.into());
        }
    };

    logging::info(
        DataSource::Archive,
        &format!("Received {} daily records", daily.time.len()),
    );
    if daily.is_empty() {
        logging::warn(
            DataSource::Archive,
            "Archive returned no days for the requested year; chart will be empty",
        );
    }

    let totals = monthly::monthly_totals_from_daily(&daily)?;
    let annual: f64 = totals.iter().map(|t| t.precipitation).sum();
    logging::info(
        DataSource::Chart,
        &format!("Aggregated {} months, {:.2} inches total", totals.len(), annual),
    );

    let document = svg::render(&totals, &ChartOptions::default());
    std::fs::write(&job.output, document)?;
    logging::info(DataSource::Chart, &format!("Wrote chart to {}", job.output));

    Ok(())
}
