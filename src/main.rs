use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use workout_tracker::config::{Config, DEFAULT_LOG_FILTER};
use workout_tracker::pipeline::{batch, format};
use workout_tracker::types::activity::Package;

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only workout summaries
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    tracing::debug!(?config, "Loaded configuration");

    let packages = [
        Package::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", [15000.0, 1.0, 75.0]),
        Package::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ];

    let report = match batch::run_batch(&packages, config.failure_policy) {
        Ok(report) => report,
        Err(err) => {
            tracing::error!("Batch aborted: {}", err);
            return ExitCode::FAILURE;
        }
    };

    for info in &report.messages {
        match format::render(info, config.output) {
            Ok(line) => println!("{line}"),
            Err(err) => {
                tracing::error!("Failed to render {}: {}", info.training_type, err);
                return ExitCode::FAILURE;
            }
        }
    }

    tracing::info!(
        "Processed {} packages: {} computed, {} skipped",
        packages.len(),
        report.messages.len(),
        report.skipped.len()
    );

    ExitCode::SUCCESS
}
