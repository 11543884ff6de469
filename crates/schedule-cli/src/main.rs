//! Class schedule lookup binary.

use std::io;

use schedule_cli::{run_menu, CliConfig};
use schedule_loader::{load_schedule_file, LoadConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing on stderr so the menu owns stdout
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = CliConfig::from_env();
    tracing::info!("Loading schedule from: {}", config.csv_path.display());

    let (store, report) = match load_schedule_file(&config.csv_path, &LoadConfig::default()) {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::error!("Error reading from file: {}", e);
            std::process::exit(1);
        }
    };

    if report.error_count() > 0 {
        tracing::warn!(
            "{} of {} lines were skipped as invalid records",
            report.error_count(),
            report.lines_read
        );
    }
    tracing::info!("{} schedule entries available", store.len());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_menu(&store, stdin.lock(), &mut stdout, config.output)?;

    Ok(())
}
