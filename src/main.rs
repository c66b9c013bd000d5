mod analyzer;
#[cfg(test)]
mod capture_log;
mod error;
mod headers;
mod service;

use analyzer::{emit, Analyzer};
use error::LoadError;
use log::{Level, Log};
use service::{ApiService, SERVICE_FILE};
use std::path::Path;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let filters = std::env::var("RUST_LOG").unwrap_or_else(|_| "debug".to_string());
    let logger = pretty_env_logger::formatted_builder()
        .parse_filters(&filters)
        .build();

    if let Err(err) = run(SERVICE_FILE, &logger).await {
        emit(&logger, Level::Error, format_args!("{err}"));
        logger.flush();
        std::process::exit(1);
    }

    logger.flush();
}

/// Loads the service and analyzes it. Only a load failure is returned.
async fn run(path: impl AsRef<Path>, log: &dyn Log) -> Result<(), LoadError> {
    let service = ApiService::load(path)?;
    Analyzer::new(log).analyze(&service).await;
    Ok(())
}
