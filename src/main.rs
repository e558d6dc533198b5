use std::io;
use std::sync::Arc;

use log::{error, info, initialize_logger, Logger};

use sessions::config::Config;
use sessions::environment::Environment;
use sessions::errors::CatalogError;
use sessions::fetch::HttpSource;
use sessions::pipeline;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let logger = Arc::new(initialize_logger());

    // Failures are reported on standard output and do not change the
    // exit status.
    if let Err(e) = start(logger.clone()).await {
        error!(logger, "Run failed"; "stage" => %e.stage(), "error" => ?e, "message" => %e);
        println!("{}", e);
    }
}

async fn start(logger: Arc<Logger>) -> Result<(), CatalogError> {
    let config = Config::default();
    info!(logger, "Starting..."; "url" => %config.search_url, "expertise" => %config.filter.expertise, "event_date" => &config.filter.event_date);

    let source = Arc::new(HttpSource::new()?);
    let environment = Environment::new(logger.clone(), source, config);

    let stdout = io::stdout();
    let summary = pipeline::run(&environment, stdout.lock()).await?;

    info!(logger, "Done"; "decoded" => summary.decoded, "selected" => summary.selected);

    Ok(())
}
