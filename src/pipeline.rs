use std::io::Write;

use log::{debug, info};

use crate::decode::decode;
use crate::duration::normalize;
use crate::environment::Environment;
use crate::errors::CatalogError;
use crate::filter;
use crate::report::Report;

/// The counts of a completed run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Summary {
    /// Sessions in the response.
    pub decoded: usize,

    /// Sessions that passed the filter.
    pub selected: usize,
}

/// Fetches, decodes, normalizes, filters and sorts the sessions, then
/// writes the report to `out`. Nothing is written unless every earlier
/// step succeeded.
pub async fn run(environment: &Environment, out: impl Write) -> Result<Summary, CatalogError> {
    let logger = &environment.logger;
    let config = &environment.config;

    debug!(logger, "Fetching sessions..."; "url" => %config.search_url);
    let body = environment.source.fetch(&config.search_url).await?;
    debug!(logger, "Received response"; "bytes" => body.len());

    let mut sessions = decode(&body)?;
    normalize(&mut sessions)?;

    let mut selected = filter::apply(&config.filter, &sessions);
    filter::sort_by_start(&mut selected);

    let summary = Summary {
        decoded: sessions.len(),
        selected: selected.len(),
    };
    info!(logger, "Selected sessions"; "decoded" => summary.decoded, "selected" => summary.selected, "expertise" => %config.filter.expertise, "event_date" => &config.filter.event_date);

    Report::new(summary.decoded, &selected).write_to(out)?;

    Ok(summary)
}
