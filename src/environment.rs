use std::sync::Arc;

use log::Logger;

use crate::config::Config;
use crate::fetch::Source;

pub type SafeSource = dyn Source + Send + Sync;

/// Everything a run needs.
#[derive(Clone)]
pub struct Environment {
    pub logger: Arc<Logger>,
    pub source: Arc<SafeSource>,
    pub config: Config,
}

impl Environment {
    pub fn new(logger: Arc<Logger>, source: Arc<SafeSource>, config: Config) -> Self {
        Self {
            logger,
            source,
            config,
        }
    }
}
