use url::Url;

use crate::expertise::ExpertiseLevel;
use crate::filter::Filter;
use crate::urls::SearchQuery;

/// What to fetch and which sessions to report.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub search_url: Url,
    pub filter: Filter,
}

impl Default for Config {
    /// Expert sessions on June 26th at the Washington, DC summit.
    fn default() -> Self {
        Self {
            search_url: SearchQuery::default().url(),
            filter: Filter::new(ExpertiseLevel::Expert, "June 26th"),
        }
    }
}

impl Config {
    pub fn new(search_url: Url, filter: Filter) -> Self {
        Self { search_url, filter }
    }
}
