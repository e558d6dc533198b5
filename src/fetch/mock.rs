use std::sync::RwLock;

use bytes::Bytes;
use futures::future::{self, BoxFuture, FutureExt};
use url::Url;

use crate::errors::CatalogError;
use crate::fetch::Source;

/// A source that answers every request with the same body and records
/// the URLs it was asked for.
#[derive(Default)]
pub struct StaticSource {
    body: Bytes,
    requested: RwLock<Vec<Url>>,
}

impl StaticSource {
    pub fn new(body: impl Into<Bytes>) -> Self {
        StaticSource {
            body: body.into(),
            ..Default::default()
        }
    }

    /// Returns the URLs requested so far, oldest first.
    pub fn requested(&self) -> Vec<Url> {
        self.requested
            .read()
            .map(|urls| urls.clone())
            .unwrap_or_default()
    }
}

impl Source for StaticSource {
    fn fetch<'a>(&'a self, url: &'a Url) -> BoxFuture<'a, Result<Bytes, CatalogError>> {
        if let Ok(mut requested) = self.requested.write() {
            requested.push(url.clone());
        }

        future::ready(Ok(self.body.clone())).boxed()
    }
}
