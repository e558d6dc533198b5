use bytes::Bytes;
use futures::future::{BoxFuture, FutureExt};
use reqwest::Client;
use url::Url;

use crate::errors::CatalogError;

pub mod mock;

pub use mock::StaticSource;

/// Somewhere a search response can be retrieved from.
pub trait Source: Send + Sync {
    /// Retrieves the raw body at the given URL.
    fn fetch<'a>(&'a self, url: &'a Url) -> BoxFuture<'a, Result<Bytes, CatalogError>>;
}

/// A source that queries the catalog over HTTP(S).
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    /// Creates a new instance with the transport's default settings.
    pub fn new() -> Result<Self, CatalogError> {
        let client = Client::builder()
            .build()
            .map_err(|source| CatalogError::QueryFailed { source })?;

        Ok(Self::with_client(client))
    }

    /// Creates a new instance around an already configured client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Source for HttpSource {
    fn fetch<'a>(&'a self, url: &'a Url) -> BoxFuture<'a, Result<Bytes, CatalogError>> {
        get(&self.client, url).boxed()
    }
}

/// Sends a single GET request. The connection is owned by the response
/// and released once the body has been read or the request has failed.
async fn get(client: &Client, url: &Url) -> Result<Bytes, CatalogError> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|source| CatalogError::QueryFailed { source })?;

    response
        .bytes()
        .await
        .map_err(|source| CatalogError::ReadFailed { source })
}
