use crate::errors::CatalogError;
use crate::session::{SearchResponse, SessionWithTags};

/// Decodes a search response body into its sessions, in the order the
/// catalog listed them. Any malformed item fails the whole body.
pub fn decode(body: &[u8]) -> Result<Vec<SessionWithTags>, CatalogError> {
    serde_json::from_slice::<SearchResponse>(body)
        .map(|response| response.items)
        .map_err(|source| CatalogError::MalformedResponse { source })
}
