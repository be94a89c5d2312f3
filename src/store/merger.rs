//! Local-first record retrieval

use crate::error::Result;
use crate::store::OverrideStore;
use crate::types::PokemonRecord;
use crate::upstream::PokeApi;
use std::sync::Arc;
use tracing::debug;

/// Resolves a record by id, local override first.
///
/// A stored override shadows the upstream record entirely. Only when no
/// override exists does the upstream API get consulted; its response is
/// translated into the record shape, dropping unknown fields.
#[derive(Debug, Clone)]
pub struct RecordMerger {
    store: Arc<OverrideStore>,
    api: PokeApi,
}

impl RecordMerger {
    /// Create a merger over a store and an upstream client
    pub fn new(store: Arc<OverrideStore>, api: PokeApi) -> Self {
        Self { store, api }
    }

    /// Retrieve a record, `None` when neither source has it
    pub async fn retrieve(&self, id: u32) -> Result<Option<PokemonRecord>> {
        if let Some(record) = self.store.get(id)? {
            debug!("Serving id {id} from local override");
            return Ok(Some(record));
        }

        match self.api.fetch_by_id(id).await? {
            Some(value) => Ok(Some(PokemonRecord::from_upstream(value)?)),
            None => Ok(None),
        }
    }
}
