//! Id → label resolution for foreign references.
//!
//! The transaction lists display supplier/employee/customer names instead
//! of raw GUIDs. Labels come from sibling collections fetched alongside the
//! list; nothing here outlives one list activation.

use std::collections::HashMap;

use crate::api::{ApiClient, ApiError};
use crate::models::Labeled;

// ---------------------------------------------------------------------------
// Label index
// ---------------------------------------------------------------------------

/// One entity's id → display-label table.
#[derive(Debug, Clone, Default)]
pub struct LabelIndex {
    entries: HashMap<String, String>,
}

impl LabelIndex {
    pub fn from_records<E: Labeled>(records: &[E]) -> Self {
        let entries = records
            .iter()
            .map(|r| (r.id().to_string(), r.display_label()))
            .collect();
        Self { entries }
    }

    /// Label for `id`, falling back to the raw id when unknown.
    pub fn resolve<'a>(&'a self, id: &'a str) -> &'a str {
        self.entries.get(id).map(String::as_str).unwrap_or(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Read-through cache
// ---------------------------------------------------------------------------

/// Read-through cache of label indexes keyed by entity path.
///
/// Populated once per list activation, either by [`prime`](Self::prime)
/// with a collection the activation already fetched, or lazily by
/// [`index`](Self::index) on first use.
#[derive(Debug)]
pub struct LabelCache {
    api: ApiClient,
    indexes: HashMap<&'static str, LabelIndex>,
}

impl LabelCache {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            indexes: HashMap::new(),
        }
    }

    /// Store an already-fetched collection under its entity path.
    pub fn prime<E: Labeled>(&mut self, records: &[E]) {
        self.indexes.insert(E::PATH, LabelIndex::from_records(records));
    }

    /// Index for `E`, fetching the collection on first use.
    pub async fn index<E: Labeled>(&mut self) -> Result<&LabelIndex, ApiError> {
        if !self.indexes.contains_key(E::PATH) {
            let records: Vec<E> = self.api.fetch_all(E::PATH).await?;
            self.prime(&records);
        }
        Ok(self.indexes.entry(E::PATH).or_default())
    }

    /// Resolve without fetching: unknown ids (or an unprimed entity) fall
    /// back to the raw id, matching how the lists render missing labels.
    pub fn resolve<'a, E: Labeled>(&'a self, id: &'a str) -> &'a str {
        match self.indexes.get(E::PATH) {
            Some(index) => index.resolve(id),
            None => id,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
