// src/cache.rs
use std::collections::HashMap;

use crate::specs::definition::ToolDefinition;

/// What we remember about a fetched tool definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CachedDefinition {
    pub declared_id: Option<String>,
    pub data_tables: Vec<String>,
}

/// Per-run memo of fetch URL -> definition. In memory only, never evicted.
///
/// Keyed by URL alone: two tools that resolve to the same URL share one entry,
/// so the second is checked against the first document's declared id.
#[derive(Debug, Default)]
pub struct DefinitionCache {
    entries: HashMap<String, CachedDefinition>,
    hits: usize,
}

impl DefinitionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, url: &str) -> Option<&CachedDefinition> {
        let found = self.entries.get(url);
        if found.is_some() {
            self.hits += 1;
        }
        found
    }

    /// Remember `def` under `url`. Shared (`macros`/`tokens`) documents are refused,
    /// they have no id to check against. Returns whether an entry was stored.
    pub fn remember(&mut self, url: &str, def: &ToolDefinition) -> bool {
        if def.is_shared() {
            return false;
        }
        self.entries.insert(
            url.to_string(),
            CachedDefinition { declared_id: def.id.clone(), data_tables: def.data_tables.clone() },
        );
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }
}
