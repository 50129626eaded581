//! Cache of destination-category tokens, keyed by category name.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Shared map from category name to its wiki node token.
///
/// Clones share the same entries, so one cache can be handed to several
/// clients. Entries never expire; a category deleted remotely stays cached
/// until the process restarts.
#[derive(Debug, Clone, Default)]
pub struct DirectionCache {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl DirectionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached node token for `name`.
    pub fn get(&self, name: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    pub fn insert(&self, name: &str, token: &str) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.to_string(), token.to_string());
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_roundtrip_and_sharing() {
        let cache = DirectionCache::new();
        let shared = cache.clone();
        assert!(cache.is_empty());

        cache.insert("Rust", "node_1");
        assert_eq!(shared.get("Rust").as_deref(), Some("node_1"));
        assert_eq!(shared.get("Go"), None);

        shared.insert("Rust", "node_2");
        assert_eq!(cache.get("Rust").as_deref(), Some("node_2"));
        assert_eq!(cache.len(), 1);
    }
}
