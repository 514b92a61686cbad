//! Backend colormap catalogues
//!
//! A catalogue is the backend's own name-to-colormap store; unrelated code
//! may read from and write to it. The registries only ever go through this
//! interface, so tests can substitute a fresh catalogue for the process-wide
//! one.

use std::sync::Arc;

use ahash::AHashMap;
use parking_lot::RwLock;

/// Mutable name-to-colormap store shared with the rest of the backend
pub trait Catalogue<G>: Send + Sync {
    /// Insert or replace the entry under `name`
    fn register(&self, name: &str, colormap: Arc<G>);

    fn lookup(&self, name: &str) -> Option<Arc<G>>;

    /// All registered names, in no particular order
    fn names(&self) -> Vec<String>;
}

/// In-memory catalogue; write access is serialized by the lock
pub struct InMemoryCatalogue<G> {
    entries: RwLock<AHashMap<String, Arc<G>>>,
}

impl<G> InMemoryCatalogue<G> {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(AHashMap::new()),
        }
    }
}

impl<G> Default for InMemoryCatalogue<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: Send + Sync> Catalogue<G> for InMemoryCatalogue<G> {
    fn register(&self, name: &str, colormap: Arc<G>) {
        self.entries.write().insert(name.to_string(), colormap);
    }

    fn lookup(&self, name: &str) -> Option<Arc<G>> {
        self.entries.read().get(name).cloned()
    }

    fn names(&self) -> Vec<String> {
        self.entries.read().keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let catalogue = InMemoryCatalogue::new();
        catalogue.register("custom", Arc::new(7_u32));
        assert_eq!(catalogue.lookup("custom").as_deref(), Some(&7));
        assert!(catalogue.lookup("missing").is_none());
    }

    #[test]
    fn test_register_replaces() {
        let catalogue = InMemoryCatalogue::new();
        catalogue.register("custom", Arc::new(1_u32));
        catalogue.register("custom", Arc::new(2_u32));
        assert_eq!(catalogue.lookup("custom").as_deref(), Some(&2));
        assert_eq!(catalogue.names(), vec!["custom".to_string()]);
    }
}
