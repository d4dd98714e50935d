//! Cached list views
//!
//! Rendered list payloads are cached per path and dropped when a mutation
//! succeeds, so the next read recomputes from the store. Uses RwLock for
//! concurrent read access with rare writes.

use std::collections::HashMap;

use tokio::sync::RwLock;
use tracing::debug;

/// Per-path cache of rendered view payloads
pub struct ViewCache {
    entries: RwLock<HashMap<String, String>>,
}

impl ViewCache {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Get the cached payload for a path, if still fresh
    pub async fn get(&self, path: &str) -> Option<String> {
        self.entries.read().await.get(path).cloned()
    }

    /// Store a freshly computed payload for a path
    pub async fn put(&self, path: &str, payload: String) {
        self.entries.write().await.insert(path.to_string(), payload);
    }

    /// Mark the view at `path` stale so the next read recomputes it
    pub async fn revalidate_path(&self, path: &str) {
        if self.entries.write().await.remove(path).is_some() {
            debug!("Invalidated cached view for {}", path);
        }
    }
}

impl Default for ViewCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_cache_misses() {
        let cache = ViewCache::new();
        assert!(cache.get("/dashboard/invoices").await.is_none());
    }

    #[tokio::test]
    async fn test_put_then_get() {
        let cache = ViewCache::new();

        cache.put("/dashboard/invoices", "[]".to_string()).await;
        assert_eq!(
            cache.get("/dashboard/invoices").await,
            Some("[]".to_string())
        );
    }

    #[tokio::test]
    async fn test_revalidate_drops_entry() {
        let cache = ViewCache::new();

        cache.put("/dashboard/invoices", "[]".to_string()).await;
        cache.revalidate_path("/dashboard/invoices").await;

        assert!(cache.get("/dashboard/invoices").await.is_none());
    }

    #[tokio::test]
    async fn test_revalidate_is_scoped_to_path() {
        let cache = ViewCache::new();

        cache.put("/dashboard/invoices", "[]".to_string()).await;
        cache.put("/dashboard/customers", "[]".to_string()).await;
        cache.revalidate_path("/dashboard/invoices").await;

        assert!(cache.get("/dashboard/invoices").await.is_none());
        assert!(cache.get("/dashboard/customers").await.is_some());
    }

    #[tokio::test]
    async fn test_revalidate_missing_path_is_noop() {
        let cache = ViewCache::new();
        // Nothing cached; must not panic or create an entry
        cache.revalidate_path("/dashboard/invoices").await;
        assert!(cache.get("/dashboard/invoices").await.is_none());
    }
}
