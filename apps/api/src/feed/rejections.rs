use std::collections::HashSet;

use tokio::sync::RwLock;

/// Job ids the viewer has swiped away. Process-local, lost on restart.
#[derive(Debug, Default)]
pub struct RejectionStore {
    rejected: RwLock<HashSet<String>>,
}

impl RejectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the id was already rejected.
    pub async fn reject(&self, job_id: &str) -> bool {
        self.rejected.write().await.insert(job_id.to_string())
    }

    /// Sorted for stable responses.
    pub async fn list(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.rejected.read().await.iter().cloned().collect();
        ids.sort();
        ids
    }

    /// Returns how many ids were cleared.
    pub async fn clear(&self) -> usize {
        let mut rejected = self.rejected.write().await;
        let count = rejected.len();
        rejected.clear();
        count
    }

    /// Drops rejected items from `items`, keyed by `id_of`.
    pub async fn retain_unrejected<T>(&self, items: Vec<T>, id_of: impl Fn(&T) -> &str) -> Vec<T> {
        let rejected = self.rejected.read().await;
        items
            .into_iter()
            .filter(|item| !rejected.contains(id_of(item)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reject_and_list() {
        let store = RejectionStore::new();
        assert!(store.reject("b").await);
        assert!(store.reject("a").await);
        assert!(!store.reject("a").await);
        assert_eq!(store.list().await, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_clear() {
        let store = RejectionStore::new();
        store.reject("a").await;
        store.reject("b").await;
        assert_eq!(store.clear().await, 2);
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_retain_unrejected() {
        let store = RejectionStore::new();
        store.reject("2").await;
        let kept = store
            .retain_unrejected(vec!["1".to_string(), "2".to_string(), "3".to_string()], |s| s.as_str())
            .await;
        assert_eq!(kept, vec!["1", "3"]);
    }
}
