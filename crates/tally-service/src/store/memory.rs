//! In-memory store.
//!
//! Backs the HTTP integration tests and local development without a live
//! Redis. Observable semantics match the Redis client, including per-key
//! atomic increments (the map shard lock serializes them).

use async_trait::async_trait;
use dashmap::DashMap;

use tally_core::{Counter, Result};

use crate::store::CounterStore;

#[derive(Default)]
pub struct MemoryStore {
    map: DashMap<String, i64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CounterStore for MemoryStore {
    async fn get(&self, name: &str) -> Result<Option<i64>> {
        Ok(self.map.get(name).map(|v| *v))
    }

    async fn set(&self, name: &str, value: i64) -> Result<()> {
        self.map.insert(name.to_string(), value);
        Ok(())
    }

    async fn increment(&self, name: &str) -> Result<i64> {
        let mut entry = self.map.entry(name.to_string()).or_insert(0);
        *entry += 1;
        Ok(*entry)
    }

    async fn delete(&self, name: &str) -> Result<()> {
        self.map.remove(name);
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Counter>> {
        Ok(self
            .map
            .iter()
            .map(|e| Counter::with_value(e.key().clone(), *e.value()))
            .collect())
    }

    async fn find(&self, name: &str) -> Result<Option<Counter>> {
        Ok(self.map.get(name).map(|v| Counter::with_value(name, *v)))
    }

    async fn remove_all(&self) -> Result<()> {
        self.map.clear();
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let store = MemoryStore::new();
        store.set("hits", 13).await.unwrap();
        assert_eq!(store.get("hits").await.unwrap(), Some(13));
    }

    #[tokio::test]
    async fn get_absent_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("hits").await.unwrap(), None);
        assert_eq!(store.find("hits").await.unwrap(), None);
    }

    #[tokio::test]
    async fn increment_is_exactly_plus_one() {
        let store = MemoryStore::new();
        store.set("hits", 0).await.unwrap();
        assert_eq!(store.increment("hits").await.unwrap(), 1);
        assert_eq!(store.increment("hits").await.unwrap(), 2);
        assert_eq!(store.increment("hits").await.unwrap(), 3);
    }

    #[tokio::test]
    async fn delete_removes_the_key_entirely() {
        let store = MemoryStore::new();
        store.set("foo", 5).await.unwrap();
        store.delete("foo").await.unwrap();
        assert_eq!(store.find("foo").await.unwrap(), None);
        // Deleting again is not an error.
        store.delete("foo").await.unwrap();
    }

    #[tokio::test]
    async fn list_reflects_deletes() {
        let store = MemoryStore::new();
        for name in ["a", "b", "c"] {
            store.set(name, 0).await.unwrap();
        }
        store.delete("b").await.unwrap();

        let mut names: Vec<String> = store
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        names.sort();
        assert_eq!(names, ["a", "c"]);
    }

    #[tokio::test]
    async fn remove_all_clears_every_key() {
        let store = MemoryStore::new();
        store.set("a", 1).await.unwrap();
        store.set("b", 2).await.unwrap();
        store.remove_all().await.unwrap();
        assert!(store.list_all().await.unwrap().is_empty());
    }
}
