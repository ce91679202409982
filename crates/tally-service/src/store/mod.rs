//! Store client: the seam between the HTTP resources and the external
//! key-value service.
//!
//! [`CounterStore`] is the typed contract; the production Redis client
//! lives in `redis`, and the `memory` store backs the integration tests
//! and local development.

pub mod credentials;
pub mod memory;
pub mod redis;

use async_trait::async_trait;

use tally_core::{Counter, Result};

/// Typed operations over the external key-value store.
///
/// Every operation is a single round trip; absence of a key is an empty
/// result, never an error. Errors are reserved for transport failures.
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Current value under `name`, or `None` if the key is absent.
    async fn get(&self, name: &str) -> Result<Option<i64>>;

    /// Write-through set.
    async fn set(&self, name: &str, value: i64) -> Result<()>;

    /// Atomic increment at the store; returns the new value. Never a
    /// client-side read-modify-write, so concurrent incrementers cannot
    /// lose updates.
    async fn increment(&self, name: &str) -> Result<i64>;

    /// Remove the key entirely (not merely zeroed).
    async fn delete(&self, name: &str) -> Result<()>;

    /// Every key currently in the store, as counters.
    async fn list_all(&self) -> Result<Vec<Counter>>;

    /// `Some(counter)` if the key exists.
    async fn find(&self, name: &str) -> Result<Option<Counter>>;

    /// Clear every key. Test/reset support; not reachable over HTTP.
    async fn remove_all(&self) -> Result<()>;

    /// Liveness probe.
    async fn ping(&self) -> Result<()>;
}
