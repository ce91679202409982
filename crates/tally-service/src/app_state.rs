//! Shared application state.
//!
//! Holds the one store handle shared by every request handler: an
//! explicit object passed through axum state, not a process global. The
//! handle is optional: when the store was unreachable at boot the service
//! keeps running degraded, and each request that needs the store answers
//! with a connection error (503).

use std::sync::Arc;

use tally_core::error::{Result, TallyError};

use crate::store::CounterStore;

#[derive(Clone)]
pub struct AppState {
    store: Option<Arc<dyn CounterStore>>,
}

impl AppState {
    pub fn new(store: Arc<dyn CounterStore>) -> Self {
        Self { store: Some(store) }
    }

    /// State with no live store connection. Every store access fails until
    /// the process is restarted; `/health` and `/` keep serving.
    pub fn degraded() -> Self {
        Self { store: None }
    }

    /// The shared store handle, or a connection error when degraded.
    pub fn store(&self) -> Result<Arc<dyn CounterStore>> {
        self.store.clone().ok_or_else(|| {
            TallyError::Connection("no live store connection, service is degraded".into())
        })
    }
}
