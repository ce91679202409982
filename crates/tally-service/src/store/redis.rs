//! Redis-backed store client.
//!
//! One multiplexed async connection is opened at startup and shared
//! process-wide; each operation is a single round trip over a cheap clone
//! of the handle. Atomicity of `increment` is the store's INCR, never a
//! client-side read-modify-write.
//!
//! Retry applies only at connect time. A mid-request store failure is
//! surfaced immediately, not retried transparently.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, Client};
use tracing::{error, info, warn};

use tally_core::error::{Result, TallyError};
use tally_core::Counter;

use crate::config::RetryPolicy;
use crate::store::credentials::StoreCredentials;
use crate::store::CounterStore;

pub struct RedisStore {
    conn: MultiplexedConnection,
}

impl RedisStore {
    /// Open a connection and validate it with a PING probe, retrying with
    /// exponential backoff until the budget is exhausted. After the last
    /// attempt the connection error propagates to the caller.
    pub async fn connect(creds: &StoreCredentials, retry: &RetryPolicy) -> Result<Self> {
        let info = connection_info(creds);
        let attempts = retry.count.max(1);
        let mut delay = Duration::from_secs(retry.delay_secs);
        let mut last_err = TallyError::Connection("no connection attempt made".into());

        for attempt in 1..=attempts {
            info!(host = %creds.host, port = creds.port, attempt, "connecting to store");
            match Self::try_connect(info.clone()).await {
                Ok(store) => {
                    info!(host = %creds.host, port = creds.port, "store connection established");
                    return Ok(store);
                }
                Err(e) => {
                    warn!(error = %e, attempt, "store connection failed");
                    last_err = e;
                }
            }
            if attempt < attempts {
                tokio::time::sleep(delay).await;
                delay *= retry.backoff.max(1) as u32;
            }
        }

        error!(host = %creds.host, port = creds.port, "retry budget exhausted, giving up on store");
        Err(last_err)
    }

    async fn try_connect(info: redis::ConnectionInfo) -> Result<Self> {
        let client = Client::open(info).map_err(conn_err)?;
        let conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(conn_err)?;
        let store = Self { conn };
        // A freshly opened connection that cannot answer PING is treated
        // as a failed connect.
        store.ping().await?;
        Ok(store)
    }
}

#[async_trait]
impl CounterStore for RedisStore {
    async fn get(&self, name: &str) -> Result<Option<i64>> {
        let mut conn = self.conn.clone();
        let raw: Option<String> = conn.get(name).await.map_err(conn_err)?;
        raw.map(|s| parse_value(name, &s)).transpose()
    }

    async fn set(&self, name: &str, value: i64) -> Result<()> {
        let mut conn = self.conn.clone();
        let _: () = conn.set(name, value).await.map_err(conn_err)?;
        Ok(())
    }

    async fn increment(&self, name: &str) -> Result<i64> {
        let mut conn = self.conn.clone();
        let value: i64 = conn.incr(name, 1).await.map_err(conn_err)?;
        Ok(value)
    }

    async fn delete(&self, name: &str) -> Result<()> {
        let mut conn = self.conn.clone();
        let _: () = conn.del(name).await.map_err(conn_err)?;
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Counter>> {
        let mut conn = self.conn.clone();
        let keys: Vec<String> = conn.keys("*").await.map_err(conn_err)?;
        let mut counters = Vec::with_capacity(keys.len());
        for name in keys {
            let raw: Option<String> = conn.get(&name).await.map_err(conn_err)?;
            // A key may vanish between KEYS and GET; skip it.
            if let Some(raw) = raw {
                let value = parse_value(&name, &raw)?;
                counters.push(Counter::with_value(name, value));
            }
        }
        Ok(counters)
    }

    async fn find(&self, name: &str) -> Result<Option<Counter>> {
        let value = self.get(name).await?;
        Ok(value.map(|v| Counter::with_value(name, v)))
    }

    async fn remove_all(&self) -> Result<()> {
        let mut conn = self.conn.clone();
        redis::cmd("FLUSHDB")
            .query_async::<_, ()>(&mut conn)
            .await
            .map_err(conn_err)
    }

    async fn ping(&self) -> Result<()> {
        let mut conn = self.conn.clone();
        let _: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(conn_err)?;
        Ok(())
    }
}

fn connection_info(creds: &StoreCredentials) -> redis::ConnectionInfo {
    redis::ConnectionInfo {
        addr: redis::ConnectionAddr::Tcp(creds.host.clone(), creds.port),
        redis: redis::RedisConnectionInfo {
            db: creds.database,
            username: (!creds.username.is_empty()).then(|| creds.username.clone()),
            password: (!creds.password.is_empty()).then(|| creds.password.clone()),
        },
    }
}

fn conn_err(e: redis::RedisError) -> TallyError {
    TallyError::Connection(e.to_string())
}

/// Values are stored as decimal integer strings, one key per counter name.
/// Any key in the store is treated as a counter, so a foreign value under
/// a shared store surfaces here as an internal error.
fn parse_value(name: &str, raw: &str) -> Result<i64> {
    raw.trim()
        .parse()
        .map_err(|_| TallyError::Internal(format!("value under key {name:?} is not an integer")))
}
