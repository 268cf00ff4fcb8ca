//! Persisted flag store port
//!
//! This port defines the contract for the durable key-value store backing
//! "seen" flags. Implementations are provided by the infrastructure layer
//! (e.g., file-based storage). Values survive process restarts.

use async_trait::async_trait;

#[async_trait]
pub trait FlagStorePort: Send + Sync {
    /// Read the stored value for `key`. `None` when absent.
    async fn read(&self, key: &str) -> anyhow::Result<Option<String>>;

    /// Durably write `value` under `key`.
    async fn write(&self, key: &str, value: &str) -> anyhow::Result<()>;

    /// Remove `key`. Used by external reset paths, never by the flow itself.
    async fn remove(&self, key: &str) -> anyhow::Result<()>;
}
