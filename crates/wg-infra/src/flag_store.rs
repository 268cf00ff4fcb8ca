//! File-based flag store
//!
//! This module provides a file-based implementation of the FlagStorePort,
//! persisting flags as a string-keyed JSON map in a local file under the
//! application data directory.

use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use wg_core::ports::FlagStorePort;

pub const DEFAULT_FLAG_STORE_FILE: &str = ".welcome_flags";

pub struct FileFlagStore {
    flags_file_path: PathBuf,
}

impl FileFlagStore {
    /// Create store with custom file path
    pub fn new(flags_file_path: PathBuf) -> Self {
        Self { flags_file_path }
    }

    /// Create store with base dir and filename
    pub fn with_base_dir(base_dir: PathBuf, filename: impl Into<String>) -> Self {
        Self {
            flags_file_path: base_dir.join(filename.into()),
        }
    }

    /// Create store with defaults
    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self {
            flags_file_path: base_dir.join(DEFAULT_FLAG_STORE_FILE),
        }
    }

    async fn ensure_parent_dir(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.flags_file_path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }

    async fn load_flags(&self) -> anyhow::Result<HashMap<String, String>> {
        if !self.flags_file_path.exists() {
            return Ok(HashMap::new());
        }

        let content = fs::read_to_string(&self.flags_file_path).await?;

        if content.trim().is_empty() {
            return Ok(HashMap::new());
        }

        let flags: HashMap<String, String> = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse flag store: {e}"))?;

        Ok(flags)
    }

    async fn save_flags(&self, flags: &HashMap<String, String>) -> anyhow::Result<()> {
        self.ensure_parent_dir().await?;

        let json = serde_json::to_string_pretty(flags)
            .map_err(|e| anyhow::anyhow!("Failed to serialize flag store: {e}"))?;

        let mut file = fs::File::create(&self.flags_file_path)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to create flag file: {e}"))?;

        file.write_all(json.as_bytes())
            .await
            .map_err(|e| anyhow::anyhow!("Failed to write flag file: {e}"))?;

        file.sync_all()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to sync flag file: {e}"))?;

        Ok(())
    }
}

#[async_trait]
impl FlagStorePort for FileFlagStore {
    async fn read(&self, key: &str) -> anyhow::Result<Option<String>> {
        let mut flags = self.load_flags().await?;
        Ok(flags.remove(key))
    }

    async fn write(&self, key: &str, value: &str) -> anyhow::Result<()> {
        // A corrupt store is replaced rather than wedging writes forever.
        let mut flags = self.load_flags().await.unwrap_or_default();
        flags.insert(key.to_string(), value.to_string());
        self.save_flags(&flags).await
    }

    async fn remove(&self, key: &str) -> anyhow::Result<()> {
        let mut flags = self.load_flags().await.unwrap_or_default();
        if flags.remove(key).is_none() {
            return Ok(());
        }
        self.save_flags(&flags).await
    }
}
