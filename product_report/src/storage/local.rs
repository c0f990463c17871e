use super::StorageBackend;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::Path;

/// ローカルファイルシステム用のストレージバックエンド
#[derive(Debug, Clone)]
pub struct LocalStorageBackend;

impl Default for LocalStorageBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalStorageBackend {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl StorageBackend for LocalStorageBackend {
    async fn read_item(&self, id: &str) -> Result<Vec<u8>> {
        let path = Path::new(id);
        let data = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read file: {id}"))?;
        Ok(data)
    }
}
