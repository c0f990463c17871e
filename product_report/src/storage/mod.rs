use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

pub mod local;

/// 入力データの取得元を抽象化するトレイト
#[automock]
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// アイテムの内容を丸ごと読み込む
    async fn read_item(&self, id: &str) -> Result<Vec<u8>>;
}

#[async_trait]
impl StorageBackend for Box<dyn StorageBackend> {
    async fn read_item(&self, id: &str) -> Result<Vec<u8>> {
        self.as_ref().read_item(id).await
    }
}
