// ReportEngine - 依存性注入による集計エンジン
// 解析 → 空チェック → 並行集計 → 合流 → 出力 の流れを管理する

use super::{ParseConfig, ReportSink};
use crate::domain::{Product, ProductError, ProductReport, ProductResult};
use crate::parser;
use crate::reducer;
use crate::storage::StorageBackend;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// 集計エンジン
///
/// 入力元・設定・出力先をコンストラクタで注入する。
pub struct ReportEngine<S, C, R> {
    storage: S,
    config: C,
    sink: R,
}

impl<S, C, R> ReportEngine<S, C, R>
where
    S: StorageBackend,
    C: ParseConfig,
    R: ReportSink,
{
    /// 新しい集計エンジンを作成
    pub fn new(storage: S, config: C, sink: R) -> Self {
        Self {
            storage,
            config,
            sink,
        }
    }

    /// ファイルを集計して結果を出力する
    ///
    /// どの段階で失敗しても出力先には何も書き込まない。
    pub async fn run(&self, path: &Path) -> ProductResult<ProductReport> {
        self.config.validate()?;

        let products = parser::parse_file(&self.storage, path, &self.config).await?;
        if products.is_empty() {
            return Err(ProductError::empty_dataset(path.display().to_string()));
        }
        info!(path = %path.display(), count = products.len(), "商品を読み込みました");

        let report = reduce_concurrently(products).await?;

        self.sink
            .emit(&report)
            .await
            .map_err(ProductError::output)?;

        Ok(report)
    }
}

/// 価格・評価の2つの集計を別タスクで同時に実行し、結果を合流する
///
/// レコードは `Arc<[Product]>` で読み取り専用に共有する。
/// 合流は価格 → 評価の順で待つ。
pub async fn reduce_concurrently(products: Vec<Product>) -> ProductResult<ProductReport> {
    let total_products = products.len();
    let shared: Arc<[Product]> = products.into();

    let price_task = {
        let products = Arc::clone(&shared);
        tokio::spawn(async move { reducer::max_by_price(&products).cloned() })
    };
    let rating_task = {
        let products = Arc::clone(&shared);
        tokio::spawn(async move { reducer::max_by_rating(&products).cloned() })
    };

    let most_expensive = price_task.await??;
    let highest_rated = rating_task.await??;

    debug!(
        most_expensive = %most_expensive.name,
        highest_rated = %highest_rated.name,
        "集計が完了しました"
    );

    Ok(ProductReport {
        most_expensive,
        highest_rated,
        total_products,
    })
}
