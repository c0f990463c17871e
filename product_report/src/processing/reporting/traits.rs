// 集計結果出力のトレイト定義

use crate::domain::ProductReport;
use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

/// 集計結果の出力先を抽象化するトレイト
#[automock]
#[async_trait]
pub trait ReportSink: Send + Sync {
    /// 集計結果を出力
    async fn emit(&self, report: &ProductReport) -> Result<()>;
}

#[async_trait]
impl ReportSink for Box<dyn ReportSink> {
    async fn emit(&self, report: &ProductReport) -> Result<()> {
        self.as_ref().emit(report).await
    }
}
