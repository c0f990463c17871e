// 基本具象実装
// 解析設定と集計結果出力の実装群

use super::{ParseConfig, ReportSink};
use crate::domain::ProductReport;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::io::Write;
use std::sync::{Arc, Mutex};

/// デフォルト設定実装
#[derive(Debug, Clone)]
pub struct DefaultParseConfig {
    delimiter: u8,
    has_headers: bool,
    trim: bool,
}

impl DefaultParseConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }

    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }
}

impl Default for DefaultParseConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_headers: false,
            trim: false,
        }
    }
}

impl ParseConfig for DefaultParseConfig {
    fn csv_delimiter(&self) -> u8 {
        self.delimiter
    }

    fn csv_has_headers(&self) -> bool {
        self.has_headers
    }

    fn csv_trim(&self) -> bool {
        self.trim
    }
}

/// 標準出力にまとめて書き出す（パイプが閉じていてもパニックしない）
fn write_stdout(text: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .context("標準出力への書き込みに失敗しました")?;
    stdout.flush()?;
    Ok(())
}

/// 2行のテキストで集計結果を標準出力に書き出す実装
#[derive(Debug, Default, Clone)]
pub struct ConsoleReportSink;

impl ConsoleReportSink {
    pub fn new() -> Self {
        Self
    }

    /// 出力する2行を組み立てる（最高価格が先）
    pub fn render(report: &ProductReport) -> String {
        format!(
            "Most expensive product - {}\nHighest rated - {}\n",
            report.most_expensive.name, report.highest_rated.name
        )
    }
}

#[async_trait]
impl ReportSink for ConsoleReportSink {
    async fn emit(&self, report: &ProductReport) -> Result<()> {
        write_stdout(&Self::render(report))
    }
}

/// JSON形式の1行で集計結果を標準出力に書き出す実装
#[derive(Debug, Default, Clone)]
pub struct JsonReportSink;

impl JsonReportSink {
    pub fn new() -> Self {
        Self
    }

    pub fn render(report: &ProductReport) -> Result<String> {
        let json = serde_json::to_string(report).context("集計結果のシリアライズに失敗しました")?;
        Ok(format!("{json}\n"))
    }
}

#[async_trait]
impl ReportSink for JsonReportSink {
    async fn emit(&self, report: &ProductReport) -> Result<()> {
        write_stdout(&Self::render(report)?)
    }
}

/// メモリ内保持の出力実装（テスト用）
#[derive(Debug, Clone, Default)]
pub struct MemoryReportSink {
    reports: Arc<Mutex<Vec<ProductReport>>>,
}

impl MemoryReportSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// テスト用：受け取った集計結果を取得
    pub fn reports(&self) -> Vec<ProductReport> {
        self.reports.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReportSink for MemoryReportSink {
    async fn emit(&self, report: &ProductReport) -> Result<()> {
        self.reports.lock().unwrap().push(report.clone());
        Ok(())
    }
}
