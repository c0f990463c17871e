// 入力ファイルの解析
//
// 拡張子で形式を判定し、形式別のパーサーで商品レコード列に変換する。

pub mod csv_parser;
pub mod json_parser;

use crate::domain::{Product, ProductError, ProductResult};
use crate::processing::ParseConfig;
use crate::storage::StorageBackend;
use std::fmt;
use std::path::Path;
use tracing::{debug, error};

pub use csv_parser::CsvProductParser;
pub use json_parser::JsonProductParser;

/// 対応する入力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Json,
}

impl InputFormat {
    /// ファイルの拡張子から形式を判定（大文字小文字は区別しない）
    ///
    /// 拡張子はファイル名の最後の `.` 以降とする。`.csv` のように先頭が
    /// `.` のファイル名もその部分を拡張子として扱う。
    pub fn from_path(path: &Path) -> ProductResult<Self> {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default();
        let extension = file_name
            .rsplit_once('.')
            .map(|(_, extension)| extension)
            .unwrap_or("");

        match extension.to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(ProductError::unsupported_format(
                path.display().to_string(),
                extension,
            )),
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 形式別パーサーのトレイト
pub trait ProductParser: Send + Sync {
    /// 対応する入力形式
    fn format(&self) -> InputFormat;

    /// ファイル内容を商品レコード列に変換
    fn parse(&self, data: &[u8]) -> anyhow::Result<Vec<Product>>;
}

/// 形式に応じたパーサーを作成
pub fn parser_for<C>(format: InputFormat, config: &C) -> Box<dyn ProductParser>
where
    C: ParseConfig + ?Sized,
{
    match format {
        InputFormat::Csv => Box::new(CsvProductParser::from_config(config)),
        InputFormat::Json => Box::new(JsonProductParser::new()),
    }
}

/// パスのファイルを読み込み、商品レコード列を返す
///
/// 読み込み失敗・デコード失敗はログに記録した上でエラーとして返す。
/// 行単位の不正（CSV）はスキップされるため、結果が空になることもある。
pub async fn parse_file<S, C>(storage: &S, path: &Path, config: &C) -> ProductResult<Vec<Product>>
where
    S: StorageBackend + ?Sized,
    C: ParseConfig + ?Sized,
{
    let format = InputFormat::from_path(path)?;
    let display_path = path.display().to_string();

    let data = storage
        .read_item(&path.to_string_lossy())
        .await
        .map_err(|e| {
            error!(path = %display_path, error = %e, "ファイルを開けませんでした");
            ProductError::read(display_path.clone(), e)
        })?;

    let parser = parser_for(format, config);
    let products = parser.parse(&data).map_err(|e| {
        error!(path = %display_path, input_format = %format, error = %e, "ファイルを解析できませんでした");
        ProductError::decode(display_path.clone(), format.as_str(), e)
    })?;

    debug!(
        path = %display_path,
        input_format = %format,
        bytes = data.len(),
        count = products.len(),
        "商品レコードを読み込みました"
    );

    Ok(products)
}
