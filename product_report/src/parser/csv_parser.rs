use super::{InputFormat, ProductParser};
use crate::domain::Product;
use crate::processing::ParseConfig;
use anyhow::{Context, Result};
use tracing::debug;

/// CSV形式のパーサー
///
/// 列は `name,price,rating` の順。行ごとの列数は可変で、4列目以降は無視する。
/// 価格・評価が整数でない行や3列に満たない行は黙ってスキップする。
/// UTF-8として不正なバイトを含む名前は置換文字に置き換えて読み込む。
#[derive(Debug, Clone)]
pub struct CsvProductParser {
    delimiter: u8,
    has_headers: bool,
    trim: bool,
}

impl Default for CsvProductParser {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_headers: false,
            trim: false,
        }
    }
}

impl CsvProductParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config<C: ParseConfig + ?Sized>(config: &C) -> Self {
        Self {
            delimiter: config.csv_delimiter(),
            has_headers: config.csv_has_headers(),
            trim: config.csv_trim(),
        }
    }

    /// 1行を商品レコードに変換（不正な行は None）
    fn parse_row(record: &csv::ByteRecord) -> Option<Product> {
        let name = String::from_utf8_lossy(record.get(0)?);
        let price = Self::parse_integer(record.get(1)?)?;
        let rating = Self::parse_integer(record.get(2)?)?;

        Some(Product::new(name, price, rating))
    }

    fn parse_integer(field: &[u8]) -> Option<i64> {
        std::str::from_utf8(field).ok()?.parse().ok()
    }
}

impl ProductParser for CsvProductParser {
    fn format(&self) -> InputFormat {
        InputFormat::Csv
    }

    fn parse(&self, data: &[u8]) -> Result<Vec<Product>> {
        let trim = if self.trim {
            csv::Trim::All
        } else {
            csv::Trim::None
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(self.has_headers)
            .flexible(true)
            .delimiter(self.delimiter)
            .trim(trim)
            .from_reader(data);

        let mut products = Vec::new();
        for result in reader.byte_records() {
            let record = result.context("CSVの読み込みに失敗しました")?;

            match Self::parse_row(&record) {
                Some(product) => products.push(product),
                None => {
                    let line = record.position().map(|p| p.line()).unwrap_or_default();
                    debug!(line, fields = record.len(), "不正な行をスキップしました");
                }
            }
        }

        Ok(products)
    }
}
