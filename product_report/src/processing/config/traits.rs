// 設定管理のトレイト定義

use crate::domain::{ProductError, ProductResult};

/// 入力解析の設定を抽象化するトレイト
pub trait ParseConfig: Send + Sync {
    /// CSVのフィールド区切り文字を取得
    fn csv_delimiter(&self) -> u8;

    /// CSVの先頭行をヘッダーとして読み飛ばすかどうか
    fn csv_has_headers(&self) -> bool;

    /// CSVフィールド前後の空白を除去するかどうか
    fn csv_trim(&self) -> bool;

    /// 設定値を検証
    fn validate(&self) -> ProductResult<()> {
        let delimiter = self.csv_delimiter();
        if !delimiter.is_ascii() {
            return Err(ProductError::configuration(
                "区切り文字はASCII文字である必要があります",
            ));
        }
        if matches!(delimiter, b'"' | b'\n' | b'\r') {
            return Err(ProductError::configuration(format!(
                "区切り文字に使用できない文字です: {:?}",
                delimiter as char
            )));
        }
        Ok(())
    }
}
