// ドメイン型定義 - エラー型と商品データ型

pub mod error;
pub mod types;

pub use error::{ProductError, ProductResult};
pub use types::{Product, ProductReport};
