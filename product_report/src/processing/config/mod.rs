// 入力解析の設定管理

pub mod traits;

// 公開API
pub use traits::*;
