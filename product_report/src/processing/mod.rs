// 商品レポート処理のモジュール
// 機能別フォルダ構造

pub mod config;          // 入力解析の設定
pub mod reporting;       // 集計結果の出力先
pub mod implementations; // 設定・出力先の具象実装
pub mod engine;          // 解析→集計→出力のオーケストレーション

// 公開API - 各機能から再エクスポート
pub use config::ParseConfig;
pub use reporting::ReportSink;
pub use implementations::{
    ConsoleReportSink, DefaultParseConfig, JsonReportSink, MemoryReportSink,
};
pub use engine::ReportEngine;
