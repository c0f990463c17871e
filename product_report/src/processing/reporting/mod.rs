// 集計結果の出力
//
// 実装は processing/implementations.rs にある：
// - ConsoleReportSink - 2行のテキスト出力
// - JsonReportSink    - JSON形式の1行出力
// - MemoryReportSink  - テスト用のメモリ保持

pub mod traits;

// 公開API
pub use traits::*;
