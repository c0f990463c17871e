// 診断ログの初期化
//
// 集計結果は標準出力、ログは標準エラー出力に分ける。

use tracing_subscriber::EnvFilter;

/// tracing のサブスクライバーを標準エラー出力に設定する
///
/// `RUST_LOG` が設定されていればそちらを優先する。2回目以降の呼び出しは無視される。
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
