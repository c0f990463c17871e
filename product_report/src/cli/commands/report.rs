use crate::cli::Cli;
use crate::domain::{ProductReport, ProductResult};
use crate::processing::{ConsoleReportSink, JsonReportSink, ReportEngine, ReportSink};
use crate::storage::local::LocalStorageBackend;

/// 引数で指定されたファイルを集計し、結果を標準出力に書き出す
pub async fn execute_report(cli: &Cli) -> ProductResult<ProductReport> {
    let config = cli.parse_config()?;

    let sink: Box<dyn ReportSink> = if cli.json {
        Box::new(JsonReportSink::new())
    } else {
        Box::new(ConsoleReportSink::new())
    };

    let engine = ReportEngine::new(LocalStorageBackend::new(), config, sink);
    engine.run(&cli.file).await
}
