pub mod cli;
pub mod domain;
pub mod logging;
pub mod parser;
pub mod processing;
pub mod reducer;
pub mod storage;

pub use domain::{Product, ProductError, ProductReport, ProductResult};
pub use processing::{
    ConsoleReportSink, DefaultParseConfig, JsonReportSink, MemoryReportSink, ParseConfig,
    ReportEngine, ReportSink,
};
pub use reducer::{max_by_price, max_by_rating};
