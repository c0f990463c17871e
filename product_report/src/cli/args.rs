use crate::domain::{ProductError, ProductResult};
use crate::processing::DefaultParseConfig;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "product_report")]
#[command(about = "Report the most expensive and the highest rated product in a CSV or JSON file")]
#[command(version)]
pub struct Cli {
    /// Input file (.csv or .json)
    pub file: PathBuf,

    /// Print the report as a single JSON object
    #[arg(long)]
    pub json: bool,

    /// CSV field delimiter
    #[arg(short, long, default_value_t = ',')]
    pub delimiter: char,

    /// Treat the first CSV row as a header and skip it
    #[arg(long)]
    pub has_headers: bool,

    /// Trim whitespace around CSV fields
    #[arg(long)]
    pub trim: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// 引数から解析設定を組み立てる
    pub fn parse_config(&self) -> ProductResult<DefaultParseConfig> {
        if !self.delimiter.is_ascii() {
            return Err(ProductError::configuration(format!(
                "区切り文字はASCII文字である必要があります: {:?}",
                self.delimiter
            )));
        }

        Ok(DefaultParseConfig::new()
            .with_delimiter(self.delimiter as u8)
            .with_headers(self.has_headers)
            .with_trim(self.trim))
    }

    /// ログレベルの既定値（`RUST_LOG` 未設定時に使用）
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
