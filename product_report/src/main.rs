use clap::Parser;
use std::process::ExitCode;

use product_report::{
    cli::{execute_report, Cli},
    logging,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.log_level());

    // プロセスの終了はここでのみ行う
    match execute_report(&cli).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("❌ エラー: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}
