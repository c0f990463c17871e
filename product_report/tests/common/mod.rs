// CLI統合テスト用のヘルパー

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// 一時ディレクトリ上に入力ファイルを作るテスト環境
pub struct TestEnv {
    tmp: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            tmp: TempDir::new().expect("create temp dir"),
        }
    }

    /// 入力ファイルを書き出してパスを返す
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.tmp.path().join(name);
        fs::write(&path, content).expect("write fixture");
        path
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.tmp.path().join(name)
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("product_report").expect("binary built");
        cmd.env_remove("RUST_LOG");
        cmd
    }
}
