// 商品レポート処理のエラー型定義

use thiserror::Error;

/// 商品レポート処理固有のエラー型
#[derive(Error, Debug)]
pub enum ProductError {
    #[error("ファイル読み込みエラー: {path} - {source:#}")]
    ReadError {
        path: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("デコードエラー ({format}): {path} - {source:#}")]
    DecodeError {
        path: String,
        format: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("未対応のファイル形式です: {path} (拡張子: {extension})")]
    UnsupportedFormat { path: String, extension: String },

    #[error("ファイルに商品が見つかりません: {path}")]
    EmptyDataset { path: String },

    #[error("空のコレクションは集計できません (フィールド: {field})")]
    EmptyCollection { field: &'static str },

    #[error("設定エラー: {message}")]
    ConfigurationError { message: String },

    #[error("出力エラー: {source:#}")]
    OutputError {
        #[source]
        source: anyhow::Error,
    },

    #[error("タスクエラー: {source}")]
    TaskError {
        #[source]
        source: tokio::task::JoinError,
    },
}

impl ProductError {
    /// ファイル読み込みエラーの作成
    pub fn read(path: impl Into<String>, source: anyhow::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    /// デコードエラーの作成
    pub fn decode(
        path: impl Into<String>,
        format: impl Into<String>,
        source: anyhow::Error,
    ) -> Self {
        Self::DecodeError {
            path: path.into(),
            format: format.into(),
            source,
        }
    }

    /// 未対応形式エラーの作成
    pub fn unsupported_format(path: impl Into<String>, extension: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            path: path.into(),
            extension: extension.into(),
        }
    }

    /// 空データセットエラーの作成
    pub fn empty_dataset(path: impl Into<String>) -> Self {
        Self::EmptyDataset { path: path.into() }
    }

    /// 空コレクション集計エラーの作成（呼び出し側の前提条件違反）
    pub fn empty_collection(field: &'static str) -> Self {
        Self::EmptyCollection { field }
    }

    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }

    /// 出力エラーの作成
    pub fn output(source: anyhow::Error) -> Self {
        Self::OutputError { source }
    }

    /// タスクエラーの作成
    pub fn task(source: tokio::task::JoinError) -> Self {
        Self::TaskError { source }
    }

    /// プロセス終了コードを取得
    ///
    /// 設定エラーは clap の使用法エラーと同じ 2、それ以外は 1
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::ConfigurationError { .. } => 2,
            _ => 1,
        }
    }

    /// プログラミングエラー（前提条件違反）かどうか
    pub const fn is_precondition_violation(&self) -> bool {
        matches!(self, Self::EmptyCollection { .. })
    }
}

impl From<tokio::task::JoinError> for ProductError {
    fn from(error: tokio::task::JoinError) -> Self {
        ProductError::TaskError { source: error }
    }
}

/// 商品レポート処理の結果型
pub type ProductResult<T> = std::result::Result<T, ProductError>;
