// ベンチマーク用のカスタムエラー型定義

use thiserror::Error;

/// ベンチマーク実行時のエラー型
///
/// メモリ確保失敗はここに含めない（`handle_alloc_error` により即座に中断される）
#[derive(Error, Debug)]
pub enum BenchError {
    #[error("設定エラー: {field} - {reason}")]
    InvalidConfiguration { field: String, reason: String },

    #[error("出力エラー: {source}")]
    Output {
        #[source]
        source: std::io::Error,
    },
}

impl BenchError {
    /// 設定エラーの作成
    pub fn invalid_configuration(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// 出力エラーの作成
    pub fn output(source: std::io::Error) -> Self {
        Self::Output { source }
    }
}

impl From<std::io::Error> for BenchError {
    fn from(source: std::io::Error) -> Self {
        Self::output(source)
    }
}

/// ベンチマーク用Result型
pub type BenchResult<T> = Result<T, BenchError>;
