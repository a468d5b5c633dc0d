//! 設定読み込み時のエラー定義
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse environment variable {name}: {value:?}")]
    Parse {
        name: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}
