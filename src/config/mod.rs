//! 設定モジュール（環境変数読み込み）
//!
//! `Config` は起動時に環境変数を読み込み、
//! 実行時に必要な設定値を型安全に提供します。未設定の値は既定値で補います。
mod engine;
mod error;
mod server;
mod translate;

pub use engine::EngineConfig;
pub use error::ConfigError;
pub use server::ServerConfig;
pub use translate::TranslateConfig;

/// 待ち受けポートを指す環境変数名
pub const PORT_ENV: &str = "PORT";
/// 認識モデルディレクトリを指す環境変数名
pub const MODEL_DIR_ENV: &str = "CAPTION_MODEL_DIR";
/// 翻訳サービスのエンドポイントを指す環境変数名
pub const TRANSLATE_URL_ENV: &str = "CAPTION_TRANSLATE_URL";
/// 翻訳リクエストのタイムアウト（ミリ秒）を指す環境変数名
pub const TRANSLATE_TIMEOUT_ENV: &str = "CAPTION_TRANSLATE_TIMEOUT_MS";

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MODEL_DIR: &str = "model";
const DEFAULT_TRANSLATE_URL: &str = "https://libretranslate.de/translate";
const DEFAULT_TRANSLATE_TIMEOUT_MS: u64 = 5_000;

/// すべての設定をひとまとめにした構造体
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub engine: EngineConfig,
    pub translate: TranslateConfig,
}

impl Config {
    /// 環境変数から設定を読み込み
    pub fn load_from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_number(&lookup, PORT_ENV, DEFAULT_PORT)?;
        let model_dir = lookup(MODEL_DIR_ENV).unwrap_or_else(|| DEFAULT_MODEL_DIR.to_string());
        let endpoint =
            lookup(TRANSLATE_URL_ENV).unwrap_or_else(|| DEFAULT_TRANSLATE_URL.to_string());
        let request_timeout_ms =
            parse_number(&lookup, TRANSLATE_TIMEOUT_ENV, DEFAULT_TRANSLATE_TIMEOUT_MS)?;

        Ok(Self {
            server: ServerConfig { port },
            engine: EngineConfig { model_dir },
            translate: TranslateConfig {
                endpoint,
                request_timeout_ms,
            },
        })
    }
}

/// 環境変数を数値として解釈（未設定時は既定値）
fn parse_number<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr<Err = std::num::ParseIntError>,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|source| ConfigError::Parse {
                name,
                value,
                source,
            }),
        None => Ok(default),
    }
}
