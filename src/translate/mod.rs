//! 翻訳サービス境界モジュール
//!
//! `Translator` は確定した発話テキストを翻訳する最小インタフェース。
//! 失敗時の扱い（原文フォールバック）は呼び出し側のセッションが受け持ち、
//! ここではエラーをそのまま返します。
mod error;
mod http;
mod mock;

use async_trait::async_trait;

pub use error::TranslateError;
pub use http::HttpTranslator;
pub use mock::{FailingTranslator, MockTranslator};

/// 翻訳クライアント最小インタフェース
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str) -> Result<String, TranslateError>;
}
