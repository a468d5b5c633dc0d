use std::collections::HashMap;

use async_trait::async_trait;

use super::error::TranslateError;
use super::Translator;

/// 固定対訳を返すトランスレータ（テスト用）
///
/// 未登録のテキストはエラーになり、発話単位の失敗を再現できます。
#[derive(Debug, Clone, Default)]
pub struct MockTranslator {
    replies: HashMap<String, String>,
}

impl MockTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 対訳を登録
    pub fn with_reply(mut self, source: impl Into<String>, translated: impl Into<String>) -> Self {
        self.replies.insert(source.into(), translated.into());
        self
    }
}

#[async_trait]
impl Translator for MockTranslator {
    async fn translate(&self, text: &str) -> Result<String, TranslateError> {
        self.replies
            .get(text)
            .cloned()
            .ok_or_else(|| TranslateError::Server(format!("no scripted translation for {text:?}")))
    }
}

/// 常に失敗するトランスレータ（サービス停止の再現用）
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingTranslator;

#[async_trait]
impl Translator for FailingTranslator {
    async fn translate(&self, _text: &str) -> Result<String, TranslateError> {
        Err(TranslateError::Server(
            "translation service unavailable".to_string(),
        ))
    }
}
