use async_trait::async_trait;
use serde::Deserialize;

use crate::config::TranslateConfig;

use super::error::TranslateError;
use super::Translator;

/// 原文の言語（日本語固定）
const SOURCE_LANG: &str = "ja";
/// 翻訳先の言語（英語固定）
const TARGET_LANG: &str = "en";

/// LibreTranslate互換エンドポイントへのHTTPクライアント
#[derive(Debug, Clone)]
pub struct HttpTranslator {
    client: reqwest::Client,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

impl HttpTranslator {
    /// 設定からクライアントを生成
    pub fn new(config: &TranslateConfig) -> Result<Self, TranslateError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }
}

#[async_trait]
impl Translator for HttpTranslator {
    async fn translate(&self, text: &str) -> Result<String, TranslateError> {
        let response = self
            .client
            .post(&self.endpoint)
            .form(&[("q", text), ("source", SOURCE_LANG), ("target", TARGET_LANG)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(TranslateError::Server(format!(
                "HTTP {}: {}",
                response.status(),
                response.text().await.unwrap_or_default()
            )));
        }

        let body: TranslateResponse = response
            .json()
            .await
            .map_err(|e| TranslateError::InvalidResponse(format!("JSONパースエラー: {}", e)))?;

        Ok(body.translated_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_body_is_parsed_from_translated_text_field() {
        let body: TranslateResponse =
            serde_json::from_str(r#"{"translatedText":"hello"}"#).expect("well-formed body");
        assert_eq!(body.translated_text, "hello");
    }

    #[test]
    fn response_without_translated_text_is_rejected() {
        let result = serde_json::from_str::<TranslateResponse>(r#"{"error":"quota exceeded"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn extra_fields_are_ignored() {
        let body: TranslateResponse = serde_json::from_str(
            r#"{"translatedText":"hello","detectedLanguage":{"confidence":92,"language":"ja"}}"#,
        )
        .expect("body with extra fields");
        assert_eq!(body.translated_text, "hello");
    }
}
