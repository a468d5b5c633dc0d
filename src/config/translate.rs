use std::time::Duration;

#[derive(Debug, Clone)]
pub struct TranslateConfig {
    /// 翻訳サービスのエンドポイントURL
    pub endpoint: String,
    /// 翻訳リクエスト1件あたりのタイムアウト（ミリ秒）
    pub request_timeout_ms: u64,
}

impl TranslateConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}
