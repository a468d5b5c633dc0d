//! ASRエンジン共通のトレイト
use super::error::AsrError;

/// デコーダが想定するサンプルレート（16kHz モノラル S16LE）
pub const SAMPLE_RATE_HZ: f32 = 16000.0;

/// 認識エンジン最小インタフェース
pub trait AsrEngine: Send + Sync {
    /// 新しい接続のためのデコーダを生成
    fn new_recognizer(&self) -> Result<Box<dyn Recognizer>, AsrError>;
}

/// 1セッション分のデコーダ状態
pub trait Recognizer: Send {
    /// 音声チャンクを投入し、発話境界に達したかを返す
    fn accept_waveform(&mut self, frame: &[u8]) -> Result<bool, AsrError>;

    /// 直前に確定した発話の最終テキストを取得
    fn final_result(&mut self) -> Result<String, AsrError>;

    /// 現在の途中仮説テキストを取得
    fn partial_result(&mut self) -> Result<String, AsrError>;
}
