use std::sync::Arc;

use vosk::{CompleteResult, DecodingState, Model};

use super::engine::{AsrEngine, Recognizer, SAMPLE_RATE_HZ};
use super::error::AsrError;

/// Voskモデルを保持するエンジン
///
/// モデルは `Arc` で全セッションに共有され、デコーダはセッション毎に生成されます。
#[derive(Clone)]
pub struct VoskAsrEngine {
    model: Arc<Model>,
}

impl VoskAsrEngine {
    /// 展開済みモデルディレクトリからエンジンを生成
    pub fn load(model_dir: &str) -> Result<Self, AsrError> {
        let model = Model::new(model_dir).ok_or_else(|| AsrError::ModelLoad {
            path: model_dir.to_string(),
        })?;
        Ok(Self {
            model: Arc::new(model),
        })
    }
}

impl AsrEngine for VoskAsrEngine {
    fn new_recognizer(&self) -> Result<Box<dyn Recognizer>, AsrError> {
        let mut recognizer =
            vosk::Recognizer::new(&self.model, SAMPLE_RATE_HZ).ok_or(AsrError::RecognizerInit)?;
        recognizer.set_words(true);
        Ok(Box::new(VoskRecognizer {
            inner: recognizer,
            _model: self.model.clone(),
        }))
    }
}

struct VoskRecognizer {
    inner: vosk::Recognizer,
    // デコーダより先にモデルが解放されないよう保持
    _model: Arc<Model>,
}

impl Recognizer for VoskRecognizer {
    fn accept_waveform(&mut self, frame: &[u8]) -> Result<bool, AsrError> {
        // S16LEサンプル列として解釈（末尾の半端な1バイトは捨てる）
        let samples: Vec<i16> = frame
            .chunks_exact(2)
            .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
            .collect();

        match self.inner.accept_waveform(&samples) {
            Ok(DecodingState::Finalized) => Ok(true),
            Ok(DecodingState::Running) => Ok(false),
            Ok(DecodingState::Failed) => Err(AsrError::Decode {
                message: "decoder entered failed state".to_string(),
            }),
            Err(e) => Err(AsrError::Decode {
                message: format!("{e:?}"),
            }),
        }
    }

    fn final_result(&mut self) -> Result<String, AsrError> {
        Ok(extract_text(self.inner.result()))
    }

    fn partial_result(&mut self) -> Result<String, AsrError> {
        Ok(self.inner.partial_result().partial.to_string())
    }
}

/// 確定結果からテキストを取り出す（代替候補付きの場合は先頭を採用）
fn extract_text(result: CompleteResult) -> String {
    match result {
        CompleteResult::Single(single) => single.text.to_string(),
        CompleteResult::Multiple(multi) => multi
            .alternatives
            .first()
            .map(|alt| alt.text.to_string())
            .unwrap_or_default(),
    }
}
