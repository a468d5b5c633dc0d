use std::collections::VecDeque;

use super::engine::{AsrEngine, Recognizer};
use super::error::AsrError;

/// スクリプト化された1発話（既定フレーム数で確定し、`text` を返す）
#[derive(Debug, Clone)]
pub struct ScriptedUtterance {
    pub frames: usize,
    pub text: String,
}

impl ScriptedUtterance {
    pub fn new(frames: usize, text: impl Into<String>) -> Self {
        Self {
            frames,
            text: text.into(),
        }
    }
}

/// スクリプト駆動のエンジン（vosk機能なしビルドとテストで使用）
///
/// 各デコーダはスクリプトの独立したコピーで動作し、途中結果として
/// 確定予定テキストの先頭部分を文字数比例で返します。
#[derive(Debug, Clone)]
pub struct MockAsrEngine {
    script: Vec<ScriptedUtterance>,
    cycle: bool,
}

impl MockAsrEngine {
    /// 一度だけ再生されるスクリプトでエンジンを生成
    pub fn with_script(script: Vec<ScriptedUtterance>) -> Self {
        Self {
            script,
            cycle: false,
        }
    }

    /// スクリプトを先頭から繰り返すエンジンを生成
    pub fn cycling(script: Vec<ScriptedUtterance>) -> Self {
        Self {
            script,
            cycle: true,
        }
    }
}

impl AsrEngine for MockAsrEngine {
    fn new_recognizer(&self) -> Result<Box<dyn Recognizer>, AsrError> {
        Ok(Box::new(MockRecognizer {
            script: self.script.iter().cloned().collect(),
            cycle: self.cycle,
            frames_seen: 0,
            pending_final: String::new(),
        }))
    }
}

struct MockRecognizer {
    script: VecDeque<ScriptedUtterance>,
    cycle: bool,
    frames_seen: usize,
    pending_final: String,
}

impl Recognizer for MockRecognizer {
    fn accept_waveform(&mut self, _frame: &[u8]) -> Result<bool, AsrError> {
        let Some(current) = self.script.front() else {
            return Ok(false);
        };
        self.frames_seen += 1;
        if self.frames_seen < current.frames {
            return Ok(false);
        }

        if let Some(finished) = self.script.pop_front() {
            self.pending_final = finished.text.clone();
            if self.cycle {
                self.script.push_back(finished);
            }
        }
        self.frames_seen = 0;
        Ok(true)
    }

    fn final_result(&mut self) -> Result<String, AsrError> {
        Ok(std::mem::take(&mut self.pending_final))
    }

    fn partial_result(&mut self) -> Result<String, AsrError> {
        let Some(current) = self.script.front() else {
            return Ok(String::new());
        };
        let total = current.text.chars().count();
        let visible = total * self.frames_seen / current.frames.max(1);
        Ok(current.text.chars().take(visible).collect())
    }
}
