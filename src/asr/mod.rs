//! 音声認識（ASR）境界モジュール
//!
//! - `AsrEngine` は起動時に一度だけ読み込まれるモデルを保持し、接続ごとに
//!   独立した `Recognizer` を払い出す最小インタフェース
//! - `Recognizer` は音声チャンクの投入と途中/最終テキストの取得を提供
//!
//! モデルは全セッションで読み取り専用共有、デコーダ状態は1セッションが
//! 排他的に所有します。
mod engine;
mod error;
mod mock;
#[cfg(feature = "vosk")]
mod vosk_engine;

pub use engine::{AsrEngine, Recognizer, SAMPLE_RATE_HZ};
pub use error::AsrError;
pub use mock::{MockAsrEngine, ScriptedUtterance};
#[cfg(feature = "vosk")]
pub use vosk_engine::VoskAsrEngine;
