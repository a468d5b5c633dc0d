//! キャプションセッション
//!
//! 1接続 = 1セッション = 1デコーダ。受信した音声フレームを到着順に
//! デコーダへ渡し、確定した発話は翻訳を試みたうえで `CaptionMessage` として
//! 同じ接続へ返します。
//!
//! フレーム処理は厳密に直列で、翻訳の完了を待つ間は同一接続の次の
//! フレームを読みません。並行性は接続単位でのみ生じます。
mod message;

use std::sync::Arc;

use futures_util::{SinkExt, StreamExt};
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::WebSocketStream;
use tracing::{error, info, warn};

use crate::asr::AsrEngine;
use crate::translate::Translator;

pub use message::CaptionMessage;

/// キャプションセッションハンドラ
///
/// エンジンとトランスレータを全接続で共有します。
#[derive(Clone)]
pub struct CaptionSessionHandler {
    engine: Arc<dyn AsrEngine>,
    translator: Arc<dyn Translator>,
}

impl CaptionSessionHandler {
    pub fn new(engine: Arc<dyn AsrEngine>, translator: Arc<dyn Translator>) -> Self {
        Self { engine, translator }
    }

    /// WebSocket接続を処理
    pub async fn handle_connection<S>(&self, ws_stream: WebSocketStream<S>, session_id: String)
    where
        S: tokio::io::AsyncRead + tokio::io::AsyncWrite + Unpin,
    {
        info!(session_id = %session_id, "キャプションセッション開始");

        let mut recognizer = match self.engine.new_recognizer() {
            Ok(recognizer) => recognizer,
            Err(e) => {
                error!(session_id = %session_id, error = %e, "デコーダ生成失敗");
                return;
            }
        };

        let mut ws = ws_stream;
        let mut frames = 0_u64;
        let mut utterances = 0_u64;

        while let Some(received) = ws.next().await {
            match received {
                Ok(Message::Binary(frame)) => {
                    frames += 1;
                    let boundary = match recognizer.accept_waveform(&frame) {
                        Ok(boundary) => boundary,
                        Err(e) => {
                            error!(session_id = %session_id, error = %e, "デコード失敗");
                            break;
                        }
                    };

                    let outbound = if boundary {
                        match recognizer.final_result() {
                            // 無音区間の確定は通知しない
                            Ok(text) if text.is_empty() => None,
                            Ok(text) => {
                                utterances += 1;
                                let en = self.translate_or_passthrough(&session_id, &text).await;
                                Some(CaptionMessage::Final { jp: text, en })
                            }
                            Err(e) => {
                                error!(session_id = %session_id, error = %e, "確定結果の取得失敗");
                                break;
                            }
                        }
                    } else {
                        match recognizer.partial_result() {
                            Ok(text) => Some(CaptionMessage::Partial { partial: text }),
                            Err(e) => {
                                error!(session_id = %session_id, error = %e, "途中結果の取得失敗");
                                break;
                            }
                        }
                    };

                    if let Some(caption) = outbound {
                        match serde_json::to_string(&caption) {
                            Ok(json) => {
                                if ws.send(Message::Text(json.into())).await.is_err() {
                                    warn!(session_id = %session_id, "WebSocket送信失敗");
                                    break;
                                }
                            }
                            Err(e) => {
                                error!(session_id = %session_id, error = %e, "キャプションのシリアライズ失敗");
                            }
                        }
                    }
                }
                Ok(Message::Close(_)) => {
                    info!(session_id = %session_id, "WebSocket切断");
                    break;
                }
                Ok(Message::Text(_)) => {
                    // 受信契約はバイナリ音声のみ
                    warn!(session_id = %session_id, "テキストフレームを受信したため切断");
                    break;
                }
                Ok(_) => {
                    // Ping/Pong等の制御フレームはトランスポート層に任せる
                }
                Err(e) => {
                    warn!(session_id = %session_id, error = %e, "WebSocketエラー");
                    break;
                }
            }
        }

        info!(
            session_id = %session_id,
            frames,
            utterances,
            "キャプションセッション終了"
        );
    }

    /// 翻訳を試み、失敗時は原文へフォールバック
    async fn translate_or_passthrough(&self, session_id: &str, text: &str) -> String {
        match self.translator.translate(text).await {
            Ok(translated) if !translated.is_empty() => translated,
            Ok(_) => {
                warn!(session_id = %session_id, "空の翻訳結果のため原文を使用");
                text.to_string()
            }
            Err(e) => {
                warn!(session_id = %session_id, error = %e, "翻訳失敗のため原文を使用");
                text.to_string()
            }
        }
    }
}
