use std::net::SocketAddr;

use tokio::net::TcpListener;
use tokio_tungstenite::accept_async;
use tracing::{info, warn};

use crate::session::CaptionSessionHandler;

#[derive(thiserror::Error, Debug)]
pub enum ServerError {
    #[error("bind error: {0}")]
    Bind(std::io::Error),
    #[error("accept error: {0}")]
    Accept(std::io::Error),
}

/// 指定アドレスにバインドしてキャプションサーバを起動
pub async fn bind_and_run(
    bind_addr: &str,
    handler: CaptionSessionHandler,
) -> Result<(), ServerError> {
    let listener = TcpListener::bind(bind_addr)
        .await
        .map_err(ServerError::Bind)?;
    run_with_listener(listener, handler).await
}

/// 既存の`TcpListener`でキャプションサーバを起動（テストでも使用）
pub async fn run_with_listener(
    listener: TcpListener,
    handler: CaptionSessionHandler,
) -> Result<(), ServerError> {
    let local_addr = listener.local_addr().ok();
    if let Some(addr) = local_addr {
        info!(%addr, "caption relay server listening");
    }

    loop {
        let (stream, peer_addr) = match listener.accept().await {
            Ok(v) => v,
            Err(e) => return Err(ServerError::Accept(e)),
        };
        let handler = handler.clone();
        tokio::spawn(async move {
            if let Err(e) = handle_ws_connection(stream, handler, peer_addr).await {
                warn!(error = %e, "connection handling failed");
            }
        });
    }
}

async fn handle_ws_connection<S: tokio::io::AsyncRead + tokio::io::AsyncWrite + Unpin + Send + 'static>(
    stream: S,
    handler: CaptionSessionHandler,
    peer: SocketAddr,
) -> Result<(), String> {
    let ws = accept_async(stream)
        .await
        .map_err(|e| format!("websocket handshake failed: {e}"))?;

    // ログ相関用に接続単位のIDを払い出す
    let session_id = uuid::Uuid::new_v4().to_string();
    info!(%peer, %session_id, "accepted websocket connection");
    handler.handle_connection(ws, session_id).await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use futures_util::{SinkExt, StreamExt};
    use tokio_tungstenite::client_async;
    use tokio_tungstenite::tungstenite::Message;

    use crate::asr::{MockAsrEngine, ScriptedUtterance};
    use crate::translate::MockTranslator;

    #[tokio::test]
    async fn handshake_and_caption_roundtrip_over_in_memory_stream() {
        let engine = MockAsrEngine::with_script(vec![ScriptedUtterance::new(2, "こんにちは")]);
        let translator = Arc::new(MockTranslator::new().with_reply("こんにちは", "hello"));
        let handler = CaptionSessionHandler::new(Arc::new(engine), translator);

        let (client_io, server_io) = tokio::io::duplex(64 * 1024);
        let peer: SocketAddr = "127.0.0.1:9".parse().unwrap();
        let server = tokio::spawn(async move {
            handle_ws_connection(server_io, handler, peer).await
        });

        let (mut ws, _resp) = client_async("ws://localhost/", client_io)
            .await
            .expect("handshake ok");

        ws.send(Message::Binary(vec![0_u8; 320].into()))
            .await
            .expect("send frame 1");
        match ws.next().await {
            Some(Ok(Message::Text(json))) => assert!(json.contains("\"partial\"")),
            other => panic!("expected partial message, got {other:?}"),
        }

        ws.send(Message::Binary(vec![0_u8; 320].into()))
            .await
            .expect("send frame 2");
        match ws.next().await {
            Some(Ok(Message::Text(json))) => {
                assert!(json.contains("\"jp\":\"こんにちは\""));
                assert!(json.contains("\"en\":\"hello\""));
            }
            other => panic!("expected final message, got {other:?}"),
        }

        ws.close(None).await.expect("close ok");
        server.await.expect("server task").expect("connection ok");
    }
}
