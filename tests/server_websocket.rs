use std::sync::Arc;

use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpListener;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

use caption_relay_api::asr::{MockAsrEngine, ScriptedUtterance};
use caption_relay_api::server::run_with_listener;
use caption_relay_api::session::CaptionSessionHandler;
use caption_relay_api::translate::MockTranslator;

fn caption_handler() -> CaptionSessionHandler {
    let engine = MockAsrEngine::with_script(vec![ScriptedUtterance::new(2, "こんにちは")]);
    let translator = Arc::new(MockTranslator::new().with_reply("こんにちは", "hello"));
    CaptionSessionHandler::new(Arc::new(engine), translator)
}

#[tokio::test]
async fn websocket_roundtrip_emits_partial_then_final() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = run_with_listener(listener, caption_handler()).await;
    });

    let (mut ws, _resp) = connect_async(format!("ws://{}/", addr))
        .await
        .expect("connect ok");

    ws.send(Message::Binary(vec![0_u8; 320].into()))
        .await
        .expect("send frame 1");
    if let Some(Ok(Message::Text(json))) = ws.next().await {
        assert!(json.contains("\"partial\""));
    } else {
        panic!("expected partial message");
    }

    ws.send(Message::Binary(vec![0_u8; 320].into()))
        .await
        .expect("send frame 2");
    if let Some(Ok(Message::Text(json))) = ws.next().await {
        assert!(json.contains("\"jp\":\"こんにちは\""));
        assert!(json.contains("\"en\":\"hello\""));
    } else {
        panic!("expected final message");
    }
}

#[tokio::test]
async fn each_connection_gets_a_fresh_recognizer() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = run_with_listener(listener, caption_handler()).await;
    });

    for _ in 0..2 {
        let (mut ws, _resp) = connect_async(format!("ws://{}/", addr))
            .await
            .expect("connect ok");

        // スクリプトは2フレーム目で確定するので、1フレーム目は毎回途中結果
        ws.send(Message::Binary(vec![0_u8; 320].into()))
            .await
            .expect("send frame");
        if let Some(Ok(Message::Text(json))) = ws.next().await {
            assert!(json.contains("\"partial\""));
        } else {
            panic!("expected partial message");
        }

        ws.close(None).await.expect("close ok");
    }
}
