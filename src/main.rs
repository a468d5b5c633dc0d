use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use caption_relay_api::asr::{AsrEngine, AsrError};
use caption_relay_api::config::Config;
use caption_relay_api::server;
use caption_relay_api::session::CaptionSessionHandler;
use caption_relay_api::translate::HttpTranslator;

#[tokio::main]
async fn main() {
    init_tracing();

    match Config::load_from_env() {
        Ok(config) => {
            info!(port = config.server.port, "configuration loaded");

            let engine = match build_engine(&config) {
                Ok(engine) => engine,
                Err(e) => {
                    error!(error = %e, "failed to initialize recognizer engine");
                    std::process::exit(1);
                }
            };

            let translator = match HttpTranslator::new(&config.translate) {
                Ok(translator) => Arc::new(translator),
                Err(e) => {
                    error!(error = %e, "failed to initialize translation client");
                    std::process::exit(1);
                }
            };
            info!(endpoint = %config.translate.endpoint, "translation client ready");

            let handler = CaptionSessionHandler::new(engine, translator);

            // WebSocketキャプションサーバ起動
            let bind_addr = config.server.bind_addr();
            info!(addr = %bind_addr, "starting caption relay server");
            if let Err(e) = server::bind_and_run(&bind_addr, handler).await {
                error!(error = %e, "failed to start server");
                std::process::exit(1);
            }
        }
        Err(err) => {
            error!(error = ?err, "failed to load configuration");
            std::process::exit(1);
        }
    }
}

#[cfg(feature = "vosk")]
fn build_engine(config: &Config) -> Result<Arc<dyn AsrEngine>, AsrError> {
    use caption_relay_api::asr::VoskAsrEngine;

    let engine = VoskAsrEngine::load(&config.engine.model_dir)?;
    info!(model_dir = %config.engine.model_dir, "vosk model loaded");
    Ok(Arc::new(engine))
}

#[cfg(not(feature = "vosk"))]
fn build_engine(_config: &Config) -> Result<Arc<dyn AsrEngine>, AsrError> {
    use caption_relay_api::asr::{MockAsrEngine, ScriptedUtterance};
    use tracing::warn;

    // vosk無効ビルドでは動作確認用のスクリプトエンジンで応答する
    warn!("built without the vosk feature; serving scripted transcripts");
    let script = vec![
        ScriptedUtterance::new(25, "こんにちは"),
        ScriptedUtterance::new(40, "これはテストです"),
    ];
    Ok(Arc::new(MockAsrEngine::cycling(script)))
}

fn init_tracing() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install tracing subscriber: {err}");
    }
}
