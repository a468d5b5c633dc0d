use thiserror::Error;

#[derive(Debug, Error)]
pub enum AsrError {
    #[error("failed to load model from {path:?}")]
    ModelLoad { path: String },
    #[error("failed to create recognizer")]
    RecognizerInit,
    #[error("decoding failed: {message}")]
    Decode { message: String },
}
