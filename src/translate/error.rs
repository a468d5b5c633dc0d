use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("server error: {0}")]
    Server(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
