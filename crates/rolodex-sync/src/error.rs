use rolodex_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("invalid seed data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unavailable: {0}")]
    Unavailable(String),
    #[cfg(feature = "http-seed")]
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[cfg(feature = "http-seed")]
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, SyncError>;
