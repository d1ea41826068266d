use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("Not a data URL: {0}")]
    InvalidDataUrl(String),
}
