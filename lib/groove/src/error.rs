use thiserror::Error;

#[derive(Error, Debug)]
pub enum OverlayError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid overlay config: {0}")]
    Config(String),

    #[error("Only admins and moderators can delete items")]
    NotStaff,
}

pub type Result<T> = std::result::Result<T, OverlayError>;
