//! Error types for the items service

use axum::http::StatusCode;
use thiserror::Error;

/// Message returned to clients for any fault they cannot act on.
pub const GENERIC_FAILURE: &str = "Something went wrong.";

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid or missing name.")]
    InvalidName,

    #[error("Item not found.")]
    ItemNotFound(String),

    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("Generated item id already in use: {0}")]
    DuplicateId(uuid::Uuid),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// HTTP status this error maps to
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidName => StatusCode::BAD_REQUEST,
            Error::ItemNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to clients. Internal details stay in the logs.
    pub fn client_message(&self) -> String {
        match self {
            Error::InvalidName | Error::ItemNotFound(_) => self.to_string(),
            _ => GENERIC_FAILURE.to_string(),
        }
    }

    /// Whether the error is the caller's fault rather than ours
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }
}
