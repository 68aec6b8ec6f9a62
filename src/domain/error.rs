use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize)]
pub enum AppError {
    Validation(String),
    StoreAccess(String),
    StoreWrite(String),
    Config(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::StoreAccess(msg) => write!(f, "Store access error: {}", msg),
            AppError::StoreWrite(msg) => write!(f, "Store write error: {}", msg),
            AppError::Config(msg) => write!(f, "Config error: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::StoreAccess(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
