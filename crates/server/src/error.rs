use crate::config::ConfigError;
use sea_orm::DbErr;

/// Failures that stop the server before or while serving
#[derive(thiserror::Error, Debug)]
pub enum StartupError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("database error: {0}")]
    Database(#[from] DbErr),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
