//! Application-wide error types.

use thiserror::Error;

use crate::env::EnvError;

#[derive(Debug, Error)]
pub enum AppError {
    /// Fatal startup failure — the environment gate rejected one or more
    /// variables. Not recoverable, not retried.
    #[error(transparent)]
    Env(#[from] EnvError),

    #[error("logger error: {0}")]
    Logger(String),
}
