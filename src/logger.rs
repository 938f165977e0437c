//! Logger initialisation.
//!
//! Installs a `tracing-subscriber` fmt subscriber with the validated default
//! level. `RUST_LOG` directives still take precedence, so per-module filters
//! keep working without touching the config surface.

use tracing::Level;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

use crate::error::AppError;

/// Install the global subscriber at `level`.
///
/// Fails if a global subscriber is already set — boot calls this exactly
/// once, after the environment gate has passed.
pub fn init(level: Level) -> Result<(), AppError> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| AppError::Logger(e.to_string()))
}
