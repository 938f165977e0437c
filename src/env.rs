//! Environment validation — the boot gate.
//!
//! Reads `APP_ENV` and `APP_LOG_LEVEL`, validates both, and yields an
//! immutable [`Env`] record.  Validation runs once at startup; on failure
//! every offending variable is reported in one [`EnvError`] and the caller
//! must not start the application.
//!
//! Tests go through [`load_from`] with an injected lookup instead of
//! mutating process env vars.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::Level;

/// Variable naming the running mode. Absent means `development`.
pub const ENV_RUN_MODE: &str = "APP_ENV";
/// Variable naming the default log level. Absent means `info`.
pub const ENV_LOG_LEVEL: &str = "APP_LOG_LEVEL";

// ── Running mode ──────────────────────────────────────────────────────────────

/// Deployment context the process runs in.
///
/// Raw values are exact-match (`development`, `test`, `production`) — the
/// gate rejects anything else rather than guessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    #[default]
    Development,
    Test,
    Production,
}

impl RunMode {
    /// The canonical raw value, as accepted by `APP_ENV`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Test => "test",
            Self::Production => "production",
        }
    }

    /// Human-readable label for status output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Development => "Development",
            Self::Test => "Test",
            Self::Production => "Production",
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    pub fn is_test(&self) -> bool {
        matches!(self, Self::Test)
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("expected one of: development, test, production")]
pub struct ParseRunModeError;

impl FromStr for RunMode {
    type Err = ParseRunModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(Self::Development),
            "test" => Ok(Self::Test),
            "production" => Ok(Self::Production),
            _ => Err(ParseRunModeError),
        }
    }
}

// ── Validated record ──────────────────────────────────────────────────────────

/// Validated environment record — immutable once the gate has passed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Env {
    pub run_mode: RunMode,
    /// Default log level for the fmt subscriber (`RUST_LOG` still overrides).
    pub log_level: Level,
}

// ── Errors ────────────────────────────────────────────────────────────────────

/// One rejected environment variable.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{name}: {reason} (got {value:?})")]
pub struct FieldError {
    pub name: &'static str,
    pub value: String,
    pub reason: String,
}

/// All rejected variables from a single gate pass.
///
/// The gate checks every field before failing, so one boot attempt reports
/// the complete list rather than the first offender.
#[derive(Debug, Error)]
#[error("invalid environment variables: {}", list(.fields))]
pub struct EnvError {
    pub fields: Vec<FieldError>,
}

fn list(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(FieldError::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

// ── Gate ──────────────────────────────────────────────────────────────────────

/// Validate the process environment.
pub fn load() -> Result<Env, EnvError> {
    load_from(|name| std::env::var(name).ok())
}

/// Validate an injected environment — `lookup` maps a variable name to its
/// raw value, `None` meaning unset.
pub fn load_from<F>(lookup: F) -> Result<Env, EnvError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut fields = Vec::new();

    let run_mode = match lookup(ENV_RUN_MODE) {
        None => RunMode::default(),
        Some(raw) => raw.parse().unwrap_or_else(|e: ParseRunModeError| {
            fields.push(FieldError {
                name: ENV_RUN_MODE,
                value: raw,
                reason: e.to_string(),
            });
            RunMode::default()
        }),
    };

    let log_level = match lookup(ENV_LOG_LEVEL) {
        None => Level::INFO,
        Some(raw) => parse_level(&raw).unwrap_or_else(|| {
            fields.push(FieldError {
                name: ENV_LOG_LEVEL,
                value: raw,
                reason: "expected one of: trace, debug, info, warn, error".to_string(),
            });
            Level::INFO
        }),
    };

    if !fields.is_empty() {
        return Err(EnvError { fields });
    }

    Ok(Env { run_mode, log_level })
}

/// Level names only, case-insensitive. `tracing`'s own `FromStr` also
/// accepts numeric levels, which we do not want in an env var.
fn parse_level(raw: &str) -> Option<Level> {
    match raw.to_ascii_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}
