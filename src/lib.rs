//! App shell — validated environment bootstrap and observable session state.
//!
//! Two independent singletons make up the core:
//! - [`env`] — the boot gate: validates process environment variables once
//!   at startup and yields an immutable [`env::Env`] record, or a
//!   field-by-field error that must abort startup.
//! - [`session`] — an explicitly constructed, observable holder for the
//!   client session token.
//!
//! The `app-shell` binary wires both into the boot sequence; everything
//! here is usable as a library so a future data or API layer can consume
//! the same pieces.

pub mod env;
pub mod error;
pub mod logger;
pub mod session;
