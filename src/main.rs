//! App shell — bootstrap entry point.
//!
//! Startup sequence:
//!   1. Load .env (if present)
//!   2. Validate environment (fail fast; all bad fields reported at once)
//!   3. Init logger at the validated level
//!   4. Construct the session store
//!   5. Print status

use tracing::info;

use app_shell::{env, error::AppError, logger, session::SessionStore};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    // Load .env if present — ignore errors (file is optional).
    let _ = dotenvy::dotenv();

    let env = env::load()?;

    logger::init(env.log_level)?;

    info!(
        run_mode = %env.run_mode,
        log_level = %env.log_level,
        "environment validated"
    );

    let session = SessionStore::new();
    info!(authenticated = session.is_authenticated(), "session store ready");

    println!("✓ Shell initialized: mode={}", env.run_mode.label());

    Ok(())
}
