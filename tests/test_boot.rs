//! Boot scenarios for the environment gate.

use app_shell::env::{self, ENV_LOG_LEVEL, ENV_RUN_MODE, RunMode};
use tracing::Level;

#[test]
fn boot_with_no_environment_succeeds_in_development() {
    let env = env::load_from(|_| None).unwrap();
    assert_eq!(env.run_mode, RunMode::Development);
    assert_eq!(env.log_level, Level::INFO);
}

#[test]
fn boot_with_unknown_mode_does_not_start() {
    let err = env::load_from(|name| {
        (name == ENV_RUN_MODE).then(|| "staging".to_string())
    })
    .unwrap_err();

    assert_eq!(err.fields.len(), 1);
    assert_eq!(err.fields[0].name, ENV_RUN_MODE);
    assert!(err.to_string().contains("staging"));
}

#[test]
fn boot_reports_every_bad_field_at_once() {
    let err = env::load_from(|name| match name {
        n if n == ENV_RUN_MODE => Some("prod".to_string()),
        n if n == ENV_LOG_LEVEL => Some("verbose".to_string()),
        _ => None,
    })
    .unwrap_err();

    let names: Vec<_> = err.fields.iter().map(|f| f.name).collect();
    assert_eq!(names, vec![ENV_RUN_MODE, ENV_LOG_LEVEL]);
}

#[test]
fn boot_with_production_mode() {
    let env = env::load_from(|name| match name {
        n if n == ENV_RUN_MODE => Some("production".to_string()),
        n if n == ENV_LOG_LEVEL => Some("warn".to_string()),
        _ => None,
    })
    .unwrap();

    assert!(env.run_mode.is_production());
    assert_eq!(env.log_level, Level::WARN);
}

#[test]
fn dotenv_file_feeds_the_gate() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".env");
    std::fs::write(&path, "APP_ENV=production\nAPP_LOG_LEVEL=warn\n").unwrap();

    // Same mechanism the binary uses: dotenvy populates process env vars
    // (without overriding ones already set), then the gate reads them.
    dotenvy::from_path(&path).unwrap();

    let env = env::load().unwrap();
    assert_eq!(env.run_mode, RunMode::Production);
    assert_eq!(env.log_level, Level::WARN);
}
