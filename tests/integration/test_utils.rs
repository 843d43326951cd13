//! Shared test utilities for integration tests
//!
//! Serializes access to process environment variables so config tests can
//! point the loader at isolated directories without racing each other.

use std::sync::Mutex;
use tempfile::TempDir;

/// Global mutex to serialize environment variable access across all tests
static ENV_MUTEX: Mutex<()> = Mutex::new(());

const CAPTURED: &[&str] = &[
    "HOME",
    "XDG_CONFIG_HOME",
    "NODEPACK_ENV",
    "NODEPACK__TEXT_CONCATENATOR__DELIMITER",
    "NODEPACK__TEXT_CONCATENATOR__INDEX",
];

/// Environment variable state to restore after test
struct EnvState {
    vars: Vec<(&'static str, Option<String>)>,
}

impl EnvState {
    fn capture() -> Self {
        Self {
            vars: CAPTURED
                .iter()
                .map(|name| (*name, std::env::var(name).ok()))
                .collect(),
        }
    }

    fn restore(self) {
        for (name, value) in self.vars {
            match value {
                Some(orig) => std::env::set_var(name, orig),
                None => std::env::remove_var(name),
            }
        }
    }
}

/// Run `f` with XDG_CONFIG_HOME and HOME inside `test_dir`, the given extra
/// variables set, and every other nodepack variable cleared. The original
/// environment is restored afterwards.
pub fn with_config_env<F, R>(test_dir: &TempDir, vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let env_state = EnvState::capture();

    let config_home = test_dir.path().join("config_home");
    let home = test_dir.path().join("home");
    std::fs::create_dir_all(&config_home).unwrap();
    std::fs::create_dir_all(&home).unwrap();

    for name in CAPTURED {
        std::env::remove_var(name);
    }
    std::env::set_var("HOME", home.to_str().unwrap());
    std::env::set_var("XDG_CONFIG_HOME", config_home.to_str().unwrap());
    for (name, value) in vars {
        std::env::set_var(name, value);
    }

    let result = f();

    env_state.restore();

    result
}
