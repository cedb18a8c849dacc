//! Process-wide environment access.
//!
//! Configuration reads and test mutations go through one mutex so scenarios
//! running on parallel test threads never observe a half-applied change.

use std::env;
use std::ffi::OsStr;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn lock() -> MutexGuard<'static, ()> {
    // The guarded value is `()`, so a poisoned lock carries no broken state.
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Read an environment variable while holding the global lock.
///
/// # Errors
///
/// Returns [`env::VarError`] when the variable is unset or contains invalid
/// Unicode.
pub fn var<K: AsRef<OsStr>>(key: K) -> Result<String, env::VarError> {
    let _guard = lock();
    env::var(key)
}

/// Read the first variable in `keys` that is set to a non-empty value.
#[must_use]
pub fn first_non_empty(keys: &[&str]) -> Option<String> {
    let _guard = lock();
    keys.iter()
        .filter_map(|key| env::var(key).ok())
        .find(|value| !value.trim().is_empty())
}

/// Set an environment variable while holding the global lock.
pub fn set_var<K: AsRef<OsStr>, V: AsRef<OsStr>>(key: K, value: V) {
    let _guard = lock();
    // SAFETY: the mutex serialises access to the unsynchronised std env calls.
    unsafe { env::set_var(key, value) };
}

/// Remove an environment variable while holding the global lock.
pub fn remove_var<K: AsRef<OsStr>>(key: K) {
    let _guard = lock();
    // SAFETY: the mutex serialises access to the unsynchronised std env calls.
    unsafe { env::remove_var(key) };
}

#[cfg(test)]
mod tests {
    use super::{first_non_empty, var};
    use crate::test_utils::{remove_var, set_var};
    use serial_test::serial;

    fn restore(key: &str, previous: Option<String>) {
        match previous {
            Some(value) => set_var(key, value),
            None => remove_var(key),
        }
    }

    #[test]
    #[serial]
    fn set_var_is_visible_to_var() {
        let key = "GHCHECK_ENV_HELPER_TEST";
        let old = var(key).ok();
        set_var(key, "helper-value");
        assert_eq!(var(key).expect("read var"), "helper-value");
        restore(key, old);
    }

    #[test]
    #[serial]
    fn first_non_empty_skips_blank_values() {
        let (first, second) = ("GHCHECK_ENV_FIRST", "GHCHECK_ENV_SECOND");
        let old = (var(first).ok(), var(second).ok());
        set_var(first, "  ");
        set_var(second, "value");
        assert_eq!(first_non_empty(&[first, second]).as_deref(), Some("value"));
        remove_var(second);
        assert_eq!(first_non_empty(&[first, second]), None);
        restore(first, old.0);
        restore(second, old.1);
    }
}
