//! Editor warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning on every
//! render cycle. Used by the value transforms and panel controllers to report
//! configuration they skip over (unknown side tokens, foreign stored shapes).

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about skipped style data (prints once per unique message)
///
/// # Example
/// ```
/// use blockstyle_common::warning::warn_once;
///
/// warn_once("Subset", "unknown side token 'diagonal' for padding");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let should_print = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if should_print {
        eprintln!("{}", format!("[blockstyle {component}] ⚠ {message}").yellow());
    }
}

/// Returns true if the given warning has already been printed.
#[must_use]
pub fn was_warned(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .is_some_and(|set| set.contains(&key))
}

/// Clear all recorded warnings (call when switching to a new entity)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warn_once_records_message() {
        warn_once("Test", "recorded once");
        assert!(was_warned("Test", "recorded once"));
        assert!(!was_warned("Test", "never emitted"));
    }

    #[test]
    fn test_warnings_are_keyed_by_component() {
        warn_once("Alpha", "shared text");
        assert!(was_warned("Alpha", "shared text"));
        assert!(!was_warned("Beta", "shared text"));
    }
}
