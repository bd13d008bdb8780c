//! Persisted session flag.
//!
//! The browser keeps a single boolean under the `login` key that approximates
//! "has completed login". The flag is only an optimistic hint for routing;
//! real access control lives on the API. Reads fail closed: a missing or
//! unparsable value counts as logged out.

use gloo_storage::{LocalStorage, Storage};

/// Storage key holding the session flag.
pub const SESSION_KEY: &str = "login";

/// Read/write access to the persisted session flag.
///
/// Abstracted behind a trait so guards and the API client can be exercised
/// without a real browser store.
pub trait SessionStore: std::fmt::Debug {
    /// Current flag value; absence or a parse failure reads as `false`.
    fn is_logged_in(&self) -> bool;

    /// Persist the flag.
    fn set_logged_in(&self, logged_in: bool);

    /// Remove the flag entirely, as logout does.
    fn clear(&self);
}

/// Session flag backed by the browser's per-origin local storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSession;

impl SessionStore for BrowserSession {
    fn is_logged_in(&self) -> bool {
        LocalStorage::get::<bool>(SESSION_KEY).unwrap_or(false)
    }

    fn set_logged_in(&self, logged_in: bool) {
        let _ = LocalStorage::set(SESSION_KEY, logged_in);
    }

    fn clear(&self) {
        LocalStorage::delete(SESSION_KEY);
    }
}

/// In-memory session flag for unit tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemorySession(std::sync::Mutex<Option<String>>);

#[cfg(test)]
impl SessionStore for MemorySession {
    fn is_logged_in(&self) -> bool {
        self.0
            .lock()
            .ok()
            .and_then(|value| value.as_deref().and_then(|raw| raw.parse().ok()))
            .unwrap_or(false)
    }

    fn set_logged_in(&self, logged_in: bool) {
        if let Ok(mut value) = self.0.lock() {
            *value = Some(logged_in.to_string());
        }
    }

    fn clear(&self) {
        if let Ok(mut value) = self.0.lock() {
            *value = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_flag_reads_logged_out() {
        let store = MemorySession::default();
        assert!(!store.is_logged_in());
    }

    #[test]
    fn unparsable_flag_reads_logged_out() {
        let store = MemorySession::default();
        *store.0.lock().unwrap() = Some("not-a-bool".to_string());
        assert!(!store.is_logged_in());
    }

    #[test]
    fn set_and_read_back() {
        let store = MemorySession::default();
        store.set_logged_in(true);
        assert!(store.is_logged_in());
        store.set_logged_in(false);
        assert!(!store.is_logged_in());
    }

    #[test]
    fn clear_removes_the_entry() {
        let store = MemorySession::default();
        store.set_logged_in(true);
        store.clear();
        assert!(store.0.lock().unwrap().is_none());
        assert!(!store.is_logged_in());
    }
}
