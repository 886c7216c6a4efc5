//! Session-scoped state: the storage seam, the session token and the
//! exit-intent capture gate.
//!
//! Nothing here is global. The browser crate hands in a `sessionStorage`
//! backed [`SessionStore`]; tests use [`MemorySessionStore`].

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use tracing::{debug, info, warn};

use crate::error::LandingError;

/// Storage key of the exit-intent capture flag.
pub const CAPTURED_KEY: &str = "exit_intent_captured";
/// Storage key of the session token.
pub const SESSION_ID_KEY: &str = "session_id";

/// Key/value storage that lives as long as the browser session.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), LandingError>;
}

impl<T: SessionStore + ?Sized> SessionStore for Rc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), LandingError> {
        (**self).set(key, value)
    }
}

/// In-memory store, used in tests and when `sessionStorage` is unavailable.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), LandingError> {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Opaque client-generated token sent as `X-Session-ID`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Reuse the token stored for this session or mint and persist a new one.
    pub fn load_or_create<S: SessionStore + ?Sized>(
        store: &S,
        mint: impl FnOnce() -> String,
    ) -> Self {
        if let Some(existing) = store.get(SESSION_ID_KEY).filter(|v| !v.is_empty()) {
            return SessionId(existing);
        }
        let token = mint();
        if let Err(err) = store.set(SESSION_ID_KEY, &token) {
            warn!(error = %err, "session id not persisted; a new one will be minted on reload");
        }
        debug!(session_id = %token, "minted session id");
        SessionId(token)
    }

    /// `sess_<millis>_<7 base36 chars>` from a timestamp and a uniform sample in `[0, 1)`.
    pub fn mint(now_ms: f64, random: f64) -> String {
        const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
        let mut fraction = random.clamp(0.0, 1.0 - f64::EPSILON);
        let mut suffix = String::with_capacity(7);
        for _ in 0..7 {
            fraction *= 36.0;
            let digit = fraction.floor() as usize;
            suffix.push(ALPHABET[digit.min(35)] as char);
            fraction -= digit as f64;
        }
        format!("sess_{}_{}", now_ms.max(0.0) as u64, suffix)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Remembers whether the visitor already left an email through the
/// exit-intent modal during this browser session.
///
/// Read once from storage at construction, cached afterwards. Once set it is
/// never cleared; only the storage's own lifetime (tab closed) resets it.
#[derive(Debug)]
pub struct CaptureGate<S> {
    store: S,
    captured: Cell<bool>,
}

impl<S: SessionStore> CaptureGate<S> {
    pub fn new(store: S) -> Self {
        let captured = store.get(CAPTURED_KEY).as_deref() == Some("true");
        Self {
            store,
            captured: Cell::new(captured),
        }
    }

    pub fn is_captured(&self) -> bool {
        self.captured.get()
    }

    /// Flip the flag in memory and in session storage. Idempotent.
    pub fn mark_captured(&self) {
        if self.captured.replace(true) {
            return;
        }
        if let Err(err) = self.store.set(CAPTURED_KEY, "true") {
            warn!(error = %err, "capture flag kept in memory only");
        }
        info!("exit-intent email captured for this session");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts writes so idempotence is observable.
    #[derive(Default)]
    struct CountingStore {
        inner: MemorySessionStore,
        writes: Cell<usize>,
    }

    impl SessionStore for CountingStore {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), LandingError> {
            self.writes.set(self.writes.get() + 1);
            self.inner.set(key, value)
        }
    }

    struct ReadOnlyStore;

    impl SessionStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), LandingError> {
            Err(LandingError::Storage("quota exceeded".into()))
        }
    }

    #[test]
    fn gate_reads_existing_flag() {
        let store = MemorySessionStore::new();
        store.set(CAPTURED_KEY, "true").unwrap();
        assert!(CaptureGate::new(store).is_captured());

        let other = MemorySessionStore::new();
        other.set(CAPTURED_KEY, "yes").unwrap();
        assert!(!CaptureGate::new(other).is_captured());
    }

    #[test]
    fn mark_captured_persists_once() {
        let store = Rc::new(CountingStore::default());
        let gate = CaptureGate::new(Rc::clone(&store));
        assert!(!gate.is_captured());

        gate.mark_captured();
        gate.mark_captured();

        assert!(gate.is_captured());
        assert_eq!(store.writes.get(), 1);
        assert_eq!(store.get(CAPTURED_KEY).as_deref(), Some("true"));

        // A reload within the same session sees the flag.
        assert!(CaptureGate::new(Rc::clone(&store)).is_captured());
    }

    #[test]
    fn storage_failure_still_closes_gate_in_memory() {
        let gate = CaptureGate::new(ReadOnlyStore);
        gate.mark_captured();
        assert!(gate.is_captured());
    }

    #[test]
    fn session_id_is_reused_within_session() {
        let store = MemorySessionStore::new();
        let first = SessionId::load_or_create(&store, || "sess_1_abcdefg".into());
        let second = SessionId::load_or_create(&store, || unreachable!("must reuse stored id"));
        assert_eq!(first, second);
        assert_eq!(second.as_str(), "sess_1_abcdefg");
    }

    #[test]
    fn minted_token_shape() {
        let token = SessionId::mint(1_700_000_000_123.0, 0.5);
        let parts: Vec<&str> = token.split('_').collect();
        assert_eq!(parts[0], "sess");
        assert_eq!(parts[1], "1700000000123");
        assert_eq!(parts[2].len(), 7);
        assert!(parts[2].starts_with('i'));
        assert!(parts[2].chars().all(|c| c.is_ascii_alphanumeric()));

        // Edge of the unit interval must not index past the alphabet.
        assert_eq!(SessionId::mint(0.0, 1.0).len(), "sess_0_".len() + 7);
    }
}
