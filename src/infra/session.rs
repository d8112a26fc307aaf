// src/infra/session.rs — In-memory login sessions

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Session {
    pub id: String,
    pub authenticated: bool,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            authenticated: false,
            created_at: Utc::now(),
        }
    }

    fn is_expired(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now - self.created_at >= ttl
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-local session store keyed by the opaque id carried in the cookie.
///
/// Ids are random v4 UUIDs, so every restart invalidates all logins.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<String, Session>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl_secs: u64) -> Self {
        let ttl_secs = i64::try_from(ttl_secs).unwrap_or(i64::MAX);
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            ttl: Duration::try_seconds(ttl_secs).unwrap_or(Duration::MAX),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Session>> {
        // A panic while holding the lock cannot leave the map half-updated
        self.sessions.lock().unwrap_or_else(|p| p.into_inner())
    }

    /// Create a session already marked authenticated and return its id.
    pub fn create_authenticated(&self) -> String {
        let now = Utc::now();
        let mut session = Session::new();
        session.authenticated = true;
        let id = session.id.clone();

        let mut sessions = self.lock();
        sessions.retain(|_, s| !s.is_expired(now, self.ttl));
        sessions.insert(id.clone(), session);
        id
    }

    pub fn is_authenticated(&self, id: &str) -> bool {
        self.is_authenticated_at(id, Utc::now())
    }

    fn is_authenticated_at(&self, id: &str, now: DateTime<Utc>) -> bool {
        let mut sessions = self.lock();
        let Some(session) = sessions.get(id) else {
            return false;
        };
        if session.is_expired(now, self.ttl) {
            sessions.remove(id);
            return false;
        }
        session.authenticated
    }

    /// Drop a session. Returns whether it existed.
    pub fn remove(&self, id: &str) -> bool {
        self.lock().remove(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_unauthenticated() {
        let s = Session::new();
        assert!(!s.authenticated);
        assert_eq!(s.id.len(), 36);
    }

    #[test]
    fn test_create_and_check() {
        let store = SessionStore::new(60);
        let id = store.create_authenticated();
        assert!(store.is_authenticated(&id));
        assert!(!store.is_authenticated("unknown"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_ids_are_unique() {
        let store = SessionStore::new(60);
        let a = store.create_authenticated();
        let b = store.create_authenticated();
        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_remove() {
        let store = SessionStore::new(60);
        let id = store.create_authenticated();
        assert!(store.remove(&id));
        assert!(!store.remove(&id));
        assert!(!store.is_authenticated(&id));
        assert!(store.is_empty());
    }

    #[test]
    fn test_expired_session_is_dropped() {
        let store = SessionStore::new(60);
        let id = store.create_authenticated();

        let later = Utc::now() + Duration::seconds(61);
        assert!(!store.is_authenticated_at(&id, later));
        assert!(store.is_empty());
    }

    #[test]
    fn test_zero_ttl_never_authenticates() {
        let store = SessionStore::new(0);
        let id = store.create_authenticated();
        assert!(!store.is_authenticated(&id));
    }

    #[test]
    fn test_huge_ttl_does_not_overflow() {
        let store = SessionStore::new(u64::MAX);
        let id = store.create_authenticated();
        assert!(store.is_authenticated(&id));
    }
}
