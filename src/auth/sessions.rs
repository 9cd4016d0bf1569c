// src/auth/sessions.rs
use crate::auth::token::{hash_token, new_session_token};
use crate::domain::user::User;
use crate::errors::ServerError;
use std::collections::HashMap;
use std::sync::Mutex;

/// Sessions last a week from sign-in.
pub const SESSION_TTL_SECS: i64 = 60 * 60 * 24 * 7;

struct Session {
    user: User,
    expires_at: i64,
}

/// In-memory sessions: token hash -> signed-in user.
/// Expired entries read as missing and are dropped on the next sign-in.
#[derive(Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<[u8; 32], Session>>,
}

fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `user` under a fresh token and return the raw token for the cookie.
    pub fn create(&self, user: User) -> Result<String, ServerError> {
        self.create_at(user, now())
    }

    pub fn create_at(&self, user: User, now: i64) -> Result<String, ServerError> {
        let token = new_session_token();
        let mut sessions = self.sessions.lock()?;
        sessions.retain(|_, s| s.expires_at > now);
        sessions.insert(
            hash_token(&token),
            Session {
                user,
                expires_at: now + SESSION_TTL_SECS,
            },
        );
        Ok(token)
    }

    /// Snapshot of the user behind `token`.
    pub fn get(&self, token: &str) -> Result<Option<User>, ServerError> {
        self.get_at(token, now())
    }

    pub fn get_at(&self, token: &str, now: i64) -> Result<Option<User>, ServerError> {
        let mut sessions = self.sessions.lock()?;
        Ok(live(&mut sessions, token, now).map(|s| s.user.clone()))
    }

    /// Run `f` against the stored user. `None` if the session is gone.
    pub fn update<F, T>(&self, token: &str, f: F) -> Result<Option<T>, ServerError>
    where
        F: FnOnce(&mut User) -> T,
    {
        let mut sessions = self.sessions.lock()?;
        Ok(live(&mut sessions, token, now()).map(|s| f(&mut s.user)))
    }

    pub fn remove(&self, token: &str) -> Result<bool, ServerError> {
        Ok(self.sessions.lock()?.remove(&hash_token(token)).is_some())
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.sessions.lock().map(|s| s.len()).unwrap_or(0)
    }
}

/// The unexpired session for `token`; an expired one is removed.
fn live<'a>(
    sessions: &'a mut HashMap<[u8; 32], Session>,
    token: &str,
    now: i64,
) -> Option<&'a mut Session> {
    let key = hash_token(token);
    if sessions.get(&key)?.expires_at <= now {
        sessions.remove(&key);
        return None;
    }
    sessions.get_mut(&key)
}

/// Trim + lowercase, minimal sanity check.
pub fn normalize_email(email: &str) -> Option<String> {
    let e = email.trim().to_lowercase();
    if e.is_empty() || !e.contains('@') || e.starts_with('@') || e.ends_with('@') {
        return None;
    }
    Some(e)
}

/// Display name for a sign-in: the typed name, else the email's local part.
pub fn display_name(name: &str, email: &str) -> String {
    let name = name.trim();
    if !name.is_empty() {
        return name.to_string();
    }
    email.split('@').next().unwrap_or(email).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User::new("Ana".into(), "ana@example.com".into(), 150, false)
    }

    #[test]
    fn create_get_remove() {
        let store = SessionStore::new();
        let token = store.create(user()).unwrap();

        assert_eq!(store.get(&token).unwrap().unwrap().name, "Ana");
        assert!(store.remove(&token).unwrap());
        assert!(store.get(&token).unwrap().is_none());
        assert!(!store.remove(&token).unwrap());
    }

    #[test]
    fn update_mutates_in_place() {
        let store = SessionStore::new();
        let token = store.create(user()).unwrap();

        let points = store.update(&token, |u| {
            u.points -= 50;
            u.points
        });
        assert_eq!(points.unwrap(), Some(100));
        assert_eq!(store.get(&token).unwrap().unwrap().points, 100);
        assert_eq!(store.update("nope", |u| u.points).unwrap(), None);
    }

    #[test]
    fn expired_session_reads_as_missing_and_is_dropped() {
        let store = SessionStore::new();
        let issued = 1_700_000_000;
        let token = store.create_at(user(), issued).unwrap();

        let just_before = issued + SESSION_TTL_SECS - 1;
        assert!(store.get_at(&token, just_before).unwrap().is_some());

        let expiry = issued + SESSION_TTL_SECS;
        assert!(store.get_at(&token, expiry).unwrap().is_none());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn signing_in_sweeps_expired_sessions() {
        let store = SessionStore::new();
        let issued = 1_700_000_000;
        for _ in 0..100 {
            store.create_at(user(), issued).unwrap();
        }
        assert_eq!(store.len(), 100);

        let fresh = store
            .create_at(user(), issued + SESSION_TTL_SECS + 1)
            .unwrap();
        assert_eq!(store.len(), 1);
        assert!(store
            .get_at(&fresh, issued + SESSION_TTL_SECS + 2)
            .unwrap()
            .is_some());
    }

    #[test]
    fn email_normalization() {
        assert_eq!(
            normalize_email("  Ana@Example.COM "),
            Some("ana@example.com".to_string())
        );
        assert_eq!(normalize_email("ana"), None);
        assert_eq!(normalize_email("@example.com"), None);
    }

    #[test]
    fn display_name_falls_back_to_local_part() {
        assert_eq!(display_name(" ", "jo.park@example.com"), "jo.park");
        assert_eq!(display_name("Jo", "jo.park@example.com"), "Jo");
    }
}
