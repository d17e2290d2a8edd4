//! Plaintext account records and the active session.
//!
//! The session is a single [`Session`] value. It is read from and written to the
//! store as a unit so the user key and the admin flag always change together.

use crate::errors::StoreError;
use crate::models::{iso_timestamp, timestamp_id, SessionUser, User};
use crate::store::{LocalStore, ADMIN_KEY, USERS_KEY, USER_KEY};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Session {
    pub user: Option<SessionUser>,
    pub is_admin: bool,
}

impl Session {
    pub fn load(store: &LocalStore) -> Result<Self, StoreError> {
        Ok(Self {
            user: store.read_json(USER_KEY)?,
            is_admin: store.get_item(ADMIN_KEY) == Some("true"),
        })
    }

    pub fn save(&self, store: &mut LocalStore) -> Result<(), StoreError> {
        match &self.user {
            Some(user) => store.write_json(USER_KEY, user)?,
            None => {
                store.remove_item(USER_KEY);
            }
        }
        if self.is_admin {
            store.set_item(ADMIN_KEY, "true");
        } else {
            store.remove_item(ADMIN_KEY);
        }
        Ok(())
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.id.as_str())
    }
}

pub fn login(store: &mut LocalStore, email: &str, password: &str) -> Result<bool, StoreError> {
    let users: Vec<User> = store.read_json(USERS_KEY)?;
    let Some(found) = users
        .iter()
        .find(|user| user.email == email && user.password == password)
    else {
        warn!("login rejected for {email}");
        return Ok(false);
    };

    let mut session = Session::load(store)?;
    session.user = Some(SessionUser::from(found));
    session.save(store)?;
    info!(user_id = %found.id, "user logged in");
    Ok(true)
}

pub fn signup(
    store: &mut LocalStore,
    name: &str,
    email: &str,
    password: &str,
) -> Result<bool, StoreError> {
    signup_at(store, name, email, password, Utc::now())
}

pub fn signup_at(
    store: &mut LocalStore,
    name: &str,
    email: &str,
    password: &str,
    now: DateTime<Utc>,
) -> Result<bool, StoreError> {
    let users: Vec<User> = store.read_json(USERS_KEY)?;
    if users.iter().any(|user| user.email == email) {
        warn!("signup rejected, {email} already registered");
        return Ok(false);
    }
    let mut session = Session::load(store)?;

    let user = User {
        id: timestamp_id(&now),
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        created_at: iso_timestamp(&now),
    };
    store.append(USERS_KEY, user.clone())?;
    session.user = Some(SessionUser::from(&user));
    session.save(store)?;
    info!(user_id = %user.id, "user signed up");
    Ok(true)
}

pub fn admin_login(
    store: &mut LocalStore,
    expected: &str,
    password: &str,
) -> Result<bool, StoreError> {
    if password != expected {
        warn!("admin login rejected");
        return Ok(false);
    }

    let mut session = Session::load(store)?;
    session.is_admin = true;
    session.save(store)?;
    info!("admin access granted");
    Ok(true)
}

pub fn logout(store: &mut LocalStore) -> Result<(), StoreError> {
    Session::default().save(store)?;
    info!("session cleared");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_705_314_600 + secs, 0).unwrap()
    }

    fn store_with_ada() -> LocalStore {
        let mut store = LocalStore::new();
        assert!(signup_at(&mut store, "Ada", "ada@example.com", "pw", at(0)).unwrap());
        logout(&mut store).unwrap();
        store
    }

    #[test]
    fn signup_appends_user_and_logs_in() {
        let mut store = LocalStore::new();
        assert!(signup_at(&mut store, "Ada", "ada@example.com", "pw", at(0)).unwrap());

        let users: Vec<User> = store.read_json(USERS_KEY).unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].password, "pw");
        assert_eq!(users[0].created_at, "2024-01-15T10:30:00.000Z");

        let session = Session::load(&store).unwrap();
        assert_eq!(session.user_id(), Some(users[0].id.as_str()));
    }

    #[test]
    fn duplicate_signup_fails_without_mutation() {
        let mut store = store_with_ada();
        let before = store.get_item(USERS_KEY).map(str::to_string);

        assert!(!signup_at(&mut store, "Other", "ada@example.com", "x", at(5)).unwrap());
        assert_eq!(store.get_item(USERS_KEY).map(str::to_string), before);
        assert_eq!(Session::load(&store).unwrap().user, None);
    }

    #[test]
    fn signup_with_unreadable_session_leaves_users_untouched() {
        let mut store = store_with_ada();
        store.set_item(USER_KEY, "{corrupt");

        let result = signup_at(&mut store, "Bob", "bob@example.com", "pw", at(10));
        assert!(matches!(result, Err(StoreError::Corrupt { .. })));
        let users: Vec<User> = store.read_json(USERS_KEY).unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].email, "ada@example.com");
    }

    #[test]
    fn login_sets_session_without_password() {
        let mut store = store_with_ada();
        assert!(login(&mut store, "ada@example.com", "pw").unwrap());

        let raw = store.get_item(USER_KEY).unwrap();
        let value: serde_json::Value = serde_json::from_str(raw).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": "1705314600000", "name": "Ada", "email": "ada@example.com"})
        );
    }

    #[test]
    fn login_with_wrong_password_fails() {
        let mut store = store_with_ada();
        assert!(!login(&mut store, "ada@example.com", "nope").unwrap());
        assert!(!login(&mut store, "bob@example.com", "pw").unwrap());
        assert!(store.get_item(USER_KEY).is_none());
    }

    #[test]
    fn admin_login_gates_on_password() {
        let mut store = LocalStore::new();
        assert!(!admin_login(&mut store, DEFAULT_ADMIN_PASSWORD, "admin").unwrap());
        assert!(store.get_item(ADMIN_KEY).is_none());

        assert!(admin_login(&mut store, DEFAULT_ADMIN_PASSWORD, "admin123").unwrap());
        assert_eq!(store.get_item(ADMIN_KEY), Some("true"));
        assert!(Session::load(&store).unwrap().is_admin);
    }

    #[test]
    fn admin_flag_and_user_are_independent() {
        let mut store = store_with_ada();
        assert!(admin_login(&mut store, DEFAULT_ADMIN_PASSWORD, "admin123").unwrap());
        let session = Session::load(&store).unwrap();
        assert!(session.is_admin);
        assert_eq!(session.user, None);

        assert!(login(&mut store, "ada@example.com", "pw").unwrap());
        assert!(Session::load(&store).unwrap().is_admin);
    }

    #[test]
    fn logout_clears_both_keys() {
        let mut store = store_with_ada();
        login(&mut store, "ada@example.com", "pw").unwrap();
        admin_login(&mut store, DEFAULT_ADMIN_PASSWORD, "admin123").unwrap();

        logout(&mut store).unwrap();
        assert!(store.get_item(USER_KEY).is_none());
        assert!(store.get_item(ADMIN_KEY).is_none());
        assert_eq!(Session::load(&store).unwrap(), Session::default());
    }
}
