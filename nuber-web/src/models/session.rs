//! Process-wide login session.
//!
//! The session is a yewdux store, so any component can read it and re-render
//! when it changes. Only the token is persisted; whether the user is logged
//! in is always derived from its presence.

use crate::api::NuberClient;
#[cfg(target_arch = "wasm32")]
use crate::config::TOKEN_STORAGE_KEY;
use crate::models::me::MeState;
#[cfg(target_arch = "wasm32")]
use gloo_storage::{LocalStorage, Storage};
use thiserror::Error;
use yewdux::{Context, Dispatch, Store};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("The server did not issue a session token")]
    EmptyToken,
    #[error("Unable to persist the session token: {0}")]
    Storage(String),
}

/// Durable storage for the session token.
pub trait TokenStorage {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str) -> Result<(), SessionError>;
    fn clear(&self);
}

/// Browser `localStorage`, under [`TOKEN_STORAGE_KEY`].
///
/// Off the web there is no browser storage: nothing loads and saves fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTokenStorage;

#[cfg(target_arch = "wasm32")]
impl TokenStorage for LocalTokenStorage {
    fn load(&self) -> Option<String> {
        LocalStorage::get::<String>(TOKEN_STORAGE_KEY).ok()
    }

    fn save(&self, token: &str) -> Result<(), SessionError> {
        LocalStorage::set(TOKEN_STORAGE_KEY, token)
            .map_err(|err| SessionError::Storage(err.to_string()))
    }

    fn clear(&self) {
        LocalStorage::delete(TOKEN_STORAGE_KEY);
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl TokenStorage for LocalTokenStorage {
    fn load(&self) -> Option<String> {
        None
    }

    fn save(&self, _token: &str) -> Result<(), SessionError> {
        Err(SessionError::Storage("browser storage is unavailable".to_string()))
    }

    fn clear(&self) {}
}

/// Login status and auth token of the current browser user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    token: Option<String>,
}

impl SessionState {
    /// Rebuild the session from whatever token `storage` holds.
    pub fn restore(storage: &impl TokenStorage) -> Self {
        Self {
            token: storage.load().filter(|token| !token.is_empty()),
        }
    }

    /// Persist `token` and return the logged-in session.
    ///
    /// A storage failure is logged and does not prevent the login: the
    /// session simply will not survive a reload.
    pub fn login(storage: &impl TokenStorage, token: String) -> Result<Self, SessionError> {
        if token.is_empty() {
            return Err(SessionError::EmptyToken);
        }
        if let Err(err) = storage.save(&token) {
            log::warn!("{err}");
        }
        Ok(Self { token: Some(token) })
    }

    /// Forget the persisted token and return the logged-out session.
    pub fn logout(storage: &impl TokenStorage) -> Self {
        storage.clear();
        Self::default()
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

impl Store for SessionState {
    fn new(_cx: &Context) -> Self {
        let session = Self::restore(&LocalTokenStorage);
        log::debug!("session restored, logged in: {}", session.is_logged_in());
        session
    }

    fn should_notify(&self, old: &Self) -> bool {
        self != old
    }
}

/// Record a successful login: persist the token, hand it to the GraphQL
/// client and flip the session store.
pub fn sign_in(
    dispatch: &Dispatch<SessionState>,
    storage: &impl TokenStorage,
    client: &NuberClient,
    token: String,
) -> Result<(), SessionError> {
    let session = SessionState::login(storage, token)?;
    client.set_token(session.token().map(str::to_string));
    dispatch.set(session);
    log::info!("signed in");
    Ok(())
}

/// Log out: clear the token everywhere and drop the cached profile.
pub fn sign_out(
    dispatch: &Dispatch<SessionState>,
    me: &Dispatch<MeState>,
    storage: &impl TokenStorage,
    client: &NuberClient,
) {
    client.set_token(None);
    me.set(MeState::default());
    dispatch.set(SessionState::logout(storage));
    log::info!("signed out");
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{CurrentUser, UserRole};
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryTokenStorage {
        token: RefCell<Option<String>>,
        fail_saves: bool,
    }

    impl TokenStorage for MemoryTokenStorage {
        fn load(&self) -> Option<String> {
            self.token.borrow().clone()
        }

        fn save(&self, token: &str) -> Result<(), SessionError> {
            if self.fail_saves {
                return Err(SessionError::Storage("quota exceeded".to_string()));
            }
            *self.token.borrow_mut() = Some(token.to_string());
            Ok(())
        }

        fn clear(&self) {
            self.token.borrow_mut().take();
        }
    }

    #[test]
    fn no_stored_token_means_logged_out() {
        let storage = MemoryTokenStorage::default();
        let session = SessionState::restore(&storage);
        assert!(!session.is_logged_in());
        assert_eq!(session.token(), None);
    }

    #[test]
    fn stored_token_means_logged_in() {
        let storage = MemoryTokenStorage::default();
        storage.save("jwt").unwrap();
        let session = SessionState::restore(&storage);
        assert!(session.is_logged_in());
        assert_eq!(session.token(), Some("jwt"));
    }

    #[test]
    fn empty_stored_token_means_logged_out() {
        let storage = MemoryTokenStorage::default();
        storage.save("").unwrap();
        assert!(!SessionState::restore(&storage).is_logged_in());
    }

    #[test]
    fn login_persists_token() {
        let storage = MemoryTokenStorage::default();
        let session = SessionState::login(&storage, "jwt".to_string()).unwrap();
        assert!(session.is_logged_in());
        assert_eq!(storage.load().as_deref(), Some("jwt"));
        assert_eq!(SessionState::restore(&storage), session);
    }

    #[test]
    fn login_rejects_empty_token() {
        let storage = MemoryTokenStorage::default();
        assert_eq!(
            SessionState::login(&storage, String::new()),
            Err(SessionError::EmptyToken)
        );
        assert_eq!(storage.load(), None);
    }

    #[test]
    fn login_survives_storage_failure() {
        let storage = MemoryTokenStorage {
            fail_saves: true,
            ..MemoryTokenStorage::default()
        };
        let session = SessionState::login(&storage, "jwt".to_string()).unwrap();
        assert!(session.is_logged_in());
        assert_eq!(storage.load(), None);
    }

    #[test]
    fn browser_storage_is_empty_off_the_web() {
        let storage = LocalTokenStorage;
        assert_eq!(storage.load(), None);
        assert!(matches!(storage.save("jwt"), Err(SessionError::Storage(_))));
        assert!(!SessionState::restore(&storage).is_logged_in());
    }

    #[test]
    fn sign_in_updates_store_storage_and_client() {
        let cx = Context::new();
        let session = Dispatch::<SessionState>::new(&cx);
        let storage = MemoryTokenStorage::default();
        let client = NuberClient::with_endpoint("http://localhost:4000/graphql");
        assert!(!session.get().is_logged_in());

        sign_in(&session, &storage, &client, "jwt".to_string()).unwrap();

        assert!(session.get().is_logged_in());
        assert_eq!(session.get().token(), Some("jwt"));
        assert_eq!(storage.load().as_deref(), Some("jwt"));
        assert_eq!(client.current_token().as_deref(), Some("jwt"));
    }

    #[test]
    fn sign_in_with_empty_token_changes_nothing() {
        let cx = Context::new();
        let session = Dispatch::<SessionState>::new(&cx);
        let storage = MemoryTokenStorage::default();
        let client = NuberClient::with_endpoint("http://localhost:4000/graphql");

        assert_eq!(
            sign_in(&session, &storage, &client, String::new()),
            Err(SessionError::EmptyToken)
        );
        assert!(!session.get().is_logged_in());
        assert_eq!(storage.load(), None);
        assert_eq!(client.current_token(), None);
    }

    #[test]
    fn sign_out_clears_store_storage_client_and_profile() {
        let cx = Context::new();
        let session = Dispatch::<SessionState>::new(&cx);
        let me = Dispatch::<MeState>::new(&cx);
        let storage = MemoryTokenStorage::default();
        let client = NuberClient::with_endpoint("http://localhost:4000/graphql");
        sign_in(&session, &storage, &client, "jwt".to_string()).unwrap();
        me.set(MeState::ready(CurrentUser {
            id: 1,
            email: "client@mail.com".to_string(),
            role: UserRole::Client,
            verified: true,
        }));

        sign_out(&session, &me, &storage, &client);

        assert!(!session.get().is_logged_in());
        assert_eq!(storage.load(), None);
        assert_eq!(client.current_token(), None);
        assert_eq!(*me.get(), MeState::default());
    }

    #[test]
    fn logout_clears_token() {
        let storage = MemoryTokenStorage::default();
        let _ = SessionState::login(&storage, "jwt".to_string()).unwrap();
        let session = SessionState::logout(&storage);
        assert!(!session.is_logged_in());
        assert_eq!(storage.load(), None);
        assert!(!SessionState::restore(&storage).is_logged_in());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn local_storage_round_trip() {
        let storage = LocalTokenStorage;
        storage.clear();
        assert!(!SessionState::restore(&storage).is_logged_in());

        let session = SessionState::login(&storage, "browser-jwt".to_string()).unwrap();
        assert_eq!(SessionState::restore(&storage), session);

        SessionState::logout(&storage);
        assert_eq!(LocalStorage::get::<String>(TOKEN_STORAGE_KEY).ok(), None);
    }
}
