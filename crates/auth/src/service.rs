//! Demo login/logout with a persisted session.

use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use crate::session::{SESSION_KEY, SessionError, SessionStore};
use crate::user::User;

pub const DEMO_EMAIL: &str = "admin@ecosprout.com";
pub const DEMO_PASSWORD: &str = "admin";

/// Simulated round-trip for the session check and for login.
pub const DEFAULT_AUTH_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("failed to encode session user: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
struct AuthState {
    user: Option<User>,
    loading: bool,
}

/// Holds the signed-in user for one site instance.
///
/// Starts out loading; call [`AuthService::restore`] once at startup to pick
/// up a previously persisted session.
pub struct AuthService {
    store: Arc<dyn SessionStore>,
    delay: Duration,
    state: RwLock<AuthState>,
}

impl core::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AuthService")
            .field("delay", &self.delay)
            .field("state", &*self.state.read().unwrap_or_else(PoisonError::into_inner))
            .finish_non_exhaustive()
    }
}

impl AuthService {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self::with_delay(store, DEFAULT_AUTH_DELAY)
    }

    pub fn with_delay(store: Arc<dyn SessionStore>, delay: Duration) -> Self {
        Self {
            store,
            delay,
            state: RwLock::new(AuthState {
                user: None,
                loading: true,
            }),
        }
    }

    pub fn current_user(&self) -> Option<User> {
        self.read_state().user.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.read_state().loading
    }

    /// Load the persisted user, if any.
    ///
    /// A stored value that no longer decodes is treated as signed out.
    pub async fn restore(&self) -> Result<Option<User>, AuthError> {
        self.set_loading(true);
        tokio::time::sleep(self.delay).await;

        let restored = self.store.get(SESSION_KEY).map(|raw| {
            raw.and_then(|raw| match serde_json::from_str::<User>(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    tracing::warn!(error = %e, "discarding unreadable persisted session");
                    None
                }
            })
        });

        let mut state = self.write_state();
        state.loading = false;
        let user = restored?;
        if let Some(user) = &user {
            tracing::info!(user_id = %user.id, "session restored");
        }
        state.user = user.clone();
        Ok(user)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        self.set_loading(true);
        tokio::time::sleep(self.delay).await;

        let result = self.authenticate(email, password);

        let mut state = self.write_state();
        state.loading = false;
        match result {
            Ok(user) => {
                tracing::info!(user_id = %user.id, "signed in");
                state.user = Some(user.clone());
                Ok(user)
            }
            Err(e) => {
                tracing::warn!(email, error = %e, "sign-in rejected");
                Err(e)
            }
        }
    }

    pub fn logout(&self) -> Result<(), AuthError> {
        self.store.remove(SESSION_KEY)?;
        self.write_state().user = None;
        tracing::info!("signed out");
        Ok(())
    }

    fn authenticate(&self, email: &str, password: &str) -> Result<User, AuthError> {
        if email != DEMO_EMAIL || password != DEMO_PASSWORD {
            return Err(AuthError::InvalidCredentials);
        }

        let user = User::demo_admin();
        self.store
            .set(SESSION_KEY, &serde_json::to_string(&user)?)?;
        Ok(user)
    }

    fn set_loading(&self, loading: bool) {
        self.write_state().loading = loading;
    }

    fn read_state(&self) -> std::sync::RwLockReadGuard<'_, AuthState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> std::sync::RwLockWriteGuard<'_, AuthState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::InMemorySessionStore;

    fn service(store: Arc<InMemorySessionStore>) -> AuthService {
        AuthService::new(store)
    }

    #[tokio::test(start_paused = true)]
    async fn starts_loading_and_restores_nothing_from_an_empty_store() {
        let auth = service(Arc::new(InMemorySessionStore::new()));
        assert!(auth.is_loading());

        let start = tokio::time::Instant::now();
        assert_eq!(auth.restore().await.unwrap(), None);
        assert!(start.elapsed() >= DEFAULT_AUTH_DELAY);
        assert!(!auth.is_loading());
        assert_eq!(auth.current_user(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn login_persists_the_demo_user() {
        let store = Arc::new(InMemorySessionStore::new());
        let auth = service(store.clone());

        let user = auth.login(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();
        assert_eq!(user, User::demo_admin());
        assert_eq!(auth.current_user(), Some(User::demo_admin()));
        assert!(!auth.is_loading());

        let raw = store.get(SESSION_KEY).unwrap().unwrap();
        assert_eq!(serde_json::from_str::<User>(&raw).unwrap(), user);

        // a fresh service picks the session back up
        let next = service(store);
        assert_eq!(next.restore().await.unwrap(), Some(User::demo_admin()));
    }

    #[tokio::test(start_paused = true)]
    async fn wrong_credentials_are_rejected_and_nothing_is_stored() {
        let store = Arc::new(InMemorySessionStore::new());
        let auth = service(store.clone());

        for (email, password) in [
            (DEMO_EMAIL, "wrong"),
            ("sarah@ecosprout.com", DEMO_PASSWORD),
            ("", ""),
        ] {
            let err = auth.login(email, password).await.unwrap_err();
            assert!(matches!(err, AuthError::InvalidCredentials));
            assert_eq!(err.to_string(), "Invalid credentials");
        }

        assert!(!auth.is_loading());
        assert_eq!(auth.current_user(), None);
        assert_eq!(store.get(SESSION_KEY).unwrap(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn logout_clears_state_and_storage() {
        let store = Arc::new(InMemorySessionStore::new());
        let auth = service(store.clone());
        auth.login(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();

        auth.logout().unwrap();
        assert_eq!(auth.current_user(), None);
        assert_eq!(store.get(SESSION_KEY).unwrap(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn unreadable_session_counts_as_signed_out() {
        let store = Arc::new(InMemorySessionStore::new());
        store.set(SESSION_KEY, "{not json").unwrap();

        let auth = service(store);
        assert_eq!(auth.restore().await.unwrap(), None);
        assert!(!auth.is_loading());
    }
}
