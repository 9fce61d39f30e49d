//! Signed-in user and wallet connection, persisted as two JSON values.
//!
//! `Session` is a plain value loaded once from a [`SessionStore`] and handed
//! down the component tree. Every mutation writes through the store first, so
//! a failed write leaves the in-memory session unchanged.

use std::cell::RefCell;
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{MarketError, Result};
use crate::models::WalletType;

pub const USER_KEY: &str = "chainfund_user";
pub const WALLET_KEY: &str = "chainfund_wallet";

pub const DEMO_USER_ID: &str = "user-1";
pub const DEMO_USERNAME: &str = "demo_user";
pub const DEMO_EMAIL: &str = "demo@chainfund.io";
pub const DEMO_AVATAR_URL: &str =
    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150&h=150&fit=crop&crop=face";

const ADMIN_IDENTIFIERS: [&str; 2] = ["admin", "admin@chainfund.io"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

impl SessionUser {
    /// User produced by following the mock magic link for an email or
    /// username.
    pub fn from_identifier(identifier: &str) -> Self {
        let (username, email) = if identifier.contains('@') {
            (DEMO_USERNAME.to_string(), identifier.to_string())
        } else {
            (identifier.to_string(), DEMO_EMAIL.to_string())
        };

        Self {
            id: DEMO_USER_ID.to_string(),
            username,
            email,
            avatar_url: Some(DEMO_AVATAR_URL.to_string()),
            is_admin: ADMIN_IDENTIFIERS.contains(&identifier),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletConnection {
    #[serde(rename = "type")]
    pub wallet_type: WalletType,
    pub address: String,
    pub connected_at: DateTime<Utc>,
}

/// String key-value storage backing the session.
pub trait SessionStore {
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// In-process store for native callers and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}

/// Outcome of visiting `/u/:username`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardAccess {
    Granted,
    RedirectToLogin,
    RedirectToConnectWallet,
    /// Signed in as someone else; carries the stored username.
    RedirectToOwnDashboard(String),
}

impl DashboardAccess {
    pub fn redirect_path(&self) -> Option<String> {
        match self {
            DashboardAccess::Granted => None,
            DashboardAccess::RedirectToLogin => Some("/login".to_string()),
            DashboardAccess::RedirectToConnectWallet => Some("/connect-wallet".to_string()),
            DashboardAccess::RedirectToOwnDashboard(username) => Some(format!("/u/{username}")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub user: Option<SessionUser>,
    pub wallet: Option<WalletConnection>,
}

impl Session {
    /// Reads both keys. Missing, unreadable or corrupt values count as absent.
    pub fn load(store: &impl SessionStore) -> Self {
        Self {
            user: load_value(store, USER_KEY),
            wallet: load_value(store, WALLET_KEY),
        }
    }

    pub fn sign_in(&mut self, store: &impl SessionStore, user: SessionUser) -> Result<()> {
        store.write(USER_KEY, &serde_json::to_string(&user)?)?;
        info!(username = %user.username, admin = user.is_admin, "Signed in");
        self.user = Some(user);
        Ok(())
    }

    pub fn connect_wallet(
        &mut self,
        store: &impl SessionStore,
        wallet: WalletConnection,
    ) -> Result<()> {
        if self.user.is_none() {
            return Err(MarketError::Validation(
                "Sign in before connecting a wallet".to_string(),
            ));
        }
        store.write(WALLET_KEY, &serde_json::to_string(&wallet)?)?;
        info!(wallet = %wallet.wallet_type, address = %wallet.address, "Wallet connected");
        self.wallet = Some(wallet);
        Ok(())
    }

    pub fn sign_out(&mut self, store: &impl SessionStore) -> Result<()> {
        store.remove(USER_KEY)?;
        store.remove(WALLET_KEY)?;
        info!("Signed out");
        self.user = None;
        self.wallet = None;
        Ok(())
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn has_wallet(&self) -> bool {
        self.wallet.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_admin)
    }

    pub fn username(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.username.as_str())
    }

    /// Home link for the navbar: own dashboard once fully connected.
    pub fn dashboard_path(&self) -> Option<String> {
        match (&self.user, &self.wallet) {
            (Some(user), Some(_)) => Some(format!("/u/{}", user.username)),
            _ => None,
        }
    }

    pub fn dashboard_access(&self, requested_username: &str) -> DashboardAccess {
        let Some(user) = &self.user else {
            return DashboardAccess::RedirectToLogin;
        };
        if self.wallet.is_none() {
            return DashboardAccess::RedirectToConnectWallet;
        }
        if user.username != requested_username {
            return DashboardAccess::RedirectToOwnDashboard(user.username.clone());
        }
        DashboardAccess::Granted
    }

    /// The connect-wallet page needs a signed-in user.
    pub fn wallet_page_redirect(&self) -> Option<&'static str> {
        if self.user.is_none() {
            Some("/login")
        } else {
            None
        }
    }
}

fn load_value<T: DeserializeOwned>(store: &impl SessionStore, key: &str) -> Option<T> {
    let raw = match store.read(key) {
        Ok(raw) => raw?,
        Err(e) => {
            warn!("Failed to read {}: {}", key, e);
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Ignoring corrupt {}: {}", key, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MOCK_WALLET_ADDRESS;
    use chrono::TimeZone;

    fn wallet() -> WalletConnection {
        WalletConnection {
            wallet_type: WalletType::MetaMask,
            address: MOCK_WALLET_ADDRESS.to_string(),
            connected_at: Utc.with_ymd_and_hms(2024, 2, 20, 10, 0, 0).unwrap(),
        }
    }

    fn connected(username: &str) -> Session {
        Session {
            user: Some(SessionUser::from_identifier(username)),
            wallet: Some(wallet()),
        }
    }

    /// Store whose writes always fail.
    struct BrokenStore;

    impl SessionStore for BrokenStore {
        fn read(&self, _key: &str) -> Result<Option<String>> {
            Err(MarketError::Storage("unavailable".to_string()))
        }
        fn write(&self, _key: &str, _value: &str) -> Result<()> {
            Err(MarketError::Storage("quota exceeded".to_string()))
        }
        fn remove(&self, _key: &str) -> Result<()> {
            Err(MarketError::Storage("unavailable".to_string()))
        }
    }

    #[test]
    fn test_identifier_with_at_sign_becomes_email() {
        let user = SessionUser::from_identifier("alice@example.com");
        assert_eq!(user.username, "demo_user");
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.id, "user-1");
        assert!(!user.is_admin);
    }

    #[test]
    fn test_identifier_without_at_sign_becomes_username() {
        let user = SessionUser::from_identifier("alice");
        assert_eq!(user.username, "alice");
        assert_eq!(user.email, "demo@chainfund.io");
    }

    #[test]
    fn test_admin_identifiers() {
        assert!(SessionUser::from_identifier("admin").is_admin);
        assert!(SessionUser::from_identifier("admin@chainfund.io").is_admin);
        assert!(!SessionUser::from_identifier("Admin").is_admin);
    }

    #[test]
    fn test_no_user_redirects_to_login() {
        let session = Session::default();
        assert_eq!(session.dashboard_access("alice"), DashboardAccess::RedirectToLogin);
        assert_eq!(
            session.dashboard_access("alice").redirect_path().as_deref(),
            Some("/login")
        );
        assert_eq!(session.wallet_page_redirect(), Some("/login"));
    }

    #[test]
    fn test_user_without_wallet_redirects_to_connect() {
        let session = Session {
            user: Some(SessionUser::from_identifier("alice")),
            wallet: None,
        };
        assert_eq!(
            session.dashboard_access("alice"),
            DashboardAccess::RedirectToConnectWallet
        );
        assert_eq!(session.wallet_page_redirect(), None);
        assert_eq!(session.dashboard_path(), None);
    }

    #[test]
    fn test_mismatched_username_redirects_to_own_dashboard() {
        let access = connected("alice").dashboard_access("bob");
        assert_eq!(access.redirect_path().as_deref(), Some("/u/alice"));
    }

    #[test]
    fn test_matching_username_is_granted() {
        let session = connected("alice");
        assert_eq!(session.dashboard_access("alice"), DashboardAccess::Granted);
        assert_eq!(session.dashboard_path().as_deref(), Some("/u/alice"));
    }

    #[test]
    fn test_sign_in_connect_and_reload() {
        let store = MemoryStore::new();
        let mut session = Session::load(&store);
        assert!(!session.is_signed_in());

        session
            .sign_in(&store, SessionUser::from_identifier("admin"))
            .unwrap();
        session.connect_wallet(&store, wallet()).unwrap();

        let reloaded = Session::load(&store);
        assert_eq!(reloaded, session);
        assert!(reloaded.is_admin());
        assert_eq!(reloaded.username(), Some("admin"));
    }

    #[test]
    fn test_stored_json_shape() {
        let store = MemoryStore::new();
        let mut session = Session::default();
        session
            .sign_in(&store, SessionUser::from_identifier("alice"))
            .unwrap();
        session.connect_wallet(&store, wallet()).unwrap();

        let raw = store.read(WALLET_KEY).unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["type"], "metamask");
        assert_eq!(json["address"], MOCK_WALLET_ADDRESS);

        let raw = store.read(USER_KEY).unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["username"], "alice");
        assert_eq!(json["is_admin"], false);
    }

    #[test]
    fn test_sign_out_clears_both_keys() {
        let store = MemoryStore::new();
        let mut session = Session::default();
        session
            .sign_in(&store, SessionUser::from_identifier("alice"))
            .unwrap();
        session.connect_wallet(&store, wallet()).unwrap();
        assert_eq!(store.len(), 2);

        session.sign_out(&store).unwrap();
        assert!(store.is_empty());
        assert_eq!(session, Session::default());
    }

    #[test]
    fn test_wallet_requires_user() {
        let store = MemoryStore::new();
        let mut session = Session::default();
        assert!(session.connect_wallet(&store, wallet()).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_corrupt_values_are_ignored() {
        let store = MemoryStore::new();
        store.write(USER_KEY, "{not json").unwrap();
        store.write(WALLET_KEY, r#"{"type":"metamask"}"#).unwrap();
        assert_eq!(Session::load(&store), Session::default());
    }

    #[test]
    fn test_failed_write_keeps_session_unchanged() {
        let mut session = Session::default();
        let err = session
            .sign_in(&BrokenStore, SessionUser::from_identifier("alice"))
            .unwrap_err();
        assert_eq!(err, MarketError::Storage("quota exceeded".to_string()));
        assert!(!session.is_signed_in());
        assert_eq!(Session::load(&BrokenStore), Session::default());
    }
}
