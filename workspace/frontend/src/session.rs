use std::ops::Deref;
use std::rc::Rc;

use common::session::{Session, SessionStore, SessionUser, WalletConnection};
use common::{MarketError, Result};
use web_sys::Storage;
use yew::prelude::*;

/// Browser localStorage behind the session store trait.
pub struct LocalStorageStore {
    storage: Option<Storage>,
}

impl LocalStorageStore {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage is unavailable, session changes will not persist");
        }
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage> {
        self.storage
            .as_ref()
            .ok_or_else(|| MarketError::Storage("localStorage is unavailable".to_string()))
    }
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new()
    }
}

fn js_error(key: &str, error: wasm_bindgen::JsValue) -> MarketError {
    MarketError::Storage(format!("{}: {:?}", key, error))
}

impl SessionStore for LocalStorageStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        self.storage()?.get_item(key).map_err(|e| js_error(key, e))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        log::trace!("Writing {} to localStorage", key);
        self.storage()?
            .set_item(key, value)
            .map_err(|e| js_error(key, e))
    }

    fn remove(&self, key: &str) -> Result<()> {
        log::trace!("Removing {} from localStorage", key);
        self.storage()?
            .remove_item(key)
            .map_err(|e| js_error(key, e))
    }
}

/// The current session plus write-through mutations.
///
/// Outside a provider this is a signed-out session whose mutations are
/// dropped.
#[derive(Clone, PartialEq, Default)]
pub struct SessionContext {
    session: Rc<Session>,
    replace: Callback<Session>,
}

impl Deref for SessionContext {
    type Target = Session;

    fn deref(&self) -> &Session {
        &self.session
    }
}

impl SessionContext {
    fn update(&self, change: impl FnOnce(&mut Session, &LocalStorageStore) -> Result<()>) -> Result<()> {
        let mut next = (*self.session).clone();
        change(&mut next, &LocalStorageStore::new())?;
        self.replace.emit(next);
        Ok(())
    }

    pub fn sign_in(&self, user: SessionUser) -> Result<()> {
        self.update(|session, store| session.sign_in(store, user))
    }

    pub fn connect_wallet(&self, wallet: WalletConnection) -> Result<()> {
        self.update(|session, store| session.connect_wallet(store, wallet))
    }

    pub fn sign_out(&self) -> Result<()> {
        self.update(|session, store| session.sign_out(store))
    }
}

#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

/// Loads the stored session once and shares it with the tree.
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_state(|| {
        let session = Session::load(&LocalStorageStore::new());
        log::info!(
            "Session loaded: user={:?}, wallet={}",
            session.username(),
            session.has_wallet()
        );
        session
    });

    let replace = {
        let session = session.clone();
        Callback::from(move |next: Session| session.set(next))
    };

    let context = SessionContext {
        session: Rc::new((*session).clone()),
        replace,
    };

    html! {
        <ContextProvider<SessionContext> context={context}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}
