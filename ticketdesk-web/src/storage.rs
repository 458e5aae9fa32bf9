//! Persistence for the bearer token.
//!
//! The token lives in a single slot shared by the whole page. Every reader
//! (session restore, each API call) looks it up at the moment it needs it.

#[cfg(test)]
use std::cell::RefCell;
use std::{fmt, rc::Rc};

use gloo_storage::{LocalStorage, Storage};

/// Local storage key holding the raw bearer token.
pub const TOKEN_KEY: &str = "token";

/// A single persisted token slot.
pub trait TokenStore: fmt::Debug {
    /// Current token, if one is stored.
    fn get(&self) -> Option<String>;
    /// Replace the stored token.
    fn set(&self, token: &str);
    /// Clear the slot. Removing an absent token is a no-op.
    fn remove(&self);
}

/// Shared handle to the page's token slot.
pub type SharedTokenStore = Rc<dyn TokenStore>;

/// Browser `localStorage` under [`TOKEN_KEY`].
///
/// The value is stored verbatim (not JSON-encoded) so tokens written by
/// other clients of the same origin are read back unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn get(&self) -> Option<String> {
        match LocalStorage::raw().get_item(TOKEN_KEY) {
            Ok(token) => token,
            Err(err) => {
                tracing::error!(error = ?err, "unable to read token from local storage");
                None
            }
        }
    }

    fn set(&self, token: &str) {
        if let Err(err) = LocalStorage::raw().set_item(TOKEN_KEY, token) {
            tracing::error!(error = ?err, "unable to persist token");
        }
    }

    fn remove(&self) {
        LocalStorage::delete(TOKEN_KEY);
    }
}

/// In-memory slot standing in for browser storage under test.
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct MemoryTokenStore {
    slot: Rc<RefCell<Option<String>>>,
}

#[cfg(test)]
impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `token`.
    pub fn with_token(token: impl Into<String>) -> Self {
        let store = Self::new();
        *store.slot.borrow_mut() = Some(token.into());
        store
    }
}

#[cfg(test)]
impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn set(&self, token: &str) {
        *self.slot.borrow_mut() = Some(token.to_string());
    }

    fn remove(&self) {
        self.slot.borrow_mut().take();
    }
}
