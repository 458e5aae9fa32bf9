//! Authentication state for the lifetime of the page.
//!
//! [`SessionStore`] is the only writer of both the in-memory [`Session`] and
//! the persisted token slot. It is constructed once by the session provider
//! and handed to components through context.

use std::rc::Rc;

use shared::models::decode_token_claims;
use yew::Reducible;

use crate::storage::SharedTokenStore;

/// Who is signed in. `user_role` and `user_id` only carry meaning while
/// `is_authenticated` is true.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub is_authenticated: bool,
    pub user_role: Option<String>,
    pub user_id: Option<String>,
}

impl Session {
    /// The cleared state.
    #[must_use]
    pub fn signed_out() -> Self {
        Self::default()
    }
}

/// Owner of the session and the token slot behind it.
#[derive(Debug, Clone)]
pub struct SessionStore {
    tokens: SharedTokenStore,
    session: Session,
}

impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.tokens, &other.tokens) && self.session == other.session
    }
}

impl SessionStore {
    /// A signed-out store over `tokens`. Call [`SessionStore::initialize`]
    /// to pick up a previously persisted token.
    pub fn new(tokens: SharedTokenStore) -> Self {
        Self {
            tokens,
            session: Session::signed_out(),
        }
    }

    /// Restore the session from the persisted token.
    ///
    /// An empty slot value counts as no token and is left in place. A token
    /// whose payload cannot be decoded is treated as a corrupted session:
    /// the store is logged out and the token removed.
    pub fn initialize(&mut self) {
        let Some(token) = self.tokens.get().filter(|token| !token.is_empty()) else {
            return;
        };

        self.session.is_authenticated = true;
        match decode_token_claims(&token) {
            Ok(claims) => {
                self.session.user_role = claims.role;
                self.session.user_id = claims.user_id;
                tracing::debug!(role = ?self.session.user_role, "session restored from stored token");
            }
            Err(err) => {
                tracing::error!(error = %err, "error parsing token");
                self.logout();
            }
        }
    }

    /// Persist `token` and mark the session as signed in with `role`.
    ///
    /// The user id is left unset here even though the token carries one;
    /// only [`SessionStore::initialize`] decodes it.
    pub fn login(&mut self, token: &str, role: &str) {
        self.tokens.set(token);
        self.session = Session {
            is_authenticated: true,
            user_role: Some(role.to_string()),
            user_id: None,
        };
        tracing::info!(role, "signed in");
    }

    /// Drop the persisted token and clear the session.
    pub fn logout(&mut self) {
        self.tokens.remove();
        self.session = Session::signed_out();
    }

    pub fn current(&self) -> &Session {
        &self.session
    }
}

/// Mutations accepted by the reducer-backed store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    Login { token: String, role: String },
    Logout,
}

impl Reducible for SessionStore {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            SessionAction::Login { token, role } => next.login(&token, &role),
            SessionAction::Logout => next.logout(),
        }
        Rc::new(next)
    }
}
