use std::rc::Rc;

use yew::prelude::*;

use crate::session::{Session, SessionAction, SessionStore};
use crate::storage::SharedTokenStore;

/// Handle to the page's [`SessionStore`], shared through Yew context.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionContext {
    store: UseReducerHandle<SessionStore>,
}

impl SessionContext {
    pub fn session(&self) -> &Session {
        self.store.current()
    }

    pub fn login(&self, token: impl Into<String>, role: impl Into<String>) {
        self.store.dispatch(SessionAction::Login {
            token: token.into(),
            role: role.into(),
        });
    }

    pub fn logout(&self) {
        self.store.dispatch(SessionAction::Logout);
    }
}

#[derive(Properties)]
pub struct SessionProviderProps {
    pub tokens: SharedTokenStore,
    #[prop_or_default]
    pub children: Children,
}

impl PartialEq for SessionProviderProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.tokens, &other.tokens) && self.children == other.children
    }
}

/// Builds the session store on first mount, restoring any persisted token,
/// and exposes it to descendants.
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let tokens = Rc::clone(&props.tokens);
    let store = use_reducer(move || {
        let mut store = SessionStore::new(tokens);
        store.initialize();
        store
    });
    let context = SessionContext { store };

    html! {
        <ContextProvider<SessionContext> {context}>
            { props.children.clone() }
        </ContextProvider<SessionContext>>
    }
}

/// The session context. Components using this must sit below
/// [`SessionProvider`].
#[hook]
pub fn use_session() -> Option<SessionContext> {
    use_context::<SessionContext>()
}
