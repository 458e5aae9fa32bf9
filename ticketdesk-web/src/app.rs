use std::rc::Rc;

use shared::models::LoginResponse;
use yew::prelude::*;

use crate::api::TicketDeskClient;
use crate::config::WebConfig;
use crate::containers::header::Header;
use crate::models::session_context::{SessionProvider, use_session};
use crate::pages::{LoginPage, TicketBoardPage};
use crate::storage::{BrowserTokenStore, SharedTokenStore};

#[derive(Properties)]
pub struct AppProps {
    #[prop_or_else(browser_tokens)]
    pub tokens: SharedTokenStore,
    #[prop_or_default]
    pub config: WebConfig,
}

fn browser_tokens() -> SharedTokenStore {
    Rc::new(BrowserTokenStore)
}

impl PartialEq for AppProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.tokens, &other.tokens) && self.config == other.config
    }
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let api = {
        let tokens = Rc::clone(&props.tokens);
        use_memo(props.config.clone(), move |config| {
            TicketDeskClient::new(config.api_base_url(), tokens)
        })
    };

    html! {
        <SessionProvider tokens={Rc::clone(&props.tokens)}>
            <AppContent {api} />
        </SessionProvider>
    }
}

#[derive(Properties, PartialEq)]
struct AppContentProps {
    api: Rc<TicketDeskClient>,
}

/// Picks the screen for the current session.
#[function_component(AppContent)]
fn app_content(props: &AppContentProps) -> Html {
    let Some(session) = use_session() else {
        tracing::error!("session context missing");
        return Html::default();
    };
    let api = Rc::clone(&props.api);

    if session.session().is_authenticated {
        html! {
            <>
                <Header />
                <TicketBoardPage {api} />
            </>
        }
    } else {
        let on_success = Callback::from(move |login: LoginResponse| {
            let LoginResponse { token, role } = login;
            session.login(token, role);
        });
        html! { <LoginPage {api} {on_success} /> }
    }
}
