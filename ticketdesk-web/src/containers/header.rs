use yew::prelude::*;

use crate::models::session_context::use_session;

/// Top bar with the signed-in role and a logout button.
#[function_component(Header)]
pub fn header() -> Html {
    let Some(session) = use_session() else {
        return Html::default();
    };

    let role = session
        .session()
        .user_role
        .clone()
        .unwrap_or_else(|| "unknown".to_string());

    let on_logout = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            tracing::info!("signing out");
            session.logout();
        })
    };

    html! {
        <header class="navbar">
            <span class="navbar-brand">{"TicketDesk"}</span>
            <span class="navbar-role">{ format!("Signed in as {role}") }</span>
            <button class="logout-btn" onclick={on_logout}>{"Logout"}</button>
        </header>
    }
}
