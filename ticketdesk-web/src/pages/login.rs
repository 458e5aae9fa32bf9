use std::rc::Rc;

use reqwest::StatusCode;
use shared::models::{LoginRequest, LoginResponse};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::{ApiError, TicketDeskClient};

#[derive(Properties, PartialEq)]
pub struct LoginPageProps {
    pub api: Rc<TicketDeskClient>,
    pub on_success: Callback<LoginResponse>,
}

/// Where the sign-in attempt stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum SignIn {
    #[default]
    Idle,
    Pending,
    Rejected(String),
}

#[derive(Debug, Clone, Copy)]
enum Field {
    Email,
    Password,
}

/// Text shown under the form when the login call fails.
fn rejection_message(err: &ApiError) -> String {
    match err.status() {
        Some(StatusCode::UNAUTHORIZED | StatusCode::BAD_REQUEST) => {
            "Invalid email or password".to_string()
        }
        Some(status) => format!("Sign-in failed ({status})"),
        None => "Cannot reach the ticket service".to_string(),
    }
}

fn edit(credentials: &UseStateHandle<LoginRequest>, field: Field) -> Callback<InputEvent> {
    let credentials = credentials.clone();
    Callback::from(move |event: InputEvent| {
        let Some(input) = event.target_dyn_into::<HtmlInputElement>() else {
            return;
        };
        let mut next = (*credentials).clone();
        match field {
            Field::Email => next.email = input.value(),
            Field::Password => next.password = input.value(),
        }
        credentials.set(next);
    })
}

#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let credentials = use_state(|| LoginRequest {
        email: String::new(),
        password: String::new(),
    });
    let sign_in = use_state(SignIn::default);

    let onsubmit = {
        let credentials = credentials.clone();
        let sign_in = sign_in.clone();
        let api = Rc::clone(&props.api);
        let on_success = props.on_success.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            sign_in.set(SignIn::Pending);

            let api = Rc::clone(&api);
            let on_success = on_success.clone();
            let sign_in = sign_in.clone();
            let request = (*credentials).clone();
            spawn_local(async move {
                match api.login(&request).await {
                    Ok(response) => {
                        sign_in.set(SignIn::Idle);
                        on_success.emit(response);
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "login rejected");
                        sign_in.set(SignIn::Rejected(rejection_message(&err)));
                    }
                }
            });
        })
    };

    let pending = *sign_in == SignIn::Pending;
    let incomplete = credentials.email.is_empty() || credentials.password.is_empty();

    html! {
        <div class="login-container">
            <form class="login-form" {onsubmit}>
                <h2>{"Technician sign in"}</h2>
                if let SignIn::Rejected(message) = &*sign_in {
                    <div class="login-error">{message.clone()}</div>
                }
                <label for="email">{"Email"}</label>
                <input
                    id="email"
                    type="email"
                    required=true
                    value={credentials.email.clone()}
                    oninput={edit(&credentials, Field::Email)}
                />
                <label for="password">{"Password"}</label>
                <input
                    id="password"
                    type="password"
                    required=true
                    value={credentials.password.clone()}
                    oninput={edit(&credentials, Field::Password)}
                />
                <button type="submit" disabled={pending || incomplete}>
                    {if pending { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_error(status: StatusCode) -> ApiError {
        ApiError::Status {
            status,
            reason: String::new(),
        }
    }

    #[test]
    fn bad_credentials_get_a_plain_message() {
        for status in [StatusCode::UNAUTHORIZED, StatusCode::BAD_REQUEST] {
            assert_eq!(
                rejection_message(&status_error(status)),
                "Invalid email or password"
            );
        }
    }

    #[test]
    fn other_statuses_are_reported() {
        assert_eq!(
            rejection_message(&status_error(StatusCode::SERVICE_UNAVAILABLE)),
            "Sign-in failed (503 Service Unavailable)"
        );
    }
}
