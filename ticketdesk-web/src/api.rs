use std::rc::Rc;

use reqwest::{Client, RequestBuilder, Response, StatusCode, header::CONTENT_TYPE};
use shared::models::{
    ForwardTicketRequest, LoginRequest, LoginResponse, Ticket, UpdateTicketRequest,
};
use thiserror::Error;

use crate::storage::SharedTokenStore;

/// Failure of a single backend call.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// Non-success status, with whatever body text came back.
    #[error("server responded with {status}: {reason}")]
    Status { status: StatusCode, reason: String },

    #[error("unreadable response body: {0}")]
    Decode(#[source] reqwest::Error),
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(err) | Self::Decode(err) => err.status(),
        }
    }
}

/// Ticket endpoints consumed by the board.
#[allow(async_fn_in_trait)]
pub trait TicketApi {
    /// `GET /tickets`: every ticket visible to the caller, in server order.
    async fn list_tickets(&self) -> Result<Vec<Ticket>, ApiError>;

    /// `PUT /tickets/{id}` with a status change and an optional response.
    async fn update_ticket(&self, id: &str, request: &UpdateTicketRequest)
    -> Result<(), ApiError>;

    /// `PUT /tickets/{id}/forward`: flag the ticket for the admin queue.
    async fn forward_ticket(&self, id: &str) -> Result<(), ApiError>;
}

/// HTTP client for the TicketDesk REST API.
///
/// The bearer token is read from the token store on every call, so a
/// request started before a logout still carries the old token.
#[derive(Clone, Debug)]
pub struct TicketDeskClient {
    base_url: String,
    client: Client,
    tokens: SharedTokenStore,
}

impl PartialEq for TicketDeskClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && Rc::ptr_eq(&self.tokens, &other.tokens)
    }
}

impl TicketDeskClient {
    pub fn new(base_url: &str, tokens: SharedTokenStore) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            tokens,
        }
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Attach the JSON content type and, when a token is stored right now,
    /// the bearer header.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request.header(CONTENT_TYPE, "application/json");
        match self.tokens.get() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    pub(crate) fn list_request(&self) -> RequestBuilder {
        self.authorize(self.client.get(self.api_url("tickets")))
    }

    pub(crate) fn update_request(&self, id: &str, body: &UpdateTicketRequest) -> RequestBuilder {
        let url = self.api_url(&format!("tickets/{id}"));
        self.authorize(self.client.put(url).json(body))
    }

    pub(crate) fn forward_request(&self, id: &str) -> RequestBuilder {
        let url = self.api_url(&format!("tickets/{id}/forward"));
        self.authorize(self.client.put(url).json(&ForwardTicketRequest::default()))
    }

    pub(crate) fn login_request(&self, credentials: &LoginRequest) -> RequestBuilder {
        self.authorize(self.client.post(self.api_url("auth/login")).json(credentials))
    }

    async fn send(request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(ApiError::Transport)?;
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            // The body usually carries the server's error message.
            let reason = response.text().await.unwrap_or_default();
            Err(ApiError::Status { status, reason })
        }
    }

    /// Exchange credentials for a bearer token and role.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response = Self::send(self.login_request(credentials)).await?;
        response.json().await.map_err(ApiError::Decode)
    }
}

impl TicketApi for TicketDeskClient {
    async fn list_tickets(&self) -> Result<Vec<Ticket>, ApiError> {
        let response = Self::send(self.list_request()).await?;
        response.json().await.map_err(ApiError::Decode)
    }

    async fn update_ticket(
        &self,
        id: &str,
        request: &UpdateTicketRequest,
    ) -> Result<(), ApiError> {
        Self::send(self.update_request(id, request)).await?;
        Ok(())
    }

    async fn forward_ticket(&self, id: &str) -> Result<(), ApiError> {
        Self::send(self.forward_request(id)).await?;
        Ok(())
    }
}
