//! Ticket board mutation flows.
//!
//! Each flow issues its request, then on success refetches the full list
//! from the server. Failures are logged and otherwise dropped. Flows are
//! never cancelled; when two refetches race the last one to land wins.

use shared::models::{TicketId, TicketStatus, UpdateTicketRequest};
use yew::UseReducerDispatcher;

use crate::api::TicketApi;
use crate::models::board::{BoardAction, BoardState};

/// Receiver of board actions produced by the flows.
pub trait BoardSink {
    fn apply(&self, action: BoardAction);
}

impl BoardSink for UseReducerDispatcher<BoardState> {
    fn apply(&self, action: BoardAction) {
        self.dispatch(action);
    }
}

/// Replace the board's tickets with the server's current list. Returns
/// whether the list was loaded.
pub async fn refresh<A: TicketApi, S: BoardSink>(api: &A, sink: &S) -> bool {
    match api.list_tickets().await {
        Ok(tickets) => {
            tracing::debug!(count = tickets.len(), "tickets loaded");
            sink.apply(BoardAction::TicketsLoaded(tickets));
            true
        }
        Err(err) => {
            tracing::error!(error = %err, "error fetching tickets");
            false
        }
    }
}

/// Show `status` for ticket `id` right away, then ask the server to apply it.
///
/// A rejected update leaves the local pick on screen.
pub async fn change_status<A: TicketApi, S: BoardSink>(
    api: &A,
    sink: &S,
    id: TicketId,
    status: TicketStatus,
) {
    sink.apply(BoardAction::StatusPicked {
        id: id.clone(),
        status,
    });

    match api
        .update_ticket(&id, &UpdateTicketRequest::status(status))
        .await
    {
        Ok(()) => {
            if refresh(api, sink).await {
                sink.apply(BoardAction::StatusSettled { id, status });
            }
        }
        Err(err) => tracing::error!(ticket = %id, error = %err, "error updating status"),
    }
}

/// Send `response` for ticket `id` along with `status`. On success the
/// response box closes; on failure it stays open with its text.
pub async fn submit_response<A: TicketApi, S: BoardSink>(
    api: &A,
    sink: &S,
    id: TicketId,
    response: String,
    status: TicketStatus,
) {
    match api
        .update_ticket(&id, &UpdateTicketRequest::respond(response, status))
        .await
    {
        Ok(()) => {
            sink.apply(BoardAction::ResponseSent);
            refresh(api, sink).await;
        }
        Err(err) => tracing::error!(ticket = %id, error = %err, "error submitting response"),
    }
}

/// Flag ticket `id` for the admin queue and announce it with the popup.
pub async fn forward<A: TicketApi, S: BoardSink>(api: &A, sink: &S, id: TicketId) {
    match api.forward_ticket(&id).await {
        Ok(()) => {
            sink.apply(BoardAction::Forwarded);
            refresh(api, sink).await;
        }
        Err(err) => {
            tracing::error!(ticket = %id, error = %err, "error forwarding ticket to admin");
        }
    }
}
