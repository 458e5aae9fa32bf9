//! View state of the ticket board.
//!
//! The ticket list is always the last snapshot returned by the server. The
//! other fields are local overlays that live only as long as the board.

use std::{collections::HashMap, rc::Rc};

use shared::models::{Ticket, TicketId, TicketStatus};
use yew::Reducible;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardState {
    pub tickets: Vec<Ticket>,
    /// Status picks shown in the dropdown ahead of server confirmation.
    /// Failed updates leave their pick in place.
    pub pending_status: HashMap<TicketId, TicketStatus>,
    /// The ticket whose response box is open. At most one at a time.
    pub active_ticket: Option<TicketId>,
    pub response_text: String,
    pub show_popup: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardAction {
    /// A fresh server snapshot; replaces the list wholesale.
    TicketsLoaded(Vec<Ticket>),
    StatusPicked { id: TicketId, status: TicketStatus },
    /// The server applied `status` and the list was refetched.
    StatusSettled { id: TicketId, status: TicketStatus },
    ToggleRespond(TicketId),
    ResponseEdited(String),
    ResponseSent,
    Forwarded,
    ClosePopup,
}

impl BoardState {
    pub fn apply(&mut self, action: BoardAction) {
        match action {
            BoardAction::TicketsLoaded(tickets) => self.tickets = tickets,
            BoardAction::StatusPicked { id, status } => {
                self.pending_status.insert(id, status);
            }
            BoardAction::StatusSettled { id, status } => {
                if self.pending_status.get(&id) == Some(&status) {
                    self.pending_status.remove(&id);
                }
            }
            BoardAction::ToggleRespond(id) => {
                if self.active_ticket.as_ref() == Some(&id) {
                    self.active_ticket = None;
                } else {
                    self.active_ticket = Some(id);
                    self.response_text.clear();
                }
            }
            BoardAction::ResponseEdited(text) => self.response_text = text,
            BoardAction::ResponseSent => self.active_ticket = None,
            BoardAction::Forwarded => self.show_popup = true,
            BoardAction::ClosePopup => self.show_popup = false,
        }
    }

    pub fn ticket(&self, id: &str) -> Option<&Ticket> {
        self.tickets.iter().find(|ticket| ticket.id == id)
    }

    /// Status shown in a row's dropdown: the pending pick, else the server's.
    pub fn displayed_status(&self, ticket: &Ticket) -> TicketStatus {
        self.pending_status
            .get(&ticket.id)
            .copied()
            .unwrap_or(ticket.status)
    }

    /// Status sent alongside a response for `id`.
    pub fn resolve_response_status(&self, id: &str) -> TicketStatus {
        self.pending_status
            .get(id)
            .copied()
            .or_else(|| self.ticket(id).map(|ticket| ticket.status))
            .unwrap_or(TicketStatus::RESPONSE_DEFAULT)
    }

    pub fn is_responding(&self, id: &str) -> bool {
        self.active_ticket.as_deref() == Some(id)
    }
}

impl Reducible for BoardState {
    type Action = BoardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use shared::models::TicketAuthor;

    pub(crate) fn ticket(id: &str, status: TicketStatus) -> Ticket {
        Ticket {
            id: id.to_string(),
            title: format!("Ticket {id}"),
            description: "VPN drops every hour".to_string(),
            status,
            created_by: TicketAuthor {
                username: "alice".to_string(),
            },
            forward_to_admin: false,
            response: None,
        }
    }

    fn loaded(tickets: Vec<Ticket>) -> BoardState {
        let mut state = BoardState::default();
        state.apply(BoardAction::TicketsLoaded(tickets));
        state
    }

    #[test]
    fn snapshot_replaces_list() {
        let mut state = loaded(vec![ticket("a", TicketStatus::Open)]);
        state.apply(BoardAction::TicketsLoaded(vec![
            ticket("b", TicketStatus::Closed),
            ticket("c", TicketStatus::Open),
        ]));
        let ids: Vec<_> = state.tickets.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["b", "c"]);
    }

    #[test]
    fn pending_pick_overrides_displayed_status() {
        let mut state = loaded(vec![ticket("a", TicketStatus::Open)]);
        state.apply(BoardAction::StatusPicked {
            id: "a".to_string(),
            status: TicketStatus::Closed,
        });
        assert_eq!(state.displayed_status(&state.tickets[0]), TicketStatus::Closed);
        assert_eq!(state.tickets[0].status, TicketStatus::Open);
    }

    #[test]
    fn settling_drops_only_matching_pick() {
        let mut state = loaded(vec![ticket("a", TicketStatus::Closed)]);
        state.apply(BoardAction::StatusPicked {
            id: "a".to_string(),
            status: TicketStatus::Open,
        });
        state.apply(BoardAction::StatusSettled {
            id: "a".to_string(),
            status: TicketStatus::Closed,
        });
        assert_eq!(state.pending_status.get("a"), Some(&TicketStatus::Open));

        state.apply(BoardAction::StatusSettled {
            id: "a".to_string(),
            status: TicketStatus::Open,
        });
        assert!(state.pending_status.is_empty());
    }

    #[test]
    fn only_one_response_box_is_open() {
        let mut state = loaded(vec![
            ticket("a", TicketStatus::Open),
            ticket("b", TicketStatus::Open),
        ]);
        state.apply(BoardAction::ToggleRespond("a".to_string()));
        state.apply(BoardAction::ResponseEdited("draft for a".to_string()));
        state.apply(BoardAction::ToggleRespond("b".to_string()));

        assert!(!state.is_responding("a"));
        assert!(state.is_responding("b"));
        assert_eq!(state.response_text, "");
    }

    #[test]
    fn toggling_open_box_closes_it() {
        let mut state = loaded(vec![ticket("a", TicketStatus::Open)]);
        state.apply(BoardAction::ToggleRespond("a".to_string()));
        state.apply(BoardAction::ToggleRespond("a".to_string()));
        assert_eq!(state.active_ticket, None);
    }

    #[test]
    fn response_status_falls_back_in_order() {
        let mut state = loaded(vec![ticket("a", TicketStatus::Open)]);
        assert_eq!(state.resolve_response_status("a"), TicketStatus::Open);
        assert_eq!(
            state.resolve_response_status("missing"),
            TicketStatus::InProgress
        );
        state.apply(BoardAction::StatusPicked {
            id: "a".to_string(),
            status: TicketStatus::Closed,
        });
        assert_eq!(state.resolve_response_status("a"), TicketStatus::Closed);
    }

    #[test]
    fn popup_shows_until_closed() {
        let mut state = BoardState::default();
        state.apply(BoardAction::Forwarded);
        assert!(state.show_popup);
        state.apply(BoardAction::ClosePopup);
        assert!(!state.show_popup);
        state.apply(BoardAction::TicketsLoaded(Vec::new()));
        assert!(!state.show_popup);
    }
}
