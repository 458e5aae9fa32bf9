//! Tests for the ticket board flows
//!
//! Drives each flow against an in-memory backend and checks both the
//! requests issued and the resulting board state.

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use futures::channel::oneshot;
    use futures::executor::block_on;
    use futures::future::join;
    use reqwest::StatusCode;
    use serde_json::json;
    use shared::models::{Ticket, TicketId, TicketStatus, UpdateTicketRequest};

    use crate::api::{ApiError, TicketApi};
    use crate::flows::{self, BoardSink};
    use crate::models::board::tests::ticket;
    use crate::models::board::{BoardAction, BoardState};

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        List,
        Update(TicketId, UpdateTicketRequest),
        Forward(TicketId),
    }

    #[derive(Default)]
    struct FakeBackend {
        tickets: RefCell<Vec<Ticket>>,
        fail_list: Cell<bool>,
        fail_update: Cell<bool>,
        fail_forward: Cell<bool>,
        calls: RefCell<Vec<Call>>,
    }

    impl FakeBackend {
        fn with(tickets: Vec<Ticket>) -> Self {
            Self {
                tickets: RefCell::new(tickets),
                ..Self::default()
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        fn server_error() -> ApiError {
            ApiError::Status {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                reason: "boom".to_string(),
            }
        }
    }

    impl TicketApi for FakeBackend {
        async fn list_tickets(&self) -> Result<Vec<Ticket>, ApiError> {
            self.calls.borrow_mut().push(Call::List);
            if self.fail_list.get() {
                return Err(Self::server_error());
            }
            Ok(self.tickets.borrow().clone())
        }

        async fn update_ticket(
            &self,
            id: &str,
            request: &UpdateTicketRequest,
        ) -> Result<(), ApiError> {
            self.calls
                .borrow_mut()
                .push(Call::Update(id.to_string(), request.clone()));
            if self.fail_update.get() {
                return Err(Self::server_error());
            }
            for ticket in self.tickets.borrow_mut().iter_mut().filter(|t| t.id == id) {
                ticket.status = request.status;
                if let Some(response) = &request.response {
                    ticket.response = Some(response.clone());
                }
            }
            Ok(())
        }

        async fn forward_ticket(&self, id: &str) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(Call::Forward(id.to_string()));
            if self.fail_forward.get() {
                return Err(Self::server_error());
            }
            for ticket in self.tickets.borrow_mut().iter_mut().filter(|t| t.id == id) {
                ticket.forward_to_admin = true;
            }
            Ok(())
        }
    }

    impl BoardSink for RefCell<BoardState> {
        fn apply(&self, action: BoardAction) {
            self.borrow_mut().apply(action);
        }
    }

    fn loaded_board(api: &FakeBackend) -> RefCell<BoardState> {
        let board = RefCell::new(BoardState::default());
        assert!(block_on(flows::refresh(api, &board)));
        api.calls.borrow_mut().clear();
        board
    }

    #[test]
    fn refresh_replaces_tickets_with_server_list() {
        let api = FakeBackend::with(vec![ticket("a", TicketStatus::Open)]);
        let board = loaded_board(&api);
        assert_eq!(board.borrow().tickets.len(), 1);

        *api.tickets.borrow_mut() = Vec::new();
        assert!(block_on(flows::refresh(&api, &board)));
        assert!(board.borrow().tickets.is_empty());
    }

    #[test]
    fn failed_refresh_keeps_previous_list() {
        let api = FakeBackend::with(vec![ticket("a", TicketStatus::Open)]);
        let board = loaded_board(&api);
        api.fail_list.set(true);
        assert!(!block_on(flows::refresh(&api, &board)));
        assert_eq!(board.borrow().tickets.len(), 1);
    }

    #[test]
    fn status_change_refetches_and_settles() {
        let api = FakeBackend::with(vec![ticket("a", TicketStatus::Open)]);
        let board = loaded_board(&api);

        block_on(flows::change_status(
            &api,
            &board,
            "a".to_string(),
            TicketStatus::Closed,
        ));

        assert_eq!(
            api.calls(),
            vec![
                Call::Update(
                    "a".to_string(),
                    UpdateTicketRequest::status(TicketStatus::Closed)
                ),
                Call::List,
            ]
        );
        let board = board.borrow();
        assert_eq!(board.tickets[0].status, TicketStatus::Closed);
        assert!(board.pending_status.is_empty());
        assert_eq!(board.displayed_status(&board.tickets[0]), TicketStatus::Closed);
    }

    #[test]
    fn rejected_status_change_is_not_rolled_back() {
        let api = FakeBackend::with(vec![ticket("a", TicketStatus::Open)]);
        let board = loaded_board(&api);
        api.fail_update.set(true);

        block_on(flows::change_status(
            &api,
            &board,
            "a".to_string(),
            TicketStatus::Closed,
        ));

        assert_eq!(api.calls().len(), 1, "no refetch after a failed update");
        let board = board.borrow();
        assert_eq!(board.tickets[0].status, TicketStatus::Open);
        assert_eq!(board.displayed_status(&board.tickets[0]), TicketStatus::Closed);
    }

    #[test]
    fn status_change_with_failed_refetch_keeps_pick() {
        let api = FakeBackend::with(vec![ticket("a", TicketStatus::Open)]);
        let board = loaded_board(&api);
        api.fail_list.set(true);

        block_on(flows::change_status(
            &api,
            &board,
            "a".to_string(),
            TicketStatus::InProgress,
        ));

        let board = board.borrow();
        assert_eq!(
            board.pending_status.get("a"),
            Some(&TicketStatus::InProgress)
        );
    }

    #[test]
    fn response_uses_server_status_when_nothing_was_picked() {
        let api = FakeBackend::with(vec![ticket("a", TicketStatus::Open)]);
        let board = loaded_board(&api);
        board.apply(BoardAction::ToggleRespond("a".to_string()));
        board.apply(BoardAction::ResponseEdited("Please try restarting".to_string()));

        let (text, status) = {
            let state = board.borrow();
            (state.response_text.clone(), state.resolve_response_status("a"))
        };
        block_on(flows::submit_response(&api, &board, "a".to_string(), text, status));

        let calls = api.calls();
        let Call::Update(id, body) = &calls[0] else {
            panic!("expected an update call");
        };
        assert_eq!(id, "a");
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({ "response": "Please try restarting", "status": "Open" })
        );
        assert_eq!(calls[1], Call::List);

        let board = board.borrow();
        assert_eq!(board.active_ticket, None);
        assert_eq!(
            board.tickets[0].response.as_deref(),
            Some("Please try restarting")
        );
    }

    #[test]
    fn failed_response_leaves_box_open_with_text() {
        let api = FakeBackend::with(vec![ticket("a", TicketStatus::Open)]);
        let board = loaded_board(&api);
        api.fail_update.set(true);
        board.apply(BoardAction::ToggleRespond("a".to_string()));
        board.apply(BoardAction::ResponseEdited("On it".to_string()));

        block_on(flows::submit_response(
            &api,
            &board,
            "a".to_string(),
            "On it".to_string(),
            TicketStatus::InProgress,
        ));

        let board = board.borrow();
        assert!(board.is_responding("a"));
        assert_eq!(board.response_text, "On it");
        assert_eq!(api.calls().len(), 1);
    }

    #[test]
    fn empty_response_is_still_sent() {
        let api = FakeBackend::with(vec![ticket("a", TicketStatus::Closed)]);
        let board = loaded_board(&api);

        block_on(flows::submit_response(
            &api,
            &board,
            "a".to_string(),
            String::new(),
            TicketStatus::Closed,
        ));

        assert_eq!(
            api.calls()[0],
            Call::Update("a".to_string(), UpdateTicketRequest::respond("", TicketStatus::Closed))
        );
    }

    #[test]
    fn forward_shows_popup_and_refetches() {
        let api = FakeBackend::with(vec![ticket("a", TicketStatus::Open)]);
        let board = loaded_board(&api);

        block_on(flows::forward(&api, &board, "a".to_string()));

        assert_eq!(api.calls(), vec![Call::Forward("a".to_string()), Call::List]);
        assert!(board.borrow().show_popup);
        assert!(board.borrow().tickets[0].forward_to_admin);

        board.apply(BoardAction::ClosePopup);
        block_on(flows::refresh(&api, &board));
        assert!(!board.borrow().show_popup);
    }

    #[test]
    fn failed_forward_shows_nothing() {
        let api = FakeBackend::with(vec![ticket("a", TicketStatus::Open)]);
        let board = loaded_board(&api);
        api.fail_forward.set(true);

        block_on(flows::forward(&api, &board, "a".to_string()));

        assert_eq!(api.calls(), vec![Call::Forward("a".to_string())]);
        assert!(!board.borrow().show_popup);
        assert!(!board.borrow().tickets[0].forward_to_admin);
    }

    /// Backend whose list responses are released by the test, in any order.
    struct HeldLists {
        queued: RefCell<Vec<oneshot::Receiver<Vec<Ticket>>>>,
    }

    impl TicketApi for HeldLists {
        async fn list_tickets(&self) -> Result<Vec<Ticket>, ApiError> {
            let held = self.queued.borrow_mut().remove(0);
            held.await.map_err(|_| FakeBackend::server_error())
        }

        async fn update_ticket(&self, _: &str, _: &UpdateTicketRequest) -> Result<(), ApiError> {
            Ok(())
        }

        async fn forward_ticket(&self, _: &str) -> Result<(), ApiError> {
            Ok(())
        }
    }

    #[test]
    fn refetch_landing_last_wins_even_if_issued_first() {
        let (release_older, older) = oneshot::channel();
        let (release_newer, newer) = oneshot::channel();
        let api = HeldLists {
            queued: RefCell::new(vec![older, newer]),
        };
        let board = RefCell::new(BoardState::default());

        release_newer
            .send(vec![ticket("a", TicketStatus::Closed)])
            .unwrap();
        let (first, second) = block_on(join(flows::refresh(&api, &board), async {
            let loaded = flows::refresh(&api, &board).await;
            // The newer snapshot has been applied; now let the older one land.
            assert_eq!(board.borrow().tickets[0].status, TicketStatus::Closed);
            release_older
                .send(vec![
                    ticket("a", TicketStatus::Open),
                    ticket("b", TicketStatus::Open),
                ])
                .unwrap();
            loaded
        }));

        assert!(first && second);
        let board = board.borrow();
        assert_eq!(board.tickets.len(), 2);
        assert_eq!(board.tickets[0].status, TicketStatus::Open);
    }
}
