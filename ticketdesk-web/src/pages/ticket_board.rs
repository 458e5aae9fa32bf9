use std::rc::Rc;

use shared::models::{TicketId, TicketStatus};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::TicketDeskClient;
use crate::components::{ForwardPopup, TicketTable};
use crate::flows;
use crate::models::board::{BoardAction, BoardState};

#[derive(Properties, PartialEq)]
pub struct TicketBoardPageProps {
    pub api: Rc<TicketDeskClient>,
}

/// Support dashboard listing every inquiry visible to the signed-in tech.
#[function_component(TicketBoardPage)]
pub fn ticket_board_page(props: &TicketBoardPageProps) -> Html {
    let board = use_reducer(BoardState::default);

    {
        let api = Rc::clone(&props.api);
        let dispatcher = board.dispatcher();
        use_effect_with((), move |_| {
            spawn_local(async move {
                flows::refresh(&*api, &dispatcher).await;
            });
            || ()
        });
    }

    let on_status_change = {
        let api = Rc::clone(&props.api);
        let dispatcher = board.dispatcher();
        Callback::from(move |(id, status): (TicketId, TicketStatus)| {
            let api = Rc::clone(&api);
            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                flows::change_status(&*api, &dispatcher, id, status).await;
            });
        })
    };

    let on_toggle_respond = {
        let dispatcher = board.dispatcher();
        Callback::from(move |id: TicketId| dispatcher.dispatch(BoardAction::ToggleRespond(id)))
    };

    let on_response_input = {
        let dispatcher = board.dispatcher();
        Callback::from(move |text: String| dispatcher.dispatch(BoardAction::ResponseEdited(text)))
    };

    let on_submit_response = {
        let api = Rc::clone(&props.api);
        let board = board.clone();
        Callback::from(move |id: TicketId| {
            let api = Rc::clone(&api);
            let dispatcher = board.dispatcher();
            let response = board.response_text.clone();
            let status = board.resolve_response_status(&id);
            spawn_local(async move {
                flows::submit_response(&*api, &dispatcher, id, response, status).await;
            });
        })
    };

    let on_forward = {
        let api = Rc::clone(&props.api);
        let dispatcher = board.dispatcher();
        Callback::from(move |id: TicketId| {
            let api = Rc::clone(&api);
            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                flows::forward(&*api, &dispatcher, id).await;
            });
        })
    };

    let on_close_popup = {
        let dispatcher = board.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(BoardAction::ClosePopup))
    };

    html! {
        <div>
            <div class="tech-header">
                <h1>{"Support Dashboard"}</h1>
            </div>
            <h2>{"All Inquiries"}</h2>

            if board.show_popup {
                <ForwardPopup on_close={on_close_popup} />
            }

            <TicketTable
                board={Rc::new((*board).clone())}
                {on_status_change}
                {on_toggle_respond}
                {on_response_input}
                {on_submit_response}
                {on_forward}
            />
        </div>
    }
}
