use std::rc::Rc;

use shared::models::{TicketId, TicketStatus};
use yew::{Callback, Html, Properties, function_component, html};

use crate::components::ticket_row::TicketRow;
use crate::models::board::BoardState;

#[derive(Properties, PartialEq)]
pub struct TicketTableProps {
    pub board: Rc<BoardState>,
    pub on_status_change: Callback<(TicketId, TicketStatus)>,
    pub on_toggle_respond: Callback<TicketId>,
    pub on_response_input: Callback<String>,
    pub on_submit_response: Callback<TicketId>,
    pub on_forward: Callback<TicketId>,
}

/// The ticket list in server order, or a placeholder when it is empty.
///
/// An empty list looks the same whether nothing has loaded yet, loading
/// failed, or the server has no tickets.
#[function_component(TicketTable)]
pub fn ticket_table(props: &TicketTableProps) -> Html {
    let board = &props.board;
    if board.tickets.is_empty() {
        return html! { <p>{"No inquiries found"}</p> };
    }

    html! {
        <table>
            <thead>
                <tr>
                    <th>{"Title"}</th>
                    <th>{"Description"}</th>
                    <th>{"Status"}</th>
                    <th>{"Created By"}</th>
                    <th>{"Action"}</th>
                </tr>
            </thead>
            <tbody>
                { for board.tickets.iter().map(|ticket| {
                    let responding = board.is_responding(&ticket.id);
                    html! {
                        <TicketRow
                            key={ticket.id.clone()}
                            ticket={ticket.clone()}
                            status={board.displayed_status(ticket)}
                            {responding}
                            response_text={if responding { board.response_text.clone() } else { String::new() }}
                            on_status_change={props.on_status_change.clone()}
                            on_toggle_respond={props.on_toggle_respond.clone()}
                            on_response_input={props.on_response_input.clone()}
                            on_submit_response={props.on_submit_response.clone()}
                            on_forward={props.on_forward.clone()}
                        />
                    }
                })}
            </tbody>
        </table>
    }
}
