use shared::models::{Ticket, TicketId, TicketStatus};
use strum::IntoEnumIterator;
use web_sys::{HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TicketRowProps {
    pub ticket: Ticket,
    /// Status shown in the dropdown, including any pending pick.
    pub status: TicketStatus,
    pub responding: bool,
    #[prop_or_default]
    pub response_text: String,
    pub on_status_change: Callback<(TicketId, TicketStatus)>,
    pub on_toggle_respond: Callback<TicketId>,
    pub on_response_input: Callback<String>,
    pub on_submit_response: Callback<TicketId>,
    pub on_forward: Callback<TicketId>,
}

#[function_component(TicketRow)]
pub fn ticket_row(props: &TicketRowProps) -> Html {
    let ticket = &props.ticket;

    let on_status_change = {
        let id = ticket.id.clone();
        let callback = props.on_status_change.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                match select.value().parse::<TicketStatus>() {
                    Ok(status) => callback.emit((id.clone(), status)),
                    Err(err) => {
                        tracing::warn!(value = %select.value(), error = err, "ignoring status");
                    }
                }
            }
        })
    };

    let on_toggle = {
        let id = ticket.id.clone();
        let callback = props.on_toggle_respond.clone();
        Callback::from(move |_: MouseEvent| callback.emit(id.clone()))
    };

    let on_input = {
        let callback = props.on_response_input.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(area) = event.target_dyn_into::<HtmlTextAreaElement>() {
                callback.emit(area.value());
            }
        })
    };

    let on_submit = {
        let id = ticket.id.clone();
        let callback = props.on_submit_response.clone();
        Callback::from(move |_: MouseEvent| callback.emit(id.clone()))
    };

    let on_forward = {
        let id = ticket.id.clone();
        let callback = props.on_forward.clone();
        Callback::from(move |_: MouseEvent| callback.emit(id.clone()))
    };

    let row_class = if ticket.forward_to_admin {
        "forwarded-ticket"
    } else {
        ""
    };

    html! {
        <tr class={row_class}>
            <td>{ ticket.title.clone() }</td>
            <td>{ ticket.description.clone() }</td>
            <td>
                <select class="status-dropdown" onchange={on_status_change}>
                    { for TicketStatus::iter().map(|status| html! {
                        <option value={status.as_str()} selected={status == props.status}>
                            { status.label() }
                        </option>
                    })}
                </select>
            </td>
            <td>{ ticket.created_by.username.clone() }</td>
            <td>
                <button class="respond-btn" onclick={on_toggle}>
                    { if props.responding { "Close" } else { "Respond" } }
                </button>
                if props.responding {
                    <div>
                        <textarea
                            value={props.response_text.clone()}
                            oninput={on_input}
                            placeholder="Write your response here"
                        />
                        <button class="submit-response-btn" onclick={on_submit}>
                            {"Submit Response"}
                        </button>
                    </div>
                }
                <button class="forward-btn" onclick={on_forward}>{"Forward to Admin"}</button>
            </td>
        </tr>
    }
}
