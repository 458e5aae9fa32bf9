use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ForwardPopupProps {
    pub on_close: Callback<MouseEvent>,
}

/// Confirmation shown after a ticket was forwarded. Stays until closed.
#[function_component(ForwardPopup)]
pub fn forward_popup(props: &ForwardPopupProps) -> Html {
    html! {
        <div class="popup">
            <div class="popup-content">
                <p>{"Ticket has been successfully forwarded to the Admin!"}</p>
                <button onclick={props.on_close.clone()}>{"Close"}</button>
            </div>
        </div>
    }
}
