// crates/board-app/src/components/input_form.rs
// Project input form

use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;

use board_core::FormInput;

use crate::{alert, use_board};

#[component]
pub fn InputForm() -> impl IntoView {
    let board = use_board();
    let title_ref = NodeRef::<html::Input>::new();
    let description_ref = NodeRef::<html::Textarea>::new();
    let people_ref = NodeRef::<html::Input>::new();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let (Some(title), Some(description), Some(people)) =
            (title_ref.get(), description_ref.get(), people_ref.get())
        else {
            log::error!("Project form submitted before its inputs were mounted");
            return;
        };

        let input = FormInput::new(title.value(), description.value(), people.value());
        let rules = board.config.with_value(|c| c.form.clone());

        match board.store.try_update_value(|store| input.submit(&rules, store)) {
            Some(Ok(id)) => {
                log::debug!("Submitted project {}", id);
                title.set_value("");
                description.set_value("");
                people.set_value("");
            }
            Some(Err(e)) if e.is_user_error() => {
                log::info!("Project submission rejected: {}", e);
                alert(&board.config.with_value(|c| c.invalid_input_message.clone()));
            }
            Some(Err(e)) => log::error!("Project submission failed: {}", e),
            None => log::error!("Project store is no longer available"),
        }
    };

    // No native constraint checks: every rule runs in FormInput::submit so failures reach the alert
    view! {
        <form id="user-input" novalidate=true on:submit=on_submit>
            <div class="form-control">
                <label for="title">"Title"</label>
                <input type="text" id="title" node_ref=title_ref/>
            </div>
            <div class="form-control">
                <label for="description">"Description"</label>
                <textarea id="description" rows="3" node_ref=description_ref></textarea>
            </div>
            <div class="form-control">
                <label for="people">"People"</label>
                <input type="number" id="people" node_ref=people_ref/>
            </div>
            <button type="submit">"ADD PROJECT"</button>
        </form>
    }
}
