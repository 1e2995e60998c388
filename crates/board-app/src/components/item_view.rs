// crates/board-app/src/components/item_view.rs
// A single project card; the drag source

use leptos::ev::DragEvent;
use leptos::prelude::*;

use board_core::{Draggable, Project, ProjectItem};

use crate::dnd::BrowserTransfer;

#[component]
pub fn ItemView(project: Project) -> impl IntoView {
    let item = ProjectItem::new(project);
    let id = item.project().id().to_string();
    let title = item.project().title().to_string();
    let description = item.project().description().to_string();
    let assigned = item.assigned();
    let item = StoredValue::new(item);

    let on_drag_start = move |ev: DragEvent| {
        let Some(mut transfer) = BrowserTransfer::from_event(&ev) else {
            log::warn!("Drag started without a data transfer");
            return;
        };
        if let Some(Err(e)) = item.try_with_value(|i| i.drag_start(&mut transfer)) {
            log::error!("Failed to start drag: {}", e);
        }
    };

    let on_drag_end = move |_: DragEvent| item.with_value(|i| i.drag_end());

    view! {
        <li id=id draggable="true" on:dragstart=on_drag_start on:dragend=on_drag_end>
            <h2>{title}</h2>
            <h3>{assigned}</h3>
            <p>{description}</p>
        </li>
    }
}
