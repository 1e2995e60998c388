// crates/board-app/src/components/list_view.rs
// One board column: subscribes to the store and accepts dropped projects

use leptos::ev::DragEvent;
use leptos::prelude::*;

use board_core::{DragTarget, DropZone, ProjectList, ProjectStatus};

use crate::components::ItemView;
use crate::dnd::BrowserTransfer;
use crate::use_board;

#[component]
pub fn ListView(status: ProjectStatus) -> impl IntoView {
    let board = use_board();
    let (list, set_list) = signal(ProjectList::new(status));
    let zone = StoredValue::new(DropZone::new(status));
    let (droppable, set_droppable) = signal(false);

    let (heading, element_id, list_id) =
        list.with_untracked(|l| (l.heading(), l.element_id(), l.list_id()));

    // Every store mutation replaces this column's projects wholesale
    board.store.update_value(|store| {
        store.subscribe(move |snapshot| set_list.update(|l| l.assign(&snapshot)));
    });

    let sync_marking = move || {
        let marked = zone.with_value(|z| z.is_droppable());
        if droppable.get_untracked() != marked {
            set_droppable.set(marked);
        }
    };

    let on_drag_over = move |ev: DragEvent| {
        let Some(transfer) = BrowserTransfer::from_event(&ev) else {
            return;
        };
        let accepted = zone
            .try_update_value(|z| z.drag_over(&transfer))
            .unwrap_or(false);
        if accepted {
            ev.prevent_default();
        }
        sync_marking();
    };

    let on_drag_leave = move |_: DragEvent| {
        zone.update_value(|z| z.drag_leave());
        sync_marking();
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        if let Some(transfer) = BrowserTransfer::from_event(&ev) {
            board.store.update_value(|store| {
                zone.update_value(|z| {
                    z.accept_drop(&transfer, store);
                });
            });
        }
        sync_marking();
    };

    view! {
        <section
            class="projects"
            id=element_id
            on:dragover=on_drag_over
            on:dragleave=on_drag_leave
            on:drop=on_drop
        >
            <header>
                <h2>{heading}</h2>
            </header>
            <ul id=list_id class:droppable=move || droppable.get()>
                {move || {
                    list.with(|l| {
                        l.projects()
                            .iter()
                            .cloned()
                            .map(|project| view! { <ItemView project=project/> })
                            .collect_view()
                    })
                }}
            </ul>
        </section>
    }
}
