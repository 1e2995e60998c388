// crates/board-app/src/lib.rs
// ProjectBoard - Leptos WASM frontend (CSR)

use leptos::prelude::*;
use leptos_meta::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use board_core::{BoardConfig, BoardError, ProjectStatus, ProjectStore};

mod components;
mod dnd;

pub use components::{InputForm, ItemView, ListView};
pub use dnd::BrowserTransfer;

/// Id of the optional `<script type="application/json">` block holding a BoardConfig
const CONFIG_ELEMENT_ID: &str = "board-config";

// ============================================================================
// Board State (via Context)
// ============================================================================

/// Handles shared by every component. The store is not `Send`, so it lives in
/// local storage; both handles are `Copy` and safe to move into event closures.
#[derive(Clone, Copy)]
pub struct BoardState {
    pub store: StoredValue<ProjectStore, LocalStorage>,
    pub config: StoredValue<BoardConfig>,
}

fn provide_board_context(config: BoardConfig) -> BoardState {
    let state = BoardState {
        store: StoredValue::new_local(ProjectStore::new()),
        config: StoredValue::new(config),
    };
    provide_context(state);
    state
}

pub fn use_board() -> BoardState {
    expect_context::<BoardState>()
}

// ============================================================================
// WASM Entry Point
// ============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    // Set up better panic messages
    console_error_panic_hook::set_once();

    let loaded = load_config();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    _ = console_log::init_with_level(config.log_level());

    if let Err(e) = &loaded {
        log::warn!("Ignoring board config: {}", e);
    }
    log::info!("ProjectBoard starting...");

    if let Err(e) = mount(config) {
        log::error!("Failed to mount ProjectBoard: {}", e);
    }
}

/// Read the embedded config block, defaulting when the page has none
fn load_config() -> Result<BoardConfig, BoardError> {
    let json = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match json {
        Some(json) if !json.trim().is_empty() => BoardConfig::from_json(&json),
        _ => Ok(BoardConfig::default()),
    }
}

/// Attach the app to the configured host element, once, for the life of the page
fn mount(config: BoardConfig) -> Result<(), BoardError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| BoardError::Dom("no document".to_string()))?;

    let host = document
        .get_element_by_id(&config.mount_id)
        .ok_or_else(|| BoardError::MissingElement(config.mount_id.clone()))?
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| BoardError::Dom(format!("#{} is not an HTML element", config.mount_id)))?;

    leptos::mount::mount_to(host, move || view! { <App config=config/> }).forget();
    Ok(())
}

/// Show a blocking browser alert
pub(crate) fn alert(message: &str) {
    match web_sys::window() {
        Some(window) => {
            if let Err(e) = window.alert_with_message(message) {
                log::error!("alert failed: {:?}", e);
            }
        }
        None => log::error!("No window to alert on: {}", message),
    }
}

// ============================================================================
// App Root
// ============================================================================

#[component]
pub fn App(config: BoardConfig) -> impl IntoView {
    provide_meta_context();
    provide_board_context(config);

    view! {
        <Title text="ProjectBoard"/>
        <InputForm/>
        <ListView status=ProjectStatus::Active/>
        <ListView status=ProjectStatus::Finished/>
    }
}
