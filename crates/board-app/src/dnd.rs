// crates/board-app/src/dnd.rs
// Browser DataTransfer behind the core drag protocol

use board_core::{BoardError, DragData, DragEffect, Result};
use web_sys::DataTransfer;

/// The drag context of a native `DragEvent`
pub struct BrowserTransfer(DataTransfer);

impl BrowserTransfer {
    pub fn new(transfer: DataTransfer) -> Self {
        Self(transfer)
    }

    /// Wrap the transfer attached to a drag event, if the browser gave us one
    pub fn from_event(ev: &web_sys::DragEvent) -> Option<Self> {
        ev.data_transfer().map(Self::new)
    }
}

impl DragData for BrowserTransfer {
    fn types(&self) -> Vec<String> {
        let types: js_sys::Array = self.0.types();
        types.iter().filter_map(|t| t.as_string()).collect()
    }

    // Only readable on drop; during dragover browsers hand back an empty string
    fn get_data(&self, format: &str) -> Option<String> {
        self.0.get_data(format).ok().filter(|s| !s.is_empty())
    }

    fn set_data(&mut self, format: &str, data: &str) -> Result<()> {
        self.0
            .set_data(format, data)
            .map_err(|e| BoardError::Dom(format!("{:?}", e)))
    }

    fn set_effect_allowed(&mut self, effect: DragEffect) {
        self.0.set_effect_allowed(effect.as_str());
    }
}
