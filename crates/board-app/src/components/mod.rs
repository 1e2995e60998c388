// crates/board-app/src/components/mod.rs
// Board components: the input form, the two columns and their items

mod input_form;
mod item_view;
mod list_view;

pub use input_form::InputForm;
pub use item_view::ItemView;
pub use list_view::ListView;
