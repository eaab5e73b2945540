//! UI Components
//!
//! Leptos components rendering the todo store.

mod todo_input;
mod filter_bar;
mod todo_row;
mod todo_list;
mod edit_dialog;

pub use todo_input::TodoInput;
pub use filter_bar::FilterBar;
pub use todo_row::TodoRow;
pub use todo_list::TodoList;
pub use edit_dialog::EditDialog;
