//! UI Components
//!
//! Reusable Leptos components.

mod edit_state;
mod filter_select;
mod nav_bar;
mod new_todo_dialog;
mod theme_toggle;
mod todo_list;
mod todo_row;

pub use edit_state::EditState;
pub use filter_select::FilterSelect;
pub use nav_bar::NavBar;
pub use new_todo_dialog::NewTodoDialog;
pub use theme_toggle::ThemeToggle;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
