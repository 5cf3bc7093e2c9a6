mod filter_bar;
mod global_actions;
mod status_messages;
mod task_form;
mod task_list;
mod task_list_row;

pub use filter_bar::FilterBar;
pub use global_actions::GlobalActions;
pub use status_messages::StatusMessages;
pub use task_form::TaskForm;
pub use task_list::TaskList;
pub use task_list_row::TaskListRow;
