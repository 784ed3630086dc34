mod auth;
mod task;

pub use auth::{handle_register, handle_login};
pub use task::{create_task, get_task, update_task, delete_task, list_tasks};
