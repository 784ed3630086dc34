mod user;
mod forms;
mod task;

pub use user::User;
pub use forms::{CredentialsForm, TaskForm, TaskPatch, TaskFilter};
pub use task::{Task, TaskStatus};
