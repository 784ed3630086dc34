mod task_registry;
mod user_store;

pub use task_registry::TaskRegistry;
pub use user_store::UserStore;
