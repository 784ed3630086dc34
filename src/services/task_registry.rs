use std::collections::BTreeMap;
use std::sync::Arc;
use chrono::Utc;
use tokio::sync::Mutex;
use crate::models::{Task, TaskFilter, TaskForm, TaskPatch, TaskStatus};

// The in-memory task collection: id -> record plus the id sequence. Ids are
// handed out monotonically and never reused, so iterating the map in
// ascending id order matches insertion order.
struct RegistryInner {
    tasks: BTreeMap<u64, Task>,
    next_id: u64,
}

// Shared handle over the registry; one mutex guards the map and the counter.
#[derive(Clone)]
pub struct TaskRegistry {
    inner: Arc<Mutex<RegistryInner>>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(RegistryInner {
                tasks: BTreeMap::new(),
                next_id: 1,
            })),
        }
    }

    // Creation always succeeds: no field is required, the status starts
    // Pending and the creation date is stamped here.
    pub async fn create(&self, form: TaskForm) -> Task {
        let mut inner = self.inner.lock().await;
        let id = inner.next_id;
        inner.next_id += 1;

        let task = Task {
            id,
            title: form.title,
            description: form.description,
            creation_date: Utc::now(),
            due_date: form.due_date,
            assigned_to: form.assigned_to,
            category: form.category,
            status: TaskStatus::Pending,
        };
        inner.tasks.insert(id, task.clone());
        task
    }

    pub async fn get(&self, id: u64) -> Option<Task> {
        self.inner.lock().await.tasks.get(&id).cloned()
    }

    // Shallow merge: each supplied field overwrites, unsupplied fields keep
    // their prior value. A due date supplied as null clears the stored one;
    // the id and creation date are not part of the patch.
    pub async fn update(&self, id: u64, patch: TaskPatch) -> Option<Task> {
        let mut inner = self.inner.lock().await;
        let task = inner.tasks.get_mut(&id)?;

        if let Some(title) = patch.title {
            task.title = title;
        }
        if let Some(description) = patch.description {
            task.description = description;
        }
        if let Some(due_date) = patch.due_date {
            task.due_date = due_date;
        }
        if let Some(assigned_to) = patch.assigned_to {
            task.assigned_to = assigned_to;
        }
        if let Some(category) = patch.category {
            task.category = category;
        }
        if let Some(status) = patch.status {
            task.status = status;
        }

        Some(task.clone())
    }

    // Removal frees no id for reuse; the sequence only moves forward.
    pub async fn remove(&self, id: u64) -> bool {
        self.inner.lock().await.tasks.remove(&id).is_some()
    }

    // Conjunctive filter over assignee and category; an empty filter value
    // behaves like an absent one. Results come back in creation order.
    pub async fn list(&self, filter: TaskFilter) -> Vec<Task> {
        let inner = self.inner.lock().await;
        let assigned_to = filter.assigned_to.as_deref().filter(|v| !v.is_empty());
        let category = filter.category.as_deref().filter(|v| !v.is_empty());

        inner
            .tasks
            .values()
            .filter(|task| assigned_to.map_or(true, |v| task.assigned_to == v))
            .filter(|task| category.map_or(true, |v| task.category == v))
            .cloned()
            .collect()
    }
}
