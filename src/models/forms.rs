use serde::{Deserialize, Deserializer};
use chrono::NaiveDate;
use super::task::TaskStatus;

// Fields are optional so that a missing key surfaces as a validation error
// instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct CredentialsForm {
    pub username: Option<String>,
    pub password: Option<String>,
}

// Task creation is deliberately permissive: absent string fields are stored
// as empty strings and an absent due date stays unset.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub assigned_to: String,
    pub category: String,
}

// Partial update: only supplied fields overwrite the stored record.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    // Nullable field, so absent and null must stay distinguishable: an
    // absent key is None (retain), an explicit null is Some(None) (clear).
    #[serde(deserialize_with = "double_option")]
    pub due_date: Option<Option<NaiveDate>>,
    pub assigned_to: Option<String>,
    pub category: Option<String>,
    pub status: Option<TaskStatus>,
}

// A plain Option collapses an explicit null and an absent key into the same
// None; wrapping the present case keeps the two apart.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskFilter {
    pub assigned_to: Option<String>,
    pub category: Option<String>,
}
