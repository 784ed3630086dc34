use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, Utc};

// Define task status enum. New tasks start Pending; update may set either
// value at any time (there is no transition graph).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum TaskStatus {
    Pending,
    Completed,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub creation_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    pub assigned_to: String,
    pub category: String,
    pub status: TaskStatus,
}
