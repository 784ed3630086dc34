use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    pub username: String,
    // The store file keys this field as `password`; the value is always the
    // bcrypt hash, never plain text.
    #[serde(rename = "password")]
    pub password_hash: String,
}
