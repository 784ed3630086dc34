use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use bcrypt::{hash, verify};
use tokio::sync::Mutex;
use crate::errors::{AppError, AppResult};
use crate::models::User;

// bcrypt cost factor for newly registered passwords.
const HASH_COST: u32 = 10;

// Flat-file credential store. The whole user list is read and rewritten on
// every mutation; the mutex serializes those read-modify-write cycles across
// request handlers.
#[derive(Clone)]
pub struct UserStore {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl UserStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub async fn register(&self, username: &str, password: &str) -> AppResult<()> {
        let _guard = self.lock.lock().await;
        let mut users = self.load()?;

        if users.iter().any(|user| user.username == username) {
            return Err(AppError::Conflict("Username already taken".into()));
        }

        let password_hash = hash(password.as_bytes(), HASH_COST)?;
        users.push(User {
            username: username.to_string(),
            password_hash,
        });
        self.save(&users)
    }

    // Login check; reads only, never writes. Unknown usernames and wrong
    // passwords produce the same error so the response does not reveal which
    // field was wrong.
    pub async fn verify(&self, username: &str, password: &str) -> AppResult<()> {
        let _guard = self.lock.lock().await;
        let users = self.load()?;

        let user = users
            .iter()
            .find(|user| user.username == username)
            .ok_or_else(|| AppError::Auth("Invalid username or password".into()))?;

        if !verify(password.as_bytes(), &user.password_hash)? {
            return Err(AppError::Auth("Invalid username or password".into()));
        }

        Ok(())
    }

    // A missing store file reads as an empty list (first run).
    fn load(&self) -> AppResult<Vec<User>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn save(&self, users: &[User]) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(users)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> UserStore {
        UserStore::new(dir.path().join("users.json"))
    }

    #[tokio::test]
    async fn test_register_then_verify_succeeds() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.register("alice", "secret").await.unwrap();
        store.verify("alice", "secret").await.unwrap();
    }

    #[tokio::test]
    async fn test_register_duplicate_username_conflicts() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.register("alice", "secret").await.unwrap();
        let err = store.register("alice", "different").await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_unknown_user_and_wrong_password_are_indistinguishable() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.register("alice", "secret").await.unwrap();

        let wrong_password = store.verify("alice", "nope").await.unwrap_err();
        let unknown_user = store.verify("mallory", "secret").await.unwrap_err();

        match (&wrong_password, &unknown_user) {
            (AppError::Auth(a), AppError::Auth(b)) => assert_eq!(a, b),
            other => panic!("expected two auth errors, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_store_file_is_a_json_array_of_username_password_objects() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.register("alice", "secret").await.unwrap();

        let raw = fs::read_to_string(dir.path().join("users.json")).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();

        let records = parsed.as_array().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["username"], "alice");

        // The password key holds the bcrypt hash, not the plaintext
        let stored = records[0]["password"].as_str().unwrap();
        assert_ne!(stored, "secret");
        assert!(stored.starts_with("$2"));
    }

    #[tokio::test]
    async fn test_missing_store_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        // No file yet: the lookup misses rather than erroring
        let err = store.verify("alice", "secret").await.unwrap_err();
        assert!(matches!(err, AppError::Auth(_)));
    }

    #[tokio::test]
    async fn test_corrupt_store_file_surfaces_json_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(dir.path().join("users.json"), "not json").unwrap();

        let err = store.verify("alice", "secret").await.unwrap_err();
        assert!(matches!(err, AppError::Json(_)));
        let err = store.register("alice", "secret").await.unwrap_err();
        assert!(matches!(err, AppError::Json(_)));

        // Neither operation rewrites the unreadable file
        let raw = fs::read_to_string(dir.path().join("users.json")).unwrap();
        assert_eq!(raw, "not json");
    }

    #[tokio::test]
    async fn test_reopened_store_sees_persisted_users() {
        let dir = TempDir::new().unwrap();
        store_in(&dir).register("alice", "secret").await.unwrap();

        // A fresh handle over the same file picks up the registration
        let reopened = store_in(&dir);
        reopened.verify("alice", "secret").await.unwrap();
        let err = reopened.register("alice", "secret").await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_verify_does_not_touch_the_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.register("alice", "secret").await.unwrap();

        let before = fs::read_to_string(dir.path().join("users.json")).unwrap();
        store.verify("alice", "secret").await.unwrap();
        store.verify("alice", "wrong").await.unwrap_err();
        let after = fs::read_to_string(dir.path().join("users.json")).unwrap();

        assert_eq!(before, after);
    }
}
