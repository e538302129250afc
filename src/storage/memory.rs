//! In-memory user store
//!
//! Ordered collection of user records, insertion order preserved. Ids are
//! caller-supplied and not deduplicated; every lookup is a first-match
//! linear scan, so a duplicate id shadows later entries.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::core::user::User;

/// Shared in-memory user store.
///
/// A single lock guards all operations. Each mutation takes the write guard
/// for the duration of the scan and mutation only, never across I/O.
#[derive(Clone, Debug)]
pub struct UserStore {
    users: Arc<RwLock<Vec<User>>>,
}

impl UserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Snapshot of all records in insertion order.
    pub async fn list(&self) -> Vec<User> {
        let users = self.users.read().await;
        users.clone()
    }

    /// First record whose id matches, if any.
    pub async fn find_by_id(&self, id: i64) -> Option<User> {
        let users = self.users.read().await;
        users.iter().find(|u| u.id == id).cloned()
    }

    /// Append a record unconditionally. No uniqueness check on the id.
    pub async fn add(&self, user: User) {
        let mut users = self.users.write().await;
        users.push(user);
    }

    /// Remove the first record whose id matches and return it.
    pub async fn remove_by_id(&self, id: i64) -> Option<User> {
        let mut users = self.users.write().await;
        let index = users.iter().position(|u| u.id == id)?;
        Some(users.remove(index))
    }

    /// Overwrite name and email of the first record whose id matches,
    /// preserving the stored id. Returns the updated record, or `None`
    /// when no record matches.
    pub async fn update_fields(
        &self,
        id: i64,
        name: Option<String>,
        email: Option<String>,
    ) -> Option<User> {
        let mut users = self.users.write().await;
        let user = users.iter_mut().find(|u| u.id == id)?;
        user.name = name;
        user.email = email;
        Some(user.clone())
    }

    /// Number of records currently held.
    pub async fn len(&self) -> usize {
        let users = self.users.read().await;
        users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}
