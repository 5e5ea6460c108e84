//! User repository backed by an in-process map.

use std::collections::HashMap;

use tracing::debug;
use uuid::Uuid;

use domain::{DomainResult, NewUser, User, UserUpdate};

/// User repository contract.
///
/// Lookup misses are ordinary outcomes, not failures: `read` and `update`
/// report an unknown id with `None`, `delete` with `false`. Only field
/// validation produces an error.
pub trait UserRepository {
    /// Create a user under a freshly generated id.
    ///
    /// Validation failures store nothing.
    fn create(&mut self, new_user: NewUser) -> DomainResult<User>;

    /// Fetch the user stored under `id`.
    fn read(&self, id: Uuid) -> Option<User>;

    /// Merge the supplied fields into the stored record.
    ///
    /// Returns `Ok(None)` for an unknown id. The merged record is
    /// re-validated as a whole and committed only on success, so a failing
    /// update leaves the stored record exactly as it was.
    fn update(&mut self, id: Uuid, update: UserUpdate) -> DomainResult<Option<User>>;

    /// Remove the user stored under `id`, reporting whether it existed.
    fn delete(&mut self, id: Uuid) -> bool;

    /// Every currently stored user, in container iteration order.
    fn list_all(&self) -> Vec<User>;

    /// Number of stored users.
    fn count(&self) -> usize;

    /// Drop every stored user.
    fn clear(&mut self);
}

/// In-memory implementation of `UserRepository`.
///
/// Each store owns an independent map, so callers isolate state by
/// constructing a fresh instance rather than sharing a global.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: HashMap<Uuid, User>,
}

impl MemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl UserRepository for MemoryUserStore {
    fn create(&mut self, new_user: NewUser) -> DomainResult<User> {
        let user = User::new(
            Uuid::new_v4(),
            new_user.name,
            new_user.email,
            new_user.age,
            new_user.active,
        )?;
        debug!(id = %user.id, "user created");
        self.users.insert(user.id, user.clone());
        Ok(user)
    }

    fn read(&self, id: Uuid) -> Option<User> {
        self.users.get(&id).cloned()
    }

    fn update(&mut self, id: Uuid, update: UserUpdate) -> DomainResult<Option<User>> {
        let Some(current) = self.users.get(&id) else {
            return Ok(None);
        };

        // Validate the merged candidate before touching the stored record.
        let updated = current.apply(update)?;
        debug!(id = %id, "user updated");
        self.users.insert(id, updated.clone());
        Ok(Some(updated))
    }

    fn delete(&mut self, id: Uuid) -> bool {
        let removed = self.users.remove(&id).is_some();
        if removed {
            debug!(id = %id, "user deleted");
        }
        removed
    }

    fn list_all(&self) -> Vec<User> {
        self.users.values().cloned().collect()
    }

    fn count(&self) -> usize {
        self.users.len()
    }

    fn clear(&mut self) {
        debug!(dropped = self.users.len(), "store cleared");
        self.users.clear();
    }
}
