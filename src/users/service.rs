use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use super::error::{DirectoryError, DirectoryResult};
use super::model::{NewUser, User, UserChanges, UserFields};
use super::password::CredentialHasher;
use super::store::UserStore;

/// Admin-facing list/create/update over a [`UserStore`].
///
/// Plaintext passwords go through the [`CredentialHasher`] before anything
/// reaches the store. Nothing is cached between calls.
#[derive(Clone)]
pub struct UserDirectory {
    store: Arc<dyn UserStore>,
    hasher: Arc<dyn CredentialHasher>,
}

impl UserDirectory {
    pub fn new(store: Arc<dyn UserStore>, hasher: Arc<dyn CredentialHasher>) -> Self {
        Self { store, hasher }
    }

    /// All users, most recently created first.
    pub async fn list(&self) -> DirectoryResult<Vec<User>> {
        let users = self.store.list_all().await?;
        debug!(count = users.len(), "listed users");
        Ok(users)
    }

    pub async fn get(&self, id: Uuid) -> DirectoryResult<User> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(DirectoryError::NotFound(id))
    }

    /// Stores name and email as given; only the password is transformed.
    pub async fn create(&self, input: NewUser) -> DirectoryResult<User> {
        let password_hash = self.hash(&input.password)?;
        let user = self
            .store
            .insert(UserFields {
                name: input.name,
                email: input.email,
                password_hash,
            })
            .await?;
        info!(user_id = %user.id, "user created");
        Ok(user)
    }

    /// Overwrites name and email. The stored hash is kept unless a non-empty
    /// password is supplied.
    pub async fn update(&self, id: Uuid, changes: UserChanges) -> DirectoryResult<User> {
        let existing = self.get(id).await?;

        let new_password = changes.password.filter(|p| !p.is_empty());
        let rehashed = new_password.is_some();
        let password_hash = match new_password {
            Some(plain) => self.hash(&plain)?,
            None => existing.password_hash.clone(),
        };

        let user = self
            .store
            .update(
                &existing,
                UserFields {
                    name: changes.name,
                    email: changes.email,
                    password_hash,
                },
            )
            .await?
            .ok_or(DirectoryError::NotFound(id))?;
        info!(user_id = %user.id, password_changed = rehashed, "user updated");
        Ok(user)
    }

    fn hash(&self, plain: &str) -> DirectoryResult<String> {
        self.hasher
            .hash(plain)
            .map_err(|e| DirectoryError::Hash(e.to_string()))
    }
}
