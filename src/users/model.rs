use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,                     // assigned by the store, never changes
    pub name: String,                 // display name
    pub email: String,                // unique per store constraint
    #[serde(skip_serializing)]
    pub password_hash: String,        // Argon2 PHC string, not exposed in JSON
    pub created_at: OffsetDateTime,   // creation timestamp
    pub updated_at: OffsetDateTime,   // refreshed by every update
}

/// Column values written by an insert or an update.
#[derive(Debug, Clone)]
pub struct UserFields {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Validated input for creating a user. Carries the plaintext password until
/// the directory hashes it.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Validated input for updating a user.
///
/// `name` and `email` always overwrite the stored values. `password` replaces
/// the stored credential only when it is `Some` and non-empty; otherwise the
/// existing hash is kept as is.
#[derive(Debug, Clone)]
pub struct UserChanges {
    pub name: String,
    pub email: String,
    pub password: Option<String>,
}
