//! # User Repository
//!
//! Account storage, authentication and the bootstrap seeding check.
//!
//! ## Authentication Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      How Login Works                                    │
//! │                                                                         │
//! │  authenticate("ana", "s3cret")                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SELECT id, name, credential, role FROM users WHERE name = ?           │
//! │       │                                                                 │
//! │       ├── no row ──────────────────────────► AuthenticationFailed      │
//! │       ▼                                                                 │
//! │  credential::verify("s3cret", stored digest)                           │
//! │       │                                                                 │
//! │       ├── mismatch ────────────────────────► AuthenticationFailed      │
//! │       ▼                                                                 │
//! │  Ok(User { id, name, role })   ← digest never leaves this module       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no rate limiting or lockout; a failed login is just an error
//! the caller renders.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use stockroom_core::{credential, validation};
use stockroom_core::{Role, User, ValidationError, DEFAULT_ADMIN_NAME, DEFAULT_ADMIN_PASSWORD};

/// Internal row shape carrying the stored digest.
/// Never exposed; [`User`] is the public read model.
#[derive(sqlx::FromRow)]
struct CredentialRow {
    id: i64,
    name: String,
    credential: String,
    role: Role,
}

/// Repository for user accounts.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Creates a new UserRepository.
    pub fn new(pool: SqlitePool) -> Self {
        UserRepository { pool }
    }

    /// Creates a user with the given role.
    ///
    /// The password is digested before storage; the raw secret is never
    /// written anywhere.
    ///
    /// ## Returns
    /// * `Ok(User)` - The stored account
    /// * `Err(StoreError::Validation)` - Empty name or password
    /// * `Err(StoreError::Duplicate)` - Name already taken
    pub async fn create(&self, name: &str, password: &str, role: Role) -> StoreResult<User> {
        validation::validate_user_name(name)?;
        validation::validate_password(password)?;

        let name = name.trim().to_string();
        let digest = credential::digest(password);

        debug!(name = %name, role = role.as_str(), "Inserting user");

        let result = sqlx::query(
            "INSERT INTO users (name, credential, role) VALUES (?1, ?2, ?3)",
        )
        .bind(&name)
        .bind(&digest)
        .bind(role)
        .execute(&self.pool)
        .await
        .map_err(|err| {
            let err = StoreError::from(err);
            if err.is_duplicate() {
                StoreError::duplicate("user", name.clone())
            } else {
                err
            }
        })?;

        Ok(User {
            id: result.last_insert_rowid(),
            name,
            role,
        })
    }

    /// Deletes a user by id.
    ///
    /// The seeded default administrator cannot be removed - the bootstrap
    /// invariant ("at least one administrator exists") must survive every
    /// sequence of deletions. Unknown ids are a no-op.
    ///
    /// The "cannot delete yourself" rule is NOT checked here: the session
    /// lives at the presentation boundary, which compares ids before
    /// calling in.
    ///
    /// ## Returns
    /// Whether a row was actually removed.
    pub async fn delete(&self, id: i64) -> StoreResult<bool> {
        let Some(user) = self.get(id).await? else {
            return Ok(false);
        };

        if user.name == DEFAULT_ADMIN_NAME {
            return Err(ValidationError::ReservedUser { name: user.name }.into());
        }

        debug!(id, "Deleting user");

        let result = sqlx::query("DELETE FROM users WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Gets a user by id.
    pub async fn get(&self, id: i64) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT id, name, role FROM users WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    /// Lists all users, ordered by name. Digests are not included.
    pub async fn list(&self) -> StoreResult<Vec<User>> {
        let users =
            sqlx::query_as::<_, User>("SELECT id, name, role FROM users ORDER BY name")
                .fetch_all(&self.pool)
                .await?;
        Ok(users)
    }

    /// Counts user rows.
    pub async fn count(&self) -> StoreResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Authenticates a (name, password) pair.
    ///
    /// Any mismatch - unknown name or wrong password - yields the same
    /// [`StoreError::AuthenticationFailed`], so a caller cannot probe for
    /// which names exist.
    pub async fn authenticate(&self, name: &str, password: &str) -> StoreResult<User> {
        let row = sqlx::query_as::<_, CredentialRow>(
            "SELECT id, name, credential, role FROM users WHERE name = ?1",
        )
        .bind(name.trim())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) if credential::verify(password, &row.credential) => {
                debug!(name = %row.name, "Authentication succeeded");
                Ok(User {
                    id: row.id,
                    name: row.name,
                    role: row.role,
                })
            }
            _ => {
                debug!(name = %name.trim(), "Authentication failed");
                Err(StoreError::AuthenticationFailed)
            }
        }
    }

    /// One-time bootstrap: inserts the default administrator iff the user
    /// table is empty.
    ///
    /// A concurrent process racing the same insert loses on UNIQUE(name)
    /// and reports "not seeded" - either way exactly one administrator
    /// exists afterwards.
    ///
    /// ## Returns
    /// Whether this call performed the seeding.
    pub async fn seed_default_admin(&self) -> StoreResult<bool> {
        if self.count().await? > 0 {
            return Ok(false);
        }

        match self
            .create(DEFAULT_ADMIN_NAME, DEFAULT_ADMIN_PASSWORD, Role::Administrator)
            .await
        {
            Ok(_) => Ok(true),
            Err(err) if err.is_duplicate() => Ok(false),
            Err(err) => Err(err),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_create_and_list_hides_digest() {
        let db = db().await;
        let user = db
            .users()
            .create("ana", "s3cret", Role::Staff)
            .await
            .unwrap();
        assert_eq!(user.role, Role::Staff);

        // Bootstrap admin + ana, ordered by name
        let listing = db.users().list().await.unwrap();
        let names: Vec<_> = listing.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["admin", "ana"]);
    }

    #[tokio::test]
    async fn test_duplicate_name_rejected() {
        let db = db().await;
        db.users().create("ana", "x", Role::Staff).await.unwrap();
        let err = db.users().create("ana", "y", Role::Administrator).await;
        assert!(matches!(err, Err(StoreError::Duplicate { .. })));
    }

    #[tokio::test]
    async fn test_default_admin_cannot_be_deleted() {
        let db = db().await;
        let listing = db.users().list().await.unwrap();
        let admin = listing.iter().find(|u| u.name == DEFAULT_ADMIN_NAME).unwrap();

        let err = db.users().delete(admin.id).await;
        assert!(matches!(err, Err(StoreError::Validation(_))));
        assert_eq!(db.users().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_delete_unknown_user_is_noop() {
        let db = db().await;
        assert!(!db.users().delete(4711).await.unwrap());
    }
}
