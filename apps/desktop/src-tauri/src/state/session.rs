//! # Session State
//!
//! Holds the currently authenticated user for this desktop instance.
//!
//! ## Thread Safety
//! The session is wrapped in `Arc<Mutex<T>>` because:
//! 1. `login`/`logout` replace it while other commands read it
//! 2. Tauri commands can run concurrently
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Session State Operations                            │
//! │                                                                         │
//! │  Frontend Action          Tauri Command          Session Change         │
//! │  ───────────────          ─────────────          ──────────────         │
//! │                                                                         │
//! │  Submit login form ──────► login() ────────────► Some(user)            │
//! │                                                                         │
//! │  Click logout ───────────► logout() ───────────► None                  │
//! │                                                                         │
//! │  Any gated action ───────► current()/require() ► (read only)           │
//! │                                                                         │
//! │  The session is the ONLY state the desktop holds besides the pool;     │
//! │  it is also where the role trust boundary lives - commands consult     │
//! │  it before invoking administrator-only operations.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use stockroom_core::User;

use crate::error::ApiError;

/// Mutex-guarded current user of this desktop instance.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    current: Arc<Mutex<Option<User>>>,
}

impl SessionState {
    /// Creates a new, logged-out session.
    pub fn new() -> Self {
        SessionState {
            current: Arc::new(Mutex::new(None)),
        }
    }

    /// Replaces the session with a freshly authenticated user.
    pub fn set(&self, user: User) {
        let mut current = self.current.lock().expect("session mutex poisoned");
        *current = Some(user);
    }

    /// Clears the session.
    pub fn clear(&self) {
        let mut current = self.current.lock().expect("session mutex poisoned");
        *current = None;
    }

    /// Returns a copy of the current user, if any.
    pub fn current(&self) -> Option<User> {
        self.current.lock().expect("session mutex poisoned").clone()
    }

    /// Returns the current user or a NotLoggedIn error.
    pub fn require_user(&self) -> Result<User, ApiError> {
        self.current().ok_or_else(ApiError::not_logged_in)
    }

    /// Returns the current user if they are an administrator.
    ///
    /// This is the role trust boundary: the repositories themselves do not
    /// re-check roles.
    pub fn require_admin(&self) -> Result<User, ApiError> {
        let user = self.require_user()?;
        if !user.role.is_admin() {
            return Err(ApiError::permission_denied());
        }
        Ok(user)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::Role;

    fn user(role: Role) -> User {
        User {
            id: 1,
            name: "ana".to_string(),
            role,
        }
    }

    #[test]
    fn test_login_logout_cycle() {
        let session = SessionState::new();
        assert!(session.current().is_none());
        assert!(session.require_user().is_err());

        session.set(user(Role::Staff));
        assert_eq!(session.require_user().unwrap().name, "ana");

        session.clear();
        assert!(session.current().is_none());
    }

    #[test]
    fn test_admin_gate() {
        let session = SessionState::new();

        session.set(user(Role::Staff));
        assert!(session.require_admin().is_err());

        session.set(user(Role::Administrator));
        assert!(session.require_admin().is_ok());
    }
}
