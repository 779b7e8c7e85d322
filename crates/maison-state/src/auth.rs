//! # Authentication Capability
//!
//! Pluggable authentication for the storefront.
//!
//! ## Why a Trait?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Authenticator Seam                                   │
//! │                                                                         │
//! │  StoreState::login ────► dyn Authenticator ────► Option<User>          │
//! │                              │                                          │
//! │              ┌───────────────┴────────────────┐                         │
//! │              ▼                                ▼                         │
//! │     MockAuthenticator               (future) backend client             │
//! │     no verification,                real credential check,              │
//! │     demo only                       same call sites                     │
//! │                                                                         │
//! │  The manager never inspects credentials itself; swapping in a real     │
//! │  backend changes no call site.                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Mock Rules
//! - `admin@shop.com` / `admin` → the admin user
//! - any other non-empty email/password pair → a fresh non-admin user named
//!   after the email local part
//! - an empty email or password → `None` (login fails, nothing changes)
//!
//! This is intentionally NOT real authentication. Nothing is verified and
//! no user store exists; `register` mints a user without any uniqueness
//! check.

use tracing::debug;
use uuid::Uuid;

use maison_core::validation::{validate_credentials, validate_registration};
use maison_core::User;

// =============================================================================
// Credentials
// =============================================================================

/// A login credential pair as entered in the UI.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials {
            email: email.into(),
            password: password.into(),
        }
    }
}

// =============================================================================
// Authenticator Trait
// =============================================================================

/// Capability that turns credentials into users.
///
/// `Send` so a boxed authenticator can live inside state shared across
/// threads (see `SharedStore` in the state crate).
pub trait Authenticator: Send {
    /// Attempts a login. `None` means the credentials were rejected; the
    /// caller leaves the current user untouched.
    fn authenticate(&self, credentials: &Credentials) -> Option<User>;

    /// Attempts a registration. `None` means the input was rejected.
    fn register(&self, name: &str, email: &str, password: &str) -> Option<User>;
}

// =============================================================================
// Mock Authenticator
// =============================================================================

/// The hardcoded admin login.
pub const ADMIN_EMAIL: &str = "admin@shop.com";
/// The hardcoded admin password.
pub const ADMIN_PASSWORD: &str = "admin";

/// Demo-only authenticator with a single hardcoded admin credential and
/// permissive acceptance of everything else.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockAuthenticator;

impl Authenticator for MockAuthenticator {
    fn authenticate(&self, credentials: &Credentials) -> Option<User> {
        if validate_credentials(&credentials.email, &credentials.password).is_err() {
            debug!("login rejected: empty credential field");
            return None;
        }

        if credentials.email == ADMIN_EMAIL && credentials.password == ADMIN_PASSWORD {
            debug!("admin login");
            return Some(User {
                id: "1".to_string(),
                name: "Admin User".to_string(),
                email: ADMIN_EMAIL.to_string(),
                is_admin: true,
            });
        }

        // Any other non-empty pair signs in as a fresh shopper named after
        // the email local part.
        let name = credentials
            .email
            .split('@')
            .next()
            .unwrap_or(&credentials.email)
            .to_string();

        debug!(email = %credentials.email, "shopper login");
        Some(User {
            id: Uuid::new_v4().to_string(),
            name,
            email: credentials.email.clone(),
            is_admin: false,
        })
    }

    fn register(&self, name: &str, email: &str, password: &str) -> Option<User> {
        if validate_registration(name, email, password).is_err() {
            debug!("registration rejected: empty field");
            return None;
        }

        debug!(email = %email, "registered shopper");
        Some(User {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            is_admin: false,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_credentials_yield_admin_user() {
        let user = MockAuthenticator
            .authenticate(&Credentials::new(ADMIN_EMAIL, ADMIN_PASSWORD))
            .unwrap();
        assert!(user.is_admin);
        assert_eq!(user.name, "Admin User");
    }

    #[test]
    fn test_any_other_pair_yields_shopper() {
        let user = MockAuthenticator
            .authenticate(&Credentials::new("x@y.com", "pw"))
            .unwrap();
        assert!(!user.is_admin);
        assert_eq!(user.name, "x");
        assert_eq!(user.email, "x@y.com");
    }

    #[test]
    fn test_admin_email_with_wrong_password_is_shopper() {
        let user = MockAuthenticator
            .authenticate(&Credentials::new(ADMIN_EMAIL, "not-admin"))
            .unwrap();
        assert!(!user.is_admin);
    }

    #[test]
    fn test_empty_fields_are_rejected() {
        let auth = MockAuthenticator;
        assert!(auth.authenticate(&Credentials::new("", "")).is_none());
        assert!(auth.authenticate(&Credentials::new("x@y.com", "")).is_none());
        assert!(auth.authenticate(&Credentials::new("", "pw")).is_none());
    }

    #[test]
    fn test_register_mints_unique_ids() {
        let auth = MockAuthenticator;
        let a = auth.register("Jamie", "jamie@example.com", "pw").unwrap();
        let b = auth.register("Jamie", "jamie@example.com", "pw").unwrap();
        // No uniqueness check on email - but ids never collide
        assert_ne!(a.id, b.id);
        assert!(!a.is_admin);
    }

    #[test]
    fn test_register_rejects_empty_fields() {
        let auth = MockAuthenticator;
        assert!(auth.register("", "jamie@example.com", "pw").is_none());
        assert!(auth.register("Jamie", "", "pw").is_none());
        assert!(auth.register("Jamie", "jamie@example.com", "").is_none());
    }
}
