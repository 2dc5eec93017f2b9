//! Admin session blob
//!
//! The original login is a client-side presence check only; credentials
//! are never verified against a backend. The session persists as its
//! own blob alongside the collections.

use chrono::{DateTime, Utc};
use constructpro_core::{PanelError, Result};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::blobs::{delete_blob, read_blob, write_blob};

/// Blob key for the persisted session
pub const SESSION_KEY: &str = "constructpro_session";

/// A logged-in admin session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub email: String,
    pub logged_in_at: DateTime<Utc>,
}

/// Log in and persist the session
///
/// Presence check only: both fields must be non-empty. The password is
/// not stored.
///
/// # Errors
/// `InvalidCredentials` when either field is blank.
pub fn login(conn: &Connection, email: &str, password: &str) -> Result<Session> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(PanelError::InvalidCredentials);
    }

    let session = Session {
        email: email.trim().to_string(),
        logged_in_at: Utc::now(),
    };

    match serde_json::to_string(&session) {
        Ok(raw) => write_blob(conn, SESSION_KEY, &raw)?,
        Err(err) => {
            return Err(PanelError::Serialization {
                key: SESSION_KEY.to_string(),
                message: err.to_string(),
            })
        }
    }

    info!(email = %session.email, "logged in");
    Ok(session)
}

/// Clear the persisted session, returning whether one existed
pub fn logout(conn: &Connection) -> Result<bool> {
    let removed = delete_blob(conn, SESSION_KEY)?;
    if removed {
        info!("logged out");
    }
    Ok(removed)
}

/// The current session, if any
///
/// A corrupt session blob is treated as logged out, matching the
/// best-effort storage semantics of the collections.
pub fn status(conn: &Connection) -> Option<Session> {
    let raw = read_blob(conn, SESSION_KEY).ok()??;
    match serde_json::from_str(&raw) {
        Ok(session) => Some(session),
        Err(err) => {
            warn!(key = SESSION_KEY, %err, "corrupt session blob, treating as logged out");
            None
        }
    }
}

/// Check a registration form
///
/// Mirrors the original client-side checks; nothing is persisted (the
/// account creation call belongs to a backend that does not exist yet).
///
/// # Errors
/// `ValidationFailed` with the first failing check's message.
pub fn validate_registration(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<()> {
    let fail = |message: &str| {
        Err(PanelError::ValidationFailed {
            message: message.to_string(),
        })
    };

    if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() || confirm.is_empty()
    {
        return fail("All fields are required");
    }
    if password.len() < 8 {
        return fail("Password must be at least 8 characters");
    }
    if password != confirm {
        return fail("Passwords do not match");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::migrations::apply_migrations;

    fn setup() -> Connection {
        let mut conn = Connection::open_in_memory().unwrap();
        apply_migrations(&mut conn).unwrap();
        conn
    }

    #[test]
    fn test_login_persists_session() {
        let conn = setup();
        let session = login(&conn, "admin@constructpro.in", "hunter22").unwrap();
        assert_eq!(status(&conn), Some(session));
    }

    #[test]
    fn test_login_requires_both_fields() {
        let conn = setup();
        let err = login(&conn, "", "secret").unwrap_err();
        assert_eq!(err.to_string(), "Please fill in all fields");
        let err = login(&conn, "admin@constructpro.in", "").unwrap_err();
        assert_eq!(err.code(), "ERR_INVALID_CREDENTIALS");
        assert!(status(&conn).is_none());
    }

    #[test]
    fn test_logout_clears_session() {
        let conn = setup();
        login(&conn, "admin@constructpro.in", "hunter22").unwrap();
        assert!(logout(&conn).unwrap());
        assert!(status(&conn).is_none());
        assert!(!logout(&conn).unwrap());
    }

    #[test]
    fn test_corrupt_session_is_logged_out() {
        let conn = setup();
        write_blob(&conn, SESSION_KEY, "{oops").unwrap();
        assert!(status(&conn).is_none());
    }

    #[test]
    fn test_registration_checks() {
        assert!(validate_registration("Asha", "asha@example.com", "longenough", "longenough")
            .is_ok());

        let err = validate_registration("", "a@b.c", "longenough", "longenough").unwrap_err();
        assert_eq!(err.to_string(), "All fields are required");

        let err = validate_registration("Asha", "a@b.c", "short", "short").unwrap_err();
        assert_eq!(err.to_string(), "Password must be at least 8 characters");

        let err = validate_registration("Asha", "a@b.c", "longenough", "different").unwrap_err();
        assert_eq!(err.to_string(), "Passwords do not match");
    }
}
