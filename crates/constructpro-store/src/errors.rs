//! Error handling for constructpro-store
//!
//! Wraps constructpro-core PanelError with store-specific helpers

use constructpro_core::PanelError;

pub use constructpro_core::Result;

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> PanelError {
    PanelError::Persistence {
        op: "migration",
        message: format!("Migration {} failed: {}", migration_id, reason),
    }
}

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> PanelError {
    PanelError::Persistence {
        op: "sqlite",
        message: err.to_string(),
    }
}

/// Create a blob serialization error
pub fn serialization_error(key: &str, err: serde_json::Error) -> PanelError {
    PanelError::Serialization {
        key: key.to_string(),
        message: err.to_string(),
    }
}

/// Create an IO error
pub fn io_error(op: &'static str, err: std::io::Error) -> PanelError {
    PanelError::Io {
        op,
        message: err.to_string(),
    }
}
