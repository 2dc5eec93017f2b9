use thiserror::Error;

/// Result type alias using PanelError
pub type Result<T> = std::result::Result<T, PanelError>;

/// Canonical error kind taxonomy
///
/// Stable classification of panel errors. Each kind maps to a stable
/// error code usable for programmatic handling and test assertions.
/// Storage failures are deliberately absent from the user-facing
/// surface: the store recovers locally (seed fallback, dropped write)
/// and only logs, so they never reach a caller as an error value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelErrorKind {
    // Query surface
    UnknownAction,
    MissingId,
    InvalidId,

    // Records
    NotFound,
    ValidationFailed,

    // Session
    Unauthenticated,
    InvalidCredentials,

    // Integration/IO
    Io,
    Serialization,
    Persistence,

    // Internal
    Internal,
}

impl PanelErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            PanelErrorKind::UnknownAction => "ERR_UNKNOWN_ACTION",
            PanelErrorKind::MissingId => "ERR_MISSING_ID",
            PanelErrorKind::InvalidId => "ERR_INVALID_ID",
            PanelErrorKind::NotFound => "ERR_NOT_FOUND",
            PanelErrorKind::ValidationFailed => "ERR_VALIDATION_FAILED",
            PanelErrorKind::Unauthenticated => "ERR_UNAUTHENTICATED",
            PanelErrorKind::InvalidCredentials => "ERR_INVALID_CREDENTIALS",
            PanelErrorKind::Io => "ERR_IO",
            PanelErrorKind::Serialization => "ERR_SERIALIZATION",
            PanelErrorKind::Persistence => "ERR_PERSISTENCE",
            PanelErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Errors raised by the panel kernel
///
/// Missing-target mutations (`update`/`delete` of an absent id) do NOT
/// use this type; the store returns `Option`/`bool` sentinels and the
/// caller skips the dependent view update. `PanelError` covers the
/// query surface, form validation, and the session.
#[derive(Debug, Error)]
pub enum PanelError {
    #[error("Unknown action '{action}' (expected 'create' or 'edit')")]
    UnknownAction { action: String },

    #[error("Action 'edit' requires an id parameter")]
    MissingId,

    #[error("Invalid id '{raw}': not an integer")]
    InvalidId { raw: String },

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: u64 },

    #[error("{message}")]
    ValidationFailed { message: String },

    #[error("Not logged in")]
    Unauthenticated,

    #[error("Please fill in all fields")]
    InvalidCredentials,

    #[error("I/O error during {op}: {message}")]
    Io { op: &'static str, message: String },

    #[error("Serialization error for {key}: {message}")]
    Serialization { key: String, message: String },

    #[error("Persistence error during {op}: {message}")]
    Persistence { op: &'static str, message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl PanelError {
    /// Map this error to its kind
    pub fn kind(&self) -> PanelErrorKind {
        match self {
            PanelError::UnknownAction { .. } => PanelErrorKind::UnknownAction,
            PanelError::MissingId => PanelErrorKind::MissingId,
            PanelError::InvalidId { .. } => PanelErrorKind::InvalidId,
            PanelError::NotFound { .. } => PanelErrorKind::NotFound,
            PanelError::ValidationFailed { .. } => PanelErrorKind::ValidationFailed,
            PanelError::Unauthenticated => PanelErrorKind::Unauthenticated,
            PanelError::InvalidCredentials => PanelErrorKind::InvalidCredentials,
            PanelError::Io { .. } => PanelErrorKind::Io,
            PanelError::Serialization { .. } => PanelErrorKind::Serialization,
            PanelError::Persistence { .. } => PanelErrorKind::Persistence,
            PanelError::Internal { .. } => PanelErrorKind::Internal,
        }
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(PanelErrorKind::NotFound.code(), "ERR_NOT_FOUND");
        assert_eq!(
            PanelErrorKind::ValidationFailed.code(),
            "ERR_VALIDATION_FAILED"
        );
    }

    #[test]
    fn test_error_kind_mapping() {
        let err = PanelError::NotFound {
            entity: "banner",
            id: 42,
        };
        assert_eq!(err.kind(), PanelErrorKind::NotFound);
        assert_eq!(err.code(), "ERR_NOT_FOUND");
        assert_eq!(err.to_string(), "banner 42 not found");
    }

    #[test]
    fn test_missing_id_message() {
        let err = PanelError::MissingId;
        assert!(err.to_string().contains("requires an id"));
    }
}
