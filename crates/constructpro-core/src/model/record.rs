use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Unique integer identifier for a record within one store
pub type RecordId = u64;

/// How fresh ids are derived for an entity
///
/// Banners, careers, and projects use the creation timestamp in
/// milliseconds; contact enquiries use a sequential counter. In both
/// cases the store bumps the candidate until it is unused, so `create`
/// always yields an id that was not present before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdStrategy {
    /// Milliseconds since the Unix epoch at creation time
    Timestamp,
    /// One past the highest id currently in the collection
    Sequential,
}

/// Outcome of validating a draft
///
/// Carries an ordered list of human-readable error messages. Only the
/// first message is surfaced to the user on a failed save.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<String>,
}

impl ValidationReport {
    /// Create an empty (passing) report
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error message
    pub fn push(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Require a non-blank text field
    pub fn require_text(&mut self, value: &str, message: &str) {
        if value.trim().is_empty() {
            self.push(message);
        }
    }

    /// True when no errors were recorded
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// All error messages, in the order they were recorded
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// The first error message, if any
    pub fn first_error(&self) -> Option<&str> {
        self.errors.first().map(String::as_str)
    }
}

/// A single row of a rendered form view
///
/// Mirrors the original form templates: a label, a required marker, and
/// the current (or default) value shown in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub label: &'static str,
    pub required: bool,
    pub value: String,
}

impl FormField {
    pub fn new(label: &'static str, required: bool, value: impl Into<String>) -> Self {
        Self {
            label,
            required,
            value: value.into(),
        }
    }
}

/// An entity managed by a panel
///
/// One implementation per panel (banner, career, contact, project).
/// The trait carries everything the generic store, controller, and list
/// renderer need: identity, timestamps, the filterable field, draft
/// application, validation, and the seed dataset used when the
/// persisted blob is missing or corrupt.
pub trait Record: Clone + Serialize + DeserializeOwned {
    /// Full field set collected from the entity's form
    type Draft: Clone + Default;

    /// Entity name in error messages and logs ("banner", "career", ...)
    const ENTITY: &'static str;

    /// Entity name in user-facing headings and notices ("Banner", ...)
    const ENTITY_TITLE: &'static str;

    /// Blob key in the persisted key-value store
    const STORE_KEY: &'static str;

    /// Panel heading shown when no filter is active
    const PANEL_TITLE: &'static str;

    /// Id derivation scheme for this entity
    const ID_STRATEGY: IdStrategy = IdStrategy::Timestamp;

    fn id(&self) -> RecordId;
    fn created_at(&self) -> DateTime<Utc>;
    fn updated_at(&self) -> DateTime<Utc>;

    /// Refresh the last-modified timestamp (store-managed)
    fn set_updated_at(&mut self, at: DateTime<Utc>);

    /// Card heading in the list view
    fn title(&self) -> String;

    /// Value of the single filterable field (status, or enquiry type
    /// for contacts)
    fn filter_value(&self) -> &'static str;

    /// Legal filter values, in filter-bar order
    fn filter_values() -> &'static [&'static str];

    /// List-view heading for a filter value (e.g. "Active Banners")
    fn filter_title(filter: Option<&str>) -> String;

    /// Label/value meta rows shown on the record's list card
    fn meta_rows(&self) -> Vec<(&'static str, String)>;

    /// Form rows for a draft (create mode shows the defaults)
    fn form_fields(draft: &Self::Draft) -> Vec<FormField>;

    /// Draft pre-populated from an existing record, for edit mode
    fn to_draft(&self) -> Self::Draft;

    /// Check required-field presence and date ordering
    fn validate(draft: &Self::Draft) -> ValidationReport;

    /// Build a new record from a validated draft
    fn from_draft(id: RecordId, draft: Self::Draft, now: DateTime<Utc>) -> Self;

    /// Replace the domain fields from a validated draft
    ///
    /// Must not touch `id` or `created_at`; the store refreshes
    /// `updated_at` after a successful merge.
    fn apply_draft(&mut self, draft: Self::Draft);

    /// Apply the entity's status-toggle rule in place
    ///
    /// Returns whether anything changed (the contact read-marker is
    /// one-way and no-ops on an already-read enquiry).
    fn toggle_status(&mut self) -> bool {
        false
    }

    /// Fixed sample dataset used when no persisted blob exists
    fn seed() -> Vec<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_is_valid() {
        let report = ValidationReport::new();
        assert!(report.is_valid());
        assert!(report.first_error().is_none());
    }

    #[test]
    fn test_report_preserves_order() {
        let mut report = ValidationReport::new();
        report.push("first");
        report.push("second");
        assert!(!report.is_valid());
        assert_eq!(report.first_error(), Some("first"));
        assert_eq!(report.errors(), &["first", "second"]);
    }

    #[test]
    fn test_require_text_rejects_whitespace() {
        let mut report = ValidationReport::new();
        report.require_text("   ", "Title is required");
        assert_eq!(report.first_error(), Some("Title is required"));
    }
}
