use chrono::Utc;
use tracing::debug;

use crate::errors::{PanelError, Result};
use crate::model::{IdStrategy, Record, RecordId};

/// In-memory store for one entity type
///
/// Owns the authoritative ordered collection behind a panel. Newest
/// records sit first (create prepends). Not thread-safe; the panels run
/// on a single-threaded event loop and each process owns its local
/// copy exclusively. Durability lives in `constructpro-store`, which
/// loads and saves the whole collection wholesale.
#[derive(Debug, Clone, Default)]
pub struct RecordStore<R: Record> {
    records: Vec<R>,
}

impl<R: Record> RecordStore<R> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Create a store holding the entity's fixed seed dataset
    pub fn with_seed() -> Self {
        Self::from_records(R::seed())
    }

    /// Create a store from an already-ordered collection
    pub fn from_records(records: Vec<R>) -> Self {
        Self { records }
    }

    /// The full ordered collection
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Consume the store, yielding the collection
    pub fn into_records(self) -> Vec<R> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, or the subset whose filter field equals `filter`
    ///
    /// A single equality scan; no pagination, sorting, or compound
    /// filters. Collections are small (tens to low hundreds) so a full
    /// scan is adequate.
    pub fn list(&self, filter: Option<&str>) -> Vec<&R> {
        match filter {
            None => self.records.iter().collect(),
            Some(value) => self
                .records
                .iter()
                .filter(|r| r.filter_value() == value)
                .collect(),
        }
    }

    /// Get a record by id
    pub fn get(&self, id: RecordId) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Count records whose filter field equals `value` (filter-bar badges)
    pub fn count_matching(&self, value: &str) -> usize {
        self.records
            .iter()
            .filter(|r| r.filter_value() == value)
            .count()
    }

    /// Create a record from a draft
    ///
    /// Validates the draft, assigns a fresh unique id and timestamps,
    /// and prepends the record so it appears first in `list`.
    ///
    /// # Errors
    /// `ValidationFailed` carrying the first validation message.
    pub fn create(&mut self, draft: R::Draft) -> Result<R> {
        let report = R::validate(&draft);
        if let Some(message) = report.first_error() {
            return Err(PanelError::ValidationFailed {
                message: message.to_string(),
            });
        }

        let now = Utc::now();
        let id = self.next_id();
        let record = R::from_draft(id, draft, now);
        debug!(entity = R::ENTITY, id, "record created");
        self.records.insert(0, record.clone());
        Ok(record)
    }

    /// Update a record by id from a full draft
    ///
    /// Replaces the domain fields, preserves `id` and `created_at`, and
    /// refreshes `updated_at`. Returns `Ok(None)` when the id is absent
    /// (collection unchanged) so the caller can skip its dependent view
    /// update.
    ///
    /// # Errors
    /// `ValidationFailed` carrying the first validation message; the
    /// record is untouched.
    pub fn update(&mut self, id: RecordId, draft: R::Draft) -> Result<Option<R>> {
        let report = R::validate(&draft);
        if let Some(message) = report.first_error() {
            return Err(PanelError::ValidationFailed {
                message: message.to_string(),
            });
        }

        let Some(record) = self.records.iter_mut().find(|r| r.id() == id) else {
            return Ok(None);
        };

        record.apply_draft(draft);
        record.set_updated_at(Utc::now());
        debug!(entity = R::ENTITY, id, "record updated");
        Ok(Some(record.clone()))
    }

    /// Delete a record by id
    ///
    /// Returns whether a record was removed; `false` leaves the
    /// collection unchanged.
    pub fn delete(&mut self, id: RecordId) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id() != id);
        let removed = self.records.len() < before;
        if removed {
            debug!(entity = R::ENTITY, id, "record deleted");
        }
        removed
    }

    /// Apply the entity's status-toggle rule to a record
    ///
    /// Returns the (possibly unchanged) record, or `None` when the id
    /// is absent. `updated_at` is refreshed only when the toggle
    /// actually changed something (the contact read-marker is one-way).
    pub fn toggle_status(&mut self, id: RecordId) -> Option<R> {
        let record = self.records.iter_mut().find(|r| r.id() == id)?;
        if record.toggle_status() {
            record.set_updated_at(Utc::now());
            debug!(entity = R::ENTITY, id, "status toggled");
        }
        Some(record.clone())
    }

    /// Derive a fresh id not present in the collection
    fn next_id(&self) -> RecordId {
        let mut candidate = match R::ID_STRATEGY {
            IdStrategy::Timestamp => Utc::now().timestamp_millis().max(1) as RecordId,
            IdStrategy::Sequential => {
                self.records.iter().map(Record::id).max().unwrap_or(0) + 1
            }
        };
        // Timestamp ids collide when two creates land in the same
        // millisecond; bump until unused.
        while self.get(candidate).is_some() {
            candidate += 1;
        }
        candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Banner, BannerDraft, Contact, ContactDraft, Page};
    use chrono::NaiveDate;

    fn valid_banner_draft(title: &str) -> BannerDraft {
        BannerDraft {
            title: title.to_string(),
            page: Some(Page::Homepage),
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1),
            end_date: NaiveDate::from_ymd_opt(2025, 1, 31),
            ..Default::default()
        }
    }

    fn valid_contact_draft(name: &str) -> ContactDraft {
        ContactDraft {
            full_name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            message: "Hello".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_prepends_and_assigns_unique_id() {
        let mut store: RecordStore<Banner> = RecordStore::with_seed();
        let existing: Vec<_> = store.records().iter().map(|b| b.id).collect();

        let created = store.create(valid_banner_draft("New Year Sale")).unwrap();

        assert!(!existing.contains(&created.id));
        assert_eq!(store.list(None)[0].id, created.id);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_create_same_millisecond_ids_stay_unique() {
        let mut store: RecordStore<Banner> = RecordStore::new();
        let a = store.create(valid_banner_draft("First")).unwrap();
        let b = store.create(valid_banner_draft("Second")).unwrap();
        let c = store.create(valid_banner_draft("Third")).unwrap();
        assert_ne!(a.id, b.id);
        assert_ne!(b.id, c.id);
        assert_ne!(a.id, c.id);
    }

    #[test]
    fn test_create_rejects_invalid_draft() {
        let mut store: RecordStore<Banner> = RecordStore::new();
        let result = store.create(BannerDraft::default());
        assert!(matches!(
            result,
            Err(PanelError::ValidationFailed { .. })
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_sequential_ids_for_contacts() {
        let mut store: RecordStore<Contact> = RecordStore::with_seed();
        let created = store.create(valid_contact_draft("Asha")).unwrap();
        assert_eq!(created.id, 3);
        assert_eq!(created.enquiry_id, "ENQ-0003");
    }

    #[test]
    fn test_update_missing_id_is_sentinel() {
        let mut store: RecordStore<Banner> = RecordStore::with_seed();
        let snapshot = store.records().to_vec();

        let result = store.update(999_999, valid_banner_draft("Ghost")).unwrap();

        assert!(result.is_none());
        assert_eq!(store.records(), snapshot.as_slice());
    }

    #[test]
    fn test_update_preserves_identity_and_advances_updated_at() {
        let mut store: RecordStore<Banner> = RecordStore::with_seed();
        let original = store.records()[0].clone();

        let mut draft = original.to_draft();
        draft.title = "Renamed".to_string();
        let updated = store.update(original.id, draft).unwrap().unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.created_at, original.created_at);
        assert!(updated.updated_at > original.updated_at);
        assert_eq!(updated.title, "Renamed");
    }

    #[test]
    fn test_delete_missing_id_leaves_collection_unchanged() {
        let mut store: RecordStore<Banner> = RecordStore::with_seed();
        assert!(!store.delete(999_999));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_delete_existing() {
        let mut store: RecordStore<Banner> = RecordStore::with_seed();
        assert!(store.delete(1));
        assert_eq!(store.len(), 1);
        assert!(store.get(1).is_none());
    }

    #[test]
    fn test_filter_seed_by_scheduled() {
        let store: RecordStore<Banner> = RecordStore::with_seed();
        let scheduled = store.list(Some("scheduled"));
        assert_eq!(scheduled.len(), 1);
        assert_eq!(scheduled[0].title, "Project Showcase");
    }

    #[test]
    fn test_count_matching() {
        let store: RecordStore<Banner> = RecordStore::with_seed();
        assert_eq!(store.count_matching("active"), 1);
        assert_eq!(store.count_matching("scheduled"), 1);
        assert_eq!(store.count_matching("inactive"), 0);
    }

    #[test]
    fn test_toggle_noop_keeps_updated_at() {
        let mut store: RecordStore<Contact> = RecordStore::with_seed();
        // Seed contact 2 is already read; the one-way marker must not
        // touch updated_at.
        let before = store.get(2).unwrap().updated_at;
        let after = store.toggle_status(2).unwrap();
        assert_eq!(after.updated_at, before);
    }
}
