//! Whole-collection load and save with seed fallback
//!
//! The panels treat the blob store as best-effort: a missing or corrupt
//! collection blob yields the entity's seed dataset, and a failed save
//! is logged and dropped. No storage failure ever reaches the caller as
//! an error value.

use constructpro_core::{Record, RecordStore};
use rusqlite::Connection;
use tracing::{error, warn};

use crate::blobs::{read_blob, write_blob};

/// Load an entity's collection from its blob
///
/// A missing blob (first run) or an unreadable one (corrupt JSON, sqlite
/// failure) falls back to the entity's seed dataset. The fallback is
/// in-memory only; the blob is not rewritten until the next save.
pub fn load_store<R: Record>(conn: &Connection) -> RecordStore<R> {
    let raw = match read_blob(conn, R::STORE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return RecordStore::with_seed(),
        Err(err) => {
            warn!(key = R::STORE_KEY, %err, "blob read failed, using seed data");
            return RecordStore::with_seed();
        }
    };

    match serde_json::from_str::<Vec<R>>(&raw) {
        Ok(records) => RecordStore::from_records(records),
        Err(err) => {
            warn!(key = R::STORE_KEY, %err, "corrupt blob, using seed data");
            RecordStore::with_seed()
        }
    }
}

/// Save an entity's collection to its blob
///
/// The whole ordered collection is serialized and written wholesale.
/// Failures are logged and dropped; the in-memory store stays
/// authoritative for the rest of the session.
pub fn save_store<R: Record>(conn: &Connection, store: &RecordStore<R>) {
    let raw = match serde_json::to_string(store.records()) {
        Ok(raw) => raw,
        Err(err) => {
            error!(key = R::STORE_KEY, %err, "blob serialization failed, changes not persisted");
            return;
        }
    };

    if let Err(err) = write_blob(conn, R::STORE_KEY, &raw) {
        error!(key = R::STORE_KEY, %err, "blob write failed, changes not persisted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blobs::write_blob;
    use crate::migrations::apply_migrations;
    use constructpro_core::model::{Banner, BannerStatus};

    fn setup() -> Connection {
        let mut conn = Connection::open_in_memory().unwrap();
        apply_migrations(&mut conn).unwrap();
        conn
    }

    #[test]
    fn test_missing_blob_loads_seed() {
        let conn = setup();
        let store: RecordStore<Banner> = load_store(&conn);
        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[0].title, "Summer Construction Sale");
    }

    #[test]
    fn test_corrupt_blob_loads_seed() {
        let conn = setup();
        write_blob(&conn, Banner::STORE_KEY, "{not json").unwrap();
        let store: RecordStore<Banner> = load_store(&conn);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_save_load_round_trip() {
        let conn = setup();
        let mut store: RecordStore<Banner> = RecordStore::with_seed();
        store.toggle_status(1).unwrap();
        save_store(&conn, &store);

        let reloaded: RecordStore<Banner> = load_store(&conn);
        assert_eq!(reloaded.records(), store.records());
        assert_eq!(reloaded.get(1).unwrap().status, BannerStatus::Inactive);
    }

    #[test]
    fn test_empty_collection_persists_as_empty() {
        // An explicitly emptied collection must not resurrect the seed.
        let conn = setup();
        let store: RecordStore<Banner> = RecordStore::new();
        save_store(&conn, &store);

        let reloaded: RecordStore<Banner> = load_store(&conn);
        assert!(reloaded.is_empty());
    }
}
