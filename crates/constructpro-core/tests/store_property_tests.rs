//! Property tests for the record store's sentinel contracts

use chrono::NaiveDate;
use constructpro_core::model::{Banner, BannerDraft, Page};
use constructpro_core::RecordStore;
use proptest::prelude::*;

fn seeded_store() -> RecordStore<Banner> {
    RecordStore::with_seed()
}

fn valid_draft(title: &str) -> BannerDraft {
    BannerDraft {
        title: title.to_string(),
        page: Some(Page::Homepage),
        start_date: NaiveDate::from_ymd_opt(2025, 5, 1),
        end_date: NaiveDate::from_ymd_opt(2025, 5, 31),
        ..Default::default()
    }
}

proptest! {
    // Seed ids are 1 and 2; anything above is absent.
    #[test]
    fn update_of_absent_id_leaves_collection_unchanged(id in 3u64..1_000_000) {
        let mut store = seeded_store();
        let snapshot = store.records().to_vec();

        let result = store.update(id, valid_draft("Ghost")).unwrap();

        prop_assert!(result.is_none());
        prop_assert_eq!(store.records(), snapshot.as_slice());
    }

    #[test]
    fn delete_of_absent_id_leaves_collection_unchanged(id in 3u64..1_000_000) {
        let mut store = seeded_store();
        let snapshot = store.records().to_vec();

        prop_assert!(!store.delete(id));
        prop_assert_eq!(store.records(), snapshot.as_slice());
    }

    #[test]
    fn toggle_of_absent_id_is_none(id in 3u64..1_000_000) {
        let mut store = seeded_store();
        prop_assert!(store.toggle_status(id).is_none());
    }

    #[test]
    fn create_yields_fresh_id_and_prepends(title in "[A-Za-z ]{1,40}") {
        // require_text rejects blank titles; keep the input non-blank.
        prop_assume!(!title.trim().is_empty());

        let mut store = seeded_store();
        let existing: Vec<u64> = store.records().iter().map(|b| b.id).collect();

        let created = store.create(valid_draft(&title)).unwrap();

        prop_assert!(!existing.contains(&created.id));
        prop_assert_eq!(store.records()[0].id, created.id);
        prop_assert_eq!(store.len(), existing.len() + 1);
    }
}
