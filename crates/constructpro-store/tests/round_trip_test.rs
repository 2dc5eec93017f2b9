// Integration tests for on-disk persistence.
// Collections must round-trip order and field values exactly across
// reopened connections, and fall back to seed data when a blob is
// missing or corrupt.

use constructpro_core::model::{Banner, BannerDraft, Contact, Page, Project};
use constructpro_core::{Record, RecordStore};
use rusqlite::Connection;
use tempfile::TempDir;

fn open_db(dir: &TempDir) -> Connection {
    let mut conn = constructpro_store::db::open(dir.path().join("panels.db")).unwrap();
    constructpro_store::db::configure(&conn).unwrap();
    constructpro_store::migrations::apply_migrations(&mut conn).unwrap();
    conn
}

fn valid_banner_draft(title: &str) -> BannerDraft {
    BannerDraft {
        title: title.to_string(),
        page: Some(Page::Homepage),
        start_date: chrono::NaiveDate::from_ymd_opt(2025, 4, 1),
        end_date: chrono::NaiveDate::from_ymd_opt(2025, 4, 30),
        ..Default::default()
    }
}

#[test]
fn test_save_reopen_load_identical() {
    let dir = TempDir::new().unwrap();

    let saved = {
        let conn = open_db(&dir);
        let mut store: RecordStore<Banner> = constructpro_store::load_store(&conn);
        store.create(valid_banner_draft("April Campaign")).unwrap();
        constructpro_store::save_store(&conn, &store);
        store.into_records()
    };

    // Reopen the database file fresh
    let conn = open_db(&dir);
    let reloaded: RecordStore<Banner> = constructpro_store::load_store(&conn);

    assert_eq!(reloaded.records(), saved.as_slice());
    assert_eq!(reloaded.records()[0].title, "April Campaign");
    assert_eq!(reloaded.len(), 3);
}

#[test]
fn test_collections_are_independent() {
    let dir = TempDir::new().unwrap();
    let conn = open_db(&dir);

    let mut banners: RecordStore<Banner> = constructpro_store::load_store(&conn);
    banners.delete(1);
    constructpro_store::save_store(&conn, &banners);

    // Other entity blobs are untouched; contacts still load their seed.
    let contacts: RecordStore<Contact> = constructpro_store::load_store(&conn);
    assert_eq!(contacts.len(), 2);

    let projects: RecordStore<Project> = constructpro_store::load_store(&conn);
    assert_eq!(projects.len(), 2);
}

#[test]
fn test_corrupt_blob_falls_back_to_seed() {
    let dir = TempDir::new().unwrap();
    let conn = open_db(&dir);

    constructpro_store::blobs::write_blob(&conn, Banner::STORE_KEY, "[{\"id\": ]").unwrap();

    let store: RecordStore<Banner> = constructpro_store::load_store(&conn);
    assert_eq!(store.len(), 2);
    assert_eq!(store.records()[1].title, "Project Showcase");
}

#[test]
fn test_blob_json_shape_matches_original_layout() {
    let dir = TempDir::new().unwrap();
    let conn = open_db(&dir);

    let store: RecordStore<Banner> = RecordStore::with_seed();
    constructpro_store::save_store(&conn, &store);

    let raw = constructpro_store::blobs::read_blob(&conn, Banner::STORE_KEY)
        .unwrap()
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert!(json.is_array());
    assert_eq!(json[0]["type"], "image");
    assert_eq!(json[0]["isVisible"], true);
    assert_eq!(json[0]["ctaUrl"], "/contact");
}
