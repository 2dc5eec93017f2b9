//! ConstructPro Store - SQLite-backed blob persistence
//!
//! The panels persist each entity collection as one JSON blob under a
//! well-known key, mirroring the original key-value layout. This crate
//! provides:
//! - SQLite schema with an embedded migrations framework
//! - Blob read/write over a single key-value table
//! - Whole-collection load/save with seed fallback
//! - The admin session blob

pub mod blobs;
pub mod db;
pub mod errors;
pub mod migrations;
pub mod persist;
pub mod session;

// Re-export key types
pub use constructpro_core::Result;
pub use persist::{load_store, save_store};
pub use session::Session;
