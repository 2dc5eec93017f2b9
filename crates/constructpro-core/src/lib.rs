//! ConstructPro Core - Domain kernel for the admin panels
//!
//! This crate provides the shared machinery behind the four admin panels
//! (banners, careers, contact enquiries, projects):
//! - Entity models with draft types and field validation
//! - A generic ordered `RecordStore` with CRUD and equality filtering
//! - The page controller mapping the URL query surface to views
//! - Text rendering of list, form, preview, and detail views
//!
//! Persistence lives in `constructpro-store`; this crate is purely
//! in-memory and single-threaded.

pub mod controller;
pub mod errors;
pub mod logging;
pub mod model;
pub mod query;
pub mod render;
pub mod store;

// Re-export commonly used types
pub use controller::{Notice, NoticeLevel, PageView};
pub use errors::{PanelError, PanelErrorKind, Result};
pub use model::{Banner, Career, Contact, Project, Record, RecordId, ValidationReport};
pub use query::{Action, PageQuery};
pub use store::RecordStore;
