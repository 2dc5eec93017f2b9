//! Seed reset command
//!
//! Rewrites collection blobs with their fixed seed datasets.
//!
//! Usage: constructpro seed [ENTITY]

use clap::Args;
use constructpro_core::model::{Banner, Career, Contact, Project};
use constructpro_core::{Record, RecordStore};
use rusqlite::Connection;

use super::{CommandResult, Ctx};

#[derive(Debug, Args)]
pub struct SeedArgs {
    /// Entity to reset (banner, career, contact, project); omit for all
    pub entity: Option<String>,
}

/// Execute seed command
pub fn execute(args: SeedArgs, ctx: &Ctx) -> CommandResult {
    let conn = ctx.open_db()?;

    match args.entity.as_deref() {
        None => {
            reset::<Banner>(&conn);
            reset::<Career>(&conn);
            reset::<Contact>(&conn);
            reset::<Project>(&conn);
        }
        Some("banner") => reset::<Banner>(&conn),
        Some("career") => reset::<Career>(&conn),
        Some("contact") => reset::<Contact>(&conn),
        Some("project") => reset::<Project>(&conn),
        Some(other) => {
            return Err(format!(
                "unknown entity '{}' (expected banner, career, contact, or project)",
                other
            )
            .into())
        }
    }

    Ok(())
}

fn reset<R: Record>(conn: &Connection) {
    let store: RecordStore<R> = RecordStore::with_seed();
    constructpro_store::save_store(conn, &store);
    println!("✓ Reset {} collection ({} records)", R::ENTITY, store.len());
}
