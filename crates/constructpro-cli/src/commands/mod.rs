//! CLI command modules and shared execution context

use rusqlite::Connection;
use std::path::PathBuf;

pub mod auth;
pub mod banner;
pub mod career;
pub mod contact;
pub mod page;
pub mod parse;
pub mod project;
pub mod seed;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Shared context resolved once from the global flags
#[derive(Debug, Clone)]
pub struct Ctx {
    pub data_dir: PathBuf,
}

impl Ctx {
    /// Resolve the data directory: flag, then CONSTRUCTPRO_DATA_DIR,
    /// then `.constructpro/`
    pub fn new(flag: Option<PathBuf>) -> Self {
        let data_dir = flag
            .or_else(|| std::env::var_os("CONSTRUCTPRO_DATA_DIR").map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(".constructpro"));
        Self { data_dir }
    }

    /// Open the panel database, applying pending migrations
    pub fn open_db(&self) -> Result<Connection, Box<dyn std::error::Error>> {
        std::fs::create_dir_all(&self.data_dir)?;
        let mut conn = constructpro_store::db::open(self.data_dir.join("panels.db"))?;
        constructpro_store::db::configure(&conn)?;
        constructpro_store::migrations::apply_migrations(&mut conn)?;
        Ok(conn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins_over_default() {
        let ctx = Ctx::new(Some(PathBuf::from("/tmp/panels")));
        assert_eq!(ctx.data_dir, PathBuf::from("/tmp/panels"));
    }

    #[test]
    fn test_default_data_dir() {
        // Only valid when the env var is unset in the test environment.
        if std::env::var_os("CONSTRUCTPRO_DATA_DIR").is_none() {
            let ctx = Ctx::new(None);
            assert_eq!(ctx.data_dir, PathBuf::from(".constructpro"));
        }
    }
}
