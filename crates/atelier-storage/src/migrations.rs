// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Schema migrations, embedded with refinery.
//!
//! The SQL files under `migrations/` are baked into the binary by
//! `embed_migrations!` and applied on every database open, so a fresh
//! database file bootstraps itself.

use atelier_core::AtelierError;

mod embedded {
    use refinery::embed_migrations;
    embed_migrations!("migrations");
}

/// Apply any migrations the database has not seen yet.
///
/// Refinery records applied versions in its `refinery_schema_history` table.
pub fn run_migrations(conn: &mut rusqlite::Connection) -> Result<(), AtelierError> {
    embedded::migrations::runner()
        .run(conn)
        .map_err(|e| AtelierError::Storage {
            source: Box::new(e),
        })?;
    Ok(())
}
