// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite persistence layer for the Atelier portfolio site.
//!
//! A single WAL-mode database holds the `items` table. All access goes
//! through one `tokio-rusqlite` connection, so writes serialize without any
//! extra locking; migrations are embedded and run on open.

pub mod database;
pub mod migrations;
pub mod models;
pub mod queries;

pub use database::Database;
pub use models::*;
