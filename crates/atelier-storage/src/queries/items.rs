// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Item CRUD operations.
//!
//! The `type` column keeps its SQL name; the Rust side calls it `kind`.
//! Every statement binds with `params![]`, never string interpolation.

use atelier_core::AtelierError;
use chrono::{SecondsFormat, Utc};
use rusqlite::params;

use crate::database::Database;
use crate::models::{Item, ItemDraft};

fn map_item_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Item> {
    Ok(Item {
        id: row.get(0)?,
        kind: row.get(1)?,
        title_ar: row.get(2)?,
        title_en: row.get(3)?,
        title_it: row.get(4)?,
        body_ar: row.get(5)?,
        body_en: row.get(6)?,
        body_it: row.get(7)?,
        file_path: row.get(8)?,
        created_at: row.get(9)?,
    })
}

/// List items newest-first, optionally filtered to one kind.
pub async fn list_items(db: &Database, kind: Option<&str>) -> Result<Vec<Item>, AtelierError> {
    let kind = kind.map(|k| k.to_string());
    db.connection()
        .call(move |conn| {
            let mut items = Vec::new();
            match &kind {
                Some(kind_filter) => {
                    let mut stmt = conn.prepare(
                        "SELECT id, type, title_ar, title_en, title_it, body_ar, body_en, body_it, file_path, created_at
                         FROM items WHERE type = ?1 ORDER BY id DESC",
                    )?;
                    let rows = stmt.query_map(params![kind_filter], map_item_row)?;
                    for row in rows {
                        items.push(row?);
                    }
                }
                None => {
                    let mut stmt = conn.prepare(
                        "SELECT id, type, title_ar, title_en, title_it, body_ar, body_en, body_it, file_path, created_at
                         FROM items ORDER BY id DESC",
                    )?;
                    let rows = stmt.query_map([], map_item_row)?;
                    for row in rows {
                        items.push(row?);
                    }
                }
            }
            Ok(items)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Get an item by ID.
pub async fn get_item(db: &Database, id: i64) -> Result<Option<Item>, AtelierError> {
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, type, title_ar, title_en, title_it, body_ar, body_en, body_it, file_path, created_at
                 FROM items WHERE id = ?1",
            )?;
            let result = stmt.query_row(params![id], map_item_row);
            match result {
                Ok(item) => Ok(Some(item)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e.into()),
            }
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Insert a new item with a fresh creation timestamp.
/// Returns the auto-generated row ID.
pub async fn create_item(db: &Database, draft: &ItemDraft) -> Result<i64, AtelierError> {
    let draft = draft.clone();
    let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO items (type, title_ar, title_en, title_it, body_ar, body_en, body_it, file_path, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                params![
                    draft.kind,
                    draft.title_ar,
                    draft.title_en,
                    draft.title_it,
                    draft.body_ar,
                    draft.body_en,
                    draft.body_it,
                    draft.file_path,
                    created_at,
                ],
            )?;
            Ok(conn.last_insert_rowid())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Overwrite an item's kind and localized fields.
///
/// `file_path` is only replaced when the draft carries a candidate path;
/// a `None` keeps whatever the row already has (`COALESCE` on the SQL side).
/// `created_at` is never touched.
pub async fn update_item(db: &Database, id: i64, draft: &ItemDraft) -> Result<(), AtelierError> {
    let draft = draft.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "UPDATE items SET type = ?1, title_ar = ?2, title_en = ?3, title_it = ?4,
                        body_ar = ?5, body_en = ?6, body_it = ?7,
                        file_path = COALESCE(?8, file_path)
                 WHERE id = ?9",
                params![
                    draft.kind,
                    draft.title_ar,
                    draft.title_en,
                    draft.title_it,
                    draft.body_ar,
                    draft.body_en,
                    draft.body_it,
                    draft.file_path,
                    id,
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Delete an item row. Deleting an unknown ID is a no-op, not an error.
pub async fn delete_item(db: &Database, id: i64) -> Result<(), AtelierError> {
    db.connection()
        .call(move |conn| {
            conn.execute("DELETE FROM items WHERE id = ?1", params![id])?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}
