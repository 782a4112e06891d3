// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The public gallery: listing with kind filter, and item detail.

use axum::{
    Extension,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

use atelier_storage::queries::items;

use crate::{AppState, WebError, locale::PageContext, views};

#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Item kind to filter by; absent, empty or "all" shows everything.
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// `GET /` - the gallery, newest first.
pub async fn index(
    State(state): State<AppState>,
    Extension(ctx): Extension<PageContext>,
    Query(params): Query<ListParams>,
) -> Result<Html<String>, WebError> {
    let kind = params
        .kind
        .as_deref()
        .filter(|k| !k.is_empty())
        .unwrap_or("all");
    let filter = (kind != "all").then_some(kind);
    let items = items::list_items(&state.db, filter).await?;
    Ok(views::public::index_page(&state.catalog, &ctx, &items, kind))
}

/// `GET /item/{id}` - one item, or plain-text 404.
pub async fn item_detail(
    State(state): State<AppState>,
    Extension(ctx): Extension<PageContext>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    match items::get_item(&state.db, id).await? {
        Some(item) => Ok(views::public::item_page(&state.catalog, &ctx, &item).into_response()),
        None => Ok((StatusCode::NOT_FOUND, "Not found").into_response()),
    }
}
