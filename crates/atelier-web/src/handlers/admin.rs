// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Admin panel: login, logout, and item CRUD with optional file upload.
//!
//! `GET /admin`, `POST /admin/login` and `POST /admin/logout` are reachable
//! anonymously; the mutating routes sit behind the
//! [`require_admin`](crate::auth::require_admin) gate.

use atelier_core::{AtelierError, ItemDraft};
use atelier_storage::queries::items;
use axum::{
    Extension, Form,
    extract::{Multipart, Path, State, multipart::MultipartError},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::{AppState, WebError, locale::PageContext, session::SESSION_COOKIE, uploads, views};

/// Login failure message, shown in all three languages at once.
const WRONG_CREDENTIALS: &str =
    "بيانات الدخول غير صحيحة / Wrong credentials / Credenziali errate";

/// Save-without-kind message, Arabic only.
const CHOOSE_TYPE_ERROR: &str = "اختر نوع المحتوى.";

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub pass: String,
}

/// `GET /admin` - the item table for admins, the login form for everyone
/// else. Always 200; the gate never reveals which of the two it served via
/// the status code.
pub async fn admin_panel(
    State(state): State<AppState>,
    Extension(ctx): Extension<PageContext>,
    jar: CookieJar,
) -> Result<Html<String>, WebError> {
    let authed = jar
        .get(SESSION_COOKIE)
        .map(|cookie| state.sessions.is_admin(cookie.value()))
        .unwrap_or(false);

    if authed {
        let items = items::list_items(&state.db, None).await?;
        Ok(views::admin::panel_page(&state.catalog, &ctx, &items))
    } else {
        Ok(views::admin::login_page(&state.catalog, &ctx, None))
    }
}

/// `POST /admin/login` - exact-match credential check.
///
/// Success sets the signed session cookie and redirects to the panel;
/// failure re-renders the login form with an error, still as 200.
pub async fn login(
    State(state): State<AppState>,
    Extension(ctx): Extension<PageContext>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    let admin = &state.config.admin;
    let ok = form.user == admin.user && form.pass == admin.pass;
    if !ok {
        warn!(user = %form.user, "failed admin login");
        return views::admin::login_page(&state.catalog, &ctx, Some(WRONG_CREDENTIALS))
            .into_response();
    }

    info!(user = %form.user, "admin logged in");
    let value = state.sessions.create_admin();
    let cookie = Cookie::build((SESSION_COOKIE, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();
    (jar.add(cookie), Redirect::to(&format!("/admin?lang={}", ctx.lang))).into_response()
}

/// `POST /admin/logout` - destroy the session and go back to the gallery.
pub async fn logout(
    State(state): State<AppState>,
    Extension(ctx): Extension<PageContext>,
    jar: CookieJar,
) -> (CookieJar, Redirect) {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        state.sessions.destroy(cookie.value());
    }
    let jar = jar.remove(Cookie::build((SESSION_COOKIE, "")).path("/").build());
    (jar, Redirect::to(&format!("/?lang={}", ctx.lang)))
}

/// `GET /admin/new` - blank item form.
pub async fn new_item_form(
    State(state): State<AppState>,
    Extension(ctx): Extension<PageContext>,
) -> Html<String> {
    views::admin::edit_page(&state.catalog, &ctx, None, None)
}

/// `GET /admin/edit/{id}` - prefilled item form, or plain-text 404.
pub async fn edit_item_form(
    State(state): State<AppState>,
    Extension(ctx): Extension<PageContext>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    match items::get_item(&state.db, id).await? {
        Some(item) => {
            Ok(views::admin::edit_page(&state.catalog, &ctx, Some(&item), None).into_response())
        }
        None => Ok((StatusCode::NOT_FOUND, "Not found").into_response()),
    }
}

/// `POST /admin/save` - create or update an item from the multipart form.
///
/// Fields are consumed in arrival order, so an attached file is stored
/// before the kind is validated; a save rejected for a missing kind keeps
/// the stored file on disk, unreferenced. An empty `file_name` means the
/// file input was left blank and the existing path, if any, is kept.
pub async fn save(
    State(state): State<AppState>,
    Extension(ctx): Extension<PageContext>,
    mut multipart: Multipart,
) -> Result<Response, WebError> {
    let mut raw_id: Option<String> = None;
    let mut draft = ItemDraft::default();
    let mut uploaded: Option<String> = None;
    let mut existing: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(malformed)? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        if name == "file" {
            let original = field.file_name().unwrap_or("").to_string();
            if original.is_empty() {
                continue;
            }
            let bytes = field.bytes().await.map_err(malformed)?;
            uploaded = Some(uploads::store_upload(&state.uploads_dir(), &original, &bytes).await?);
            continue;
        }

        let value = field.text().await.map_err(malformed)?;
        match name.as_str() {
            "id" => raw_id = non_empty(value),
            "type" => draft.kind = value,
            "title_ar" => draft.title_ar = non_empty(value),
            "title_en" => draft.title_en = non_empty(value),
            "title_it" => draft.title_it = non_empty(value),
            "body_ar" => draft.body_ar = non_empty(value),
            "body_en" => draft.body_en = non_empty(value),
            "body_it" => draft.body_it = non_empty(value),
            "existing_file_path" => existing = non_empty(value),
            _ => debug!(field = %name, "ignoring unknown form field"),
        }
    }

    draft.file_path = uploaded.or(existing);

    if draft.kind.is_empty() {
        return Ok(
            views::admin::edit_page(&state.catalog, &ctx, None, Some(CHOOSE_TYPE_ERROR))
                .into_response(),
        );
    }

    match raw_id {
        Some(raw) => {
            // A non-numeric id matches no row; the save becomes a no-op.
            if let Ok(id) = raw.trim().parse::<i64>() {
                items::update_item(&state.db, id, &draft).await?;
                info!(id, kind = %draft.kind, "item updated");
            }
        }
        None => {
            let id = items::create_item(&state.db, &draft).await?;
            info!(id, kind = %draft.kind, "item created");
        }
    }

    Ok(Redirect::to(&format!("/admin?lang={}", ctx.lang)).into_response())
}

/// `POST /admin/delete/{id}` - remove the item and its stored file.
///
/// The row is the source of truth: the file is removed first, best-effort,
/// and the DELETE runs regardless. Unknown ids fall through to the same
/// redirect.
pub async fn delete(
    State(state): State<AppState>,
    Extension(ctx): Extension<PageContext>,
    Path(id): Path<i64>,
) -> Result<Redirect, WebError> {
    if let Some(item) = items::get_item(&state.db, id).await?
        && let Some(file_path) = item.file_path.as_deref()
    {
        uploads::remove_upload(&state.public_dir(), file_path).await;
    }

    items::delete_item(&state.db, id).await?;
    info!(id, "item deleted");
    Ok(Redirect::to(&format!("/admin?lang={}", ctx.lang)))
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

fn malformed(err: MultipartError) -> WebError {
    WebError(AtelierError::Upload {
        message: "malformed multipart form".to_string(),
        source: Some(Box::new(err)),
    })
}
