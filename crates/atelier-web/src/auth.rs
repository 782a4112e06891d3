// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Admin gate.
//!
//! Route-layer middleware for the mutating admin endpoints. Anonymous or
//! expired visitors are redirected to the login form in their resolved
//! language; the gate never answers 401.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::{AppState, locale::PageContext, session::SESSION_COOKIE};

/// Require a live admin session; otherwise redirect to `/admin?lang=..`.
pub async fn require_admin(
    State(state): State<AppState>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Response {
    let authed = jar
        .get(SESSION_COOKIE)
        .map(|cookie| state.sessions.is_admin(cookie.value()))
        .unwrap_or(false);

    if authed {
        return next.run(request).await;
    }

    let lang = request
        .extensions()
        .get::<PageContext>()
        .map(|ctx| ctx.lang)
        .unwrap_or_default();
    Redirect::to(&format!("/admin?lang={lang}")).into_response()
}
