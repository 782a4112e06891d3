// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Locale middleware.
//!
//! Resolves the page language for every request (query > cookie >
//! Accept-Language > Arabic) and stores a [`PageContext`] in the request
//! extensions for the admin gate and the handlers. When the request carried
//! an explicit `lang` query parameter the resolved language is persisted in
//! a one-year cookie on the way out.

use atelier_core::Language;
use axum::{
    extract::{Request, State},
    http::{HeaderValue, header},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;

use crate::AppState;

/// Name of the language preference cookie.
pub const LANG_COOKIE: &str = "lang";

const LANG_COOKIE_MAX_AGE_SECS: u64 = 31_536_000; // one year

/// Per-request rendering context, inserted by [`locale_middleware`].
#[derive(Debug, Clone)]
pub struct PageContext {
    /// Resolved page language.
    pub lang: Language,
    /// Site name for the resolved language.
    pub site_name: String,
    /// Request path, for nav highlighting.
    pub active_path: String,
    /// Query string with any `lang` parameter removed, for links that must
    /// preserve the current view while switching language.
    pub preserved_query: String,
}

/// Resolve the request language and attach a [`PageContext`].
pub async fn locale_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let query = request.uri().query().unwrap_or("").to_string();
    let lang_param = query_param(&query, LANG_COOKIE);
    let cookie_lang = CookieJar::from_headers(request.headers())
        .get(LANG_COOKIE)
        .map(|c| c.value().to_string());
    let accept_language = request
        .headers()
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string());

    let resolution = atelier_i18n::resolve(
        lang_param.as_deref(),
        cookie_lang.as_deref(),
        accept_language.as_deref(),
    );

    let ctx = PageContext {
        lang: resolution.lang,
        site_name: state.config.site.display_name(resolution.lang).to_string(),
        active_path: request.uri().path().to_string(),
        preserved_query: strip_lang_param(&query),
    };
    request.extensions_mut().insert(ctx);

    let mut response = next.run(request).await;

    if resolution.explicit {
        // Persist the *resolved* language, which may differ from the raw
        // parameter when the value was invalid.
        let cookie = format!(
            "{LANG_COOKIE}={}; Path=/; Max-Age={LANG_COOKIE_MAX_AGE_SECS}; SameSite=Lax",
            resolution.lang
        );
        if let Ok(value) = HeaderValue::from_str(&cookie) {
            response.headers_mut().append(header::SET_COOKIE, value);
        }
    }

    response
}

/// First value of a query parameter, `Some("")` when present without value.
///
/// The parameters this site reads (`lang`, `type`) never carry characters
/// that need percent-decoding, so none is attempted.
pub(crate) fn query_param(query: &str, name: &str) -> Option<String> {
    for pair in query.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if key == name {
            return Some(value.to_string());
        }
    }
    None
}

fn strip_lang_param(query: &str) -> String {
    query
        .split('&')
        .filter(|pair| {
            let key = pair.split_once('=').map(|(k, _)| k).unwrap_or(pair);
            !pair.is_empty() && key != LANG_COOKIE
        })
        .collect::<Vec<_>>()
        .join("&")
}
