// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Handler-side error wrapper.
//!
//! Request-level outcomes (not found, bad credentials, validation) are
//! ordinary responses, not errors. `WebError` exists for infrastructure
//! failures surfacing inside a handler: it logs the cause and answers with
//! a plain 500 so no internal detail leaks into the page.

use atelier_core::AtelierError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// An infrastructure failure during request handling.
#[derive(Debug)]
pub struct WebError(pub AtelierError);

impl From<AtelierError> for WebError {
    fn from(err: AtelierError) -> Self {
        WebError(err)
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
