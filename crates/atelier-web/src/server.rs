// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Router assembly and the HTTP server loop.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
};
use tokio_util::sync::CancellationToken;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;

use atelier_core::AtelierError;

use crate::{
    AppState,
    auth::require_admin,
    handlers::{admin, public},
    locale::locale_middleware,
};

/// Build the full application router.
///
/// Static files under `/public` are served directly and skip language
/// resolution. The body limit is lifted on `/admin/save` only; every other
/// route keeps the axum default.
pub fn build_router(state: AppState) -> Router {
    let open = Router::new()
        .route("/", get(public::index))
        .route("/item/{id}", get(public::item_detail))
        .route("/admin", get(admin::admin_panel))
        .route("/admin/login", post(admin::login))
        .route("/admin/logout", post(admin::logout));

    let gated = Router::new()
        .route("/admin/new", get(admin::new_item_form))
        .route("/admin/edit/{id}", get(admin::edit_item_form))
        .route(
            "/admin/save",
            post(admin::save).layer(DefaultBodyLimit::disable()),
        )
        .route("/admin/delete/{id}", post(admin::delete))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_admin,
        ));

    Router::new()
        .merge(open)
        .merge(gated)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            locale_middleware,
        ))
        .nest_service(
            "/public",
            ServeDir::new(&state.config.uploads.public_dir),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until the cancellation token fires.
pub async fn start_server(
    state: AppState,
    shutdown: CancellationToken,
) -> Result<(), AtelierError> {
    let addr = format!(
        "{}:{}",
        state.config.server.host, state.config.server.port
    );
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AtelierError::Server {
            message: format!("cannot bind {addr}"),
            source: Some(Box::new(e)),
        })?;
    info!(%addr, "atelier listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .map_err(|e| AtelierError::Server {
            message: "server loop failed".to_string(),
            source: Some(Box::new(e)),
        })
}
