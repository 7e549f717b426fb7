//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the login proxy and health check with Leptos SSR
//! rendering under a single Axum router. The sign-in page lives at `/login`;
//! `/` redirects there. Dashboards and `/reset-password` are served elsewhere.

pub mod auth;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Routes that do not depend on Leptos configuration.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(redirect_root_to_login))
        .route(portal_auth::LOGIN_ENDPOINT, post(auth::login))
        .route("/healthz", get(healthz))
        .with_state(state)
}

async fn redirect_root_to_login() -> Redirect {
    Redirect::temporary("/login")
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Full host: API routes + Leptos SSR + compiled assets under `/pkg`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section and no `LEPTOS_*` env).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}
