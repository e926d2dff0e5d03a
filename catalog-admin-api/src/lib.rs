//! HTTP surface of the catalog admin back-office.
//!
//! [`router`] builds the full `/api` router; the binary in `main.rs` wires it
//! to the environment. Tests build the same router against an in-memory
//! catalog and a temporary media directory.

pub mod error;
pub mod form;
pub mod routes;
pub mod state;

use std::path::Path;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{header, Method};
use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub use error::AppError;
pub use state::AppState;

pub const ENV_PORT: &str = "PORT";
pub const ENV_MEDIA_DIR: &str = "CATALOG_MEDIA_DIR";
pub const ENV_PUBLIC_URL: &str = "CATALOG_PUBLIC_URL";

pub const DEFAULT_PORT: u16 = 5000;
/// Largest accepted request body: a product form with six images.
pub const MAX_BODY_BYTES: usize = 25 * 1024 * 1024;
/// Where the local media backend is served from.
pub const MEDIA_ROUTE: &str = "/media";

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route(
            "/api/sections",
            get(routes::sections::list).post(routes::sections::create),
        )
        .route(
            "/api/sections/{id}",
            put(routes::sections::update).delete(routes::sections::delete),
        )
        .route(
            "/api/categories",
            get(routes::categories::list).post(routes::categories::create),
        )
        .route(
            "/api/categories/{id}",
            put(routes::categories::update).delete(routes::categories::delete),
        )
        .route(
            "/api/subcategories",
            get(routes::subcategories::list).post(routes::subcategories::create),
        )
        .route(
            "/api/subcategories/{id}",
            put(routes::subcategories::update).delete(routes::subcategories::delete),
        )
        .route(
            "/api/products",
            get(routes::products::list).post(routes::products::create),
        )
        .route(
            "/api/products/{id}",
            put(routes::products::update).delete(routes::products::delete),
        )
        .route(
            "/api/banners",
            get(routes::banners::list).post(routes::banners::create),
        )
        .route(
            "/api/banners/{id}",
            put(routes::banners::update).delete(routes::banners::delete),
        )
        .route("/api/auth/login", post(routes::auth::login))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve files written by the local media backend under [`MEDIA_ROUTE`].
pub fn serve_media(router: Router, dir: &Path) -> Router {
    router.nest_service(MEDIA_ROUTE, ServeDir::new(dir))
}
