//! HTTP application wiring (Axum router + service wiring).
//!
//! - `services.rs`: which store backs the server, plus request-time settings
//! - `routes/`: HTTP routes + handlers (sitemaps, pages, system)
//! - `streaming.rs`: chunked XML response bodies
//! - `render.rs`: HTML for pages
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub mod errors;
pub mod render;
pub mod routes;
pub mod services;
pub mod streaming;

pub use services::{AppServices, build_services, open_store};

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
pub fn build_app(services: AppServices) -> Router {
    let static_files = ServeDir::new(&services.public_dir);
    let services = Arc::new(services);

    routes::router()
        .fallback_service(static_files)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(Extension(services)),
        )
}
