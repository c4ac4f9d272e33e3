use axum::{Router, routing::get};

pub mod pages;
pub mod sitemaps;
pub mod system;

/// Router for every dynamic endpoint. Anything else falls through to the
/// static file service.
pub fn router() -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/health", get(system::health))
        .route("/sitemap.xml", get(sitemaps::sitemap_index))
        .route("/sitemaps/:file", get(sitemaps::product_sitemap))
        .route("/products/:product_slug/:city_slug", get(pages::product_page))
}
