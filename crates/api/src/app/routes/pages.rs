use std::sync::Arc;

use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use tracing::debug;

use crate::app::errors::{PAGE_NOT_FOUND, store_error_to_response, text_error};
use crate::app::render;
use crate::app::services::AppServices;

pub async fn home(Extension(services): Extension<Arc<AppServices>>) -> Response {
    match services.store.list_products().await {
        Ok(products) => Html(render::home_page(&products, &services.urls)).into_response(),
        Err(err) => store_error_to_response(err),
    }
}

/// `GET /products/{product_slug}/{city_slug}`
pub async fn product_page(
    Extension(services): Extension<Arc<AppServices>>,
    Path((product_slug, city_slug)): Path<(String, String)>,
) -> Response {
    let product = match services.store.find_product(&product_slug).await {
        Ok(product) => product,
        Err(err) => return store_error_to_response(err),
    };
    let location = match services.store.find_location(&city_slug).await {
        Ok(location) => location,
        Err(err) => return store_error_to_response(err),
    };

    match (product, location) {
        (Some(product), Some(location)) => {
            debug!(product = %product.slug, city = %location.slug, template = product.template(), "rendering page");
            Html(render::product_page(&product, &location)).into_response()
        }
        _ => text_error(StatusCode::NOT_FOUND, PAGE_NOT_FOUND),
    }
}
