//! On-demand sitemaps, regenerated on every request.

use std::sync::Arc;

use axum::extract::{Extension, Path};
use axum::response::Response;
use citypages_sitemap::{write_index, write_product_sitemap};
use tracing::debug;

use crate::app::errors::{not_found, store_error_to_response};
use crate::app::services::AppServices;
use crate::app::streaming::stream_xml;

/// `GET /sitemap.xml`
pub async fn sitemap_index(Extension(services): Extension<Arc<AppServices>>) -> Response {
    let products = match services.store.list_products().await {
        Ok(products) => products,
        Err(err) => return store_error_to_response(err),
    };

    let urls = services.urls.clone();
    stream_xml(move |sink| write_index(&urls, &products, sink))
}

/// `GET /sitemaps/{product_slug}.xml`
pub async fn product_sitemap(
    Extension(services): Extension<Arc<AppServices>>,
    Path(file): Path<String>,
) -> Response {
    let Some(product_slug) = product_slug_from_file(&file) else {
        return not_found();
    };

    if services.validate_product_slugs {
        match services.store.find_product(product_slug).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                debug!(product_slug, "sitemap requested for unknown product");
                return not_found();
            }
            Err(err) => return store_error_to_response(err),
        }
    }

    let locations = match services.store.list_locations().await {
        Ok(locations) => locations,
        Err(err) => return store_error_to_response(err),
    };

    let urls = services.urls.clone();
    let product_slug = product_slug.to_string();
    stream_xml(move |sink| write_product_sitemap(&urls, &product_slug, &locations, sink))
}

/// `"cpp-film.xml"` -> `Some("cpp-film")`; no suffix or an empty slug -> `None`.
fn product_slug_from_file(file: &str) -> Option<&str> {
    file.strip_suffix(".xml").filter(|slug| !slug.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_is_the_file_name_without_xml_suffix() {
        assert_eq!(product_slug_from_file("cpp-film.xml"), Some("cpp-film"));
        assert_eq!(product_slug_from_file("a.b.xml"), Some("a.b"));
    }

    #[test]
    fn other_files_have_no_slug() {
        assert_eq!(product_slug_from_file("cpp-film"), None);
        assert_eq!(product_slug_from_file("cpp-film.json"), None);
        assert_eq!(product_slug_from_file(".xml"), None);
    }
}
