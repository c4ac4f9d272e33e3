use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use citypages_api::app::{AppServices, build_app};
use citypages_core::{Location, Product};
use citypages_infra::{InMemoryReferenceStore, ReferenceStore, StoreError};
use citypages_sitemap::SiteUrls;
use reqwest::StatusCode;

const BASE: &str = "https://cities.example.com";

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(services: AppServices) -> Self {
        // Same router as prod, bound to an ephemeral port.
        let app = build_app(services);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    async fn get(&self, path: &str) -> reqwest::Response {
        reqwest::Client::new()
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .unwrap()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn location(city: &str, country: &str) -> Location {
    Location::from_city(city, "N/A", country).unwrap()
}

fn reference_store() -> InMemoryReferenceStore {
    InMemoryReferenceStore::with_data(
        vec![
            Product::new("CPP Film", "cpp-film", "Cast Polypropylene film.")
                .with_features(["High Gloss"])
                .with_template("cpp_film_page"),
            Product::new("HM Film", "hm-film", "High Molecular weight film."),
        ],
        vec![
            location("Mumbai", "India"),
            location("Lima", "Peru"),
            location("Oslo", "Norway"),
        ],
    )
}

fn services_with(store: impl ReferenceStore + 'static, public_dir: &Path) -> AppServices {
    AppServices::new(Arc::new(store), SiteUrls::new(BASE).unwrap(), public_dir)
}

async fn spawn_default() -> (TestServer, tempfile::TempDir) {
    let public = tempfile::tempdir().unwrap();
    let srv = TestServer::spawn(services_with(reference_store(), public.path())).await;
    (srv, public)
}

fn locs(xml: &str) -> Vec<String> {
    xml.split("<loc>")
        .skip(1)
        .filter_map(|rest| rest.split("</loc>").next())
        .map(str::to_string)
        .collect()
}

struct UnavailableStore;

#[async_trait]
impl ReferenceStore for UnavailableStore {
    async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        Err(StoreError::unavailable("connection refused"))
    }

    async fn list_locations(&self) -> Result<Vec<Location>, StoreError> {
        Err(StoreError::unavailable("connection refused"))
    }

    async fn find_product(&self, _slug: &str) -> Result<Option<Product>, StoreError> {
        Err(StoreError::unavailable("connection refused"))
    }

    async fn find_location(&self, _slug: &str) -> Result<Option<Location>, StoreError> {
        Err(StoreError::unavailable("connection refused"))
    }
}

#[tokio::test]
async fn health_is_ok() {
    let (srv, _public) = spawn_default().await;
    assert_eq!(srv.get("/health").await.status(), StatusCode::OK);
}

#[tokio::test]
async fn sitemap_index_lists_one_sitemap_per_product() {
    let (srv, _public) = spawn_default().await;

    let res = srv.get("/sitemap.xml").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()["content-type"], "application/xml");

    let body = res.text().await.unwrap();
    assert!(body.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(body.contains("<sitemapindex xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">"));
    assert_eq!(
        locs(&body),
        vec![
            format!("{BASE}/sitemaps/cpp-film.xml"),
            format!("{BASE}/sitemaps/hm-film.xml"),
        ]
    );
}

#[tokio::test]
async fn product_sitemap_lists_every_location() {
    let (srv, _public) = spawn_default().await;

    let res = srv.get("/sitemaps/cpp-film.xml").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()["content-type"], "application/xml");

    let body = res.text().await.unwrap();
    assert!(body.contains("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">"));
    assert_eq!(
        locs(&body),
        vec![
            format!("{BASE}/products/cpp-film/mumbai"),
            format!("{BASE}/products/cpp-film/lima"),
            format!("{BASE}/products/cpp-film/oslo"),
        ]
    );
    assert_eq!(body.matches("<changefreq>weekly</changefreq>").count(), 3);
    assert_eq!(body.matches("<priority>0.8</priority>").count(), 3);
}

#[tokio::test]
async fn unknown_product_sitemap_passes_through_by_default() {
    let (srv, _public) = spawn_default().await;

    let res = srv.get("/sitemaps/no-such-film.xml").await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.text().await.unwrap();
    assert_eq!(locs(&body).len(), 3);
    assert!(body.contains("/products/no-such-film/lima"));
}

#[tokio::test]
async fn unknown_product_sitemap_is_404_with_validation() {
    let public = tempfile::tempdir().unwrap();
    let services =
        services_with(reference_store(), public.path()).with_product_validation(true);
    let srv = TestServer::spawn(services).await;

    assert_eq!(srv.get("/sitemaps/no-such-film.xml").await.status(), StatusCode::NOT_FOUND);
    assert_eq!(srv.get("/sitemaps/hm-film.xml").await.status(), StatusCode::OK);
}

#[tokio::test]
async fn sitemap_paths_without_xml_suffix_are_404() {
    let (srv, _public) = spawn_default().await;

    assert_eq!(srv.get("/sitemaps/cpp-film").await.status(), StatusCode::NOT_FOUND);
    assert_eq!(srv.get("/sitemaps/.xml").await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn empty_store_gives_empty_documents() {
    let public = tempfile::tempdir().unwrap();
    let srv = TestServer::spawn(services_with(InMemoryReferenceStore::new(), public.path())).await;

    let index = srv.get("/sitemap.xml").await.text().await.unwrap();
    assert!(index.ends_with("<sitemapindex xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\"></sitemapindex>"));

    let set = srv.get("/sitemaps/a.xml").await.text().await.unwrap();
    assert!(set.ends_with("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\"></urlset>"));
}

#[tokio::test]
async fn large_sitemaps_stream_completely() {
    let locations: Vec<Location> = (0..2_000)
        .map(|i| Location {
            city: format!("City {i}"),
            slug: format!("city-{i}"),
            state: "N/A".to_string(),
            country: "Testland".to_string(),
        })
        .collect();
    let store = InMemoryReferenceStore::with_data(Vec::new(), locations);

    let public = tempfile::tempdir().unwrap();
    let srv = TestServer::spawn(services_with(store, public.path())).await;

    let body = srv.get("/sitemaps/cpp-film.xml").await.text().await.unwrap();
    assert_eq!(body.matches("<url>").count(), 2_000);
    assert!(body.ends_with("</urlset>"));
}

#[tokio::test]
async fn store_failure_is_500() {
    let public = tempfile::tempdir().unwrap();
    let srv = TestServer::spawn(services_with(UnavailableStore, public.path())).await;

    for path in ["/sitemap.xml", "/sitemaps/cpp-film.xml", "/products/cpp-film/mumbai", "/"] {
        let res = srv.get(path).await;
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR, "{path}");
        assert_eq!(res.text().await.unwrap(), "An error occurred");
    }
}

#[tokio::test]
async fn product_page_renders_known_pairs() {
    let (srv, _public) = spawn_default().await;

    let res = srv.get("/products/cpp-film/mumbai").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers()["content-type"].to_str().unwrap().starts_with("text/html"));

    let body = res.text().await.unwrap();
    assert!(body.contains("CPP Film in Mumbai"));
    assert!(body.contains("class=\"cpp_film_page\""));

    let body = srv.get("/products/hm-film/lima").await.text().await.unwrap();
    assert!(body.contains("class=\"product_page\""));
}

#[tokio::test]
async fn product_page_for_unknown_product_or_city_is_404() {
    let (srv, _public) = spawn_default().await;

    for path in ["/products/no-such-film/mumbai", "/products/cpp-film/atlantis"] {
        let res = srv.get(path).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "{path}");
        assert_eq!(res.text().await.unwrap(), "Page not found");
    }
}

#[tokio::test]
async fn home_page_lists_products() {
    let (srv, _public) = spawn_default().await;

    let res = srv.get("/").await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.text().await.unwrap();
    assert!(body.contains("CPP Film"));
    assert!(body.contains("HM Film"));
}

#[tokio::test]
async fn other_paths_are_served_from_the_public_dir() {
    let public = tempfile::tempdir().unwrap();
    std::fs::write(public.path().join("robots.txt"), "User-agent: *\n").unwrap();
    let srv = TestServer::spawn(services_with(reference_store(), public.path())).await;

    let res = srv.get("/robots.txt").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), "User-agent: *\n");

    assert_eq!(srv.get("/missing.css").await.status(), StatusCode::NOT_FOUND);
}
