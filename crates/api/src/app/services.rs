//! Runtime wiring: which reference store backs the server, and the settings
//! handlers need at request time.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use citypages_infra::{Config, PostgresReferenceStore, ReferenceStore, in_memory_catalogue};
use citypages_sitemap::SiteUrls;
use tracing::{info, warn};

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppServices {
    pub store: Arc<dyn ReferenceStore>,
    pub urls: Arc<SiteUrls>,
    pub public_dir: PathBuf,
    /// When set, `/sitemaps/{slug}.xml` answers 404 for unknown products.
    pub validate_product_slugs: bool,
}

impl AppServices {
    pub fn new(store: Arc<dyn ReferenceStore>, urls: SiteUrls, public_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            urls: Arc::new(urls),
            public_dir: public_dir.into(),
            validate_product_slugs: false,
        }
    }

    pub fn with_product_validation(mut self, enabled: bool) -> Self {
        self.validate_product_slugs = enabled;
        self
    }
}

/// Open the configured store: Postgres when `DATABASE_URL` is set, otherwise
/// the built-in catalogue held in memory.
pub async fn open_store(config: &Config) -> anyhow::Result<Arc<dyn ReferenceStore>> {
    match &config.database_url {
        Some(url) => {
            let store = PostgresReferenceStore::connect(url, config.max_db_connections)
                .await
                .context("failed to connect to the reference database")?;
            Ok(Arc::new(store))
        }
        None => {
            warn!("DATABASE_URL not set; serving the built-in catalogue from memory");
            let store = in_memory_catalogue()
                .await
                .context("failed to load the built-in catalogue")?;
            Ok(Arc::new(store))
        }
    }
}

/// Build the long-lived services used by `serve`.
pub async fn build_services(config: &Config) -> anyhow::Result<AppServices> {
    let urls = SiteUrls::new(&config.site_base_url).context("invalid SITE_BASE_URL")?;
    let store = open_store(config).await?;

    info!(
        site_base_url = %urls.base(),
        public_dir = %config.public_dir.display(),
        validate_product_slugs = config.validate_product_slugs,
        "services ready"
    );

    Ok(AppServices::new(store, urls, &config.public_dir)
        .with_product_validation(config.validate_product_slugs))
}
