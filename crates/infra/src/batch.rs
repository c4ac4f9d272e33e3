//! Batch sitemap generation: static files under the public directory.
//!
//! Layout written under `public_dir`:
//! - `sitemap.xml` (the index)
//! - `sitemaps/{product_slug}.xml` (one per product)
//!
//! Products are written one after another on a blocking worker. Each file is
//! rendered into a temporary file in the same directory and renamed over the
//! target only once the document is complete, so a failed write never leaves
//! a partial document at a public path. A failure stops the run; files
//! already completed are left in place.
//!
//! Product slugs become file names, so every slug is checked before anything
//! is written: it must be a single path component.

use std::fs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use citypages_core::{Location, Product};
use citypages_sitemap::{SiteUrls, SitemapError, write_index, write_product_sitemap};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, info, instrument};

use crate::store::{ReferenceStore, StoreError};

pub const INDEX_FILE: &str = "sitemap.xml";
pub const PRODUCT_SITEMAPS_DIR: &str = "sitemaps";

#[derive(Debug, Error)]
pub enum BatchError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("failed to write {}: {source}", path.display())]
    Sitemap {
        path: PathBuf,
        #[source]
        source: SitemapError,
    },

    #[error("filesystem error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("product slug {slug:?} cannot be used as a sitemap file name")]
    UnsafeSlug { slug: String },

    #[error("sitemap worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

/// What a batch run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub index: PathBuf,
    pub product_sitemaps: Vec<PathBuf>,
    /// Total `<url>` entries across all product sitemaps.
    pub urls: usize,
}

/// Read both collections once and write every sitemap file.
#[instrument(skip(store, urls, public_dir), fields(public_dir = %public_dir.display()), err)]
pub async fn generate_static_sitemaps<S>(
    store: &S,
    urls: &SiteUrls,
    public_dir: &Path,
) -> Result<BatchReport, BatchError>
where
    S: ReferenceStore + ?Sized,
{
    let products = store.list_products().await?;
    let locations = store.list_locations().await?;
    info!(
        products = products.len(),
        locations = locations.len(),
        "generating static sitemaps"
    );

    let urls = urls.clone();
    let public_dir = public_dir.to_path_buf();
    let report = tokio::task::spawn_blocking(move || {
        write_all(&urls, &products, &locations, &public_dir)
    })
    .await??;

    info!(
        files = report.product_sitemaps.len() + 1,
        urls = report.urls,
        index = %report.index.display(),
        "sitemap generation complete"
    );
    Ok(report)
}

fn write_all(
    urls: &SiteUrls,
    products: &[Product],
    locations: &[Location],
    public_dir: &Path,
) -> Result<BatchReport, BatchError> {
    if let Some(product) = products.iter().find(|p| !is_safe_file_stem(&p.slug)) {
        return Err(BatchError::UnsafeSlug {
            slug: product.slug.clone(),
        });
    }

    let sitemaps_dir = public_dir.join(PRODUCT_SITEMAPS_DIR);
    fs::create_dir_all(&sitemaps_dir).map_err(|source| BatchError::Io {
        path: sitemaps_dir.clone(),
        source,
    })?;

    let mut product_sitemaps = Vec::with_capacity(products.len());
    for product in products {
        let path = sitemaps_dir.join(format!("{}.xml", product.slug));
        write_file(&path, |sink| {
            write_product_sitemap(urls, &product.slug, locations, sink)
        })?;
        debug!(product = %product.name, path = %path.display(), "product sitemap generated");
        product_sitemaps.push(path);
    }

    let index = public_dir.join(INDEX_FILE);
    write_file(&index, |sink| write_index(urls, products, sink))?;

    Ok(BatchReport {
        index,
        urls: products.len() * locations.len(),
        product_sitemaps,
    })
}

/// A slug is usable as a file stem when it is one plain path component.
fn is_safe_file_stem(slug: &str) -> bool {
    !slug.is_empty()
        && slug != "."
        && slug != ".."
        && !slug.contains(['/', '\\', '\0'])
}

type FileSink = BufWriter<NamedTempFile>;

/// Render into a temporary file next to `path`, then move it into place.
///
/// On any failure the temporary file is removed and `path` is untouched.
fn write_file<F>(path: &Path, render: F) -> Result<(), BatchError>
where
    F: FnOnce(FileSink) -> Result<FileSink, SitemapError>,
{
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let io_error = |source: std::io::Error| BatchError::Io {
        path: path.to_path_buf(),
        source,
    };

    let tmp = NamedTempFile::new_in(dir).map_err(io_error)?;
    let sink = render(BufWriter::new(tmp)).map_err(|source| BatchError::Sitemap {
        path: path.to_path_buf(),
        source,
    })?;

    let tmp = sink.into_inner().map_err(|e| io_error(e.into_error()))?;
    tmp.persist(path).map_err(|e| io_error(e.error))?;
    Ok(())
}
