//! Sitemap index and per-product sitemap builders.

use std::io::Write;

use citypages_core::{Location, Product};
use tracing::debug;

use crate::entry::{ChangeFreq, IndexEntry, Priority, UrlEntry};
use crate::error::SitemapError;
use crate::urls::SiteUrls;
use crate::writer::SitemapWriter;

/// Change frequency advertised for every product/location page.
pub const DEFAULT_CHANGEFREQ: ChangeFreq = ChangeFreq::Weekly;

/// Priority advertised for every product/location page.
pub const DEFAULT_PRIORITY: f32 = 0.8;

/// Write the sitemap index: one `<sitemap>` per product, in input order.
pub fn write_index<W: Write>(
    urls: &SiteUrls,
    products: &[Product],
    sink: W,
) -> Result<W, SitemapError> {
    let mut writer = SitemapWriter::<W, IndexEntry>::start(sink)?;
    for product in products {
        writer.append(&IndexEntry::new(urls.product_sitemap(&product.slug)))?;
    }

    debug!(entries = writer.entries(), "sitemap index written");
    writer.finish()
}

/// Write the sitemap of one product: one `<url>` per location, in input order.
///
/// `product_slug` is used as given. It is not checked against the product
/// collection; callers that want unknown products rejected must do so first.
pub fn write_product_sitemap<W: Write>(
    urls: &SiteUrls,
    product_slug: &str,
    locations: &[Location],
    sink: W,
) -> Result<W, SitemapError> {
    let priority = Priority::new(DEFAULT_PRIORITY)?;

    let mut writer = SitemapWriter::<W, UrlEntry>::start(sink)?;
    for location in locations {
        let entry = UrlEntry::new(urls.product_page(product_slug, &location.slug))
            .with_changefreq(DEFAULT_CHANGEFREQ)
            .with_priority(priority);
        writer.append(&entry)?;
    }

    debug!(product_slug, entries = writer.entries(), "product sitemap written");
    writer.finish()
}

/// Render the sitemap index into memory.
pub fn render_index(urls: &SiteUrls, products: &[Product]) -> Result<Vec<u8>, SitemapError> {
    write_index(urls, products, Vec::new())
}

/// Render one product's sitemap into memory.
pub fn render_product_sitemap(
    urls: &SiteUrls,
    product_slug: &str,
    locations: &[Location],
) -> Result<Vec<u8>, SitemapError> {
    write_product_sitemap(urls, product_slug, locations, Vec::new())
}
