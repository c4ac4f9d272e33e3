//! Sitemap documents for the product/location landing pages.
//!
//! The full product × location cross-product is too large to render inside a
//! single request, so the site publishes:
//! - a sitemap **index** with one entry per product, and
//! - one **per-product** sitemap with one URL per location.
//!
//! Everything in this crate is a pure transformation from reference-data
//! snapshots to XML. Documents are written entry by entry into any
//! [`std::io::Write`] sink, so the caller decides whether output lands in
//! memory, on disk, or on a network stream.

pub mod builder;
pub mod entry;
pub mod error;
pub mod urls;
pub mod writer;

pub use builder::{
    DEFAULT_CHANGEFREQ, DEFAULT_PRIORITY, render_index, render_product_sitemap, write_index,
    write_product_sitemap,
};
pub use entry::{ChangeFreq, IndexEntry, Priority, SitemapEntry, UrlEntry};
pub use error::SitemapError;
pub use urls::SiteUrls;
pub use writer::{SITEMAP_NAMESPACE, SitemapWriter};
