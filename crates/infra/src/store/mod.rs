//! Reference data storage: products and locations.
//!
//! Request handlers and the sitemap batch only ever read through
//! [`ReferenceStore`]. Writes happen exclusively through [`ReferenceSeeder`],
//! which the seeding commands use.

use std::sync::Arc;

use async_trait::async_trait;
use citypages_core::{Location, Product};
use thiserror::Error;

pub mod in_memory;
pub mod postgres;

pub use in_memory::InMemoryReferenceStore;
pub use postgres::PostgresReferenceStore;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached or a query failed.
    #[error("reference data unavailable: {0}")]
    DataUnavailable(String),
}

impl StoreError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::DataUnavailable(msg.into())
    }
}

/// Read access to the reference collections.
///
/// Lists return records in insertion order, so the same snapshot always
/// produces the same output downstream.
#[async_trait]
pub trait ReferenceStore: Send + Sync {
    async fn list_products(&self) -> Result<Vec<Product>, StoreError>;

    async fn list_locations(&self) -> Result<Vec<Location>, StoreError>;

    async fn find_product(&self, slug: &str) -> Result<Option<Product>, StoreError>;

    async fn find_location(&self, slug: &str) -> Result<Option<Location>, StoreError>;
}

/// Outcome of an additive insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InsertReport {
    pub inserted: usize,
    /// Records whose slug already existed (in the store or earlier in the batch).
    pub skipped: usize,
}

/// Write access used by the seeding commands.
#[async_trait]
pub trait ReferenceSeeder: Send + Sync {
    /// Delete every product, then insert `products`. Atomic where the backend
    /// supports it. Returns the number of inserted products.
    async fn replace_products(&self, products: &[Product]) -> Result<usize, StoreError>;

    /// Insert `locations`, keeping existing rows and skipping duplicate slugs.
    async fn insert_locations(&self, locations: &[Location]) -> Result<InsertReport, StoreError>;
}

#[async_trait]
impl<S> ReferenceStore for Arc<S>
where
    S: ReferenceStore + ?Sized,
{
    async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        (**self).list_products().await
    }

    async fn list_locations(&self) -> Result<Vec<Location>, StoreError> {
        (**self).list_locations().await
    }

    async fn find_product(&self, slug: &str) -> Result<Option<Product>, StoreError> {
        (**self).find_product(slug).await
    }

    async fn find_location(&self, slug: &str) -> Result<Option<Location>, StoreError> {
        (**self).find_location(slug).await
    }
}
