//! Seeding the reference store from the built-in catalogue.
//!
//! Products are replaced wholesale. Locations are additive: existing rows are
//! kept and repeated slugs are skipped, so seeding twice is harmless.

use citypages_core::DomainError;
use thiserror::Error;
use tracing::{info, warn};

use crate::store::{InsertReport, InMemoryReferenceStore, ReferenceSeeder, StoreError};

pub mod catalogue;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("invalid catalogue entry: {0}")]
    Catalogue(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Replace every product with the catalogue's product line.
pub async fn seed_products<S>(store: &S) -> Result<usize, SeedError>
where
    S: ReferenceSeeder + ?Sized,
{
    let products = catalogue::products();
    info!(count = products.len(), "replacing products");

    let inserted = store.replace_products(&products).await?;
    info!(inserted, "products seeded");
    Ok(inserted)
}

/// Add the world city list, skipping slugs that already exist.
pub async fn seed_locations<S>(store: &S) -> Result<InsertReport, SeedError>
where
    S: ReferenceSeeder + ?Sized,
{
    let locations = catalogue::world_locations()?;
    info!(
        count = locations.len(),
        excluded_country = catalogue::EXCLUDED_COUNTRY,
        "adding world locations"
    );

    let report = store.insert_locations(&locations).await?;
    if report.skipped > 0 {
        warn!(skipped = report.skipped, "duplicate location slugs ignored");
    }
    info!(inserted = report.inserted, "locations seeded");
    Ok(report)
}

/// An in-memory store holding the whole catalogue.
///
/// Used when no database is configured, so the site still has content.
pub async fn in_memory_catalogue() -> Result<InMemoryReferenceStore, SeedError> {
    let store = InMemoryReferenceStore::new();
    seed_products(&store).await?;
    seed_locations(&store).await?;
    Ok(store)
}
