use std::collections::HashSet;
use std::sync::RwLock;

use async_trait::async_trait;
use citypages_core::entity::find_by_slug;
use citypages_core::{Location, Product};

use super::{InsertReport, ReferenceSeeder, ReferenceStore, StoreError};

/// In-memory reference store.
///
/// Intended for tests/dev (used when no database is configured). Semantics
/// match the Postgres store: insertion-ordered lists, product replacement,
/// additive location inserts with duplicate slugs skipped.
#[derive(Debug, Default)]
pub struct InMemoryReferenceStore {
    products: RwLock<Vec<Product>>,
    locations: RwLock<Vec<Location>>,
}

impl InMemoryReferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(products: Vec<Product>, locations: Vec<Location>) -> Self {
        Self {
            products: RwLock::new(products),
            locations: RwLock::new(locations),
        }
    }
}

fn poisoned(what: &str) -> StoreError {
    StoreError::unavailable(format!("{what} lock poisoned"))
}

#[async_trait]
impl ReferenceStore for InMemoryReferenceStore {
    async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        let products = self.products.read().map_err(|_| poisoned("products"))?;
        Ok(products.clone())
    }

    async fn list_locations(&self) -> Result<Vec<Location>, StoreError> {
        let locations = self.locations.read().map_err(|_| poisoned("locations"))?;
        Ok(locations.clone())
    }

    async fn find_product(&self, slug: &str) -> Result<Option<Product>, StoreError> {
        let products = self.products.read().map_err(|_| poisoned("products"))?;
        Ok(find_by_slug(products.as_slice(), slug).cloned())
    }

    async fn find_location(&self, slug: &str) -> Result<Option<Location>, StoreError> {
        let locations = self.locations.read().map_err(|_| poisoned("locations"))?;
        Ok(find_by_slug(locations.as_slice(), slug).cloned())
    }
}

#[async_trait]
impl ReferenceSeeder for InMemoryReferenceStore {
    async fn replace_products(&self, products: &[Product]) -> Result<usize, StoreError> {
        let mut stored = self.products.write().map_err(|_| poisoned("products"))?;
        *stored = products.to_vec();
        Ok(stored.len())
    }

    async fn insert_locations(&self, locations: &[Location]) -> Result<InsertReport, StoreError> {
        let mut stored = self.locations.write().map_err(|_| poisoned("locations"))?;
        let mut seen: HashSet<String> = stored.iter().map(|l| l.slug.clone()).collect();

        let mut report = InsertReport::default();
        for location in locations {
            if seen.insert(location.slug.clone()) {
                stored.push(location.clone());
                report.inserted += 1;
            } else {
                report.skipped += 1;
            }
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(city: &str) -> Location {
        Location::from_city(city, "N/A", "Testland").unwrap()
    }

    #[tokio::test]
    async fn lists_keep_insertion_order() {
        let store = InMemoryReferenceStore::new();
        store
            .insert_locations(&[location("Zurich"), location("Athens"), location("Lima")])
            .await
            .unwrap();

        let slugs: Vec<String> = store
            .list_locations()
            .await
            .unwrap()
            .into_iter()
            .map(|l| l.slug)
            .collect();
        assert_eq!(slugs, vec!["zurich", "athens", "lima"]);
    }

    #[tokio::test]
    async fn replace_products_drops_previous_rows() {
        let store = InMemoryReferenceStore::with_data(
            vec![Product::new("Old", "old", "")],
            Vec::new(),
        );

        let n = store
            .replace_products(&[Product::new("A", "a", ""), Product::new("B", "b", "")])
            .await
            .unwrap();
        assert_eq!(n, 2);
        assert!(store.find_product("old").await.unwrap().is_none());
        assert_eq!(store.find_product("b").await.unwrap().unwrap().name, "B");
    }

    #[tokio::test]
    async fn insert_locations_is_additive_and_skips_duplicates() {
        let store = InMemoryReferenceStore::with_data(Vec::new(), vec![location("Mumbai")]);

        let report = store
            .insert_locations(&[location("Mumbai"), location("Valencia"), location("Valencia")])
            .await
            .unwrap();
        assert_eq!(report, InsertReport { inserted: 1, skipped: 2 });
        assert_eq!(store.list_locations().await.unwrap().len(), 2);

        // Running the same seed again inserts nothing.
        let again = store.insert_locations(&[location("Valencia")]).await.unwrap();
        assert_eq!(again, InsertReport { inserted: 0, skipped: 1 });
    }

    #[tokio::test]
    async fn find_returns_none_for_unknown_slug() {
        let store = InMemoryReferenceStore::new();
        assert!(store.find_product("missing").await.unwrap().is_none());
        assert!(store.find_location("missing").await.unwrap().is_none());
    }
}
