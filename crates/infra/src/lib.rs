//! Infrastructure layer: reference store adapters, configuration, seeding and
//! batch sitemap generation.

pub mod batch;
pub mod config;
pub mod seed;
pub mod store;

pub use batch::{BatchError, BatchReport, generate_static_sitemaps};
pub use config::{Config, ConfigError, LogFormat};
pub use seed::{SeedError, in_memory_catalogue, seed_locations, seed_products};
pub use store::{
    InMemoryReferenceStore, InsertReport, PostgresReferenceStore, ReferenceSeeder,
    ReferenceStore, StoreError,
};
