//! HTTP server for the product/location landing pages and their sitemaps.

pub mod app;
