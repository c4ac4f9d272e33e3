//! Entity trait: records addressed by their slug.

/// A reference record that is addressed in URLs by a slug.
///
/// Slugs are expected to be unique within their collection. Nothing in the
/// core enforces that; the seeding commands establish it.
pub trait Entity {
    /// Returns the URL-safe identifier of the record.
    fn slug(&self) -> &str;
}

/// Find the first record in `records` whose slug equals `slug`.
pub fn find_by_slug<'a, T: Entity>(records: &'a [T], slug: &str) -> Option<&'a T> {
    records.iter().find(|r| r.slug() == slug)
}
