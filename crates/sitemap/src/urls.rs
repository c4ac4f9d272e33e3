//! Absolute URLs for pages and sitemaps.

use url::Url;

use crate::error::SitemapError;

/// Builds the absolute URLs the site publishes, rooted at a fixed base.
///
/// The base comes from configuration and is never derived from an incoming
/// request. Slugs are appended as single path segments, so reserved
/// characters in a slug are percent-encoded instead of changing the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteUrls {
    base: Url,
}

impl SiteUrls {
    pub fn new(base: &str) -> Result<Self, SitemapError> {
        let parsed = Url::parse(base).map_err(|e| SitemapError::InvalidBaseUrl {
            url: base.to_string(),
            reason: e.to_string(),
        })?;

        if parsed.cannot_be_a_base() || !matches!(parsed.scheme(), "http" | "https") {
            return Err(SitemapError::InvalidBaseUrl {
                url: base.to_string(),
                reason: "expected an absolute http(s) url".to_string(),
            });
        }

        Ok(Self { base: parsed })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// `{base}/sitemap.xml`
    pub fn sitemap_index(&self) -> Url {
        self.join(&["sitemap.xml"])
    }

    /// `{base}/sitemaps/{product_slug}.xml`
    pub fn product_sitemap(&self, product_slug: &str) -> Url {
        self.join(&["sitemaps", &format!("{product_slug}.xml")])
    }

    /// `{base}/products/{product_slug}/{location_slug}`
    pub fn product_page(&self, product_slug: &str, location_slug: &str) -> Url {
        self.join(&["products", product_slug, location_slug])
    }

    fn join(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        url.set_query(None);
        url.set_fragment(None);
        // `new` rejected cannot-be-a-base urls, so this always succeeds.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls() -> SiteUrls {
        SiteUrls::new("https://cities.example.com").unwrap()
    }

    #[test]
    fn product_page_path_is_product_then_location() {
        assert_eq!(
            urls().product_page("cpp-film", "mumbai").as_str(),
            "https://cities.example.com/products/cpp-film/mumbai"
        );
    }

    #[test]
    fn product_sitemap_path() {
        assert_eq!(
            urls().product_sitemap("cpp-film").as_str(),
            "https://cities.example.com/sitemaps/cpp-film.xml"
        );
        assert_eq!(
            urls().sitemap_index().as_str(),
            "https://cities.example.com/sitemap.xml"
        );
    }

    #[test]
    fn trailing_slash_and_sub_path_in_base() {
        let urls = SiteUrls::new("https://example.com/site/").unwrap();
        assert_eq!(
            urls.product_page("a", "b").as_str(),
            "https://example.com/site/products/a/b"
        );
    }

    #[test]
    fn reserved_characters_stay_inside_their_segment() {
        let url = urls().product_page("a/b", "x y?");
        assert_eq!(
            url.as_str(),
            "https://cities.example.com/products/a%2Fb/x%20y%3F"
        );
        assert_eq!(url.path_segments().unwrap().count(), 3);
    }

    #[test]
    fn rejects_relative_and_non_http_bases() {
        assert!(matches!(
            SiteUrls::new("/relative"),
            Err(SitemapError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            SiteUrls::new("mailto:someone@example.com"),
            Err(SitemapError::InvalidBaseUrl { .. })
        ));
    }
}
