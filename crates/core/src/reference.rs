use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};
use crate::slug::slugify;

/// Page template used when a product does not name its own.
pub const DEFAULT_TEMPLATE: &str = "product_page";

/// A product that gets one landing page per location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub name: String,
    pub slug: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_name: Option<String>,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        slug: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
            description: description.into(),
            features: Vec::new(),
            template_name: None,
        }
    }

    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_template(mut self, template_name: impl Into<String>) -> Self {
        self.template_name = Some(template_name.into());
        self
    }

    /// Name of the page template this product renders with.
    pub fn template(&self) -> &str {
        self.template_name.as_deref().unwrap_or(DEFAULT_TEMPLATE)
    }
}

impl Entity for Product {
    fn slug(&self) -> &str {
        &self.slug
    }
}

/// A city that products are advertised in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub slug: String,
    pub state: String,
    pub country: String,
}

impl Location {
    /// Build a location whose slug is derived from the city name.
    ///
    /// Fails when the city name contains nothing that survives slugification.
    pub fn from_city(
        city: impl Into<String>,
        state: impl Into<String>,
        country: impl Into<String>,
    ) -> DomainResult<Self> {
        let city = city.into();
        let slug = slugify(&city);
        if slug.is_empty() {
            return Err(DomainError::validation(format!(
                "city name {city:?} produces an empty slug"
            )));
        }

        Ok(Self {
            city,
            slug,
            state: state.into(),
            country: country.into(),
        })
    }
}

impl Entity for Location {
    fn slug(&self) -> &str {
        &self.slug
    }
}
