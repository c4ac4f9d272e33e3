use thiserror::Error;

#[derive(Debug, Error)]
pub enum SitemapError {
    #[error("invalid site base url {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("invalid priority {0}: must be within 0.0..=1.0")]
    InvalidPriority(f32),

    #[error("failed to write sitemap: {0}")]
    Write(String),
}

impl SitemapError {
    pub(crate) fn write(err: impl std::fmt::Display) -> Self {
        Self::Write(err.to_string())
    }
}
