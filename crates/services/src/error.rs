//! Shared error types for the services crate.

use thiserror::Error;

use course_core::model::SectionId;

/// Errors emitted by a `ContentProvider`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProviderError {
    #[error("no content source for section {0}")]
    NotFound(SectionId),
    #[error("content fetched for {requested} declares id {found}")]
    IdMismatch {
        requested: SectionId,
        found: SectionId,
    },
    #[error("content request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}

/// Errors surfaced by `ContentRegistry::resolve`.
///
/// Cloneable so that every caller joined to one in-flight fetch observes the
/// same outcome.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum RegistryError {
    #[error("no content registered or fetchable for section {0}")]
    NotFound(SectionId),
    #[error("failed to load content for section {id}: {reason}")]
    Fetch { id: SectionId, reason: String },
}

impl RegistryError {
    #[must_use]
    pub fn from_provider(id: &SectionId, err: &ProviderError) -> Self {
        match err {
            ProviderError::NotFound(_) => Self::NotFound(id.clone()),
            other => Self::Fetch {
                id: id.clone(),
                reason: other.to_string(),
            },
        }
    }
}
