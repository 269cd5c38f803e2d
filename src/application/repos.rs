//! Repository traits describing the read-only content store.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::{PostRecord, TranslationRecord};

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("relation `{relation}` does not exist")]
    SchemaAbsent { relation: String },
    #[error("persistence error: {0}")]
    Persistence(String),
    #[error("failed to decode row: {0}")]
    Decode(String),
    #[error("database timeout")]
    Timeout,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl RepoError {
    pub fn from_persistence(err: impl std::fmt::Display) -> Self {
        Self::Persistence(err.to_string())
    }

    pub fn schema_absent(relation: impl Into<String>) -> Self {
        Self::SchemaAbsent {
            relation: relation.into(),
        }
    }

    /// The store has not been provisioned with the content tables yet.
    ///
    /// Callers treat this as "no rows" without logging an error.
    pub fn is_schema_absent(&self) -> bool {
        matches!(self, RepoError::SchemaAbsent { .. })
    }
}

#[async_trait]
pub trait PostsRepo: Send + Sync {
    /// Published rows, newest `date` first.
    async fn list_published(&self) -> Result<Vec<PostRecord>, RepoError>;

    async fn find_published_by_slug(&self, slug: &str) -> Result<Option<PostRecord>, RepoError>;
}

/// Translation reads. Every method only ever yields completed translations.
#[async_trait]
pub trait TranslationsRepo: Send + Sync {
    async fn find_completed(
        &self,
        slug: &str,
        locale: &str,
    ) -> Result<Option<TranslationRecord>, RepoError>;

    async fn list_completed_for_locale(
        &self,
        locale: &str,
    ) -> Result<Vec<TranslationRecord>, RepoError>;

    /// Distinct locales with a completed translation of `slug`, sorted.
    async fn list_completed_locales(&self, slug: &str) -> Result<Vec<String>, RepoError>;
}
