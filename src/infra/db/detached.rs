use async_trait::async_trait;

use crate::application::repos::{PostsRepo, RepoError, TranslationsRepo};
use crate::domain::entities::{PostRecord, TranslationRecord};

/// Store used when no database is configured. Every read yields no rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedStore;

#[async_trait]
impl PostsRepo for DetachedStore {
    async fn list_published(&self) -> Result<Vec<PostRecord>, RepoError> {
        Ok(Vec::new())
    }

    async fn find_published_by_slug(&self, _slug: &str) -> Result<Option<PostRecord>, RepoError> {
        Ok(None)
    }
}

#[async_trait]
impl TranslationsRepo for DetachedStore {
    async fn find_completed(
        &self,
        _slug: &str,
        _locale: &str,
    ) -> Result<Option<TranslationRecord>, RepoError> {
        Ok(None)
    }

    async fn list_completed_for_locale(
        &self,
        _locale: &str,
    ) -> Result<Vec<TranslationRecord>, RepoError> {
        Ok(Vec::new())
    }

    async fn list_completed_locales(&self, _slug: &str) -> Result<Vec<String>, RepoError> {
        Ok(Vec::new())
    }
}
