use async_trait::async_trait;
use serde_json::Value;
use sqlx::types::Json;

use super::PostgresRepositories;
use crate::application::repos::{RepoError, TranslationsRepo};
use crate::domain::{entities::TranslationRecord, types::TranslationStatus};
use crate::infra::db::{map_sqlx_error, util::lenient_faq};

const TRANSLATION_COLUMNS: &str = "slug, locale, title, description, content, \
    meta_title, meta_description, \
    NULLIF(faq::jsonb, 'null'::jsonb) AS faq, \
    word_count::bigint AS word_count, \
    COALESCE(translation_status::text, '') AS translation_status";

#[derive(sqlx::FromRow)]
pub(crate) struct TranslationRow {
    pub(crate) slug: String,
    pub(crate) locale: String,
    pub(crate) title: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) content: Option<String>,
    pub(crate) meta_title: Option<String>,
    pub(crate) meta_description: Option<String>,
    pub(crate) faq: Option<Json<Value>>,
    pub(crate) word_count: Option<i64>,
    pub(crate) translation_status: String,
}

impl From<TranslationRow> for TranslationRecord {
    fn from(row: TranslationRow) -> Self {
        Self {
            slug: row.slug,
            locale: row.locale,
            title: row.title,
            description: row.description,
            content: row.content,
            meta_title: row.meta_title,
            meta_description: row.meta_description,
            faq: lenient_faq(row.faq),
            word_count: row.word_count.and_then(|count| u32::try_from(count).ok()),
            status: TranslationStatus::from_column(&row.translation_status),
        }
    }
}

#[async_trait]
impl TranslationsRepo for PostgresRepositories {
    async fn find_completed(
        &self,
        slug: &str,
        locale: &str,
    ) -> Result<Option<TranslationRecord>, RepoError> {
        let sql = format!(
            "SELECT {TRANSLATION_COLUMNS} FROM translations \
             WHERE slug = $1 AND lower(locale) = lower($2) AND translation_status::text = $3 LIMIT 1"
        );
        let row = sqlx::query_as::<_, TranslationRow>(&sql)
            .bind(slug)
            .bind(locale)
            .bind(TranslationStatus::Completed.as_str())
            .fetch_optional(self.pool())
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.map(TranslationRecord::from))
    }

    async fn list_completed_for_locale(
        &self,
        locale: &str,
    ) -> Result<Vec<TranslationRecord>, RepoError> {
        let sql = format!(
            "SELECT {TRANSLATION_COLUMNS} FROM translations \
             WHERE lower(locale) = lower($1) AND slug IS NOT NULL AND translation_status::text = $2"
        );
        let rows = sqlx::query_as::<_, TranslationRow>(&sql)
            .bind(locale)
            .bind(TranslationStatus::Completed.as_str())
            .fetch_all(self.pool())
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(TranslationRecord::from).collect())
    }

    async fn list_completed_locales(&self, slug: &str) -> Result<Vec<String>, RepoError> {
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT locale FROM translations \
             WHERE slug = $1 AND locale IS NOT NULL AND translation_status::text = $2 \
             ORDER BY locale",
        )
        .bind(slug)
        .bind(TranslationStatus::Completed.as_str())
        .fetch_all(self.pool())
        .await
        .map_err(map_sqlx_error)
    }
}
