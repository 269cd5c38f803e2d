use async_trait::async_trait;
use serde_json::Value;
use sqlx::types::Json;
use time::{Date, OffsetDateTime};
use tracing::debug;

use super::PostgresRepositories;
use crate::application::repos::{PostsRepo, RepoError};
use crate::domain::{entities::PostRecord, types::PostStatus};
use crate::infra::db::{map_sqlx_error, util::lenient_faq};

const SOURCE: &str = "infra::db::posts";

/// Rows without a slug or date cannot be listed and are skipped.
const PUBLISHED_FILTER: &str = "status::text = $1 AND slug IS NOT NULL AND date IS NOT NULL";

const POST_COLUMNS: &str = "slug, \
    COALESCE(title, '') AS title, \
    COALESCE(description, '') AS description, \
    COALESCE(content, '') AS content, \
    date::date AS date, \
    COALESCE(author, '') AS author, \
    COALESCE(array_remove(tags, NULL), ARRAY[]::text[]) AS tags, \
    cover_image, \
    COALESCE(read_time, '') AS read_time, \
    status::text AS status, \
    target_keyword, meta_title, meta_description, \
    word_count::bigint AS word_count, ai_model, \
    COALESCE(ai_generated, false) AS ai_generated, \
    published_at, created_at, updated_at, \
    NULLIF(faq::jsonb, 'null'::jsonb) AS faq";

#[derive(sqlx::FromRow)]
pub(crate) struct PostRow {
    pub(crate) slug: String,
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) content: String,
    pub(crate) date: Date,
    pub(crate) author: String,
    pub(crate) tags: Vec<String>,
    pub(crate) cover_image: Option<String>,
    pub(crate) read_time: String,
    pub(crate) status: String,
    pub(crate) target_keyword: Option<String>,
    pub(crate) meta_title: Option<String>,
    pub(crate) meta_description: Option<String>,
    pub(crate) word_count: Option<i64>,
    pub(crate) ai_model: Option<String>,
    pub(crate) ai_generated: bool,
    pub(crate) published_at: Option<OffsetDateTime>,
    pub(crate) created_at: Option<OffsetDateTime>,
    pub(crate) updated_at: Option<OffsetDateTime>,
    pub(crate) faq: Option<Json<Value>>,
}

impl From<PostRow> for PostRecord {
    fn from(row: PostRow) -> Self {
        Self {
            slug: row.slug,
            title: row.title,
            description: row.description,
            content: row.content,
            date: row.date,
            author: row.author,
            tags: row.tags,
            cover_image: row.cover_image,
            read_time: row.read_time,
            status: PostStatus::from_column(&row.status),
            target_keyword: row.target_keyword,
            meta_title: row.meta_title,
            meta_description: row.meta_description,
            word_count: row.word_count.and_then(|count| u32::try_from(count).ok()),
            ai_model: row.ai_model,
            ai_generated: row.ai_generated,
            published_at: row.published_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
            faq: lenient_faq(row.faq),
        }
    }
}

#[async_trait]
impl PostsRepo for PostgresRepositories {
    async fn list_published(&self) -> Result<Vec<PostRecord>, RepoError> {
        let sql = format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE {PUBLISHED_FILTER} ORDER BY date DESC"
        );
        let rows = sqlx::query_as::<_, PostRow>(&sql)
            .bind(PostStatus::Published.as_str())
            .fetch_all(self.pool())
            .await
            .map_err(map_sqlx_error)?;

        debug!(
            target = SOURCE,
            op = "list_published",
            count = rows.len(),
            "Fetched published posts"
        );
        Ok(rows.into_iter().map(PostRecord::from).collect())
    }

    async fn find_published_by_slug(&self, slug: &str) -> Result<Option<PostRecord>, RepoError> {
        let sql = format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE {PUBLISHED_FILTER} AND slug = $2 LIMIT 1"
        );
        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(PostStatus::Published.as_str())
            .bind(slug)
            .fetch_optional(self.pool())
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.map(PostRecord::from))
    }
}
