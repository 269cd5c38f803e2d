//! In-memory content stores shared by the integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use time::{Date, macros::date};
use tokio::sync::Mutex;

use folio::application::{
    blog::BlogService,
    catalog::StaticCatalog,
    enhance::Enhancer,
    repos::{PostsRepo, RepoError, TranslationsRepo},
    source::SourceReader,
};
use folio::domain::{
    entities::{PostRecord, TranslationRecord},
    posts::Post,
    types::{PostStatus, TranslationStatus},
};

#[derive(Default)]
pub struct InMemoryPosts {
    rows: Mutex<Vec<PostRecord>>,
}

impl InMemoryPosts {
    pub fn new(rows: Vec<PostRecord>) -> Self {
        Self {
            rows: Mutex::new(rows),
        }
    }

    pub async fn push(&self, row: PostRecord) {
        self.rows.lock().await.push(row);
    }
}

#[async_trait]
impl PostsRepo for InMemoryPosts {
    async fn list_published(&self) -> Result<Vec<PostRecord>, RepoError> {
        let rows = self.rows.lock().await;
        let mut published: Vec<PostRecord> = rows
            .iter()
            .filter(|row| row.status == PostStatus::Published)
            .cloned()
            .collect();
        published.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(published)
    }

    async fn find_published_by_slug(&self, slug: &str) -> Result<Option<PostRecord>, RepoError> {
        let rows = self.rows.lock().await;
        Ok(rows
            .iter()
            .find(|row| row.slug == slug && row.status == PostStatus::Published)
            .cloned())
    }
}

#[derive(Default)]
pub struct InMemoryTranslations {
    rows: Mutex<Vec<TranslationRecord>>,
}

impl InMemoryTranslations {
    pub fn new(rows: Vec<TranslationRecord>) -> Self {
        Self {
            rows: Mutex::new(rows),
        }
    }
}

#[async_trait]
impl TranslationsRepo for InMemoryTranslations {
    async fn find_completed(
        &self,
        slug: &str,
        locale: &str,
    ) -> Result<Option<TranslationRecord>, RepoError> {
        let rows = self.rows.lock().await;
        Ok(rows
            .iter()
            .find(|row| {
                row.slug == slug
                    && row.locale.eq_ignore_ascii_case(locale)
                    && row.status == TranslationStatus::Completed
            })
            .cloned())
    }

    async fn list_completed_for_locale(
        &self,
        locale: &str,
    ) -> Result<Vec<TranslationRecord>, RepoError> {
        let rows = self.rows.lock().await;
        Ok(rows
            .iter()
            .filter(|row| {
                row.locale.eq_ignore_ascii_case(locale)
                    && row.status == TranslationStatus::Completed
            })
            .cloned()
            .collect())
    }

    async fn list_completed_locales(&self, slug: &str) -> Result<Vec<String>, RepoError> {
        let rows = self.rows.lock().await;
        let mut locales: Vec<String> = rows
            .iter()
            .filter(|row| row.slug == slug && row.status == TranslationStatus::Completed)
            .map(|row| row.locale.clone())
            .collect();
        locales.sort();
        locales.dedup();
        Ok(locales)
    }
}

/// Store whose every read fails with a fresh error from `make`.
pub struct FailingStore {
    make: fn() -> RepoError,
}

impl FailingStore {
    pub fn schema_absent() -> Self {
        Self {
            make: || RepoError::schema_absent("posts"),
        }
    }

    pub fn network() -> Self {
        Self {
            make: || RepoError::Unavailable("connection reset by peer".to_string()),
        }
    }
}

#[async_trait]
impl PostsRepo for FailingStore {
    async fn list_published(&self) -> Result<Vec<PostRecord>, RepoError> {
        Err((self.make)())
    }

    async fn find_published_by_slug(&self, _slug: &str) -> Result<Option<PostRecord>, RepoError> {
        Err((self.make)())
    }
}

#[async_trait]
impl TranslationsRepo for FailingStore {
    async fn find_completed(
        &self,
        _slug: &str,
        _locale: &str,
    ) -> Result<Option<TranslationRecord>, RepoError> {
        Err((self.make)())
    }

    async fn list_completed_for_locale(
        &self,
        _locale: &str,
    ) -> Result<Vec<TranslationRecord>, RepoError> {
        Err((self.make)())
    }

    async fn list_completed_locales(&self, _slug: &str) -> Result<Vec<String>, RepoError> {
        Err((self.make)())
    }
}

pub fn service(
    statics: Vec<Post>,
    posts: Arc<dyn PostsRepo>,
    translations: Arc<dyn TranslationsRepo>,
) -> BlogService {
    let enhancer = Arc::new(Enhancer::default());
    let catalog = Arc::new(StaticCatalog::from_posts(statics, &enhancer));
    let source = SourceReader::new(catalog, posts, translations, enhancer, "en");
    BlogService::new(Arc::new(source))
}

pub fn static_post(slug: &str, date: Date, tags: &[&str]) -> Post {
    Post {
        slug: slug.to_string(),
        title: format!("Static {slug}"),
        description: format!("About {slug}"),
        content: format!("<p>static body of {slug}</p>"),
        date,
        updated_at: None,
        author: "Staff".to_string(),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        cover_image: None,
        read_time: "4 min read".to_string(),
        word_count: None,
        meta_title: None,
        meta_description: None,
        target_keyword: None,
        faq: None,
    }
}

pub fn db_post(slug: &str, date: Date, tags: &[&str]) -> PostRecord {
    PostRecord {
        slug: slug.to_string(),
        title: format!("Db {slug}"),
        description: format!("CMS copy of {slug}"),
        content: format!("<p>db body of {slug}</p>"),
        date,
        author: "Editor".to_string(),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        cover_image: None,
        read_time: String::new(),
        status: PostStatus::Published,
        target_keyword: None,
        meta_title: None,
        meta_description: None,
        word_count: Some(900),
        ai_model: None,
        ai_generated: false,
        published_at: None,
        created_at: None,
        updated_at: None,
        faq: None,
    }
}

pub fn translation(slug: &str, locale: &str, title: &str) -> TranslationRecord {
    TranslationRecord {
        slug: slug.to_string(),
        locale: locale.to_string(),
        title: Some(title.to_string()),
        description: None,
        content: None,
        meta_title: None,
        meta_description: None,
        faq: None,
        word_count: None,
        status: TranslationStatus::Completed,
    }
}

pub fn default_statics() -> Vec<Post> {
    vec![
        static_post("alpha", date!(2025 - 03 - 01), &["risk", "basics"]),
        static_post("beta", date!(2025 - 01 - 15), &["charts"]),
        static_post("gamma", date!(2024 - 11 - 20), &["risk", "psychology"]),
    ]
}
