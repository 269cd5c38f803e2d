//! Source reader: the static catalog, published CMS rows, and translations.
//!
//! Every remote read is single-attempt. Failures degrade to "no data from this
//! source"; a missing schema is expected and stays quiet.

use std::{collections::HashMap, sync::Arc};

use metrics::counter;
use tracing::{debug, warn};

use crate::application::{
    catalog::StaticCatalog,
    enhance::{Enhancer, first_https_image},
    repos::{PostsRepo, RepoError, TranslationsRepo},
};
use crate::domain::{
    entities::{PostRecord, TranslationRecord},
    locale::same_locale,
    posts::{Post, count_words, estimate_read_time},
};

pub const METRIC_SOURCE_FALLBACK: &str = "folio_source_fallback_total";

#[derive(Clone)]
pub struct SourceReader {
    catalog: Arc<StaticCatalog>,
    posts: Arc<dyn PostsRepo>,
    translations: Arc<dyn TranslationsRepo>,
    enhancer: Arc<Enhancer>,
    source_locale: String,
}

impl SourceReader {
    pub fn new(
        catalog: Arc<StaticCatalog>,
        posts: Arc<dyn PostsRepo>,
        translations: Arc<dyn TranslationsRepo>,
        enhancer: Arc<Enhancer>,
        source_locale: impl Into<String>,
    ) -> Self {
        Self {
            catalog,
            posts,
            translations,
            enhancer,
            source_locale: source_locale.into(),
        }
    }

    pub fn source_locale(&self) -> &str {
        &self.source_locale
    }

    pub fn is_source_locale(&self, locale: &str) -> bool {
        same_locale(locale, &self.source_locale)
    }

    pub fn enhancer(&self) -> &Enhancer {
        &self.enhancer
    }

    /// Pre-enhanced static posts.
    pub fn list_static(&self) -> &[Post] {
        self.catalog.posts()
    }

    pub fn find_static(&self, slug: &str) -> Option<&Post> {
        self.catalog.find(slug)
    }

    pub async fn list_published_db(&self) -> Vec<PostRecord> {
        degrade(
            self.posts.list_published().await,
            "posts",
            "list_published_db",
        )
    }

    pub async fn find_published_db(&self, slug: &str) -> Option<PostRecord> {
        degrade(
            self.posts.find_published_by_slug(slug).await,
            "posts",
            "find_published_db",
        )
    }

    /// Map a CMS row onto the canonical post, enhancing its content.
    pub fn to_post(&self, record: PostRecord) -> Post {
        let content = self.enhancer.enhance(&record.content);
        let cover_image = record
            .cover_image
            .filter(|url| !url.trim().is_empty())
            .or_else(|| first_https_image(&content));
        let read_time = if record.read_time.trim().is_empty() {
            estimate_read_time(
                record
                    .word_count
                    .unwrap_or_else(|| count_words(&record.content)),
            )
        } else {
            record.read_time
        };

        Post {
            slug: record.slug,
            title: record.title,
            description: record.description,
            content,
            date: record.date,
            updated_at: record.updated_at.map(|at| at.date()),
            author: record.author,
            tags: record.tags,
            cover_image,
            read_time,
            word_count: record.word_count,
            meta_title: record.meta_title,
            meta_description: record.meta_description,
            target_keyword: record.target_keyword,
            faq: record.faq,
        }
    }

    pub async fn get_translation(&self, slug: &str, locale: &str) -> Option<TranslationRecord> {
        if self.is_source_locale(locale) {
            return None;
        }
        degrade(
            self.translations.find_completed(slug, locale).await,
            "translations",
            "get_translation",
        )
        .filter(|translation| translation.status.is_completed())
    }

    /// Completed translations for `locale`, keyed by slug. One query.
    pub async fn get_all_translations_for_locale(
        &self,
        locale: &str,
    ) -> HashMap<String, TranslationRecord> {
        if self.is_source_locale(locale) {
            return HashMap::new();
        }
        degrade(
            self.translations.list_completed_for_locale(locale).await,
            "translations",
            "get_all_translations_for_locale",
        )
        .into_iter()
        .filter(|translation| translation.status.is_completed())
        .map(|translation| (translation.slug.clone(), translation))
        .collect()
    }

    pub async fn list_translated_locales(&self, slug: &str) -> Vec<String> {
        degrade(
            self.translations.list_completed_locales(slug).await,
            "translations",
            "list_translated_locales",
        )
    }
}

fn degrade<T: Default>(result: Result<T, RepoError>, relation: &'static str, op: &'static str) -> T {
    match result {
        Ok(value) => value,
        Err(err) if err.is_schema_absent() => {
            debug!(
                target = "application::source",
                op,
                relation,
                result = "schema_absent",
                "Content table not provisioned; serving without it"
            );
            counter!(METRIC_SOURCE_FALLBACK, "relation" => relation, "reason" => "schema_absent")
                .increment(1);
            T::default()
        }
        Err(err) => {
            warn!(
                target = "application::source",
                op,
                relation,
                result = "degraded",
                error = %err,
                "Remote read failed; serving without it"
            );
            counter!(METRIC_SOURCE_FALLBACK, "relation" => relation, "reason" => "error")
                .increment(1);
            T::default()
        }
    }
}
