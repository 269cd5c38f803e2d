//! Query facade consumed by the page layer.
//!
//! No operation here fails: remote trouble degrades to static-only data, and a
//! missing translation reads exactly like a missing post.

use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

use tracing::debug;

use crate::application::{
    merge::merge_posts,
    overlay::{overlay, resolve},
    source::SourceReader,
};
use crate::domain::{entities::PostRecord, posts::Post};

#[derive(Clone)]
pub struct BlogService {
    source: Arc<SourceReader>,
}

impl BlogService {
    pub fn new(source: Arc<SourceReader>) -> Self {
        Self { source }
    }

    /// Merged source-locale listing: DB posts shadow static ones by slug.
    async fn merged_posts(&self) -> Vec<Post> {
        let db_posts = self.source.list_published_db().await;
        self.merge_with_static(db_posts)
    }

    fn merge_with_static(&self, db_posts: Vec<PostRecord>) -> Vec<Post> {
        let db_posts = db_posts
            .into_iter()
            .map(|record| self.source.to_post(record))
            .collect();
        merge_posts(self.source.list_static(), db_posts)
    }

    /// Every post visible in `locale`, newest first.
    ///
    /// Non-source locales only list posts with a completed translation.
    pub async fn get_all_posts(&self, locale: &str) -> Vec<Post> {
        if self.source.is_source_locale(locale) {
            return self.merged_posts().await;
        }

        let (db_posts, mut translations) = tokio::join!(
            self.source.list_published_db(),
            self.source.get_all_translations_for_locale(locale),
        );
        let merged = self.merge_with_static(db_posts);
        let total = merged.len();

        let localized: Vec<Post> = merged
            .into_iter()
            .filter_map(|post| {
                let translation = translations.remove(&post.slug)?;
                Some(overlay(post, Some(&translation), self.source.enhancer()))
            })
            .collect();

        debug!(
            target = "application::blog",
            op = "get_all_posts",
            locale,
            total,
            visible = localized.len(),
            "Filtered listing to translated posts"
        );
        localized
    }

    pub async fn get_post_by_slug(&self, slug: &str, locale: &str) -> Option<Post> {
        let is_source = self.source.is_source_locale(locale);

        let (record, translation) = if is_source {
            (self.source.find_published_db(slug).await, None)
        } else {
            tokio::join!(
                self.source.find_published_db(slug),
                self.source.get_translation(slug, locale),
            )
        };

        let base = match record {
            Some(record) => Some(self.source.to_post(record)),
            None => self.source.find_static(slug).cloned(),
        };

        resolve(
            base,
            is_source,
            translation.as_ref(),
            self.source.enhancer(),
        )
        .into_post()
    }

    /// Distinct tags across the posts visible in `locale`, sorted.
    pub async fn get_categories(&self, locale: &str) -> Vec<String> {
        self.get_all_posts(locale)
            .await
            .into_iter()
            .flat_map(|post| post.tags)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub async fn get_recent_posts(&self, limit: usize, locale: &str) -> Vec<Post> {
        let mut posts = self.get_all_posts(locale).await;
        posts.truncate(limit);
        posts
    }

    /// Posts sharing tags with `slug`, most shared tags first.
    ///
    /// Posts with no shared tag are not related. Ties keep listing order.
    pub async fn get_related_posts(&self, slug: &str, limit: usize, locale: &str) -> Vec<Post> {
        let posts = self.get_all_posts(locale).await;
        let Some(current) = posts.iter().find(|post| post.slug == slug) else {
            return Vec::new();
        };
        let tags: HashSet<&str> = current.tags.iter().map(String::as_str).collect();

        let mut scored: Vec<(usize, &Post)> = posts
            .iter()
            .filter(|post| post.slug != slug)
            .map(|post| (shared_tag_count(&tags, post), post))
            .filter(|(score, _)| *score > 0)
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        scored
            .into_iter()
            .take(limit)
            .map(|(_, post)| post.clone())
            .collect()
    }

    /// Slugs of the merged source-locale catalog.
    pub async fn get_all_slugs(&self) -> Vec<String> {
        self.merged_posts()
            .await
            .into_iter()
            .map(|post| post.slug)
            .collect()
    }

    /// The source locale first, then every locale with a completed translation.
    pub async fn get_translated_locales(&self, slug: &str) -> Vec<String> {
        let mut locales = vec![self.source.source_locale().to_string()];
        for locale in self.source.list_translated_locales(slug).await {
            if !locales.iter().any(|known| known.eq_ignore_ascii_case(&locale)) {
                locales.push(locale);
            }
        }
        locales
    }
}

fn shared_tag_count(tags: &HashSet<&str>, post: &Post) -> usize {
    post.tags
        .iter()
        .map(String::as_str)
        .collect::<HashSet<_>>()
        .intersection(tags)
        .count()
}
