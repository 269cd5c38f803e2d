//! Domain entities mirrored from persistent storage.

use serde::Serialize;
use time::{Date, OffsetDateTime};

use crate::domain::{
    posts::FaqItem,
    types::{PostStatus, TranslationStatus},
};

/// A row of the CMS `posts` table. `content` is raw, never enhanced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostRecord {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub content: String,
    pub date: Date,
    pub author: String,
    pub tags: Vec<String>,
    pub cover_image: Option<String>,
    pub read_time: String,
    pub status: PostStatus,
    pub target_keyword: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub word_count: Option<u32>,
    pub ai_model: Option<String>,
    pub ai_generated: bool,
    pub published_at: Option<OffsetDateTime>,
    pub created_at: Option<OffsetDateTime>,
    pub updated_at: Option<OffsetDateTime>,
    pub faq: Option<Vec<FaqItem>>,
}

/// A row of the `translations` table, keyed by (`slug`, `locale`).
///
/// Every replacement field is optional; absent or blank values fall back to
/// the base post field by field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranslationRecord {
    pub slug: String,
    pub locale: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub faq: Option<Vec<FaqItem>>,
    pub word_count: Option<u32>,
    pub status: TranslationStatus,
}
