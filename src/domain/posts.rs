mod data;

use serde::{Deserialize, Serialize};
use time::Date;

pub use data::STATIC_POSTS;

/// One question/answer pair rendered in a post's FAQ block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

/// The canonical post handed to the rendering layer.
///
/// `content` holds enhanced HTML once a post leaves the source reader.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub content: String,
    pub date: Date,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Date>,
    pub author: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    pub read_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faq: Option<Vec<FaqItem>>,
}

#[derive(Clone, Copy)]
pub struct StaticFaq {
    pub question: &'static str,
    pub answer: &'static str,
}

/// A hand-written article compiled into the binary. `content` is Markdown.
#[derive(Clone, Copy)]
pub struct StaticPost {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub date: Date,
    pub updated_at: Option<Date>,
    pub author: &'static str,
    pub tags: &'static [&'static str],
    pub cover_image: Option<&'static str>,
    pub read_time: &'static str,
    pub word_count: Option<u32>,
    pub meta_title: Option<&'static str>,
    pub meta_description: Option<&'static str>,
    pub target_keyword: Option<&'static str>,
    pub faq: &'static [StaticFaq],
    pub content: &'static str,
}

impl StaticPost {
    /// Owned copy with the raw Markdown still in `content`.
    pub fn to_post(&self) -> Post {
        Post {
            slug: self.slug.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            content: self.content.to_string(),
            date: self.date,
            updated_at: self.updated_at,
            author: self.author.to_string(),
            tags: self.tags.iter().map(|tag| tag.to_string()).collect(),
            cover_image: self.cover_image.map(str::to_string),
            read_time: self.read_time.to_string(),
            word_count: self.word_count,
            meta_title: self.meta_title.map(str::to_string),
            meta_description: self.meta_description.map(str::to_string),
            target_keyword: self.target_keyword.map(str::to_string),
            faq: (!self.faq.is_empty()).then(|| {
                self.faq
                    .iter()
                    .map(|item| FaqItem {
                        question: item.question.to_string(),
                        answer: item.answer.to_string(),
                    })
                    .collect()
            }),
        }
    }
}

const WORDS_PER_MINUTE: u32 = 200;

/// Display string used when a row carries no explicit read time.
pub fn estimate_read_time(word_count: u32) -> String {
    let minutes = word_count.div_ceil(WORDS_PER_MINUTE).max(1);
    format!("{minutes} min read")
}

pub fn count_words(text: &str) -> u32 {
    let count = text
        .split_whitespace()
        .filter(|word| word.chars().any(char::is_alphanumeric))
        .count();
    u32::try_from(count).unwrap_or(u32::MAX)
}
