//! Content enhancer: normalises hand-written Markdown and CMS-generated HTML
//! into the site's rich HTML (headings, lists, callout boxes, dividers).
//!
//! Passes, in order:
//! 1. legacy link rewrite (always);
//! 2. Markdown conversion when the text has `#`..`###` headings;
//! 3. callouts, dividers and key-takeaways, unless already decorated;
//! 4. cleanup of empty paragraphs and split lists.
//!
//! Enhancement is pure and never fails. Decorated output is left alone by the
//! decoration pass, so enhancing twice yields the same document.

mod callouts;
mod cleanup;
mod links;
mod markdown;
mod takeaways;

use std::{num::NonZeroUsize, sync::Mutex};

use lru::LruCache;
use metrics::counter;
use once_cell::sync::Lazy;
use regex::Regex;
use sha2::{Digest, Sha256};

use crate::util::lock::mutex_lock;

pub use links::{
    DEFAULT_CURRENT_PATH_PREFIX, DEFAULT_LEGACY_DOMAIN, DEFAULT_LEGACY_PATH_PREFIX, LinkRewrite,
};

const SOURCE: &str = "application::enhance";

pub const DEFAULT_ENHANCE_CACHE_CAPACITY: usize = 256;
pub const METRIC_ENHANCE_CACHE_HIT: &str = "folio_enhance_cache_hit_total";
pub const METRIC_ENHANCE_CACHE_MISS: &str = "folio_enhance_cache_miss_total";

static DEFAULT_LINKS: Lazy<LinkRewrite> = Lazy::new(LinkRewrite::default);

static HTML_IMAGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<img\b[^>]*?\bsrc=["'](https://[^"'\s]+)["']"#)
        .expect("image src pattern must compile")
});
static MARKDOWN_IMAGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"!\[[^\]]*\]\((https://[^)\s]+)\)").expect("markdown image pattern must compile")
});

/// Enhance `raw` with the default link rewrite rule.
pub fn enhance(raw: &str) -> String {
    enhance_with(raw, &DEFAULT_LINKS)
}

pub fn enhance_with(raw: &str, links: &LinkRewrite) -> String {
    let normalized = raw.replace("\r\n", "\n");
    let text = links.apply(&normalized);

    let html = if markdown::looks_like_markdown(&text) {
        markdown::to_html(&text)
    } else {
        text.into_owned()
    };

    let html = if callouts::is_preformatted(&html) {
        html
    } else {
        takeaways::wrap_key_takeaways(&callouts::decorate(&html))
    };

    cleanup::tidy(&html)
}

/// First absolute HTTPS image referenced in `content`, in document order.
pub fn first_https_image(content: &str) -> Option<String> {
    let html = HTML_IMAGE
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| (m.start(), m.as_str()));
    let markdown = MARKDOWN_IMAGE
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| (m.start(), m.as_str()));

    let url = match (html, markdown) {
        (Some(a), Some(b)) => Some(if a.0 <= b.0 { a.1 } else { b.1 }),
        (a, b) => a.or(b).map(|(_, url)| url),
    };
    url.map(str::to_string)
}

/// Shared enhancer with an optional LRU memo keyed by content hash.
///
/// Output is identical with and without the memo.
pub struct Enhancer {
    links: LinkRewrite,
    memo: Option<Mutex<LruCache<String, String>>>,
}

impl Enhancer {
    /// `capacity == 0` disables memoisation.
    pub fn new(links: LinkRewrite, capacity: usize) -> Self {
        Self {
            links,
            memo: NonZeroUsize::new(capacity).map(|cap| Mutex::new(LruCache::new(cap))),
        }
    }

    pub fn enhance(&self, raw: &str) -> String {
        let Some(memo) = self.memo.as_ref() else {
            return enhance_with(raw, &self.links);
        };

        let key = content_key(raw);
        let cached = mutex_lock(memo, SOURCE, "enhance.get").get(&key).cloned();
        if let Some(html) = cached {
            counter!(METRIC_ENHANCE_CACHE_HIT).increment(1);
            return html;
        }

        counter!(METRIC_ENHANCE_CACHE_MISS).increment(1);
        let html = enhance_with(raw, &self.links);
        mutex_lock(memo, SOURCE, "enhance.put").put(key, html.clone());
        html
    }

    pub fn memoized_entries(&self) -> usize {
        self.memo
            .as_ref()
            .map_or(0, |memo| mutex_lock(memo, SOURCE, "enhance.len").len())
    }
}

impl Default for Enhancer {
    fn default() -> Self {
        Self::new(LinkRewrite::default(), DEFAULT_ENHANCE_CACHE_CAPACITY)
    }
}

fn content_key(raw: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(raw.as_bytes());
    hex::encode(hasher.finalize())
}
