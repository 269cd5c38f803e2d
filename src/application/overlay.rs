//! Locale overlay: substitutes translated fields onto a base post.

use crate::application::enhance::Enhancer;
use crate::domain::{entities::TranslationRecord, posts::Post};

/// Terminal state of a per-locale post lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Found(Post),
    NotFound,
}

impl Resolution {
    pub fn into_post(self) -> Option<Post> {
        match self {
            Resolution::Found(post) => Some(post),
            Resolution::NotFound => None,
        }
    }
}

/// Resolve `base` for a locale.
///
/// The source locale serves the base post as-is. Any other locale needs a
/// completed translation; without one the post does not exist there.
pub fn resolve(
    base: Option<Post>,
    is_source_locale: bool,
    translation: Option<&TranslationRecord>,
    enhancer: &Enhancer,
) -> Resolution {
    let Some(post) = base else {
        return Resolution::NotFound;
    };
    if is_source_locale {
        return Resolution::Found(post);
    }
    match translation.filter(|translation| translation.status.is_completed()) {
        Some(translation) => Resolution::Found(overlay(post, Some(translation), enhancer)),
        None => Resolution::NotFound,
    }
}

/// Field-by-field substitution; blank or absent translated values keep the
/// original. Translated content is raw and goes through the enhancer.
pub fn overlay(post: Post, translation: Option<&TranslationRecord>, enhancer: &Enhancer) -> Post {
    let Some(translation) = translation else {
        return post;
    };

    Post {
        title: pick_text(&translation.title).unwrap_or(post.title),
        description: pick_text(&translation.description).unwrap_or(post.description),
        content: pick_text(&translation.content)
            .map(|raw| enhancer.enhance(&raw))
            .unwrap_or(post.content),
        meta_title: pick_text(&translation.meta_title).or(post.meta_title),
        meta_description: pick_text(&translation.meta_description).or(post.meta_description),
        faq: translation
            .faq
            .clone()
            .filter(|faq| !faq.is_empty())
            .or(post.faq),
        word_count: translation
            .word_count
            .filter(|count| *count > 0)
            .or(post.word_count),
        ..post
    }
}

fn pick_text(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .filter(|text| !text.trim().is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{posts::FaqItem, types::TranslationStatus};
    use time::macros::date;

    fn base() -> Post {
        Post {
            slug: "guide".to_string(),
            title: "Guide".to_string(),
            description: "English description".to_string(),
            content: "<p>English</p>".to_string(),
            date: date!(2025 - 01 - 01),
            updated_at: None,
            author: "staff".to_string(),
            tags: vec!["basics".to_string()],
            cover_image: None,
            read_time: "3 min read".to_string(),
            word_count: Some(600),
            meta_title: Some("Guide | Site".to_string()),
            meta_description: None,
            target_keyword: None,
            faq: Some(vec![FaqItem {
                question: "Q?".to_string(),
                answer: "A.".to_string(),
            }]),
        }
    }

    fn translation(status: TranslationStatus) -> TranslationRecord {
        TranslationRecord {
            slug: "guide".to_string(),
            locale: "es".to_string(),
            title: Some("Guía".to_string()),
            description: Some("   ".to_string()),
            content: Some("## Hola\nContenido".to_string()),
            meta_title: None,
            meta_description: Some("Descripción".to_string()),
            faq: Some(Vec::new()),
            word_count: None,
            status,
        }
    }

    #[test]
    fn absent_translation_returns_post_unchanged() {
        let enhancer = Enhancer::default();
        assert_eq!(overlay(base(), None, &enhancer), base());
    }

    #[test]
    fn fields_fall_back_individually() {
        let enhancer = Enhancer::default();
        let t = translation(TranslationStatus::Completed);
        let post = overlay(base(), Some(&t), &enhancer);

        assert_eq!(post.title, "Guía");
        assert_eq!(post.description, "English description");
        assert_eq!(post.content, "<h2>Hola</h2>\n<p>Contenido</p>");
        assert_eq!(post.meta_title.as_deref(), Some("Guide | Site"));
        assert_eq!(post.meta_description.as_deref(), Some("Descripción"));
        assert_eq!(post.faq, base().faq);
        assert_eq!(post.word_count, Some(600));
        assert_eq!(post.slug, "guide");
        assert_eq!(post.tags, base().tags);
    }

    #[test]
    fn non_source_locale_without_translation_is_not_found() {
        let enhancer = Enhancer::default();
        assert_eq!(resolve(Some(base()), false, None, &enhancer), Resolution::NotFound);
        let pending = translation(TranslationStatus::Pending);
        assert_eq!(
            resolve(Some(base()), false, Some(&pending), &enhancer),
            Resolution::NotFound
        );
    }

    #[test]
    fn source_locale_ignores_translation() {
        let enhancer = Enhancer::default();
        let t = translation(TranslationStatus::Completed);
        assert_eq!(
            resolve(Some(base()), true, Some(&t), &enhancer),
            Resolution::Found(base())
        );
    }

    #[test]
    fn missing_base_is_not_found_everywhere() {
        let enhancer = Enhancer::default();
        let t = translation(TranslationStatus::Completed);
        assert_eq!(resolve(None, true, None, &enhancer), Resolution::NotFound);
        assert_eq!(resolve(None, false, Some(&t), &enhancer), Resolution::NotFound);
    }
}
