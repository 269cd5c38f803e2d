//! Query facade behaviour over in-memory stores.

mod support;

use std::sync::Arc;

use time::macros::date;

use folio::domain::types::{PostStatus, TranslationStatus};
use support::{
    InMemoryPosts, InMemoryTranslations, db_post, default_statics, service, static_post,
    translation,
};

fn empty_translations() -> Arc<InMemoryTranslations> {
    Arc::new(InMemoryTranslations::default())
}

#[tokio::test]
async fn db_post_shadows_static_post_with_same_slug() {
    let posts = Arc::new(InMemoryPosts::new(vec![db_post(
        "beta",
        date!(2023 - 06 - 01),
        &["charts"],
    )]));
    let blog = service(default_statics(), posts, empty_translations());

    let all = blog.get_all_posts("en").await;
    let betas: Vec<_> = all.iter().filter(|post| post.slug == "beta").collect();
    assert_eq!(betas.len(), 1);
    assert_eq!(betas[0].title, "Db beta");
    assert!(betas[0].content.contains("db body of beta"));

    let single = blog.get_post_by_slug("beta", "en").await.expect("beta");
    assert_eq!(single.title, "Db beta");
}

#[tokio::test]
async fn listing_is_sorted_newest_first() {
    let posts = Arc::new(InMemoryPosts::new(vec![db_post(
        "delta",
        date!(2025 - 02 - 10),
        &[],
    )]));
    let blog = service(default_statics(), posts, empty_translations());

    let slugs: Vec<String> = blog
        .get_all_posts("en")
        .await
        .into_iter()
        .map(|post| post.slug)
        .collect();
    assert_eq!(slugs, ["alpha", "delta", "beta", "gamma"]);
    assert_eq!(blog.get_all_slugs().await, slugs);
}

#[tokio::test]
async fn unpublished_rows_are_invisible() {
    let mut draft = db_post("draft-only", date!(2026 - 01 - 01), &[]);
    draft.status = PostStatus::Draft;
    let posts = Arc::new(InMemoryPosts::new(vec![draft]));
    let blog = service(default_statics(), posts, empty_translations());

    assert_eq!(blog.get_all_posts("en").await.len(), 3);
    assert!(blog.get_post_by_slug("draft-only", "en").await.is_none());
}

#[tokio::test]
async fn db_rows_get_derived_read_time_and_enhanced_content() {
    let mut row = db_post("delta", date!(2025 - 02 - 10), &[]);
    row.content = "## Setup\nRead [the basics](/blog/alpha) first.".to_string();
    let posts = Arc::new(InMemoryPosts::new(vec![row]));
    let blog = service(default_statics(), posts, empty_translations());

    let post = blog.get_post_by_slug("delta", "en").await.expect("delta");
    assert_eq!(post.read_time, "5 min read");
    assert!(post.content.contains("<h2>Setup</h2>"));
    assert!(post.content.contains(r#"<a href="/learn/alpha">the basics</a>"#));
}

#[tokio::test]
async fn translated_listing_only_contains_translated_posts() {
    let translations = Arc::new(InMemoryTranslations::new(vec![
        translation("alpha", "es", "Alfa"),
        translation("gamma", "fr", "Gamma FR"),
    ]));
    let blog = service(
        default_statics(),
        Arc::new(InMemoryPosts::default()),
        translations,
    );

    let spanish = blog.get_all_posts("es").await;
    assert_eq!(spanish.len(), 1);
    assert_eq!(spanish[0].slug, "alpha");
    assert_eq!(spanish[0].title, "Alfa");
    assert_eq!(spanish[0].description, "About alpha");

    assert!(blog.get_all_posts("de").await.is_empty());
    assert_eq!(blog.get_all_posts("en").await.len(), 3);
}

#[tokio::test]
async fn single_post_in_untranslated_locale_is_not_found() {
    let mut pending = translation("beta", "es", "Beta ES");
    pending.status = TranslationStatus::InProgress;
    let translations = Arc::new(InMemoryTranslations::new(vec![
        translation("alpha", "es", "Alfa"),
        pending,
    ]));
    let blog = service(
        default_statics(),
        Arc::new(InMemoryPosts::default()),
        translations,
    );

    assert!(blog.get_post_by_slug("beta", "en").await.is_some());
    assert!(blog.get_post_by_slug("beta", "es").await.is_none());
    assert!(blog.get_post_by_slug("gamma", "es").await.is_none());

    let alpha = blog.get_post_by_slug("alpha", "es").await.expect("alpha");
    assert_eq!(alpha.title, "Alfa");
    assert_eq!(alpha.tags, ["risk", "basics"]);
}

#[tokio::test]
async fn translated_content_is_enhanced() {
    let mut full = translation("alpha", "es", "Alfa");
    full.content = Some("## Paso uno\nLee [esto](/blog/beta).".to_string());
    full.meta_description = Some("   ".to_string());
    let blog = service(
        default_statics(),
        Arc::new(InMemoryPosts::default()),
        Arc::new(InMemoryTranslations::new(vec![full])),
    );

    let post = blog.get_post_by_slug("alpha", "es").await.expect("alpha");
    assert!(post.content.contains("<h2>Paso uno</h2>"));
    assert!(post.content.contains(r#"href="/learn/beta""#));
    assert!(post.meta_description.is_none());
}

#[tokio::test]
async fn related_posts_rank_by_shared_tags() {
    let statics = vec![
        static_post("p1", date!(2025 - 04 - 01), &["a", "b"]),
        static_post("p2", date!(2025 - 03 - 01), &["a", "b"]),
        static_post("p3", date!(2025 - 02 - 01), &["a"]),
        static_post("p4", date!(2025 - 05 - 01), &["c"]),
    ];
    let blog = service(
        statics,
        Arc::new(InMemoryPosts::default()),
        empty_translations(),
    );

    let related: Vec<String> = blog
        .get_related_posts("p1", 3, "en")
        .await
        .into_iter()
        .map(|post| post.slug)
        .collect();
    assert_eq!(related, ["p2", "p3"]);

    let limited = blog.get_related_posts("p1", 1, "en").await;
    assert_eq!(limited.len(), 1);
    assert_eq!(limited[0].slug, "p2");

    assert!(blog.get_related_posts("missing", 3, "en").await.is_empty());
}

#[tokio::test]
async fn related_posts_rank_partial_overlap_by_count() {
    let statics = vec![
        static_post("p1", date!(2025 - 04 - 01), &["a", "b", "c"]),
        static_post("p3", date!(2025 - 03 - 01), &["a"]),
        static_post("p2", date!(2025 - 02 - 01), &["a", "b"]),
    ];
    let blog = service(
        statics,
        Arc::new(InMemoryPosts::default()),
        empty_translations(),
    );

    let related: Vec<String> = blog
        .get_related_posts("p1", 2, "en")
        .await
        .into_iter()
        .map(|post| post.slug)
        .collect();
    assert_eq!(related, ["p2", "p3"]);
}

#[tokio::test]
async fn db_cover_image_falls_back_to_first_https_image() {
    let mut missing = db_post("with-chart", date!(2025 - 02 - 10), &[]);
    missing.content = "## Chart\n![setup](http://cdn.example.com/old.png)\n\
                       ![entry](https://cdn.example.com/entry.png)"
        .to_string();
    let mut blank = db_post("blank-cover", date!(2025 - 02 - 09), &[]);
    blank.cover_image = Some("   ".to_string());
    blank.content = r#"<p><img src="https://cdn.example.com/blank.png" alt="x" /></p>"#.to_string();
    let mut explicit = db_post("explicit-cover", date!(2025 - 02 - 08), &[]);
    explicit.cover_image = Some("https://cdn.example.com/cover.png".to_string());
    explicit.content = r#"<p><img src="https://cdn.example.com/inline.png" alt="x" /></p>"#.to_string();
    let plain = db_post("no-image", date!(2025 - 02 - 07), &[]);

    let posts = Arc::new(InMemoryPosts::new(vec![missing, blank, explicit, plain]));
    let blog = service(default_statics(), posts, empty_translations());

    let cover = |slug: &'static str| {
        let blog = blog.clone();
        async move { blog.get_post_by_slug(slug, "en").await.expect(slug).cover_image }
    };
    assert_eq!(
        cover("with-chart").await.as_deref(),
        Some("https://cdn.example.com/entry.png")
    );
    assert_eq!(
        cover("blank-cover").await.as_deref(),
        Some("https://cdn.example.com/blank.png")
    );
    assert_eq!(
        cover("explicit-cover").await.as_deref(),
        Some("https://cdn.example.com/cover.png")
    );
    assert_eq!(cover("no-image").await, None);
}

#[tokio::test]
async fn categories_and_recent_posts_follow_the_locale() {
    let translations = Arc::new(InMemoryTranslations::new(vec![translation(
        "beta", "es", "Beta ES",
    )]));
    let blog = service(
        default_statics(),
        Arc::new(InMemoryPosts::default()),
        translations,
    );

    assert_eq!(
        blog.get_categories("en").await,
        ["basics", "charts", "psychology", "risk"]
    );
    assert_eq!(blog.get_categories("es").await, ["charts"]);

    let recent = blog.get_recent_posts(2, "en").await;
    let slugs: Vec<&str> = recent.iter().map(|post| post.slug.as_str()).collect();
    assert_eq!(slugs, ["alpha", "beta"]);
    assert!(blog.get_recent_posts(0, "en").await.is_empty());
}

#[tokio::test]
async fn translated_locales_list_source_first() {
    let mut failed = translation("alpha", "de", "Alpha DE");
    failed.status = TranslationStatus::Failed;
    let translations = Arc::new(InMemoryTranslations::new(vec![
        translation("alpha", "fr", "Alpha FR"),
        translation("alpha", "es", "Alfa"),
        failed,
    ]));
    let blog = service(
        default_statics(),
        Arc::new(InMemoryPosts::default()),
        translations,
    );

    assert_eq!(blog.get_translated_locales("alpha").await, ["en", "es", "fr"]);
    assert_eq!(blog.get_translated_locales("beta").await, ["en"]);
}

#[tokio::test]
async fn rows_added_later_are_read_fresh() {
    let posts = Arc::new(InMemoryPosts::default());
    let blog = service(default_statics(), posts.clone(), empty_translations());
    assert_eq!(blog.get_all_posts("en").await.len(), 3);

    posts
        .push(db_post("epsilon", date!(2025 - 06 - 01), &["risk"]))
        .await;
    let all = blog.get_all_posts("en").await;
    assert_eq!(all.len(), 4);
    assert_eq!(all[0].slug, "epsilon");
}
