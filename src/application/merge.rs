//! Reconciles static and CMS posts into one listing.

use std::collections::HashSet;

use crate::domain::posts::Post;

/// DB posts win by slug; the static copy of a shadowed slug is dropped whole.
///
/// The result is sorted by `date` descending. The sort is stable, so equal
/// dates keep DB posts ahead of static ones and each side's input order.
pub fn merge_posts(static_posts: &[Post], db_posts: Vec<Post>) -> Vec<Post> {
    let db_slugs: HashSet<&str> = db_posts.iter().map(|post| post.slug.as_str()).collect();
    let survivors: Vec<Post> = static_posts
        .iter()
        .filter(|post| !db_slugs.contains(post.slug.as_str()))
        .cloned()
        .collect();

    let mut merged = db_posts;
    merged.extend(survivors);
    merged.sort_by(|a, b| b.date.cmp(&a.date));
    merged
}
