//! The static post catalog, enhanced once at startup and immutable after.

use crate::application::enhance::Enhancer;
use crate::domain::posts::{Post, STATIC_POSTS};

#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    posts: Vec<Post>,
}

impl StaticCatalog {
    /// Catalog compiled into the binary.
    pub fn builtin(enhancer: &Enhancer) -> Self {
        Self::from_posts(STATIC_POSTS.iter().map(|entry| entry.to_post()), enhancer)
    }

    /// Build a catalog from posts whose `content` is still raw.
    pub fn from_posts(posts: impl IntoIterator<Item = Post>, enhancer: &Enhancer) -> Self {
        let posts = posts
            .into_iter()
            .map(|mut post| {
                post.content = enhancer.enhance(&post.content);
                post
            })
            .collect();
        Self { posts }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn find(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|post| post.slug == slug)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
