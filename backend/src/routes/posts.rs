use serde::{Deserialize, Serialize};

use crate::models::{Post, PostSlug};

/// Listicle teaser shown in the "Latest listicles" grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    pub slug: PostSlug,
    pub title: String,
    pub summary: String,
    pub hero: String,
    /// Link target `/{slug}`; the per-post page itself is not served
    pub href: String,
    pub picks: Vec<String>,
}

impl From<&Post> for PostSummary {
    fn from(post: &Post) -> Self {
        Self {
            slug: post.slug.clone(),
            title: post.title.clone(),
            summary: post.summary.clone(),
            hero: post.hero.clone(),
            href: format!("/{}", post.slug),
            picks: post.picks.clone(),
        }
    }
}

pub const LIST_POSTS: &str = "list_posts";
