//! Post model

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::helpers::post_url;

/// Identifier assigned to a post by the store
pub type PostId = u64;

/// A blog post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Unique identifier, assigned at creation and never reused
    pub id: PostId,

    /// Post title (never empty)
    pub title: String,

    /// Post body, kept verbatim
    #[serde(default)]
    pub content: String,

    /// Creation time
    pub created_at: DateTime<Local>,
}

impl Post {
    /// Canonical URL path of the post's detail page
    pub fn url(&self) -> String {
        post_url(self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_url() {
        let post = Post {
            id: 1,
            title: "첫 번째 포스트입니다.".to_string(),
            content: "Hello, World.".to_string(),
            created_at: Local::now(),
        };
        assert_eq!(post.url(), "/blog/1/");
    }
}
