//! URL helper functions
//!
//! The canonical post URL and the router patterns live side by side so that
//! a path produced by [`post_url`] always dispatches back to the same post.

use crate::content::PostId;

/// Path of the post list page
pub const BLOG_PATH: &str = "/blog/";

/// Router pattern for the post detail page
pub const POST_ROUTE: &str = "/blog/:id/";

/// Generate the canonical URL of a post
///
/// # Examples
/// ```ignore
/// post_url(1) // -> "/blog/1/"
/// ```
pub fn post_url(id: PostId) -> String {
    format!("{}{}/", BLOG_PATH, id)
}

/// Extract the post id from a canonical post URL
///
/// Only the exact shape produced by [`post_url`] is accepted.
pub fn parse_post_url(path: &str) -> Option<PostId> {
    parse_post_id(path.strip_prefix(BLOG_PATH)?.strip_suffix('/')?)
}

/// Parse a post id written the way [`post_url`] writes it
///
/// Signs, leading zeros and anything but ASCII digits are rejected.
pub fn parse_post_id(raw: &str) -> Option<PostId> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let id: PostId = raw.parse().ok()?;
    (id.to_string() == raw).then_some(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_url() {
        assert_eq!(post_url(1), "/blog/1/");
        assert_eq!(post_url(42), "/blog/42/");
    }

    #[test]
    fn test_parse_post_url() {
        assert_eq!(parse_post_url("/blog/1/"), Some(1));
        assert_eq!(parse_post_url(&post_url(1234)), Some(1234));
        assert_eq!(parse_post_url("/blog/"), None);
        assert_eq!(parse_post_url("/blog/1"), None);
        assert_eq!(parse_post_url("/blog/+1/"), None);
        assert_eq!(parse_post_url("/blog/01/"), None);
        assert_eq!(parse_post_url("/blog/0/"), Some(0));
        assert_eq!(parse_post_url("/blog/abc/"), None);
        assert_eq!(parse_post_url("/about_me/"), None);
    }

    #[test]
    fn test_parse_post_id() {
        assert_eq!(parse_post_id("12"), Some(12));
        assert_eq!(parse_post_id("012"), None);
        assert_eq!(parse_post_id("+12"), None);
        assert_eq!(parse_post_id("1 2"), None);
        assert_eq!(parse_post_id("99999999999999999999999"), None);
    }

    #[test]
    fn test_router_pattern_matches_post_url() {
        let prefix = POST_ROUTE.trim_end_matches(":id/");
        assert!(post_url(7).starts_with(prefix));
        assert_eq!(prefix, BLOG_PATH);
    }
}
