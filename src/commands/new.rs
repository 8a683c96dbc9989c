//! Create a new post

use anyhow::Result;

use crate::content::Post;
use crate::Jammlog;

/// Create a post and persist it to the post file
pub fn create_post(app: &Jammlog, title: &str, content: &str) -> Result<Post> {
    let post = app.open_store()?.create(title, content)?;

    tracing::info!("Created post {} at {}", post.id, post.url());
    Ok(post)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_post_persists() {
        let dir = TempDir::new().unwrap();
        let app = Jammlog::new(dir.path()).unwrap();

        let first = create_post(&app, "첫 번째 포스트입니다.", "Hello, World.").unwrap();
        let second = create_post(&app, "두 번째 포스트입니다.", "").unwrap();
        assert_eq!(first.url(), "/blog/1/");
        assert_eq!(second.id, 2);

        let store = app.open_store().unwrap();
        assert_eq!(store.count().unwrap(), 2);
        assert_eq!(store.get_by_id(1).unwrap().unwrap().content, "Hello, World.");
    }

    #[test]
    fn test_create_post_rejects_empty_title() {
        let dir = TempDir::new().unwrap();
        let app = Jammlog::new(dir.path()).unwrap();

        assert!(create_post(&app, "", "body").is_err());
        assert!(!app.posts_path.exists());
    }

    #[test]
    fn test_interleaved_creates_keep_both_posts() {
        let dir = TempDir::new().unwrap();
        let app = Jammlog::new(dir.path()).unwrap();
        let a = app.open_store().unwrap();
        let b = app.open_store().unwrap();

        let first = a.create("From a", "").unwrap();
        let second = b.create("From b", "").unwrap();
        assert_ne!(first.id, second.id);

        let titles: Vec<_> = app
            .open_store()
            .unwrap()
            .list_all()
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, vec!["From a", "From b"]);
    }
}
