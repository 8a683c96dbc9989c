//! Delete a post

use anyhow::Result;

use crate::content::{Post, PostId};
use crate::error::BlogError;
use crate::Jammlog;

/// Remove a post from the post file
pub fn delete_post(app: &Jammlog, id: PostId) -> Result<Post> {
    let post = app
        .open_store()?
        .remove(id)?
        .ok_or(BlogError::NotFound(id))?;

    tracing::info!("Deleted post {}: {}", post.id, post.title);
    Ok(post)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::new::create_post;
    use tempfile::TempDir;

    #[test]
    fn test_delete_post() {
        let dir = TempDir::new().unwrap();
        let app = Jammlog::new(dir.path()).unwrap();
        create_post(&app, "One", "").unwrap();
        create_post(&app, "Two", "").unwrap();

        assert_eq!(delete_post(&app, 1).unwrap().title, "One");

        let store = app.open_store().unwrap();
        assert_eq!(store.count().unwrap(), 1);
        assert!(store.get_by_id(1).unwrap().is_none());
        assert_eq!(create_post(&app, "Three", "").unwrap().id, 3);
    }

    #[test]
    fn test_delete_missing_post() {
        let dir = TempDir::new().unwrap();
        let app = Jammlog::new(dir.path()).unwrap();

        let err = delete_post(&app, 7).unwrap_err();
        assert!(matches!(err.downcast_ref::<BlogError>(), Some(BlogError::NotFound(7))));
    }
}
