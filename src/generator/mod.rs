//! Generator module - writes the blog pages as static HTML files

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::helpers::BLOG_PATH;
use crate::store::PostStore;
use crate::views::{Route, Views};
use crate::Jammlog;

/// Static site generator
pub struct Generator {
    public_dir: PathBuf,
    views: Views,
}

impl Generator {
    /// Create a new generator
    pub fn new(app: &Jammlog) -> Result<Self> {
        Ok(Self {
            public_dir: app.public_dir.clone(),
            views: Views::new(&app.config.language)?,
        })
    }

    /// Write the list page and one page per post, returning the page count
    pub fn generate(&self, store: &PostStore) -> Result<usize> {
        // Drop pages of posts that no longer exist
        let blog_dir = self.public_dir.join(BLOG_PATH.trim_matches('/'));
        if blog_dir.exists() {
            fs::remove_dir_all(&blog_dir)?;
        }

        let routes: Vec<Route> = std::iter::once(Route::List)
            .chain(store.list_all()?.iter().map(|p| Route::Detail(p.id)))
            .collect();

        for route in &routes {
            let html = self.views.dispatch(*route, store)?;
            let output_path = self.output_path(route);
            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&output_path, html)?;
            tracing::debug!("Generated: {:?}", output_path);
        }

        Ok(routes.len())
    }

    /// File a route is written to
    fn output_path(&self, route: &Route) -> PathBuf {
        self.public_dir
            .join(route.path().trim_matches('/'))
            .join("index.html")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_generate_pages() {
        let dir = TempDir::new().unwrap();
        let app = Jammlog::new(dir.path()).unwrap();
        let store = PostStore::new();
        store.create("첫 번째 포스트입니다.", "Hello, World.").unwrap();
        store.create("두 번째 포스트입니다.", "").unwrap();

        let generator = Generator::new(&app).unwrap();
        assert_eq!(generator.generate(&store).unwrap(), 3);

        let list = fs::read_to_string(app.public_dir.join("blog/index.html")).unwrap();
        assert!(list.contains("두 번째 포스트입니다."));
        let detail = fs::read_to_string(app.public_dir.join("blog/1/index.html")).unwrap();
        assert!(detail.contains("Hello, World."));
    }

    #[test]
    fn test_generate_drops_removed_posts() {
        let dir = TempDir::new().unwrap();
        let app = Jammlog::new(dir.path()).unwrap();
        let store = PostStore::new();
        store.create("One", "").unwrap();
        store.create("Two", "").unwrap();

        let generator = Generator::new(&app).unwrap();
        generator.generate(&store).unwrap();
        store.remove(2).unwrap();
        assert_eq!(generator.generate(&store).unwrap(), 2);

        assert!(app.public_dir.join("blog/1/index.html").exists());
        assert!(!app.public_dir.join("blog/2").exists());
    }
}
