//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::config::SiteConfig;
use crate::store::PostStore;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir)?;

    let config_path = target_dir.join("_config.yml");
    if config_path.exists() {
        tracing::info!("Keeping existing {:?}", config_path);
    } else {
        let config_content = r#"# JAMMLOG Configuration

# Value of the lang attribute on every page
language: ko

# Directory
posts_file: posts.yml
public_dir: public

# Server
server:
  ip: localhost
  port: 8000
"#;
        fs::write(&config_path, config_content)?;
        tracing::debug!("Created {:?}", config_path);
    }

    let config = SiteConfig::load(&config_path)?;
    let posts_path = target_dir.join(&config.posts_file);
    if !posts_path.exists() {
        PostStore::new().save(&posts_path)?;
        tracing::debug!("Created {:?}", posts_path);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_site() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("site");
        init_site(&target).unwrap();

        let config = SiteConfig::load(target.join("_config.yml")).unwrap();
        assert_eq!(config.posts_file, "posts.yml");
        let store = PostStore::open(target.join("posts.yml")).unwrap();
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_init_keeps_existing_posts() {
        let dir = TempDir::new().unwrap();
        init_site(dir.path()).unwrap();

        let posts_path = dir.path().join("posts.yml");
        PostStore::open(&posts_path)
            .unwrap()
            .create("Keep me", "")
            .unwrap();

        init_site(dir.path()).unwrap();
        assert_eq!(PostStore::open(&posts_path).unwrap().count().unwrap(), 1);
    }
}
