//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Value of the `lang` attribute on every page
    pub language: String,

    // Directory
    pub posts_file: String,
    pub public_dir: String,

    // Server
    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            language: "ko".to_string(),
            posts_file: "posts.yml".to_string(),
            public_dir: "public".to_string(),
            server: ServerConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded site config from {:?}", path.as_ref());
        Ok(config)
    }
}

/// Development server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: "localhost".to_string(),
            port: 8000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.language, "ko");
        assert_eq!(config.posts_file, "posts.yml");
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
language: en
posts_file: data/posts.yml
server:
  port: 9000
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.language, "en");
        assert_eq!(config.posts_file, "data/posts.yml");
        assert_eq!(config.public_dir, "public");
        assert_eq!(config.server.ip, "localhost");
        assert_eq!(config.server.port, 9000);
    }
}
