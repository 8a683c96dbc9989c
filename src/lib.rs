//! jammlog: a minimal blog with a post list and post detail pages
//!
//! Posts live in a YAML post file and are rendered with embedded Tera
//! templates, either by the HTTP server or as a static export.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod server;
pub mod store;
pub mod templates;
pub mod views;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use error::BlogError;
pub use store::PostStore;
pub use views::{Route, Views};

/// The main application
#[derive(Debug, Clone)]
pub struct Jammlog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Post file
    pub posts_path: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
}

impl Jammlog {
    /// Create a new instance from a site directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let posts_path = base_dir.join(&config.posts_file);
        let public_dir = base_dir.join(&config.public_dir);

        Ok(Self {
            config,
            base_dir,
            posts_path,
            public_dir,
        })
    }

    /// Open the store backed by the post file
    pub fn open_store(&self) -> Result<PostStore> {
        PostStore::open(&self.posts_path)
    }

    /// Generate the static site
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
