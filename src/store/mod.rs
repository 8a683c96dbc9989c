//! Post store
//!
//! A store is either purely in memory or backed by a YAML post file. A
//! file-backed store keeps no copy of its own: every read parses the file,
//! and every write runs under an exclusive lock on a sibling `.lock` file,
//! reloads, applies the change and replaces the file atomically. A write
//! finished by any process or handle is therefore seen by every later read.
//!
//! The file keeps the next id as well as the posts, so ids stay unique
//! across removals and restarts.

use anyhow::{bail, Result};
use chrono::Local;
use fs2::FileExt;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::content::{Post, PostId};
use crate::error::BlogError;

/// On-disk layout of the post file
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PostFile {
    next_id: PostId,
    #[serde(default)]
    posts: Vec<Post>,
}

impl Default for PostFile {
    fn default() -> Self {
        Self {
            next_id: 1,
            posts: Vec::new(),
        }
    }
}

impl PostFile {
    fn create(&mut self, title: &str, content: &str) -> Result<Post, BlogError> {
        if title.trim().is_empty() {
            return Err(BlogError::EmptyTitle);
        }

        let post = Post {
            id: self.next_id,
            title: title.to_string(),
            content: content.to_string(),
            created_at: Local::now(),
        };
        self.next_id += 1;
        self.posts.push(post.clone());

        tracing::debug!("Created post {}: {}", post.id, post.title);
        Ok(post)
    }

    fn remove(&mut self, id: PostId) -> Option<Post> {
        let pos = self.posts.iter().position(|p| p.id == id)?;
        Some(self.posts.remove(pos))
    }
}

#[derive(Debug, Clone)]
enum Backing {
    Memory(Arc<RwLock<PostFile>>),
    File(Arc<PathBuf>),
}

/// Shared post store
///
/// Clones share the same records.
#[derive(Debug, Clone)]
pub struct PostStore {
    backing: Backing,
}

impl Default for PostStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PostStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self {
            backing: Backing::Memory(Arc::new(RwLock::new(PostFile::default()))),
        }
    }

    /// Open a store backed by a post file
    ///
    /// A missing file is an empty store. The file is read once here so that
    /// a malformed file is reported up front.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = read_post_file(&path)?;
        tracing::info!("Opened {:?} with {} posts", path, file.posts.len());

        Ok(Self {
            backing: Backing::File(Arc::new(path)),
        })
    }

    /// Write the current contents to a post file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let snapshot = self.read(PostFile::clone)?;
        let path = path.as_ref();
        let _lock = lock_post_file(path)?;
        write_post_file(path, &snapshot)
    }

    /// Number of stored posts
    pub fn count(&self) -> Result<usize> {
        self.read(|file| file.posts.len())
    }

    /// All posts in creation order
    pub fn list_all(&self) -> Result<Vec<Post>> {
        self.read(|file| file.posts.clone())
    }

    /// Look up a post by id
    pub fn get_by_id(&self, id: PostId) -> Result<Option<Post>> {
        self.read(|file| file.posts.iter().find(|p| p.id == id).cloned())
    }

    /// Create a post, assigning it the next id
    pub fn create(&self, title: &str, content: &str) -> Result<Post, BlogError> {
        self.write(|file| file.create(title, content))
    }

    /// Remove a post; its id is not handed out again
    pub fn remove(&self, id: PostId) -> Result<Option<Post>> {
        Ok(self.write(|file| Ok(file.remove(id)))?)
    }

    fn read<T>(&self, f: impl FnOnce(&PostFile) -> T) -> Result<T> {
        match &self.backing {
            Backing::Memory(inner) => Ok(f(&inner.read())),
            Backing::File(path) => Ok(f(&read_post_file(path)?)),
        }
    }

    fn write<T>(
        &self,
        f: impl FnOnce(&mut PostFile) -> Result<T, BlogError>,
    ) -> Result<T, BlogError> {
        match &self.backing {
            Backing::Memory(inner) => f(&mut inner.write()),
            Backing::File(path) => {
                let _lock = lock_post_file(path)?;
                let mut file = read_post_file(path)?;
                let value = f(&mut file)?;
                write_post_file(path, &file)?;
                Ok(value)
            }
        }
    }
}

/// Path next to the post file with an extra suffix
fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(suffix);
    path.with_file_name(name)
}

/// Take the exclusive writer lock; released when the handle drops
fn lock_post_file(path: &Path) -> Result<fs::File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let lock = OpenOptions::new()
        .create(true)
        .truncate(false)
        .write(true)
        .open(sibling(path, ".lock"))?;
    lock.lock_exclusive()?;
    Ok(lock)
}

/// Parse and validate a post file
fn read_post_file(path: &Path) -> Result<PostFile> {
    if !path.exists() {
        return Ok(PostFile::default());
    }

    let content = fs::read_to_string(path)?;
    let mut file: PostFile = if content.trim().is_empty() {
        PostFile::default()
    } else {
        serde_yaml::from_str(&content)?
    };

    file.posts.sort_by_key(|p| p.id);
    if let Some(pair) = file.posts.windows(2).find(|w| w[0].id == w[1].id) {
        bail!("Post file {:?} contains id {} more than once", path, pair[0].id);
    }

    let floor = file.posts.last().map(|p| p.id + 1).unwrap_or(1);
    if file.next_id < floor {
        tracing::warn!(
            "Post file next_id {} is below existing ids, using {}",
            file.next_id,
            floor
        );
        file.next_id = floor;
    }

    Ok(file)
}

/// Replace the post file atomically
fn write_post_file(path: &Path, file: &PostFile) -> Result<()> {
    let content = serde_yaml::to_string(file)?;
    let temp_path = sibling(path, ".tmp");
    fs::write(&temp_path, content)?;
    fs::rename(&temp_path, path)?;
    tracing::debug!("Saved post file {:?}", path);
    Ok(())
}
