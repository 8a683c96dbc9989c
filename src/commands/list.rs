//! List stored posts

use anyhow::Result;

use crate::Jammlog;

/// Print every post in creation order
pub fn run(app: &Jammlog) -> Result<()> {
    let store = app.open_store()?;
    let posts = store.list_all()?;

    println!("Posts ({}):", posts.len());
    for post in posts {
        println!(
            "  {:>4}  {}  {} [{}]",
            post.id,
            post.created_at.format("%Y-%m-%d"),
            post.title,
            post.url()
        );
    }

    Ok(())
}
